//! Discounting primitives. All functions are pure and total over their
//! documented domains; callers validate rates at the configuration
//! boundary.

/// Net present value of a cash-flow stream. `cash_flows[0]` is the
/// period-0 flow (undiscounted); period `t` is discounted by
/// `(1 + rate)^t`.
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// A constant annual flow repeated over `horizon_years`, starting at
/// period 1 (no period-0 flow).
pub fn level_annuity(annual_flow: f64, horizon_years: u32) -> Vec<f64> {
    let mut flows = Vec::with_capacity(horizon_years as usize + 1);
    flows.push(0.0);
    flows.extend(std::iter::repeat(annual_flow).take(horizon_years as usize));
    flows
}

/// Yearly investment series: the upfront cost at period 0, then the net
/// annual benefit over the horizon.
pub fn project_cash_flows(upfront_cost: f64, annual_net_benefit: f64, horizon_years: u32) -> Vec<f64> {
    let mut flows = Vec::with_capacity(horizon_years as usize + 1);
    flows.push(-upfront_cost);
    flows.extend(std::iter::repeat(annual_net_benefit).take(horizon_years as usize));
    flows
}

/// Benefit-cost ratio: discounted benefits over the upfront cost. `None`
/// when the cost is not positive.
pub fn benefit_cost_ratio(rate: f64, annual_benefit: f64, horizon_years: u32, cost: f64) -> Option<f64> {
    if cost <= 0.0 {
        return None;
    }
    let benefits = net_present_value(rate, &level_annuity(annual_benefit, horizon_years));
    Some(benefits / cost)
}

/// Years until cumulative undiscounted benefits recover the upfront
/// cost, with linear interpolation inside the crossing year. `None` if
/// the cost is never recovered within the horizon.
pub fn payback_years(annual_benefit: f64, horizon_years: u32, cost: f64) -> Option<f64> {
    if cost <= 0.0 {
        return Some(0.0);
    }
    if annual_benefit <= 0.0 {
        return None;
    }
    let mut cumulative = 0.0;
    for year in 1..=horizon_years {
        let previous = cumulative;
        cumulative += annual_benefit;
        if cumulative >= cost {
            let fraction = (cost - previous) / annual_benefit;
            return Some(f64::from(year - 1) + fraction);
        }
    }
    None
}
