use adaptmetric_types::{EngineResult, EvalError, FinancialOutcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::npv::{
    benefit_cost_ratio, level_annuity, net_present_value, payback_years, project_cash_flows,
};

/// Discount parameters for the loss projection. Deployment
/// configuration, fixed for the life of an evaluator; never taken from
/// the request, so identical requests always discount identically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialModel {
    /// Annual discount rate as a fraction (0.10 = 10%).
    pub discount_rate: f64,
    /// Projection horizon in years.
    pub horizon_years: u32,
}

impl Default for FinancialModel {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            horizon_years: 20,
        }
    }
}

impl FinancialModel {
    pub fn new(discount_rate: f64, horizon_years: u32) -> Result<Self, EvalError> {
        if !discount_rate.is_finite() || discount_rate <= -1.0 {
            return Err(EvalError::validation(
                "discount_rate",
                "must be a finite rate above -100%",
            ));
        }
        if horizon_years == 0 {
            return Err(EvalError::validation(
                "horizon_years",
                "must be at least one year",
            ));
        }
        Ok(Self {
            discount_rate,
            horizon_years,
        })
    }

    /// Discount the engine's annual loss scale into a [`FinancialOutcome`].
    /// The loss stream is a level annuity of the engine-supplied annual
    /// loss over the configured horizon; NPV is reported as a positive
    /// magnitude of loss.
    pub fn evaluate(&self, engine_result: &EngineResult) -> FinancialOutcome {
        let annual_loss_usd = engine_result.annual_loss_usd();
        let flows = level_annuity(annual_loss_usd, self.horizon_years);
        let npv_usd = round2(net_present_value(self.discount_rate, &flows));
        debug!(annual_loss_usd, npv_usd, "discounted loss stream");
        FinancialOutcome {
            npv_usd,
            annual_loss_usd: round2(annual_loss_usd),
            discount_rate: self.discount_rate,
            horizon_years: self.horizon_years,
        }
    }
}

/// Appraisal of one adaptation investment against the loss it avoids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAppraisal {
    /// NPV of the investment series (cost at period 0, net benefit after).
    pub npv_usd: f64,
    /// Discounted net benefits over the upfront cost. Absent when the
    /// upfront cost is not positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_cost_ratio: Option<f64>,
    /// Undiscounted years to recover the upfront cost, interpolated.
    /// Absent when the cost is never recovered within the horizon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payback_years: Option<f64>,
    /// Upfront cost spread over the people the measure protects. Absent
    /// when no protected population is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_person_protected_usd: Option<f64>,
}

impl FinancialModel {
    /// Appraise an adaptation investment: `annual_avoided_loss_usd` is the
    /// loss the measure prevents each year, netted against its annual
    /// upkeep before discounting. `protected_population` (the workforce
    /// for health projects) adds a per-person cost-effectiveness figure.
    pub fn appraise(
        &self,
        annual_avoided_loss_usd: f64,
        upfront_cost_usd: f64,
        annual_upkeep_usd: f64,
        protected_population: Option<u32>,
    ) -> InvestmentAppraisal {
        let net_benefit = annual_avoided_loss_usd - annual_upkeep_usd;
        let flows = project_cash_flows(upfront_cost_usd, net_benefit, self.horizon_years);
        InvestmentAppraisal {
            npv_usd: round2(net_present_value(self.discount_rate, &flows)),
            benefit_cost_ratio: benefit_cost_ratio(
                self.discount_rate,
                net_benefit,
                self.horizon_years,
                upfront_cost_usd,
            )
            .map(round2),
            payback_years: payback_years(net_benefit, self.horizon_years, upfront_cost_usd)
                .map(round2),
            cost_per_person_protected_usd: protected_population
                .filter(|population| *population > 0)
                .map(|population| round2(upfront_cost_usd / f64::from(population))),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptmetric_types::CoastalAnalysis;

    fn coastal_loss(annual_loss_usd: f64) -> EngineResult {
        EngineResult::Coastal(CoastalAnalysis {
            total_water_level_m: 3.1,
            inundation_depth_m: 1.2,
            affected_area_pct: 61.7,
            annual_loss_usd,
        })
    }

    #[test]
    fn defaults_match_deployment_config() {
        let model = FinancialModel::default();
        assert_eq!(model.discount_rate, 0.10);
        assert_eq!(model.horizon_years, 20);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(FinancialModel::new(f64::NAN, 20).is_err());
        assert!(FinancialModel::new(-1.0, 20).is_err());
        assert!(FinancialModel::new(0.10, 0).is_err());
        assert!(FinancialModel::new(0.0, 1).is_ok());
    }

    #[test]
    fn zero_loss_discounts_to_zero() {
        let outcome = FinancialModel::default().evaluate(&coastal_loss(0.0));
        assert_eq!(outcome.npv_usd, 0.0);
        assert_eq!(outcome.annual_loss_usd, 0.0);
    }

    #[test]
    fn npv_of_level_loss_matches_closed_form() {
        let model = FinancialModel::new(0.10, 20).unwrap();
        let outcome = model.evaluate(&coastal_loss(100_000.0));
        // Annuity factor for 10% over 20 years.
        let factor = (1.0 - 1.10f64.powi(-20)) / 0.10;
        let expected = (100_000.0 * factor * 100.0).round() / 100.0;
        assert_eq!(outcome.npv_usd, expected);
        assert!(outcome.npv_usd > outcome.annual_loss_usd);
        assert_eq!(outcome.horizon_years, 20);
    }

    #[test]
    fn appraisal_carries_bcr_and_payback() {
        let model = FinancialModel::new(0.10, 20).unwrap();
        let appraisal = model.appraise(50_000.0, 100_000.0, 10_000.0, None);
        // Net 40k/year against 100k upfront: payback midway through year 3.
        assert_eq!(appraisal.payback_years, Some(2.5));
        assert!(appraisal.benefit_cost_ratio.unwrap() > 1.0);
        assert!(appraisal.npv_usd > 0.0);
        assert_eq!(appraisal.cost_per_person_protected_usd, None);
    }

    #[test]
    fn unrecoverable_investment_has_no_payback() {
        let model = FinancialModel::new(0.10, 5).unwrap();
        let appraisal = model.appraise(1_000.0, 1_000_000.0, 500.0, None);
        assert_eq!(appraisal.payback_years, None);
        assert!(appraisal.npv_usd < 0.0);
        assert!(appraisal.benefit_cost_ratio.unwrap() < 1.0);
    }

    #[test]
    fn cost_per_person_protected_uses_the_workforce() {
        let model = FinancialModel::new(0.10, 20).unwrap();
        let appraisal = model.appraise(50_000.0, 100_000.0, 10_000.0, Some(500));
        assert_eq!(appraisal.cost_per_person_protected_usd, Some(200.0));

        // A zero population never divides.
        let appraisal = model.appraise(50_000.0, 100_000.0, 10_000.0, Some(0));
        assert_eq!(appraisal.cost_per_person_protected_usd, None);
    }

    #[test]
    fn absent_per_person_cost_is_omitted_from_json() {
        let model = FinancialModel::default();
        let without = serde_json::to_value(model.appraise(10.0, 100.0, 0.0, None)).unwrap();
        assert!(!without
            .as_object()
            .unwrap()
            .contains_key("cost_per_person_protected_usd"));

        let with = serde_json::to_value(model.appraise(10.0, 100.0, 0.0, Some(4))).unwrap();
        assert_eq!(with["cost_per_person_protected_usd"], 25.0);
    }

    #[test]
    fn same_input_evaluates_identically() {
        let model = FinancialModel::default();
        let first = model.evaluate(&coastal_loss(123_456.78));
        let second = model.evaluate(&coastal_loss(123_456.78));
        assert_eq!(first, second);
    }
}
