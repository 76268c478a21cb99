use adaptmetric_types::{
    ClimateSignal, EconomicImpact, EngineResult, EvalError, ScenarioRequest, TotalEconomicImpact,
};

use crate::round2;

/// Wet-bulb comfort ceiling, °C. Productivity decays above it.
const COMFORT_CEILING_C: f64 = 26.0;

/// Productivity loss per degree above the ceiling, percent/°C.
const LOSS_PER_DEGREE_PCT: f64 = 3.5;

/// Physiological cap on the modelled productivity loss, percent.
const MAX_LOSS_PCT: f64 = 60.0;

/// Working days per year for the wage-loss scale.
const WORK_DAYS_PER_YEAR: f64 = 365.0;

/// Heat-stress workforce productivity engine.
///
/// Productivity loss grows linearly with degrees above a wet-bulb comfort
/// ceiling, amplified by a humidity proxy folded from the precipitation
/// field, and capped at a physiological maximum. The wage bill converts
/// the loss percentage into lost work days and dollars.
pub struct HealthEngine;

impl HealthEngine {
    pub fn compute(
        &self,
        signal: &ClimateSignal,
        request: &ScenarioRequest,
    ) -> Result<EngineResult, EvalError> {
        let workforce_size = request.workforce_size.ok_or_else(|| {
            EvalError::validation("workforce_size", "required for health projects")
        })?;
        let daily_wage = request
            .daily_wage
            .ok_or_else(|| EvalError::validation("daily_wage", "required for health projects"))?;

        let scenario_temp = signal.baseline_temp_c + request.temp_delta_celsius;
        let humidity_factor = (1.0 + signal.baseline_precip_mm / 4000.0).min(1.5);
        let productivity_loss_pct = ((scenario_temp - COMFORT_CEILING_C)
            * LOSS_PER_DEGREE_PCT
            * humidity_factor)
            .clamp(0.0, MAX_LOSS_PCT);

        let loss_fraction = productivity_loss_pct / 100.0;
        let workforce = f64::from(workforce_size);
        let lost_work_days = workforce * WORK_DAYS_PER_YEAR * loss_fraction;
        let loss_per_worker_usd = daily_wage * WORK_DAYS_PER_YEAR * loss_fraction;
        let annual_loss = workforce * loss_per_worker_usd;

        Ok(EngineResult::Health(EconomicImpact {
            productivity_loss_pct: round2(productivity_loss_pct),
            workforce_size,
            daily_wage: round2(daily_wage),
            loss_per_worker_usd: round2(loss_per_worker_usd),
            total_economic_impact: TotalEconomicImpact {
                annual_loss: round2(annual_loss),
                lost_work_days: round2(lost_work_days),
            },
        }))
    }
}
