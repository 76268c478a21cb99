use adaptmetric_types::{
    ClimateSignal, EngineResult, EvalError, FloodAnalysis, ReturnPeriodDepth, ScenarioRequest,
};

use crate::round2;

/// Topographic wetness index above which a cell counts as flood-prone.
const TWI_THRESHOLD: f64 = 12.0;

/// Fractional threshold reduction per 100% of additional rainfall.
const THRESHOLD_SENSITIVITY: f64 = 0.07;

/// Damage per square kilometre of newly flood-prone area, USD.
const DAMAGE_USD_PER_KM2: f64 = 44_000_000.0;

/// Baseline 24h rainfall depths by return period, mm. Regional design
/// storm values.
const RETURN_PERIODS: &[(&str, f64)] = &[
    ("1yr", 70.0),
    ("10yr", 121.5),
    ("50yr", 159.7),
    ("100yr", 179.4),
];

/// Rainfall-driven flood extent engine.
///
/// Models flood-prone area as the catchment surface above a wetness-index
/// threshold. Heavier rainfall effectively lowers the threshold
/// (saturated soils flood at lower index values), widening the
/// flood-prone extent; drier scenarios raise it. Return-period design
/// depths are scaled by the same rainfall delta for the chart series.
pub struct FloodEngine;

impl FloodEngine {
    pub fn compute(
        &self,
        signal: &ClimateSignal,
        request: &ScenarioRequest,
    ) -> Result<EngineResult, EvalError> {
        let rain_factor = 1.0 + request.rain_pct_change / 100.0;

        // Saturation shifts the effective threshold; floor keeps the
        // extent ratio finite under extreme scenarios.
        let future_threshold =
            (TWI_THRESHOLD * (1.0 - request.rain_pct_change / 100.0 * THRESHOLD_SENSITIVITY))
                .max(1.0);

        let baseline_area = 40.0
            + signal.baseline_precip_mm / 25.0
            + 60.0 * signal.variability_index;
        let future_area = baseline_area * (TWI_THRESHOLD / future_threshold);

        let risk_increase_pct = (future_area - baseline_area) / baseline_area * 100.0;
        let annual_loss_usd = (future_area - baseline_area).max(0.0) * DAMAGE_USD_PER_KM2;

        let rain_chart_data = RETURN_PERIODS
            .iter()
            .map(|(period, baseline_mm)| ReturnPeriodDepth {
                period: (*period).to_string(),
                baseline_mm: round2(*baseline_mm),
                future_mm: round2(baseline_mm * rain_factor),
            })
            .collect();

        Ok(EngineResult::Flood(FloodAnalysis {
            baseline_flood_area_km2: round2(baseline_area),
            future_flood_area_km2: round2(future_area),
            risk_increase_pct: round2(risk_increase_pct),
            rain_chart_data,
            annual_loss_usd: round2(annual_loss_usd),
        }))
    }
}
