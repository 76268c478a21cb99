use adaptmetric_types::{ClimateSignal, CoastalAnalysis, EngineResult, EvalError, ScenarioRequest};

use crate::round2;

/// Sea-level rise per degree of warming, metres/°C. Thermal-expansion
/// proxy; cooling scenarios contribute no rise.
const SLR_PER_DEGREE_M: f64 = 0.25;

/// Storm-surge envelope: base height plus a variability-scaled component,
/// both in metres.
const SURGE_BASE_M: f64 = 0.5;
const SURGE_VARIABILITY_SPAN_M: f64 = 3.5;

/// Exposed-asset value per metre of inundation depth, USD.
const EXPOSURE_USD_PER_M: f64 = 125_000_000.0;

/// Decay constant for the depth-to-affected-area curve.
const AREA_DECAY: f64 = 0.8;

/// Coastal inundation engine.
///
/// Combines a warming-driven sea-level rise term with a storm-surge
/// envelope scaled by the signal's variability index, then nets the
/// total water level against a terrain-elevation proxy derived from the
/// baseline precipitation field. Depth below the proxy means no
/// inundation and zero loss.
pub struct CoastalEngine;

impl CoastalEngine {
    pub fn compute(
        &self,
        signal: &ClimateSignal,
        request: &ScenarioRequest,
    ) -> Result<EngineResult, EvalError> {
        let sea_level_rise = SLR_PER_DEGREE_M * request.temp_delta_celsius.max(0.0);
        let storm_surge = SURGE_BASE_M + SURGE_VARIABILITY_SPAN_M * signal.variability_index;
        let total_water_level = sea_level_rise + storm_surge;

        // Terrain proxy: fold the precipitation field into a 1-5 m shore
        // elevation band. Deterministic stand-in for a DEM lookup.
        let shore_elevation = 1.0 + (signal.baseline_precip_mm / 100.0) % 4.0;

        let inundation_depth = (total_water_level - shore_elevation).max(0.0);
        let affected_area_pct = 100.0 * (1.0 - (-AREA_DECAY * inundation_depth).exp());
        let annual_loss_usd = inundation_depth * EXPOSURE_USD_PER_M;

        Ok(EngineResult::Coastal(CoastalAnalysis {
            total_water_level_m: round2(total_water_level),
            inundation_depth_m: round2(inundation_depth),
            affected_area_pct: round2(affected_area_pct),
            annual_loss_usd: round2(annual_loss_usd),
        }))
    }
}
