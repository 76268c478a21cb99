use std::sync::Arc;

use adaptmetric_types::{ClimateSignal, CropAnalysis, EngineResult, EvalError, ScenarioRequest};

use crate::crops::profile_for;
use crate::round2;
use crate::surrogate::SurrogatePredictor;

/// Reference harvest scale for the revenue proxy, tons per year at
/// baseline yield.
const REFERENCE_HARVEST_TONS: f64 = 100.0;

/// Adapted-practice uplift applied when no surrogate artifact is
/// configured. Fixed midpoint of the 15-30% resilient-seed buffer range,
/// so the analytic path stays deterministic.
const ANALYTIC_RESILIENT_UPLIFT: f64 = 0.225;

/// Crop yield engine.
///
/// Applies the scenario deltas to a crop-specific yield-response curve:
/// trapezoid temperature stress (slope 0.05/°C below the band, 0.08/°C
/// above it) times piecewise rainfall stress around the crop's rainfall
/// optimum. The raw-stress yield is always the analytic curve; the
/// resilient (adapted-practice) yield comes from the surrogate model when
/// one is configured, and from a fixed analytic uplift otherwise. Pure:
/// the surrogate is read-only and shared.
pub struct AgricultureEngine {
    surrogate: Option<Arc<dyn SurrogatePredictor>>,
}

impl AgricultureEngine {
    pub fn new(surrogate: Option<Arc<dyn SurrogatePredictor>>) -> Self {
        Self { surrogate }
    }

    pub fn compute(
        &self,
        signal: &ClimateSignal,
        request: &ScenarioRequest,
    ) -> Result<EngineResult, EvalError> {
        let crop = request.crop_type.as_deref().ok_or_else(|| {
            EvalError::validation("crop_type", "required for agriculture projects")
        })?;
        let profile = profile_for(crop).ok_or_else(|| EvalError::unknown_crop(crop))?;

        let sim_temp = signal.baseline_temp_c + request.temp_delta_celsius;
        let sim_rain = signal.baseline_precip_mm * (1.0 + request.rain_pct_change / 100.0);

        let temp_stress = if sim_temp < profile.t_min_c {
            (1.0 - (profile.t_min_c - sim_temp) * 0.05).max(0.0)
        } else if sim_temp > profile.t_max_c {
            (1.0 - (sim_temp - profile.t_max_c) * 0.08).max(0.0)
        } else {
            1.0
        };

        let rain_ratio = sim_rain / profile.optimal_rain_mm;
        let rain_stress = if rain_ratio < 0.5 {
            0.3 + rain_ratio * 0.8
        } else if rain_ratio > 2.0 {
            (1.0 - (rain_ratio - 2.0) * 0.15).max(0.4)
        } else {
            (0.7 + rain_ratio * 0.3).min(1.0)
        };

        let standard_yield = temp_stress * rain_stress * 100.0;

        let resilient_yield = match &self.surrogate {
            Some(model) => {
                let features = [
                    sim_temp,
                    sim_rain,
                    request.temp_delta_celsius,
                    request.rain_pct_change,
                    standard_yield,
                ];
                // Adapted practice can only help; never report below the
                // raw-stress estimate or above baseline.
                model.predict(&features).clamp(standard_yield, 100.0)
            }
            None => (standard_yield * (1.0 + ANALYTIC_RESILIENT_UPLIFT)).min(100.0),
        };

        let yield_loss = 100.0 - resilient_yield;
        let annual_loss_usd =
            profile.price_per_ton_usd * REFERENCE_HARVEST_TONS * (yield_loss / 100.0);

        Ok(EngineResult::Crop(CropAnalysis {
            crop_type: profile.name.to_string(),
            standard_yield_pct: round2(standard_yield),
            resilient_yield_pct: round2(resilient_yield),
            yield_loss_pct: round2(yield_loss),
            avoided_loss_pct: round2(resilient_yield - standard_yield),
            annual_loss_usd: round2(annual_loss_usd),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptmetric_types::{ClimateZone, ProjectType, SignalSource};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn signal(temp: f64, precip: f64) -> ClimateSignal {
        ClimateSignal {
            baseline_temp_c: temp,
            baseline_precip_mm: precip,
            variability_index: 0.5,
            climate_zone: ClimateZone::Temperate,
            source: SignalSource::Mock,
            as_of: Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn request(crop: &str, temp_delta: f64, rain_pct: f64) -> ScenarioRequest {
        ScenarioRequest {
            latitude: 40.7,
            longitude: -74.0,
            scenario_year: 2050,
            project_type: ProjectType::Agriculture,
            crop_type: Some(crop.into()),
            temp_delta_celsius: temp_delta,
            rain_pct_change: rain_pct,
            workforce_size: None,
            daily_wage: None,
            use_mock_data: true,
        }
    }

    fn crop_of(result: EngineResult) -> adaptmetric_types::CropAnalysis {
        match result {
            EngineResult::Crop(a) => a,
            other => panic!("expected crop analysis, got {other:?}"),
        }
    }

    #[test]
    fn optimal_conditions_yield_full_baseline() {
        let engine = AgricultureEngine::new(None);
        let analysis = crop_of(
            engine
                .compute(&signal(25.0, 800.0), &request("maize", 0.0, 0.0))
                .unwrap(),
        );
        assert_eq!(analysis.standard_yield_pct, 100.0);
        assert_eq!(analysis.resilient_yield_pct, 100.0);
        assert_eq!(analysis.yield_loss_pct, 0.0);
        assert_eq!(analysis.annual_loss_usd, 0.0);
    }

    #[test]
    fn unknown_crop_is_configuration_error() {
        let engine = AgricultureEngine::new(None);
        let err = engine
            .compute(&signal(25.0, 800.0), &request("durian", 0.0, 0.0))
            .unwrap_err();
        assert_eq!(err.kind(), "configuration_unknown_crop");
    }

    #[test]
    fn warming_past_band_reduces_yield() {
        let engine = AgricultureEngine::new(None);
        let cool = crop_of(
            engine
                .compute(&signal(28.0, 800.0), &request("maize", 2.0, 0.0))
                .unwrap(),
        );
        let hot = crop_of(
            engine
                .compute(&signal(28.0, 800.0), &request("maize", 6.0, 0.0))
                .unwrap(),
        );
        assert!(hot.standard_yield_pct < cool.standard_yield_pct);
        assert!(hot.resilient_yield_pct <= cool.resilient_yield_pct);
    }

    #[test]
    fn surrogate_prediction_is_clamped_to_sane_range() {
        struct Wild;
        impl SurrogatePredictor for Wild {
            fn predict(&self, _features: &[f64]) -> f64 {
                400.0
            }
        }
        let engine = AgricultureEngine::new(Some(Arc::new(Wild)));
        let analysis = crop_of(
            engine
                .compute(&signal(28.0, 800.0), &request("maize", 6.0, 0.0))
                .unwrap(),
        );
        assert_eq!(analysis.resilient_yield_pct, 100.0);
    }

    #[test]
    fn surrogate_never_reports_below_raw_stress() {
        struct Pessimist;
        impl SurrogatePredictor for Pessimist {
            fn predict(&self, _features: &[f64]) -> f64 {
                -50.0
            }
        }
        let engine = AgricultureEngine::new(Some(Arc::new(Pessimist)));
        let analysis = crop_of(
            engine
                .compute(&signal(28.0, 800.0), &request("maize", 6.0, 0.0))
                .unwrap(),
        );
        assert_eq!(analysis.resilient_yield_pct, analysis.standard_yield_pct);
        assert_eq!(analysis.avoided_loss_pct, 0.0);
    }

    #[test]
    fn drought_reduces_yield() {
        let engine = AgricultureEngine::new(None);
        let wet = crop_of(
            engine
                .compute(&signal(25.0, 800.0), &request("maize", 0.0, 0.0))
                .unwrap(),
        );
        let dry = crop_of(
            engine
                .compute(&signal(25.0, 800.0), &request("maize", 0.0, -70.0))
                .unwrap(),
        );
        assert!(dry.standard_yield_pct < wet.standard_yield_pct);
    }

    proptest! {
        /// Past the crop's optimal band, more warming never increases the
        /// resilient yield.
        #[test]
        fn warming_is_monotone_past_band(delta in 0.0f64..15.0, step in 0.1f64..5.0) {
            let engine = AgricultureEngine::new(None);
            let base = signal(30.0, 800.0); // already at maize t_max
            let lo = crop_of(engine.compute(&base, &request("maize", delta, 0.0)).unwrap());
            let hi = crop_of(engine.compute(&base, &request("maize", delta + step, 0.0)).unwrap());
            prop_assert!(hi.resilient_yield_pct <= lo.resilient_yield_pct + 1e-9);
        }

        /// Yields are percentages of baseline.
        #[test]
        fn yields_are_bounded(delta in -10.0f64..15.0, rain in -90.0f64..200.0) {
            let engine = AgricultureEngine::new(None);
            let analysis = crop_of(
                engine.compute(&signal(22.0, 900.0), &request("rice", delta, rain)).unwrap(),
            );
            prop_assert!((0.0..=100.0).contains(&analysis.standard_yield_pct));
            prop_assert!((0.0..=100.0).contains(&analysis.resilient_yield_pct));
            prop_assert!(analysis.resilient_yield_pct >= analysis.standard_yield_pct);
        }
    }
}
