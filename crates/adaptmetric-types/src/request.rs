use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Project types the pipeline can evaluate. A closed set: adding one means
/// a new variant here plus a new engine case, never a class hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Agriculture,
    Coastal,
    Flood,
    Health,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProjectType::Agriculture => "agriculture",
            ProjectType::Coastal => "coastal",
            ProjectType::Flood => "flood",
            ProjectType::Health => "health",
        };
        write!(f, "{name}")
    }
}

/// One what-if evaluation request. Immutable once constructed; invalid
/// combinations are rejected by [`ScenarioRequest::validate`] before any
/// provider or engine work starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
    /// Projection year; must not precede the evaluator's minimum year.
    pub scenario_year: i32,
    pub project_type: ProjectType,
    /// Required iff `project_type` is agriculture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    /// Scenario temperature perturbation in °C, applied on top of baseline.
    pub temp_delta_celsius: f64,
    /// Scenario rainfall perturbation in percent of baseline.
    pub rain_pct_change: f64,
    /// Required iff `project_type` is health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workforce_size: Option<u32>,
    /// Required iff `project_type` is health. USD per worker per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_wage: Option<f64>,
    /// When set, the deterministic synthetic provider is always used and no
    /// network access occurs.
    #[serde(default)]
    pub use_mock_data: bool,
}

impl ScenarioRequest {
    /// Validate ranges and per-project-type required fields.
    ///
    /// `min_scenario_year` is deployment configuration (normally the current
    /// year), passed in so validation itself stays a pure function.
    pub fn validate(&self, min_scenario_year: i32) -> Result<(), EvalError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EvalError::validation(
                "latitude",
                format!("must be in [-90, 90], got {}", self.latitude),
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EvalError::validation(
                "longitude",
                format!("must be in [-180, 180], got {}", self.longitude),
            ));
        }
        if self.scenario_year < min_scenario_year {
            return Err(EvalError::validation(
                "scenario_year",
                format!(
                    "must be {} or later, got {}",
                    min_scenario_year, self.scenario_year
                ),
            ));
        }
        if !self.temp_delta_celsius.is_finite() {
            return Err(EvalError::validation(
                "temp_delta_celsius",
                "must be a finite number",
            ));
        }
        if !self.rain_pct_change.is_finite() || self.rain_pct_change < -100.0 {
            return Err(EvalError::validation(
                "rain_pct_change",
                format!("must be a finite value >= -100, got {}", self.rain_pct_change),
            ));
        }

        match self.project_type {
            ProjectType::Agriculture => {
                if self.crop_type.as_deref().map_or(true, str::is_empty) {
                    return Err(EvalError::validation(
                        "crop_type",
                        "required for agriculture projects",
                    ));
                }
            }
            ProjectType::Health => {
                match self.workforce_size {
                    None | Some(0) => {
                        return Err(EvalError::validation(
                            "workforce_size",
                            "a non-zero workforce is required for health projects",
                        ));
                    }
                    Some(_) => {}
                }
                match self.daily_wage {
                    Some(w) if w.is_finite() && w > 0.0 => {}
                    _ => {
                        return Err(EvalError::validation(
                            "daily_wage",
                            "a positive daily wage is required for health projects",
                        ));
                    }
                }
            }
            ProjectType::Coastal | ProjectType::Flood => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> ScenarioRequest {
        ScenarioRequest {
            latitude: 40.7,
            longitude: -74.0,
            scenario_year: 2050,
            project_type: ProjectType::Agriculture,
            crop_type: Some("maize".into()),
            temp_delta_celsius: 2.0,
            rain_pct_change: -10.0,
            workforce_size: None,
            daily_wage: None,
            use_mock_data: true,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(base_request().validate(2026).is_ok());
    }

    #[test]
    fn latitude_out_of_range_is_rejected() {
        let req = ScenarioRequest {
            latitude: 999.0,
            ..base_request()
        };
        let err = req.validate(2026).unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn nan_latitude_is_rejected() {
        let req = ScenarioRequest {
            latitude: f64::NAN,
            ..base_request()
        };
        assert!(req.validate(2026).is_err());
    }

    #[test]
    fn scenario_year_in_the_past_is_rejected() {
        let req = ScenarioRequest {
            scenario_year: 2001,
            ..base_request()
        };
        let err = req.validate(2026).unwrap_err();
        assert!(err.to_string().contains("scenario_year"));
    }

    #[test]
    fn agriculture_without_crop_is_rejected() {
        let req = ScenarioRequest {
            crop_type: None,
            ..base_request()
        };
        let err = req.validate(2026).unwrap_err();
        assert!(err.to_string().contains("crop_type"));

        let req = ScenarioRequest {
            crop_type: Some(String::new()),
            ..base_request()
        };
        assert!(req.validate(2026).is_err());
    }

    #[test]
    fn health_requires_workforce_and_wage() {
        let req = ScenarioRequest {
            project_type: ProjectType::Health,
            crop_type: None,
            workforce_size: None,
            daily_wage: Some(12.0),
            ..base_request()
        };
        assert!(req.validate(2026).is_err());

        let req = ScenarioRequest {
            project_type: ProjectType::Health,
            crop_type: None,
            workforce_size: Some(500),
            daily_wage: None,
            ..base_request()
        };
        assert!(req.validate(2026).is_err());

        let req = ScenarioRequest {
            project_type: ProjectType::Health,
            crop_type: None,
            workforce_size: Some(500),
            daily_wage: Some(12.0),
            ..base_request()
        };
        assert!(req.validate(2026).is_ok());
    }

    #[test]
    fn rain_below_total_loss_is_rejected() {
        let req = ScenarioRequest {
            rain_pct_change: -150.0,
            ..base_request()
        };
        assert!(req.validate(2026).is_err());
    }

    #[test]
    fn project_type_serializes_snake_case() {
        let json = serde_json::to_string(&ProjectType::Agriculture).unwrap();
        assert_eq!(json, "\"agriculture\"");
        let back: ProjectType = serde_json::from_str("\"flood\"").unwrap();
        assert_eq!(back, ProjectType::Flood);
    }

    #[test]
    fn request_round_trips_through_json() {
        let req = base_request();
        let json = serde_json::to_string(&req).unwrap();
        let back: ScenarioRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }
}
