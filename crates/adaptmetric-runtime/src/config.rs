use std::path::PathBuf;

use adaptmetric_providers::RemoteConfig;
use chrono::{Datelike, Utc};

/// Deployment configuration for the evaluator. Fixed at construction;
/// requests never override any of it, which is what keeps identical
/// requests producing identical responses.
#[derive(Clone, Debug)]
pub struct EvaluatorConfig {
    /// Annual discount rate for the loss projection.
    pub discount_rate: f64,
    /// Loss-projection horizon in years.
    pub horizon_years: u32,
    /// Earliest accepted scenario year.
    pub min_scenario_year: i32,
    /// Remote-sensing backend settings.
    pub remote: RemoteConfig,
    /// Optional path to a surrogate-model artifact for the agriculture
    /// resilient-yield estimate. Absent means the analytic fallback.
    pub surrogate_artifact: Option<PathBuf>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            horizon_years: 20,
            min_scenario_year: Utc::now().year(),
            remote: RemoteConfig::default(),
            surrogate_artifact: None,
        }
    }
}
