//! # adaptmetric-runtime
//!
//! Assembles the full evaluation pipeline: credential resolution, provider
//! selection, engine dispatch, and financial discounting behind one
//! [`Evaluator`]. The evaluator never panics on caller input and never
//! returns partial output; every failure folds into the response error
//! taxonomy.
//!
//! ```no_run
//! use adaptmetric_runtime::{Evaluator, EvaluatorConfig};
//! use adaptmetric_types::{ProjectType, ScenarioRequest};
//!
//! # async fn run() -> Result<(), adaptmetric_types::EvalError> {
//! let evaluator = Evaluator::from_config(&EvaluatorConfig::default())?;
//! let request = ScenarioRequest {
//!     latitude: 40.7,
//!     longitude: -74.0,
//!     scenario_year: 2050,
//!     project_type: ProjectType::Agriculture,
//!     crop_type: Some("maize".into()),
//!     temp_delta_celsius: 2.0,
//!     rain_pct_change: -10.0,
//!     workforce_size: None,
//!     daily_wage: None,
//!     use_mock_data: true,
//! };
//! let response = evaluator.evaluate(&request).await;
//! assert!(response.success);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod evaluator;
pub mod monte_carlo;

pub use config::EvaluatorConfig;
pub use evaluator::Evaluator;
pub use monte_carlo::{MetricSummary, StressConfig, StressSummary};
