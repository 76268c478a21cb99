//! # adaptmetric-types
//!
//! Shared data model for the AdaptMetric scenario evaluation pipeline:
//!
//! - **ScenarioRequest** — validated, immutable description of one what-if
//!   evaluation (location, scenario year, project type, climate deltas)
//! - **ClimateSignal** — normalized environmental baseline for a point/year,
//!   produced by exactly one provider per evaluation
//! - **EngineResult** — per-project-type impact payload (crop yield, coastal
//!   inundation, flood extent, workforce productivity)
//! - **FinancialOutcome** — NPV and annualized-loss figures derived from an
//!   engine result
//! - **ScenarioResponse** — the terminal, JSON-serializable artifact; either
//!   a success payload or an error, never both
//! - **EvalError** — the machine-readable failure taxonomy shared by every
//!   stage of the pipeline
//!
//! Types in this crate carry no behavior beyond validation and serialization.
//! All computation lives in the provider, engine, and financial crates.

pub mod error;
pub mod request;
pub mod response;
pub mod result;
pub mod signal;

pub use error::{ConfigErrorKind, EvalError, ProviderError, ProviderErrorKind};
pub use request::{ProjectType, ScenarioRequest};
pub use response::{ResponseError, ScenarioResponse};
pub use result::{
    CoastalAnalysis, CropAnalysis, EconomicImpact, EngineResult, FinancialOutcome, FloodAnalysis,
    ReturnPeriodDepth, TotalEconomicImpact,
};
pub use signal::{ClimateSignal, ClimateZone, SignalSource};
