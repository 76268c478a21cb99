//! # adaptmetric-engines
//!
//! Per-project-type computation engines that turn a climate signal plus
//! scenario deltas into domain impact metrics:
//!
//! - [`AgricultureEngine`] — crop-specific yield-response curves, with an
//!   optional surrogate-model path for the resilient-yield estimate
//! - [`CoastalEngine`] — sea-level/storm-surge inundation proxy
//! - [`FloodEngine`] — rainfall-driven flood extent (wetness-index
//!   threshold model) with return-period depth projections
//! - [`HealthEngine`] — heat-stress workforce productivity loss
//!
//! All four are pure functions of their inputs: no I/O, no shared mutable
//! state, no clocks. That purity is what makes the pipeline's determinism
//! contract provable. Dispatch is a closed match over [`ProjectType`];
//! adding a project type is a new variant plus a new engine, never a
//! class hierarchy.

pub mod agriculture;
pub mod coastal;
pub mod crops;
pub mod dispatch;
pub mod flood;
pub mod health;
pub mod surrogate;

pub use agriculture::AgricultureEngine;
pub use coastal::CoastalEngine;
pub use crops::CropProfile;
pub use dispatch::ScenarioEngine;
pub use flood::FloodEngine;
pub use health::HealthEngine;
pub use surrogate::{LinearSurrogate, SurrogatePredictor};

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
