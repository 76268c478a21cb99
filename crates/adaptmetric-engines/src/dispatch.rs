use std::sync::Arc;

use adaptmetric_types::{ClimateSignal, EngineResult, EvalError, ProjectType, ScenarioRequest};
use tracing::debug;

use crate::agriculture::AgricultureEngine;
use crate::coastal::CoastalEngine;
use crate::flood::FloodEngine;
use crate::health::HealthEngine;
use crate::surrogate::SurrogatePredictor;

/// Closed dispatch over the supported project types. One engine instance
/// per type, constructed once and reused; all engines are pure so the
/// dispatcher is freely shareable.
pub struct ScenarioEngine {
    agriculture: AgricultureEngine,
    coastal: CoastalEngine,
    flood: FloodEngine,
    health: HealthEngine,
}

impl ScenarioEngine {
    pub fn new(surrogate: Option<Arc<dyn SurrogatePredictor>>) -> Self {
        Self {
            agriculture: AgricultureEngine::new(surrogate),
            coastal: CoastalEngine,
            flood: FloodEngine,
            health: HealthEngine,
        }
    }

    pub fn compute(
        &self,
        signal: &ClimateSignal,
        request: &ScenarioRequest,
    ) -> Result<EngineResult, EvalError> {
        debug!(
            project_type = ?request.project_type,
            zone = ?signal.climate_zone,
            "dispatching scenario engine"
        );
        match request.project_type {
            ProjectType::Agriculture => self.agriculture.compute(signal, request),
            ProjectType::Coastal => self.coastal.compute(signal, request),
            ProjectType::Flood => self.flood.compute(signal, request),
            ProjectType::Health => self.health.compute(signal, request),
        }
    }
}
