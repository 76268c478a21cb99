use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::result::{
    CoastalAnalysis, CropAnalysis, EconomicImpact, EngineResult, FinancialOutcome, FloodAnalysis,
};

/// Machine-readable error payload in a failed response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    /// Stable kind string from [`EvalError::kind`].
    pub kind: String,
    pub message: String,
}

/// Terminal artifact of one evaluation. Written once, never mutated.
///
/// Exactly one of the engine-specific keys is populated on success, and the
/// error key is populated alone on failure — partial engine output never
/// accompanies an error. Field names are external contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_analysis: Option<FinancialOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_analysis: Option<CropAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coastal_analysis: Option<CoastalAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flood_analysis: Option<FloodAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_impact: Option<EconomicImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl ScenarioResponse {
    /// Merge an engine result and its financial outcome into the canonical
    /// success shape. The engine variant fixes which key is filled.
    pub fn from_success(engine: EngineResult, financial: FinancialOutcome) -> Self {
        let mut response = ScenarioResponse {
            success: true,
            financial_analysis: Some(financial),
            crop_analysis: None,
            coastal_analysis: None,
            flood_analysis: None,
            economic_impact: None,
            error: None,
        };
        match engine {
            EngineResult::Crop(a) => response.crop_analysis = Some(a),
            EngineResult::Coastal(a) => response.coastal_analysis = Some(a),
            EngineResult::Flood(a) => response.flood_analysis = Some(a),
            EngineResult::Health(a) => response.economic_impact = Some(a),
        }
        response
    }

    /// Build the failure shape. Discards nothing silently: the kind and
    /// message both come from the originating [`EvalError`].
    pub fn from_error(error: &EvalError) -> Self {
        ScenarioResponse {
            success: false,
            financial_analysis: None,
            crop_analysis: None,
            coastal_analysis: None,
            flood_analysis: None,
            economic_impact: None,
            error: Some(ResponseError {
                kind: error.kind(),
                message: error.to_string(),
            }),
        }
    }
}
