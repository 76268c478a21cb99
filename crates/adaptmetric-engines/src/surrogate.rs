use std::path::Path;

use adaptmetric_types::EvalError;
use serde::Deserialize;

/// The narrow capability the core requires of a pre-trained surrogate
/// artifact: map an engineered feature vector to a yield/risk estimate.
///
/// The core assumes nothing about the serialization format beyond
/// "deserializes to something exposing predict". Implementations must be
/// safe for unlimited concurrent reads and never mutate after load.
pub trait SurrogatePredictor: Send + Sync {
    fn predict(&self, features: &[f64]) -> f64;
}

#[derive(Debug, Deserialize)]
struct LinearArtifact {
    intercept: f64,
    coefficients: Vec<f64>,
}

/// Bundled linear-regression surrogate, loaded once from a JSON artifact
/// (`{ "intercept": f, "coefficients": [f, ...] }`) and read-only
/// afterward. A missing path or undeserializable blob is
/// [`EvalError::ModelUnavailable`]; download and integrity checking are an
/// external bootstrap concern.
#[derive(Clone, Debug)]
pub struct LinearSurrogate {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearSurrogate {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EvalError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EvalError::ModelUnavailable(format!(
                "cannot read artifact at {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, EvalError> {
        let artifact: LinearArtifact = serde_json::from_str(raw)
            .map_err(|e| EvalError::ModelUnavailable(format!("artifact did not parse: {e}")))?;
        if artifact.coefficients.is_empty() {
            return Err(EvalError::ModelUnavailable(
                "artifact has no coefficients".into(),
            ));
        }
        Ok(Self {
            intercept: artifact.intercept,
            coefficients: artifact.coefficients,
        })
    }
}

impl SurrogatePredictor for LinearSurrogate {
    fn predict(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, f)| c * f)
                .sum::<f64>()
    }
}
