use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure category for environmental-data providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    /// Backend rejected the credentials at connect or query time.
    Auth,
    /// Backend quota exhausted; retrying immediately will not help.
    Quota,
    /// Transient transport failure or per-call timeout. Retried locally a
    /// bounded number of times before surfacing.
    Network,
    /// Backend responded, but the payload did not parse into a signal.
    MalformedResponse,
    /// Caller demanded real data and no credential source resolved.
    NoCredentials,
}

impl ProviderErrorKind {
    /// Transient kinds are worth a bounded local retry; the rest are not.
    pub fn is_transient(self) -> bool {
        matches!(self, ProviderErrorKind::Network)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderErrorKind::Auth => "auth",
            ProviderErrorKind::Quota => "quota",
            ProviderErrorKind::Network => "network",
            ProviderErrorKind::MalformedResponse => "malformed_response",
            ProviderErrorKind::NoCredentials => "no_credentials",
        }
    }
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error produced by an [`EnvironmentalDataProvider`] fetch.
///
/// Carries the kind separately from the human-readable message so callers
/// can branch on it without string matching.
#[derive(Error, Clone, Debug)]
#[error("provider failure ({kind}): {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Auth, message)
    }

    pub fn quota(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Quota, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Network, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::MalformedResponse, message)
    }

    pub fn no_credentials(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::NoCredentials, message)
    }
}

/// Failure category for engine configuration problems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigErrorKind {
    /// Agriculture request named a crop with no yield-response curve.
    UnknownCrop,
    /// Dispatcher received a project type with no engine.
    UnsupportedProjectType,
}

impl ConfigErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigErrorKind::UnknownCrop => "unknown_crop",
            ConfigErrorKind::UnsupportedProjectType => "unsupported_project_type",
        }
    }
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The evaluation pipeline's failure taxonomy.
///
/// Every failure path in `evaluate()` folds into one of these variants and
/// is reported as `{ success: false, error: { kind, message } }` — no error
/// is ever swallowed, and no partial engine output accompanies one.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Malformed or out-of-range request. Detected before any provider or
    /// engine work begins.
    #[error("validation failed for `{field}`: {message}")]
    Validation { field: &'static str, message: String },

    /// Provider-layer failure (auth, quota, network, malformed response,
    /// or missing credentials when real data was demanded).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Engine configuration failure (unknown crop, unsupported project type).
    #[error("configuration error ({kind}): {message}")]
    Configuration {
        kind: ConfigErrorKind,
        message: String,
    },

    /// The surrogate model artifact is missing or failed to deserialize.
    #[error("surrogate model unavailable: {0}")]
    ModelUnavailable(String),
}

impl EvalError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        EvalError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn unknown_crop(crop: &str) -> Self {
        EvalError::Configuration {
            kind: ConfigErrorKind::UnknownCrop,
            message: format!("no yield-response curve for crop type `{crop}`"),
        }
    }

    /// Machine-readable kind string, stable across releases. This is the
    /// `error.kind` value in the response JSON.
    pub fn kind(&self) -> String {
        match self {
            EvalError::Validation { .. } => "validation".to_string(),
            EvalError::Provider(e) => format!("provider_{}", e.kind),
            EvalError::Configuration { kind, .. } => format!("configuration_{kind}"),
            EvalError::ModelUnavailable(_) => "model_unavailable".to_string(),
        }
    }
}
