use std::sync::Arc;

use adaptmetric_credentials::CredentialResolver;
use adaptmetric_engines::{LinearSurrogate, ScenarioEngine, SurrogatePredictor};
use adaptmetric_financial::FinancialModel;
use adaptmetric_providers::{
    DeterministicMockProvider, EnvironmentalDataProvider, RemoteSensingProvider,
};
use adaptmetric_types::{
    ClimateSignal, EvalError, ProviderError, ScenarioRequest, ScenarioResponse,
};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::config::EvaluatorConfig;

/// Concurrency bound for batch evaluation. Mock evaluations are CPU-bound
/// and cheap; this mostly limits in-flight remote fetches.
const BATCH_CONCURRENCY: usize = 8;

/// The evaluation pipeline, assembled once and reused across requests.
///
/// Provider selection is an explicit policy, decided here and nowhere
/// else: `use_mock_data` always routes to the deterministic synthetic
/// provider, and a real-data request without resolved credentials fails
/// with `provider_no_credentials` rather than silently degrading to
/// synthetic output.
pub struct Evaluator {
    mock: DeterministicMockProvider,
    remote: Option<Arc<dyn EnvironmentalDataProvider>>,
    engine: ScenarioEngine,
    financial: FinancialModel,
    min_scenario_year: i32,
}

impl Evaluator {
    /// Assemble the pipeline from deployment configuration. Credentials
    /// are resolved once, at construction; an exhausted chain leaves the
    /// remote backend unavailable but is not an error until a request
    /// actually demands real data.
    pub fn from_config(config: &EvaluatorConfig) -> Result<Self, EvalError> {
        let handle = CredentialResolver::default_chain().resolve();
        let remote: Option<Arc<dyn EnvironmentalDataProvider>> = match handle.key() {
            Some(key) => {
                info!(source = %handle.source, "remote sensing backend enabled");
                Some(Arc::new(RemoteSensingProvider::new(&config.remote, key)?))
            }
            None => {
                info!("no credentials resolved; only synthetic data available");
                None
            }
        };

        let surrogate: Option<Arc<dyn SurrogatePredictor>> = match &config.surrogate_artifact {
            Some(path) => Some(Arc::new(LinearSurrogate::load(path)?)),
            None => None,
        };

        Ok(Self::assemble(
            remote,
            surrogate,
            FinancialModel::new(config.discount_rate, config.horizon_years)?,
            config.min_scenario_year,
        ))
    }

    /// Assemble from explicit parts. Tests use this to substitute provider
    /// doubles; deployments with a non-HTTP backend use it too.
    pub fn assemble(
        remote: Option<Arc<dyn EnvironmentalDataProvider>>,
        surrogate: Option<Arc<dyn SurrogatePredictor>>,
        financial: FinancialModel,
        min_scenario_year: i32,
    ) -> Self {
        Self {
            mock: DeterministicMockProvider::new(),
            remote,
            engine: ScenarioEngine::new(surrogate),
            financial,
            min_scenario_year,
        }
    }

    /// Evaluate one scenario. Never panics and never returns partial
    /// output: every failure folds into the error taxonomy and comes back
    /// as `{ success: false, error: { kind, message } }`.
    pub async fn evaluate(&self, request: &ScenarioRequest) -> ScenarioResponse {
        match self.try_evaluate(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(kind = %error.kind(), error = %error, "evaluation failed");
                ScenarioResponse::from_error(&error)
            }
        }
    }

    async fn try_evaluate(&self, request: &ScenarioRequest) -> Result<ScenarioResponse, EvalError> {
        request.validate(self.min_scenario_year)?;
        let signal = self.fetch_signal(request).await?;
        let engine_result = self.engine.compute(&signal, request)?;
        let financial = self.financial.evaluate(&engine_result);
        Ok(ScenarioResponse::from_success(engine_result, financial))
    }

    async fn fetch_signal(&self, request: &ScenarioRequest) -> Result<ClimateSignal, EvalError> {
        if request.use_mock_data {
            return Ok(self.mock.synthesize(
                request.latitude,
                request.longitude,
                request.scenario_year,
            ));
        }
        let remote = self.remote.as_ref().ok_or_else(|| {
            ProviderError::no_credentials(
                "real data requested but no credential source resolved",
            )
        })?;
        let signal = remote
            .fetch(request.latitude, request.longitude, request.scenario_year)
            .await?;
        Ok(signal)
    }

    /// Evaluate a batch concurrently. Responses come back in input order,
    /// one per request; a failed request yields its error response in
    /// place without affecting its neighbours.
    pub async fn evaluate_batch(&self, requests: &[ScenarioRequest]) -> Vec<ScenarioResponse> {
        stream::iter(requests)
            .map(|request| self.evaluate(request))
            .buffered(BATCH_CONCURRENCY)
            .collect()
            .await
    }

    pub(crate) fn mock_provider(&self) -> &DeterministicMockProvider {
        &self.mock
    }

    pub(crate) fn engine(&self) -> &ScenarioEngine {
        &self.engine
    }

    pub(crate) fn financial(&self) -> &FinancialModel {
        &self.financial
    }

    pub(crate) fn min_scenario_year(&self) -> i32 {
        self.min_scenario_year
    }
}
