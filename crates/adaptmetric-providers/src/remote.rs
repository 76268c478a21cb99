use std::sync::Arc;
use std::time::Duration;

use adaptmetric_types::{ClimateSignal, ClimateZone, ProviderError, SignalSource};
use adaptmetric_credentials::ServiceAccountKey;
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::provider::EnvironmentalDataProvider;

/// Remote-sensing client configuration. Deployment-level, not per-request.
#[derive(Clone, Debug)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Per-call timeout; exceeding it is a `network` error, not a crash.
    pub timeout: Duration,
    /// Total attempts for transient network errors (first try included).
    pub max_attempts: u32,
    /// Base backoff; attempt `n` sleeps `backoff * n` before retrying.
    pub backoff: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://aggregates.adaptmetric.dev".to_string(),
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Raw point aggregates as returned by the remote backend.
#[derive(Clone, Debug, Deserialize)]
pub struct AggregateObservation {
    /// Mean of daily maximum temperature over the reference window, °C.
    pub avg_max_temp_c: f64,
    /// Total precipitation over the reference window, mm.
    pub total_precip_mm: f64,
    /// Inter-annual variability proxy in [0, 1].
    pub variability_index: f64,
}

/// Transport seam under [`RemoteSensingProvider`]: one backend query for
/// one point/year. Lets tests substitute a stub for the HTTP client and
/// keeps the retry policy out of the wire code.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    async fn query_aggregates(
        &self,
        lat: f64,
        lon: f64,
        scenario_year: i32,
    ) -> Result<AggregateObservation, ProviderError>;
}

/// reqwest-backed transport. Dropping an in-flight call releases the
/// connection; there is no in-band cancellation beyond that.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    client_email: String,
}

impl HttpTransport {
    pub fn new(config: &RemoteConfig, key: &ServiceAccountKey) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::network(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_email: key.client_email.clone(),
        })
    }
}

#[async_trait]
impl RemoteTransport for HttpTransport {
    async fn query_aggregates(
        &self,
        lat: f64,
        lon: f64,
        scenario_year: i32,
    ) -> Result<AggregateObservation, ProviderError> {
        let url = format!(
            "{}/v1/aggregates?lat={lat}&lon={lon}&year={scenario_year}",
            self.base_url
        );
        let response = self
            .client
            .get(&url)
            .header("x-service-account", &self.client_email)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    ProviderError::network(format!("aggregate query failed: {e}"))
                } else {
                    ProviderError::network(format!("aggregate request error: {e}"))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::auth(format!(
                "backend rejected service account ({status})"
            )));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::quota("backend request quota exhausted"));
        }
        if status.is_server_error() {
            return Err(ProviderError::network(format!("backend error ({status})")));
        }
        if !status.is_success() {
            return Err(ProviderError::malformed(format!(
                "unexpected backend status {status}"
            )));
        }

        response
            .json::<AggregateObservation>()
            .await
            .map_err(|e| ProviderError::malformed(format!("aggregate payload did not parse: {e}")))
    }
}

/// Live environmental-data provider. Requires resolved credentials; maps
/// backend failures onto the provider error taxonomy and retries transient
/// network errors up to the configured bound with linear backoff. Auth,
/// quota, and malformed-response errors are never retried.
pub struct RemoteSensingProvider {
    transport: Arc<dyn RemoteTransport>,
    max_attempts: u32,
    backoff: Duration,
}

impl RemoteSensingProvider {
    pub fn new(config: &RemoteConfig, key: &ServiceAccountKey) -> Result<Self, ProviderError> {
        let transport = HttpTransport::new(config, key)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Construct over an arbitrary transport. Used by tests and by any
    /// deployment with a non-HTTP backend.
    pub fn with_transport(transport: Arc<dyn RemoteTransport>, config: &RemoteConfig) -> Self {
        Self {
            transport,
            max_attempts: config.max_attempts.max(1),
            backoff: config.backoff,
        }
    }
}

#[async_trait]
impl EnvironmentalDataProvider for RemoteSensingProvider {
    fn source(&self) -> SignalSource {
        SignalSource::Remote
    }

    async fn fetch(
        &self,
        lat: f64,
        lon: f64,
        scenario_year: i32,
    ) -> Result<ClimateSignal, ProviderError> {
        let mut attempt = 1;
        let observation = loop {
            match self.transport.query_aggregates(lat, lon, scenario_year).await {
                Ok(observation) => break observation,
                Err(err) if err.kind.is_transient() && attempt < self.max_attempts => {
                    tracing::debug!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "transient backend failure; backing off"
                    );
                    tokio::time::sleep(self.backoff * attempt).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        };

        Ok(ClimateSignal {
            baseline_temp_c: observation.avg_max_temp_c,
            baseline_precip_mm: observation.total_precip_mm,
            variability_index: observation.variability_index.clamp(0.0, 1.0),
            climate_zone: ClimateZone::for_latitude(lat),
            source: SignalSource::Remote,
            as_of: Utc::now(),
        })
    }
}
