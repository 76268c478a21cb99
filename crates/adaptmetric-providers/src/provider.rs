use adaptmetric_types::{ClimateSignal, ProviderError, SignalSource};
use async_trait::async_trait;

/// The environmental-data capability: yield a climate signal for a point
/// and scenario year.
///
/// Both variants return signals with identical field sets and types,
/// differing only in `source` and numeric values, so everything downstream
/// is indifferent to where the signal came from.
#[async_trait]
pub trait EnvironmentalDataProvider: Send + Sync {
    /// Which source this provider stamps on its signals.
    fn source(&self) -> SignalSource;

    async fn fetch(
        &self,
        lat: f64,
        lon: f64,
        scenario_year: i32,
    ) -> Result<ClimateSignal, ProviderError>;
}
