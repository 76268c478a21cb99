//! # adaptmetric-providers
//!
//! The environmental-data layer of the evaluation pipeline. One capability,
//! two variants:
//!
//! - [`RemoteSensingProvider`] — queries live satellite/weather aggregates
//!   for a point and scenario year through a [`RemoteTransport`] seam, with
//!   a bounded retry-with-backoff policy for transient network failures.
//! - [`DeterministicMockProvider`] — synthesizes the same shaped signal
//!   from a seed derived purely from the request, with no network access,
//!   no wall clock, and no system randomness. Two calls with the same
//!   `(lat, lon, scenario_year)` produce bit-identical signals.
//!
//! Provider selection is a caller-level policy and lives in the runtime
//! crate; nothing here silently substitutes mock data for real data.

pub mod mock;
pub mod provider;
pub mod remote;
pub mod seed;

pub use mock::DeterministicMockProvider;
pub use provider::EnvironmentalDataProvider;
pub use remote::{
    AggregateObservation, HttpTransport, RemoteConfig, RemoteSensingProvider, RemoteTransport,
};
pub use seed::{request_seed, Lcg};
