use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which backend produced a climate signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    /// Live remote-sensing backend.
    Remote,
    /// Deterministic synthetic generator.
    Mock,
}

/// Latitudinal climate zone, used by the synthetic generator to pick
/// realistic baseline ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    Tropical,
    Subtropical,
    Temperate,
    Cold,
    Polar,
}

impl ClimateZone {
    /// Classify a latitude. Band edges follow the standard geographic
    /// convention (tropics at 23.5°, polar circle at 66.5°).
    pub fn for_latitude(lat: f64) -> Self {
        let abs_lat = lat.abs();
        if abs_lat < 23.5 {
            ClimateZone::Tropical
        } else if abs_lat < 35.0 {
            ClimateZone::Subtropical
        } else if abs_lat < 50.0 {
            ClimateZone::Temperate
        } else if abs_lat < 66.5 {
            ClimateZone::Cold
        } else {
            ClimateZone::Polar
        }
    }
}

/// Normalized environmental baseline for a point and scenario year.
///
/// Produced once per evaluation, never mutated, consumed by exactly one
/// engine invocation. Mock signals pin `as_of` to Jan 1 of the scenario
/// year so repeated evaluations serialize byte-identically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClimateSignal {
    /// Baseline annual maximum temperature, °C.
    pub baseline_temp_c: f64,
    /// Baseline annual precipitation, mm.
    pub baseline_precip_mm: f64,
    /// Inter-annual variability proxy in [0, 1]; feeds storm-surge and
    /// flood-extent proxies downstream.
    pub variability_index: f64,
    pub climate_zone: ClimateZone,
    pub source: SignalSource,
    pub as_of: DateTime<Utc>,
}
