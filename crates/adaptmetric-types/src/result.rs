use serde::{Deserialize, Serialize};

/// Crop yield analysis under the scenario deltas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropAnalysis {
    pub crop_type: String,
    /// Raw-stress yield under the scenario, % of optimal baseline.
    pub standard_yield_pct: f64,
    /// Adapted-practice (resilient) yield, % of optimal baseline.
    pub resilient_yield_pct: f64,
    /// Baseline minus resilient yield, % points.
    pub yield_loss_pct: f64,
    /// Resilient minus standard yield, % points.
    pub avoided_loss_pct: f64,
    /// Engine-supplied annual revenue-loss scale consumed by the financial
    /// layer (crop price per ton × area proxy × yield loss).
    pub annual_loss_usd: f64,
}

/// Coastal inundation analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoastalAnalysis {
    /// Projected sea level + surge above the elevation proxy, metres.
    pub total_water_level_m: f64,
    pub inundation_depth_m: f64,
    /// Share of the assessed area inundated, [0, 100].
    pub affected_area_pct: f64,
    pub annual_loss_usd: f64,
}

/// One return-period rainfall depth projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnPeriodDepth {
    /// Storm return period label: "1yr", "10yr", "50yr", "100yr".
    pub period: String,
    pub baseline_mm: f64,
    pub future_mm: f64,
}

/// Rainfall-driven flood extent analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloodAnalysis {
    pub baseline_flood_area_km2: f64,
    pub future_flood_area_km2: f64,
    pub risk_increase_pct: f64,
    /// Return-period depths, ordered by severity (1yr first).
    pub rain_chart_data: Vec<ReturnPeriodDepth>,
    pub annual_loss_usd: f64,
}

/// Nested monetary summary inside the health payload. The field names are
/// part of the external contract (`economic_impact.total_economic_impact
/// .annual_loss`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TotalEconomicImpact {
    /// Annual workforce productivity loss, USD.
    pub annual_loss: f64,
    /// Lost worker-days per year.
    pub lost_work_days: f64,
}

/// Heat-stress workforce productivity analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EconomicImpact {
    /// Productivity loss, [0, 100].
    pub productivity_loss_pct: f64,
    pub workforce_size: u32,
    pub daily_wage: f64,
    /// Annual loss per affected worker, USD.
    pub loss_per_worker_usd: f64,
    pub total_economic_impact: TotalEconomicImpact,
}

/// Domain-specific engine payload. Owned by the engine that produced it,
/// read-only afterward; the variant fixes which response key it fills.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineResult {
    Crop(CropAnalysis),
    Coastal(CoastalAnalysis),
    Flood(FloodAnalysis),
    Health(EconomicImpact),
}

impl EngineResult {
    /// The annual monetary loss scale the financial layer discounts. Each
    /// engine supplies its own revenue-scaling formula; the financial model
    /// never hardcodes one.
    pub fn annual_loss_usd(&self) -> f64 {
        match self {
            EngineResult::Crop(a) => a.annual_loss_usd,
            EngineResult::Coastal(a) => a.annual_loss_usd,
            EngineResult::Flood(a) => a.annual_loss_usd,
            EngineResult::Health(a) => a.total_economic_impact.annual_loss,
        }
    }
}

/// Discounted financial figures derived deterministically from an engine
/// result. No independent identity; the same request always yields the
/// same outcome because horizon and rate are deployment configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialOutcome {
    /// Net present value of the projected annual loss stream, USD.
    /// Reported as a positive magnitude of loss.
    pub npv_usd: f64,
    pub annual_loss_usd: f64,
    pub discount_rate: f64,
    pub horizon_years: u32,
}
