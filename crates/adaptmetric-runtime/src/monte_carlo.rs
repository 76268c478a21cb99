use adaptmetric_providers::{request_seed, Lcg};
use adaptmetric_types::{EvalError, ScenarioRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluator::Evaluator;

// Keeps the stress stream disjoint from the signal-synthesis streams.
const STRESS_SEED_OFFSET: u64 = 777_001;

/// Stress-run parameters: how many perturbed variants to evaluate and how
/// wide the perturbation envelopes are around the requested deltas.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StressConfig {
    pub iterations: u32,
    /// Temperature delta is drawn uniformly within ± this spread, °C.
    pub temp_spread_c: f64,
    /// Rainfall delta is drawn uniformly within ± this spread, % points.
    pub rain_spread_pct: f64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            temp_spread_c: 1.0,
            rain_spread_pct: 10.0,
        }
    }
}

/// Distribution summary for one stressed metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

/// Summary of one stress run, USD on both metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StressSummary {
    pub iterations: u32,
    pub npv_usd: MetricSummary,
    pub annual_loss_usd: MetricSummary,
}

impl Evaluator {
    /// Monte Carlo stress run over the synthetic pipeline.
    ///
    /// Perturbs the request's temperature and rainfall deltas with a
    /// request-seeded generator and summarizes the resulting NPV and
    /// annual-loss distributions. Entirely synchronous and deterministic:
    /// the same request and config always produce the same summary. Always
    /// uses the synthetic provider regardless of `use_mock_data`; stressing
    /// a live backend with hundreds of fetches is never the right call.
    pub fn stress(
        &self,
        request: &ScenarioRequest,
        config: &StressConfig,
    ) -> Result<StressSummary, EvalError> {
        request.validate(self.min_scenario_year())?;
        if config.iterations == 0 {
            return Err(EvalError::validation(
                "iterations",
                "stress run needs at least one iteration",
            ));
        }

        let seed = request_seed(request.latitude, request.longitude, request.scenario_year)
            .wrapping_add(STRESS_SEED_OFFSET);
        let mut rng = Lcg::new(seed);

        let signal = self.mock_provider().synthesize(
            request.latitude,
            request.longitude,
            request.scenario_year,
        );

        let mut npvs = Vec::with_capacity(config.iterations as usize);
        let mut annual_losses = Vec::with_capacity(config.iterations as usize);
        for _ in 0..config.iterations {
            let mut variant = request.clone();
            variant.temp_delta_celsius = rng.next_in(
                request.temp_delta_celsius - config.temp_spread_c,
                request.temp_delta_celsius + config.temp_spread_c,
            );
            variant.rain_pct_change = rng
                .next_in(
                    request.rain_pct_change - config.rain_spread_pct,
                    request.rain_pct_change + config.rain_spread_pct,
                )
                .max(-100.0);

            let engine_result = self.engine().compute(&signal, &variant)?;
            let outcome = self.financial().evaluate(&engine_result);
            npvs.push(outcome.npv_usd);
            annual_losses.push(outcome.annual_loss_usd);
        }

        let summary = StressSummary {
            iterations: config.iterations,
            npv_usd: summarize(&mut npvs),
            annual_loss_usd: summarize(&mut annual_losses),
        };
        debug!(
            iterations = summary.iterations,
            npv_mean = summary.npv_usd.mean,
            npv_p95 = summary.npv_usd.p95,
            "stress run complete"
        );
        Ok(summary)
    }
}

fn summarize(values: &mut [f64]) -> MetricSummary {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    MetricSummary {
        mean,
        std_dev: variance.sqrt(),
        min: values[0],
        max: values[values.len() - 1],
        p5: percentile(values, 0.05),
        p25: percentile(values, 0.25),
        p50: percentile(values, 0.50),
        p75: percentile(values, 0.75),
        p95: percentile(values, 0.95),
    }
}

/// Linear-interpolated percentile over a sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
