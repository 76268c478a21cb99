//! End-to-end pipeline tests over the public API, synthetic data only.

use adaptmetric_financial::FinancialModel;
use adaptmetric_runtime::{Evaluator, StressConfig};
use adaptmetric_types::{ProjectType, ScenarioRequest};

fn evaluator() -> Evaluator {
    Evaluator::assemble(None, None, FinancialModel::default(), 2026)
}

fn nyc_agriculture() -> ScenarioRequest {
    ScenarioRequest {
        latitude: 40.7,
        longitude: -74.0,
        scenario_year: 2050,
        project_type: ProjectType::Agriculture,
        crop_type: Some("maize".into()),
        temp_delta_celsius: 2.0,
        rain_pct_change: -10.0,
        workforce_size: None,
        daily_wage: None,
        use_mock_data: true,
    }
}

#[tokio::test]
async fn agriculture_scenario_end_to_end() {
    let response = evaluator().evaluate(&nyc_agriculture()).await;

    assert!(response.success);
    let crop = response.crop_analysis.expect("crop analysis");
    assert_eq!(crop.crop_type, "maize");
    assert!((0.0..=100.0).contains(&crop.standard_yield_pct));
    assert!((0.0..=100.0).contains(&crop.resilient_yield_pct));
    assert!(crop.resilient_yield_pct >= crop.standard_yield_pct);
    assert!((crop.yield_loss_pct - (100.0 - crop.resilient_yield_pct)).abs() < 0.01);

    let financial = response.financial_analysis.expect("financial analysis");
    assert!(financial.npv_usd.is_finite());
    assert!(financial.npv_usd >= 0.0);
    assert_eq!(financial.discount_rate, 0.10);
    assert_eq!(financial.horizon_years, 20);
}

#[tokio::test]
async fn repeated_evaluations_are_byte_identical() {
    let eval = evaluator();
    let request = nyc_agriculture();

    let mut serialized = Vec::new();
    for _ in 0..3 {
        let response = eval.evaluate(&request).await;
        serialized.push(serde_json::to_string(&response).unwrap());
    }
    assert_eq!(serialized[0], serialized[1]);
    assert_eq!(serialized[1], serialized[2]);
}

#[tokio::test]
async fn all_project_types_succeed_on_synthetic_data() {
    let eval = evaluator();
    for project_type in [
        ProjectType::Agriculture,
        ProjectType::Coastal,
        ProjectType::Flood,
        ProjectType::Health,
    ] {
        let request = ScenarioRequest {
            project_type,
            workforce_size: Some(800),
            daily_wage: Some(18.5),
            ..nyc_agriculture()
        };
        let response = eval.evaluate(&request).await;
        assert!(
            response.success,
            "{project_type} failed: {:?}",
            response.error
        );
        assert!(response.financial_analysis.is_some());
    }
}

#[tokio::test]
async fn error_responses_carry_taxonomy_kind_and_nothing_else() {
    let request = ScenarioRequest {
        crop_type: Some("durian".into()),
        ..nyc_agriculture()
    };
    let response = evaluator().evaluate(&request).await;

    assert!(!response.success);
    let error = response.error.expect("error payload");
    assert_eq!(error.kind, "configuration_unknown_crop");
    assert!(error.message.contains("durian"));
    assert!(response.crop_analysis.is_none());
    assert!(response.financial_analysis.is_none());

    let json = serde_json::to_value(
        evaluator()
            .evaluate(&ScenarioRequest {
                crop_type: Some("durian".into()),
                ..nyc_agriculture()
            })
            .await,
    )
    .unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.keys().len(), 2);
    assert!(object.contains_key("success"));
    assert!(object.contains_key("error"));
}

#[tokio::test]
async fn stress_summary_brackets_the_point_estimate() {
    let eval = evaluator();
    let request = nyc_agriculture();

    let point = eval.evaluate(&request).await;
    let npv = point.financial_analysis.unwrap().npv_usd;

    let summary = eval
        .stress(
            &request,
            &StressConfig {
                iterations: 300,
                temp_spread_c: 0.5,
                rain_spread_pct: 5.0,
            },
        )
        .unwrap();
    assert!(summary.npv_usd.min <= npv && npv <= summary.npv_usd.max);
    assert!(summary.annual_loss_usd.min >= 0.0);
}
