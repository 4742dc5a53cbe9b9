//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use approx::assert_relative_eq;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use shaver::api::{AppState, router};
use shaver::config::ScenarioConfig;
use shaver::finance::evaluate;

/// Evaluate the reference scenario and return the API state.
fn build_api_state() -> Arc<AppState> {
    let params = common::reference_params();
    let result = evaluate(&params);
    Arc::new(AppState { params, result })
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let app = router(build_api_state());
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let resp = app.oneshot(req).await.expect("router should respond");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = serde_json::from_slice(&body).expect("body should be JSON");
    (status, json)
}

#[tokio::test]
async fn result_exposes_every_result_field() {
    let (status, json) = get_json("/result").await;
    assert_eq!(status, StatusCode::OK);

    let result = json["result"].as_object().expect("result should be an object");
    for key in [
        "years",
        "npv_values",
        "annual_savings",
        "system_cost",
        "peak_reduction_kw",
        "irr",
        "payback_period_years",
    ] {
        assert!(result.contains_key(key), "missing key: {key}");
    }
    assert_eq!(json["result"]["system_cost"]["total_cost"], 89_460.0);
    assert_eq!(json["params"]["analysis_years"], 15);
}

#[tokio::test]
async fn npv_rows_follow_result_curve() {
    let (status, json) = get_json("/npv?from=7&to=8").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json.as_array().expect("rows should be an array");
    assert_eq!(rows.len(), 2);
    assert!(rows[0]["npv"].as_f64().is_some_and(|v| v < 0.0));
    assert!(rows[1]["npv"].as_f64().is_some_and(|v| v >= 0.0));
}

#[tokio::test]
async fn posted_preset_matches_direct_evaluation() {
    let scenario = ScenarioConfig::energy_limited();
    let expected = evaluate(&scenario.to_params());

    let app = router(build_api_state());
    let req = Request::builder()
        .method("POST")
        .uri("/evaluate")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&scenario).expect("scenario should serialize"),
        ))
        .expect("request should build");
    let resp = app.oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json: Value = serde_json::from_slice(&body).expect("body should be JSON");
    let irr = json["result"]["irr"].as_f64().expect("irr should be a number");
    assert_relative_eq!(irr, expected.irr, max_relative = 1e-12);
    assert!(json["result"]["payback_period_years"].is_null());
}
