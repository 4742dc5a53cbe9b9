//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::debug;

use super::AppState;
use super::types::{ErrorResponse, EvaluationResponse, NpvQuery, NpvRecord};
use crate::config::ScenarioConfig;
use crate::finance::evaluate;

/// Returns the startup scenario's parameters and evaluation.
///
/// `GET /result` → 200 + `EvaluationResponse` JSON
pub async fn get_result(State(state): State<Arc<AppState>>) -> Json<EvaluationResponse> {
    Json(EvaluationResponse {
        params: state.params,
        result: state.result.clone(),
    })
}

/// Returns NPV curve rows, optionally filtered by year range.
///
/// `GET /npv` → 200 + `Vec<NpvRecord>` JSON
/// `GET /npv?from=N&to=M` → filtered range (inclusive)
/// `GET /npv?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_npv(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NpvQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                errors: vec![format!("`from` ({from}) must be <= `to` ({to})")],
            }),
        ));
    }

    let records: Vec<NpvRecord> = NpvRecord::from_result(&state.result)
        .into_iter()
        .filter(|r| r.year >= from && r.year <= to)
        .collect();

    Ok(Json(records))
}

/// Validates and evaluates a posted scenario.
///
/// `POST /evaluate` + `ScenarioConfig` JSON → 200 + `EvaluationResponse`
/// Invalid scenario → 422 + `ErrorResponse` listing every violation
pub async fn post_evaluate(Json(scenario): Json<ScenarioConfig>) -> impl IntoResponse {
    let errors = scenario.validate();
    if !errors.is_empty() {
        debug!(n_errors = errors.len(), "rejected scenario");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                errors: errors.iter().map(ToString::to_string).collect(),
            }),
        ));
    }

    let params = scenario.to_params();
    let result = evaluate(&params);
    Ok(Json(EvaluationResponse { params, result }))
}
