//! REST API for evaluation results.
//!
//! Endpoints:
//! - `GET /result`: parameters and full evaluation of the startup scenario
//! - `GET /npv`: NPV curve rows with optional year range filtering
//! - `POST /evaluate`: validate and evaluate a posted scenario

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::finance::{CashFlowResult, InputParameters};

pub use types::{ErrorResponse, EvaluationResponse, NpvQuery, NpvRecord};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the startup evaluation and wrapped in `Arc`.
/// No locks needed since all data is read-only.
pub struct AppState {
    /// Parameters of the startup scenario.
    pub params: InputParameters,
    /// Evaluation of the startup scenario.
    pub result: CashFlowResult,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/result", get(handlers::get_result))
        .route("/npv", get(handlers::get_npv))
        .route("/evaluate", post(handlers::post_evaluate))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
