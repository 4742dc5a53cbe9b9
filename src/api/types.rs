//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::finance::{CashFlowResult, InputParameters};

/// Parameters together with their evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    /// Engine input.
    pub params: InputParameters,
    /// Engine output. Infinite payback serializes as `null`.
    pub result: CashFlowResult,
}

/// One point of the cumulative NPV curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpvRecord {
    /// Year index.
    pub year: usize,
    /// Cumulative discounted NPV at the end of the year ($).
    pub npv: f64,
}

impl NpvRecord {
    /// Zips a result's years with its NPV values.
    pub fn from_result(result: &CashFlowResult) -> Vec<Self> {
        result
            .years
            .iter()
            .zip(&result.npv_values)
            .map(|(&year, &npv)| Self { year, npv })
            .collect()
    }
}

/// Optional range query parameters for the NPV endpoint.
#[derive(Debug, Deserialize)]
pub struct NpvQuery {
    /// First year (inclusive).
    pub from: Option<usize>,
    /// Last year (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error messages.
    pub errors: Vec<String>,
}
