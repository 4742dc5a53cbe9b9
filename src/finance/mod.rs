//! Peak-shaving financial engine.
//!
//! Pure functions from [`InputParameters`] to [`CashFlowResult`]: capital
//! cost, peak-reduction sizing, annual savings, cumulative NPV, payback, and
//! IRR. Nothing here performs I/O or holds state between calls.

pub mod cashflow;
/// Capital cost calculation for both cost conventions.
pub mod cost;
pub mod engine;
/// Internal rate of return extraction.
pub mod irr;
pub mod npv;
pub mod payback;
/// Plain-text evaluation report.
pub mod report;
/// Power- and energy-limited peak reduction.
pub mod sizing;
pub mod types;

pub use engine::evaluate;
pub use report::Report;
pub use sizing::ROUND_TRIP_EFFICIENCY;
pub use types::{
    CashFlowResult, CostModel, IRR_SENTINEL, InputParameters, LimitingFactor, PeakReduction,
    SystemCostBreakdown,
};
