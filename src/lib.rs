//! Peak-shaving battery storage economics.

#[cfg(feature = "api")]
pub mod api;
/// TOML scenario configuration and presets.
pub mod config;
pub mod finance;
pub mod io;
