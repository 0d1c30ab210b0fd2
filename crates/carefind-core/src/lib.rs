//! Core domain types and pure logic for the carefind hospital finder.
//!
//! Everything here is synchronous and side-effect free: coordinate and
//! hospital types, the Haversine distance math, the filter/sort ranking
//! pipeline, and environment-driven application configuration.

mod app_config;
mod config;
pub mod geo;
pub mod rank;
mod types;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{
    Coordinate, DataSource, FilterState, HospitalRecord, HospitalType, LocationSource,
    RankedHospital, ResolvedLocation, SortMode, TypeFilter, DEFAULT_ORIGIN,
};

/// Errors produced while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An env var was present but could not be parsed into its target type.
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
