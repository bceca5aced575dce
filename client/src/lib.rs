//! AgroSmart API client
//!
//! Typed access to the AgroSmart prediction service: crop prediction,
//! fertilizer recommendation, yield estimation, health and statistics.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;

pub use client::AgroClient;
pub use config::{ApiConfig, StatisticsFallback};
pub use error::{ApiError, ApiResult};
pub use shared;
