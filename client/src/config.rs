//! Configuration management for the AgroSmart API client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with AGRO__ prefix (e.g. AGRO__BASE_URL)

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Base path used when none is configured
pub const DEFAULT_BASE_URL: &str = "/api";

/// Origin that relative base paths are resolved against
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// API client configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base path or absolute URL of the prediction service
    pub base_url: String,

    /// Scheme and authority prefixed to a relative `base_url`
    pub origin: String,

    /// Per-request timeout; unset leaves the transport defaults in place
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// What `get_statistics` does when the call fails
    pub statistics_fallback: StatisticsFallback,
}

/// Failure policy for the statistics endpoint
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsFallback {
    /// Resolve to all-zero statistics and log the failure.
    ///
    /// A backend without a statistics source then looks the same as one
    /// that has recorded no predictions yet.
    #[default]
    Zero,
    /// Return the error like every other operation
    Propagate,
}

impl ApiConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRO__ prefix)
            .add_source(
                Environment::with_prefix("AGRO")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Apply code defaults underneath the given sources and deserialize
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("origin", DEFAULT_ORIGIN)?
            .set_default("statistics_fallback", "zero")?
            .build()?
            .try_deserialize()
    }

    /// Configuration pointing at an explicit base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn statistics_fallback(mut self, policy: StatisticsFallback) -> Self {
        self.statistics_fallback = policy;
        self
    }

    /// Absolute base URL with any trailing slash removed.
    ///
    /// A base starting with `/` is joined onto `origin`.
    pub fn resolved_base_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() || base.starts_with('/') {
            format!("{}{}", self.origin.trim_end_matches('/'), base)
        } else {
            base.to_string()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            timeout_secs: None,
            statistics_fallback: StatisticsFallback::Zero,
        }
    }
}
