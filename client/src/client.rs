//! Prediction service client
//!
//! One async method per service capability. Each call is a single
//! request/response round trip: no retries, no caching, no deduplication.

use std::time::Duration;

use reqwest::{header, Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    CropPredictionInput, CropPredictionResult, FertilizerInput, FertilizerResult, HealthStatus,
    Statistics, YieldInput, YieldResult,
};

use crate::config::{ApiConfig, StatisticsFallback};
use crate::error::{ApiError, ApiResult};
use crate::routes;

/// Client for the AgroSmart prediction service
#[derive(Clone)]
pub struct AgroClient {
    http_client: Client,
    config: ApiConfig,
    base_url: String,
}

impl AgroClient {
    /// Create a client from an explicit configuration
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let base_url = config.resolved_base_url();
        Url::parse(&base_url).map_err(|e| {
            ApiError::Configuration(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
            base_url,
        })
    }

    /// Create a client from configuration files and AGRO__ environment variables
    pub fn from_env() -> ApiResult<Self> {
        let config = ApiConfig::load().map_err(|e| ApiError::Configuration(e.to_string()))?;
        Self::new(config)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolved absolute base URL every route is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Recommend a crop for the given soil and climate
    pub async fn predict_crop(
        &self,
        input: &CropPredictionInput,
    ) -> ApiResult<CropPredictionResult> {
        self.post(routes::PREDICT_CROP, input).await
    }

    /// Recommend a fertilizer plan for the given crop and soil
    pub async fn recommend_fertilizer(
        &self,
        input: &FertilizerInput,
    ) -> ApiResult<FertilizerResult> {
        self.post(routes::RECOMMEND_FERTILIZER, input).await
    }

    /// Estimate yield per hectare for the given field and season
    pub async fn estimate_yield(&self, input: &YieldInput) -> ApiResult<YieldResult> {
        self.post(routes::ESTIMATE_YIELD, input).await
    }

    pub async fn health_check(&self) -> ApiResult<HealthStatus> {
        self.get(routes::HEALTH).await
    }

    /// Fetch prediction counters.
    ///
    /// With [`StatisticsFallback::Zero`] (the default) this never fails: any
    /// error is logged and all-zero statistics are returned instead.
    pub async fn get_statistics(&self) -> ApiResult<Statistics> {
        match self.get(routes::STATISTICS).await {
            Ok(stats) => Ok(stats),
            Err(e) => match self.config.statistics_fallback {
                StatisticsFallback::Zero => {
                    tracing::warn!(error = %e, "Statistics unavailable, reporting zero counts");
                    Ok(Statistics::default())
                }
                StatisticsFallback::Propagate => Err(e),
            },
        }
    }

    /// True when the health check succeeds
    pub async fn is_backend_available(&self) -> bool {
        match self.health_check().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Backend health check failed");
                false
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, route: &str) -> ApiResult<T> {
        self.send::<(), T>(Method::GET, route, None).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        route: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::POST, route, Some(body)).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, route);
        tracing::debug!(%method, %url, "Sending prediction service request");

        let mut request = self
            .http_client
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            tracing::warn!(
                %url,
                status = status.as_u16(),
                error = %err,
                "Prediction service returned an error"
            );
            return Err(err);
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.transport_error(source))?;

        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(%url, error = %source, "Prediction service response not understood");
            ApiError::Decode {
                base_url: self.config.base_url.clone(),
                source,
            }
        })
    }

    fn transport_error(&self, source: reqwest::Error) -> ApiError {
        tracing::warn!(
            base_url = %self.config.base_url,
            error = %source,
            "Prediction service unreachable"
        );
        ApiError::Transport {
            base_url: self.config.base_url.clone(),
            source,
        }
    }
}
