use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::fallback::fallback_result;
use super::types::{AnalysisRequest, AnalysisResult, FetchOutcome};
use crate::config::{RequestConfig, ServiceConfig};
use crate::error::{ServiceError, ServiceResult};
use crate::session::Session;

/// Client for the remote AI analysis service.
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: String,
    request_config: RequestConfig,
}

impl AnalysisClient {
    /// Create a new analysis client
    pub fn new(config: &ServiceConfig, request_config: RequestConfig) -> ServiceResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(ServiceError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_config,
        })
    }

    /// Fetch an analysis for the given session and request.
    ///
    /// Never fails: any transport or shape error degrades to the fixed
    /// fallback result. The cause is logged and tagged on the outcome, never
    /// surfaced as an error value.
    ///
    /// Callers must hold an authenticated session; the protected-route
    /// invariant guarantees this in practice.
    pub async fn fetch(&self, session: &Session, request: &AnalysisRequest) -> FetchOutcome {
        let start = Instant::now();

        match self.execute_request(session, request).await {
            Ok(result) => {
                info!(
                    time_range = %request.time_range,
                    analysis_type = %request.analysis_type,
                    score = result.score,
                    latency_ms = start.elapsed().as_millis(),
                    "analysis fetched"
                );
                FetchOutcome::Live(result)
            }
            Err(e) => {
                warn!(
                    time_range = %request.time_range,
                    analysis_type = %request.analysis_type,
                    error = %e,
                    latency_ms = start.elapsed().as_millis(),
                    "analysis fetch failed, serving fallback data"
                );
                FetchOutcome::Degraded {
                    result: fallback_result(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Execute a single request (internal)
    async fn execute_request(
        &self,
        session: &Session,
        request: &AnalysisRequest,
    ) -> ServiceResult<AnalysisResult> {
        let url = format!("{}/analyze", self.base_url);

        debug!(url = %url, user_id = %request.user_id, "calling analysis service");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", session.token))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout {
                        timeout_ms: self.request_config.timeout_ms,
                    }
                } else {
                    ServiceError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let result: AnalysisResult =
            response
                .json()
                .await
                .map_err(|e| ServiceError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        Ok(result)
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
