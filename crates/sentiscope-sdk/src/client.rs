//! Sentiscope client implementation.
//!
//! One network round-trip per call, a fixed timeout, and no retries: in an
//! interactive session a retry would silently double-submit.

use crate::error::{classify_transport, SdkError};
use crate::types::{
    AnalysisResponse, AnalyzeRequest, BatchAnalyzeRequest, ErrorBody, ExampleSet, HealthStatus,
    SentimentScale,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error};

/// Default service host
pub const DEFAULT_HOST: &str = "http://127.0.0.1:8000";

/// Default API path appended to the host
pub const DEFAULT_API_PATH: &str = "/api";

/// Environment variable overriding the full API base URL
pub const API_URL_ENV: &str = "SENTISCOPE_API_URL";

/// Default timeout per request (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const HEALTH_FAILED: &str = "Failed to connect to API";
const ANALYZE_FAILED: &str = "Failed to analyze sentiment";
const BATCH_FAILED: &str = "Failed to analyze batch";
const EXAMPLES_FAILED: &str = "Failed to load examples";
const SCALE_FAILED: &str = "Failed to load sentiment scale";

/// Default API base URL: host + API path
pub fn default_base_url() -> String {
    format!("{}{}", DEFAULT_HOST, DEFAULT_API_PATH)
}

/// Something that can classify a single text.
///
/// The request lifecycle is generic over this so it can be driven by the real
/// HTTP client or by a scripted stand-in.
pub trait Analyzer {
    /// Classify `text`, returning the raw service response
    fn analyze_text(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<AnalysisResponse, SdkError>> + Send;
}

/// HTTP client for the sentiment classification service
#[derive(Debug, Clone)]
pub struct SentimentClient {
    base_url: String,
    http: reqwest::Client,
    timeout: Duration,
}

impl SentimentClient {
    /// Create a client with the default 30 second timeout
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sentiscope_sdk::SentimentClient;
    ///
    /// let client = SentimentClient::new("http://localhost:8000").unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self, SdkError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SdkError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| SdkError::Connectivity(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            http,
            timeout,
        })
    }

    /// API base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe `GET /health`.
    ///
    /// Any network error or non-2xx status becomes [`SdkError::Connectivity`];
    /// the payload is not inspected beyond decoding it when possible.
    pub async fn check_health(&self) -> Result<HealthStatus, SdkError> {
        let response = self
            .dispatch::<()>(Method::GET, "/health", None)
            .await
            .map_err(|e| {
                error!(error = %e, "Health probe failed");
                SdkError::Connectivity(HEALTH_FAILED.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "Health probe returned failure status");
            return Err(SdkError::Connectivity(HEALTH_FAILED.to_string()));
        }

        Ok(response.json::<HealthStatus>().await.unwrap_or_default())
    }

    /// Analyze one text via `POST /analyze`.
    ///
    /// Callers check for empty input before calling; this method sends
    /// whatever it is given.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResponse, SdkError> {
        self.send_json(
            Method::POST,
            "/analyze",
            Some(&AnalyzeRequest { text }),
            ANALYZE_FAILED,
        )
        .await
    }

    /// Analyze many texts via `POST /analyze/batch`.
    ///
    /// The endpoint is atomic: either every result comes back or the call fails.
    pub async fn analyze_batch(&self, texts: &[String]) -> Result<Vec<AnalysisResponse>, SdkError> {
        let results: Vec<AnalysisResponse> = self
            .send_json(
                Method::POST,
                "/analyze/batch",
                Some(&BatchAnalyzeRequest { texts }),
                BATCH_FAILED,
            )
            .await?;

        if results.len() != texts.len() {
            error!(
                expected = texts.len(),
                received = results.len(),
                "Batch result count mismatch"
            );
            return Err(SdkError::MalformedResponse(format!(
                "Expected {} batch results, got {}",
                texts.len(),
                results.len()
            )));
        }

        Ok(results)
    }

    /// Fetch example texts via `GET /examples`; every failure is a service error
    pub async fn get_examples(&self) -> Result<ExampleSet, SdkError> {
        self.send_json::<(), _>(Method::GET, "/examples", None, EXAMPLES_FAILED)
            .await
            .map_err(|e| generic_failure(e, EXAMPLES_FAILED))
    }

    /// Fetch scale metadata via `GET /sentiment-scale`; every failure is a service error
    pub async fn get_sentiment_scale(&self) -> Result<SentimentScale, SdkError> {
        self.send_json::<(), _>(Method::GET, "/sentiment-scale", None, SCALE_FAILED)
            .await
            .map_err(|e| generic_failure(e, SCALE_FAILED))
    }

    /// Send a request and decode a JSON success body, normalizing failures
    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .dispatch(method.clone(), path, body)
            .await
            .map_err(|e| {
                let err = classify_transport(&e, fallback);
                error!(%method, path, error = %e, "Request failed without response");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(%method, path, status = status.as_u16(), body = %text, "Service returned error");

            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(ErrorBody::message)
                .unwrap_or_else(|| fallback.to_string());
            return Err(SdkError::Service(message));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(%method, path, error = %e, "Failed to read response body");
            classify_transport(&e, fallback)
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(%method, path, error = %e, "Response does not match the expected schema");
            SdkError::MalformedResponse(format!("Invalid response from {}: {}", path, e))
        })
    }

    /// Log and send one request
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, reqwest::Error>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "API request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await
    }
}

impl Analyzer for SentimentClient {
    fn analyze_text(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<AnalysisResponse, SdkError>> + Send {
        self.analyze(text)
    }
}

/// Collapse any failure into the endpoint's generic service error
fn generic_failure(e: SdkError, fallback: &str) -> SdkError {
    debug!(error = %e, "Reporting generic failure");
    SdkError::Service(fallback.to_string())
}
