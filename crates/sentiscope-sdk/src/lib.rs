//! Sentiscope Rust SDK
//!
//! Client pipeline for a remote sentiment-classification service: HTTP calls
//! with a uniform failure contract, the transform from raw probability
//! distributions to display-ready results, and the request lifecycle that
//! keeps only the newest submission's outcome.
//!
//! # Example
//!
//! ```no_run
//! use sentiscope_sdk::{probe_connectivity, ConnectivityFlag, RequestLifecycle, SentimentClient};
//!
//! # async fn demo() -> Result<(), sentiscope_sdk::SdkError> {
//! let client = SentimentClient::new("http://localhost:8000")?;
//! let flag = ConnectivityFlag::default();
//! probe_connectivity(&client, &flag).await;
//!
//! let lifecycle = RequestLifecycle::new(client, flag);
//! lifecycle.submit("This movie was incredible!").await?;
//!
//! if let Some(result) = lifecycle.state().result() {
//!     println!("{} {} ({})", result.emoji, result.label, result.category);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod examples;
mod lifecycle;
pub mod transform;
pub mod types;

pub use client::{
    default_base_url, Analyzer, SentimentClient, API_URL_ENV, DEFAULT_API_PATH, DEFAULT_HOST,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::{ErrorInfo, ErrorKind, SdkError};
pub use examples::ExampleCache;
pub use lifecycle::{
    probe_connectivity, ConnectivityFlag, RequestLifecycle, RequestState, RequestToken,
    Resolution, DISCONNECTED_MESSAGE, EMPTY_TEXT_MESSAGE,
};
pub use transform::{transform, transform_batch, ChartPoint, ChartSeries, DisplayResult};
pub use types::{AnalysisResponse, ExampleSet, HealthStatus, ScaleEntry, SentimentScale};
