//! Error types for the Sentiscope SDK.

use sentiscope_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SDK operation errors
///
/// Every failure path in the client pipeline ends in exactly one of these.
#[derive(Debug, Clone, Error)]
pub enum SdkError {
    /// Bad local input (empty text); the network was never contacted
    #[error("Validation error: {0}")]
    Validation(String),

    /// No response reached us: timeout, DNS or connection failure
    #[error("Connection error: {0}")]
    Connectivity(String),

    /// A response arrived with a non-success status
    #[error("Service error: {0}")]
    Service(String),

    /// A successful response that breaks the response contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A numeric field outside its documented range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Internal scale invariant violated
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl SdkError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Validation(_) => ErrorKind::Validation,
            SdkError::Connectivity(_) => ErrorKind::Connectivity,
            SdkError::Service(_) => ErrorKind::Service,
            SdkError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            SdkError::OutOfRange(_) => ErrorKind::OutOfRange,
            SdkError::Domain(_) => ErrorKind::Domain,
        }
    }

    /// Message suitable for showing to an end user, without the category prefix
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Validation(msg)
            | SdkError::Connectivity(msg)
            | SdkError::Service(msg)
            | SdkError::MalformedResponse(msg)
            | SdkError::OutOfRange(msg) => msg.clone(),
            SdkError::Domain(e) => e.to_string(),
        }
    }
}

/// Error category, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`SdkError::Validation`]
    Validation,
    /// See [`SdkError::Connectivity`]
    Connectivity,
    /// See [`SdkError::Service`]
    Service,
    /// See [`SdkError::MalformedResponse`]
    MalformedResponse,
    /// See [`SdkError::OutOfRange`]
    OutOfRange,
    /// See [`SdkError::Domain`]
    Domain,
}

/// What the `Failed` request state carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error category
    pub kind: ErrorKind,
    /// User-facing message
    pub message: String,
}

impl From<&SdkError> for ErrorInfo {
    fn from(e: &SdkError) -> Self {
        Self {
            kind: e.kind(),
            message: e.user_message(),
        }
    }
}

impl From<SdkError> for ErrorInfo {
    fn from(e: SdkError) -> Self {
        Self::from(&e)
    }
}

/// Classify a transport-level failure (no usable response).
///
/// `fallback` replaces reqwest's message for anything that is not a
/// connectivity problem, so end users never see transport internals.
pub(crate) fn classify_transport(e: &reqwest::Error, fallback: &str) -> SdkError {
    if e.is_timeout() {
        SdkError::Connectivity("Request timed out".to_string())
    } else if e.is_connect() || e.is_request() {
        SdkError::Connectivity(format!("Network error: {}", e))
    } else if e.is_decode() || e.is_body() {
        SdkError::MalformedResponse(format!("Failed to read response: {}", e))
    } else {
        SdkError::Service(fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_strips_prefix() {
        let err = SdkError::Service("model unavailable".to_string());
        assert_eq!(err.to_string(), "Service error: model unavailable");
        assert_eq!(err.user_message(), "model unavailable");
    }

    #[test]
    fn test_error_info_from_domain() {
        let err = SdkError::from(DomainError::ScoreOutOfRange(9));
        let info = ErrorInfo::from(&err);
        assert_eq!(info.kind, ErrorKind::Domain);
        assert!(info.message.contains('9'));
    }
}
