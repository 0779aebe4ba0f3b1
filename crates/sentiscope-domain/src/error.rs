//! Domain invariant violations.

use thiserror::Error;

/// Raised when a value falls outside the sentiment scale.
///
/// A well-behaved classification service never produces these; seeing one
/// means the backend broke its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Score outside [-3, 3]
    #[error("Sentiment score {0} is outside the scale [-3, 3]")]
    ScoreOutOfRange(i64),

    /// Label text that names no point on the scale
    #[error("Unknown sentiment label: {0}")]
    UnknownLabel(String),
}
