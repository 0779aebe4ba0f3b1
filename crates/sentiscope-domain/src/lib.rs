//! Sentiscope Domain Layer
//!
//! Value types for the 7-point sentiment scale and the pure mappings the
//! presentation pipeline derives from a score. Nothing in this crate performs
//! I/O; the HTTP client and lifecycle live in `sentiscope-sdk`.
//!
//! ## Key Concepts
//!
//! - **Sentiment score**: integer in [-3, +3], the classified polarity intensity
//! - **Sentiment label**: the descriptive name bijective with a score
//! - **Category**: Positive / Negative / Neutral, derived from the sign
//! - **Color bucket**: 5 visual buckets for the 7 scores (chart legibility only)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod presentation;
pub mod score;

// Re-exports for convenience
pub use error::DomainError;
pub use presentation::{category, color_bucket, Category, ColorBucket};
pub use score::{SentimentLabel, SentimentScore};
