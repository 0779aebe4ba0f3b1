//! Wire types for the classification service.
//!
//! Responses are deserialized loosely (optional and wide numeric fields) so
//! that contract violations surface as typed validation errors in
//! [`crate::transform`] instead of opaque decode failures.

use indexmap::IndexMap;
use sentiscope_domain::SentimentScore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label → probability mapping in server order
pub type ProbabilityDistribution = IndexMap<String, f64>;

/// Body of `POST /analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    /// Text to classify
    pub text: &'a str,
}

/// Body of `POST /analyze/batch`
#[derive(Debug, Serialize)]
pub struct BatchAnalyzeRequest<'a> {
    /// Texts to classify
    pub texts: &'a [String],
}

/// Raw analysis result as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Echo of the analyzed text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Score in [-3, 3]
    pub sentiment_score: i64,
    /// Descriptive label
    pub sentiment_label: String,
    /// Emoji for the score
    pub emoji: String,
    /// Probability of the predicted class, in [0, 1]
    pub confidence: f64,
    /// Per-class distribution, one entry per score
    #[serde(default)]
    pub probabilities: Option<ProbabilityDistribution>,
}

/// Structured error body (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The detail message, when it is a plain string
    pub(crate) fn message(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

/// Health probe payload; the contents are never inspected
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HealthStatus {
    /// Reported status, e.g. "healthy"
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the model finished loading
    #[serde(default)]
    pub model_loaded: Option<bool>,
}

/// Example texts keyed by score string ("-3" .. "3"), in server order
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExampleSet(pub IndexMap<String, Vec<String>>);

impl ExampleSet {
    /// All examples for a score
    pub fn for_score(&self, score: SentimentScore) -> &[String] {
        self.0
            .iter()
            .find(|(key, _)| key.parse::<SentimentScore>().ok() == Some(score))
            .map(|(_, texts)| texts.as_slice())
            .unwrap_or(&[])
    }

    /// First example for a score
    pub fn first_for(&self, score: SentimentScore) -> Option<&str> {
        self.for_score(score).first().map(String::as_str)
    }

    /// Number of score keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the service returned no examples
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate (score key, examples) in server order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

/// One point of the sentiment scale
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScaleEntry {
    /// Descriptive label
    pub label: String,
    /// Emoji
    pub emoji: String,
}

/// Scale metadata from `GET /sentiment-scale`
pub type SentimentScale = BTreeMap<i64, ScaleEntry>;
