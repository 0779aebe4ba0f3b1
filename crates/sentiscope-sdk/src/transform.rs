//! Result transform: raw service response → display-ready result.
//!
//! Validates the response contract, then derives everything the presentation
//! layer renders. The chart series keeps the server's distribution order.

use crate::error::SdkError;
use crate::types::AnalysisResponse;
use sentiscope_domain::{Category, ColorBucket, SentimentLabel, SentimentScore};
use serde::Serialize;
use tracing::warn;

/// Number of classes in a well-formed distribution
pub const EXPECTED_CLASSES: usize = 7;

/// Allowed drift of the distribution sum from 1.0 before we log it
pub const SUM_TOLERANCE: f64 = 1e-3;

/// One bar of the probability chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Short key, the first token of the label ("+3")
    pub key: String,
    /// Percentage with 1 decimal ("82.0")
    pub percentage: String,
    /// Percentage with 2 decimals, for the detailed view ("82.00")
    pub detailed_percentage: String,
    /// Label as sent by the service
    pub full_label: String,
    /// Stored probability both percentages are rendered from
    pub probability: f64,
    /// Bar color, when the key names a score
    pub color: Option<ColorBucket>,
}

/// Ordered chart data
pub type ChartSeries = Vec<ChartPoint>;

/// Everything the presentation layer needs for one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    /// Analyzed text, when the service echoes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Validated score
    pub score: SentimentScore,
    /// Label as sent by the service
    pub label: String,
    /// Emoji as sent by the service
    pub emoji: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Confidence with 1 decimal ("92.0")
    pub confidence_percentage: String,
    /// Positive / Negative / Neutral
    pub category: Category,
    /// Card color
    pub color_bucket: ColorBucket,
    /// Probability chart in server order
    pub chart: ChartSeries,
}

impl DisplayResult {
    /// Score as shown on the result card ("+3/3")
    pub fn score_display(&self) -> String {
        format!("{}/3", self.score.signed())
    }
}

/// Render a probability as a percentage string with `decimals` places.
///
/// Ties round half away from zero (0.0625 at 1 place is "6.3"), and negative
/// zero prints as "0.0".
pub fn format_percentage(probability: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (probability * 100.0 * scale).round() / scale + 0.0;
    format!("{:.*}", decimals, rounded)
}

/// Validate and transform one raw response.
///
/// # Errors
///
/// - [`SdkError::MalformedResponse`] when probabilities are missing, do not
///   have exactly 7 entries, contain a value outside [0, 1], or the score is
///   outside [-3, 3]
/// - [`SdkError::OutOfRange`] when confidence is outside [0, 1]
pub fn transform(response: &AnalysisResponse) -> Result<DisplayResult, SdkError> {
    let score = SentimentScore::new(response.sentiment_score)
        .map_err(|e| SdkError::MalformedResponse(e.to_string()))?;

    if !(0.0..=1.0).contains(&response.confidence) {
        return Err(SdkError::OutOfRange(format!(
            "Confidence {} is outside [0, 1]",
            response.confidence
        )));
    }

    let probabilities = response.probabilities.as_ref().ok_or_else(|| {
        SdkError::MalformedResponse("Response has no probability distribution".to_string())
    })?;

    if probabilities.len() != EXPECTED_CLASSES {
        return Err(SdkError::MalformedResponse(format!(
            "Expected {} probability entries, got {}",
            EXPECTED_CLASSES,
            probabilities.len()
        )));
    }

    let mut chart = Vec::with_capacity(probabilities.len());
    for (label, &probability) in probabilities {
        if !(0.0..=1.0).contains(&probability) {
            return Err(SdkError::MalformedResponse(format!(
                "Probability {} for '{}' is outside [0, 1]",
                probability, label
            )));
        }
        // fold -0.0 into 0.0
        chart.push(chart_point(label, probability + 0.0));
    }

    let sum: f64 = probabilities.values().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        warn!(sum, "Probability distribution does not sum to 1.0");
    }

    if SentimentLabel::parse(&response.sentiment_label) != Some(score.label()) {
        warn!(
            score = score.value(),
            label = %response.sentiment_label,
            "Service label disagrees with score"
        );
    }

    Ok(DisplayResult {
        text: response.text.clone(),
        score,
        label: response.sentiment_label.clone(),
        emoji: response.emoji.clone(),
        confidence: response.confidence,
        confidence_percentage: format_percentage(response.confidence, 1),
        category: score.category(),
        color_bucket: score.color_bucket(),
        chart,
    })
}

/// Transform every element of a batch; the first malformed element fails the
/// whole batch.
pub fn transform_batch(responses: &[AnalysisResponse]) -> Result<Vec<DisplayResult>, SdkError> {
    responses.iter().map(transform).collect()
}

fn chart_point(label: &str, probability: f64) -> ChartPoint {
    let key = label.split_whitespace().next().unwrap_or(label).to_string();
    let color = key.parse::<SentimentScore>().ok().map(|s| s.color_bucket());

    ChartPoint {
        percentage: format_percentage(probability, 1),
        detailed_percentage: format_percentage(probability, 2),
        full_label: label.to_string(),
        key,
        probability,
        color,
    }
}
