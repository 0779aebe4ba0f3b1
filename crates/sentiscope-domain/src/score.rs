//! Score module - the 7-point sentiment scale

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment score on the 7-point scale [-3, +3]
///
/// Construction validates the range, so every `SentimentScore` in the program
/// is one of exactly seven values.
///
/// # Examples
///
/// ```
/// use sentiscope_domain::SentimentScore;
///
/// let score = SentimentScore::new(2).unwrap();
/// assert_eq!(score.value(), 2);
/// assert_eq!(score.signed(), "+2");
/// assert!(SentimentScore::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SentimentScore(i8);

impl SentimentScore {
    /// Lowest point on the scale
    pub const MIN: i8 = -3;

    /// Highest point on the scale
    pub const MAX: i8 = 3;

    /// Every valid score, ascending
    pub const ALL: [SentimentScore; 7] = [
        SentimentScore(-3),
        SentimentScore(-2),
        SentimentScore(-1),
        SentimentScore(0),
        SentimentScore(1),
        SentimentScore(2),
        SentimentScore(3),
    ];

    /// Validate a raw score
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::ScoreOutOfRange(value));
        }
        Ok(Self(value as i8))
    }

    /// Get the raw score
    pub fn value(&self) -> i8 {
        self.0
    }

    /// Render with an explicit sign for positive scores ("+3", "0", "-2")
    pub fn signed(&self) -> String {
        if self.0 > 0 {
            format!("+{}", self.0)
        } else {
            self.0.to_string()
        }
    }

    /// Canonical label for this score
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_score(*self)
    }

    /// Emoji the classification service pairs with this score
    pub fn emoji(&self) -> &'static str {
        self.label().emoji()
    }
}

impl TryFrom<i64> for SentimentScore {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SentimentScore> for i64 {
    fn from(score: SentimentScore) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed())
    }
}

impl std::str::FromStr for SentimentScore {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::UnknownLabel(s.to_string()))?;
        Self::new(value)
    }
}

/// Descriptive label, one per score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// -3
    #[serde(rename = "Very Negative")]
    VeryNegative,
    /// -2
    #[serde(rename = "Negative")]
    Negative,
    /// -1
    #[serde(rename = "Slightly Negative")]
    SlightlyNegative,
    /// 0
    #[serde(rename = "Neutral")]
    Neutral,
    /// +1
    #[serde(rename = "Slightly Positive")]
    SlightlyPositive,
    /// +2
    #[serde(rename = "Positive")]
    Positive,
    /// +3
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl SentimentLabel {
    /// Label for a score
    pub fn from_score(score: SentimentScore) -> Self {
        match score.value() {
            i8::MIN..=-3 => SentimentLabel::VeryNegative,
            -2 => SentimentLabel::Negative,
            -1 => SentimentLabel::SlightlyNegative,
            0 => SentimentLabel::Neutral,
            1 => SentimentLabel::SlightlyPositive,
            2 => SentimentLabel::Positive,
            _ => SentimentLabel::VeryPositive,
        }
    }

    /// Score for a label
    pub fn score(&self) -> SentimentScore {
        let value = match self {
            SentimentLabel::VeryNegative => -3,
            SentimentLabel::Negative => -2,
            SentimentLabel::SlightlyNegative => -1,
            SentimentLabel::Neutral => 0,
            SentimentLabel::SlightlyPositive => 1,
            SentimentLabel::Positive => 2,
            SentimentLabel::VeryPositive => 3,
        };
        SentimentScore(value)
    }

    /// Display text, as the classification service spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "Very Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::SlightlyNegative => "Slightly Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::SlightlyPositive => "Slightly Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::VeryPositive => "Very Positive",
        }
    }

    /// Emoji for the label
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "😢",
            SentimentLabel::Negative => "😞",
            SentimentLabel::SlightlyNegative => "😐",
            SentimentLabel::Neutral => "😶",
            SentimentLabel::SlightlyPositive => "🙂",
            SentimentLabel::Positive => "😊",
            SentimentLabel::VeryPositive => "🤩",
        }
    }

    /// Parse a label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "very negative" => Some(SentimentLabel::VeryNegative),
            "negative" => Some(SentimentLabel::Negative),
            "slightly negative" => Some(SentimentLabel::SlightlyNegative),
            "neutral" => Some(SentimentLabel::Neutral),
            "slightly positive" => Some(SentimentLabel::SlightlyPositive),
            "positive" => Some(SentimentLabel::Positive),
            "very positive" => Some(SentimentLabel::VeryPositive),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_range() {
        for value in -3..=3 {
            assert!(SentimentScore::new(value).is_ok());
        }
        assert_eq!(
            SentimentScore::new(-4),
            Err(DomainError::ScoreOutOfRange(-4))
        );
        assert_eq!(SentimentScore::new(4), Err(DomainError::ScoreOutOfRange(4)));
    }

    #[test]
    fn test_signed_rendering() {
        assert_eq!(SentimentScore::new(3).unwrap().signed(), "+3");
        assert_eq!(SentimentScore::new(0).unwrap().signed(), "0");
        assert_eq!(SentimentScore::new(-2).unwrap().signed(), "-2");
    }

    #[test]
    fn test_label_bijection() {
        for score in SentimentScore::ALL {
            let label = score.label();
            assert_eq!(label.score(), score);
            assert_eq!(SentimentLabel::parse(label.as_str()), Some(label));
        }
    }

    #[test]
    fn test_parse_signed_score() {
        let score: SentimentScore = "+3".parse().unwrap();
        assert_eq!(score.value(), 3);
        assert!("+9".parse::<SentimentScore>().is_err());
        assert!("three".parse::<SentimentScore>().is_err());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let score: SentimentScore = serde_json::from_str("-1").unwrap();
        assert_eq!(score.value(), -1);
        assert!(serde_json::from_str::<SentimentScore>("7").is_err());

        let label: SentimentLabel = serde_json::from_str("\"Slightly Positive\"").unwrap();
        assert_eq!(label, SentimentLabel::SlightlyPositive);
    }

    #[test]
    fn test_emoji_table() {
        assert_eq!(SentimentScore::new(3).unwrap().emoji(), "🤩");
        assert_eq!(SentimentScore::new(-3).unwrap().emoji(), "😢");
        assert_eq!(SentimentScore::new(0).unwrap().emoji(), "😶");
    }
}
