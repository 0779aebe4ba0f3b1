//! Presentation mappings derived from a score
//!
//! The 5-bucket color scheme folds the 7 scores for chart legibility. It
//! carries no meaning beyond color: "Slightly Negative" and "Negative" are
//! still distinct everywhere else.

use crate::error::DomainError;
use crate::score::SentimentScore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual bucket for chart bars and result cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    /// score <= -2
    Red,
    /// score == -1
    Orange,
    /// score == 0
    Yellow,
    /// score == 1
    Lime,
    /// score >= 2
    Green,
}

impl ColorBucket {
    /// Bucket name
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBucket::Red => "red",
            ColorBucket::Orange => "orange",
            ColorBucket::Yellow => "yellow",
            ColorBucket::Lime => "lime",
            ColorBucket::Green => "green",
        }
    }

    /// Hex color used for chart bars
    pub fn hex(&self) -> &'static str {
        match self {
            ColorBucket::Red => "#ef4444",
            ColorBucket::Orange => "#f97316",
            ColorBucket::Yellow => "#eab308",
            ColorBucket::Lime => "#84cc16",
            ColorBucket::Green => "#22c55e",
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse polarity of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// score > 0
    Positive,
    /// score < 0
    Negative,
    /// score == 0
    Neutral,
}

impl Category {
    /// Category name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SentimentScore {
    /// Color bucket for this score
    pub fn color_bucket(&self) -> ColorBucket {
        match self.value() {
            v if v <= -2 => ColorBucket::Red,
            -1 => ColorBucket::Orange,
            0 => ColorBucket::Yellow,
            1 => ColorBucket::Lime,
            _ => ColorBucket::Green,
        }
    }

    /// Category for this score
    pub fn category(&self) -> Category {
        match self.value() {
            v if v > 0 => Category::Positive,
            v if v < 0 => Category::Negative,
            _ => Category::Neutral,
        }
    }
}

/// Map a raw score to its color bucket.
///
/// Fails with [`DomainError::ScoreOutOfRange`] outside [-3, 3].
pub fn color_bucket(score: i64) -> Result<ColorBucket, DomainError> {
    SentimentScore::new(score).map(|s| s.color_bucket())
}

/// Map a raw score to its category.
///
/// Fails with [`DomainError::ScoreOutOfRange`] outside [-3, 3].
pub fn category(score: i64) -> Result<Category, DomainError> {
    SentimentScore::new(score).map(|s| s.category())
}
