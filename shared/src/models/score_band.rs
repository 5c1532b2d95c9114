//! Score band classification and display colors

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display band for a restaurant's total score
///
/// Bands are half-open and ordered: `< 0` is negative, `[0, 10)` low,
/// `[10, 20)` good, `>= 20` excellent. A restaurant with zero ratings is
/// unrated regardless of its (meaningless) score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Unrated,
    Negative,
    Low,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Classify a score into its display band
    ///
    /// The zero-rating-count guard takes precedence over every boundary.
    pub fn classify(score: Decimal, rating_count: Option<u32>) -> Self {
        if rating_count == Some(0) {
            return ScoreBand::Unrated;
        }
        if score < Decimal::ZERO {
            ScoreBand::Negative
        } else if score < Decimal::TEN {
            ScoreBand::Low
        } else if score < Decimal::from(20) {
            ScoreBand::Good
        } else {
            ScoreBand::Excellent
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            ScoreBand::Unrated => "#9E9E9E",
            ScoreBand::Negative => "#D32F2F",
            ScoreBand::Low => "#F57C00",
            ScoreBand::Good => "#7CB342",
            ScoreBand::Excellent => "#2E7D32",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            ScoreBand::Unrated => "#F5F5F5",
            ScoreBand::Negative => "#FFEBEE",
            ScoreBand::Low => "#FFF3E0",
            ScoreBand::Good => "#F1F8E9",
            ScoreBand::Excellent => "#E8F5E9",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            ScoreBand::Unrated => "#616161",
            ScoreBand::Negative => "#B71C1C",
            ScoreBand::Low => "#E65100",
            ScoreBand::Good => "#558B2F",
            ScoreBand::Excellent => "#1B5E20",
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            ScoreBand::Unrated => "#BDBDBD",
            ScoreBand::Negative => "#EF9A9A",
            ScoreBand::Low => "#FFB74D",
            ScoreBand::Good => "#AED581",
            ScoreBand::Excellent => "#81C784",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Unrated => write!(f, "Unrated"),
            ScoreBand::Negative => write!(f, "Negative"),
            ScoreBand::Low => write!(f, "Low"),
            ScoreBand::Good => write!(f, "Good"),
            ScoreBand::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Fill color for a `(score, rating_count)` pair
pub fn fill_color(score: Decimal, rating_count: Option<u32>) -> &'static str {
    ScoreBand::classify(score, rating_count).fill_color()
}

/// Background color for a `(score, rating_count)` pair
pub fn background_color(score: Decimal, rating_count: Option<u32>) -> &'static str {
    ScoreBand::classify(score, rating_count).background_color()
}

/// Text color for a `(score, rating_count)` pair
pub fn text_color(score: Decimal, rating_count: Option<u32>) -> &'static str {
    ScoreBand::classify(score, rating_count).text_color()
}

/// Border color for a `(score, rating_count)` pair
pub fn border_color(score: Decimal, rating_count: Option<u32>) -> &'static str {
    ScoreBand::classify(score, rating_count).border_color()
}
