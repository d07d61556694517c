//! Sentiment scoring and classification for news records.
//!
//! Scoring (text in, compound score out) is pluggable through the
//! [`SentimentScorer`] trait; classification of a score into a category is
//! fixed and shared by every scorer.

#[cfg(feature = "vader")]
mod vader;

#[cfg(feature = "vader")]
pub use vader::VaderScorer;

use serde::{Deserialize, Serialize};

use crate::feed::NewsRecord;

/// Scores at or above this are classified as [`SentimentCategory::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Scores at or below this are classified as [`SentimentCategory::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// The category a compound sentiment score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentCategory {
    /// Score `>= 0.05`.
    Positive,
    /// Score `<= -0.05`.
    Negative,
    /// Anything strictly between the two thresholds, including `NaN`.
    Neutral,
}

impl SentimentCategory {
    /// Classify a compound score. Total over all `f64` values.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// The display label for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a compound sentiment score.
///
/// Shorthand for [`SentimentCategory::from_score`].
#[must_use]
pub fn classify(score: f64) -> SentimentCategory {
    SentimentCategory::from_score(score)
}

/// Turns a piece of text into a compound sentiment score.
///
/// Implementations should map empty text to `0.0` and keep scores roughly
/// within `[-1.0, 1.0]`, but [`classify`] is total either way.
pub trait SentimentScorer {
    /// Score a piece of text.
    fn score(&self, text: &str) -> f64;
}

/// A [`NewsRecord`] with its compound score and category attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    /// The underlying feed record.
    pub record: NewsRecord,
    /// The compound sentiment score of the headline.
    pub score: f64,
    /// The classification of [`score`](Self::score).
    pub category: SentimentCategory,
}

/// Score every record's headline and attach the classification.
///
/// Record order is preserved.
pub fn score_records<S>(scorer: &S, records: Vec<NewsRecord>) -> Vec<ScoredRecord>
where
    S: SentimentScorer + ?Sized,
{
    records
        .into_iter()
        .map(|record| {
            let score = scorer.score(&record.headline);
            ScoredRecord {
                record,
                score,
                category: SentimentCategory::from_score(score),
            }
        })
        .collect()
}
