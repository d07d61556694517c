//! Portfolio-level aggregations over scored records.
//!
//! These are the numbers a dashboard plots: per-ticker means, category
//! counts, and a score histogram. All functions are pure.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::sentiment::{ScoredRecord, SentimentCategory};

/// Aggregate sentiment for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerSentiment {
    /// The ticker symbol.
    pub symbol: String,
    /// How many scored articles contributed.
    pub article_count: usize,
    /// Mean compound score across the ticker's articles.
    pub mean_score: f64,
    /// Lowest compound score seen.
    pub min_score: f64,
    /// Highest compound score seen.
    pub max_score: f64,
}

/// How many records fell into each sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryCounts {
    /// Records classified as positive.
    pub positive: usize,
    /// Records classified as neutral.
    pub neutral: usize,
    /// Records classified as negative.
    pub negative: usize,
}

impl CategoryCounts {
    /// Total number of counted records.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// The count for a single category.
    #[must_use]
    pub const fn count(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Neutral => self.neutral,
            SentimentCategory::Negative => self.negative,
        }
    }

    fn record(&mut self, category: SentimentCategory) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Neutral => self.neutral += 1,
            SentimentCategory::Negative => self.negative += 1,
        }
    }
}

/// One bucket of the score histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Exclusive upper edge (inclusive for the last bin).
    pub upper: f64,
    /// Number of scores that landed in this bucket.
    pub count: usize,
}

/// Everything [`summarize`] computes in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Per-ticker aggregates, sorted by symbol.
    pub tickers: Vec<TickerSentiment>,
    /// Category counts over the whole portfolio.
    pub categories: CategoryCounts,
    /// Mean compound score over the whole portfolio. `0.0` when empty.
    pub mean_score: f64,
    /// Total number of scored records.
    pub record_count: usize,
}

/// Per-ticker mean/min/max of the compound score, sorted by symbol.
#[must_use]
pub fn ticker_sentiment(records: &[ScoredRecord]) -> Vec<TickerSentiment> {
    let mut by_symbol: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for sr in records {
        by_symbol
            .entry(sr.record.symbol.as_str())
            .or_default()
            .push(sr.score);
    }

    by_symbol
        .into_iter()
        .map(|(symbol, scores)| {
            let sum: f64 = scores.iter().sum();
            let (min, max) = scores
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                    (lo.min(s), hi.max(s))
                });
            TickerSentiment {
                symbol: symbol.to_string(),
                article_count: scores.len(),
                mean_score: sum / scores.len() as f64,
                min_score: min,
                max_score: max,
            }
        })
        .collect()
}

/// Count how many records fall into each category.
#[must_use]
pub fn category_counts(records: &[ScoredRecord]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for sr in records {
        counts.record(sr.category);
    }
    counts
}

/// Bucket scores into `bins` equal-width bins spanning `[-1.0, 1.0]`.
///
/// Scores outside the span (infinities included) are clamped into the edge
/// bins; `NaN` scores are skipped, since they have no place on the axis.
/// Zero bins yields an empty histogram.
#[must_use]
pub fn score_histogram(records: &[ScoredRecord], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }

    let width = 2.0 / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: -1.0 + i as f64 * width,
            upper: -1.0 + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for sr in records {
        if sr.score.is_nan() {
            continue;
        }
        let idx = ((sr.score + 1.0) / width)
            .floor()
            .clamp(0.0, (bins - 1) as f64) as usize;
        histogram[idx].count += 1;
    }
    histogram
}

/// Compute the full portfolio summary.
#[must_use]
pub fn summarize(records: &[ScoredRecord]) -> PortfolioSummary {
    let sum: f64 = records.iter().map(|sr| sr.score).sum();
    let mean_score = if records.is_empty() {
        0.0
    } else {
        sum / records.len() as f64
    };

    PortfolioSummary {
        tickers: ticker_sentiment(records),
        categories: category_counts(records),
        mean_score,
        record_count: records.len(),
    }
}
