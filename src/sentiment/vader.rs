use vader_sentiment::SentimentIntensityAnalyzer;

use super::SentimentScorer;

/// A [`SentimentScorer`] backed by the VADER lexicon, which is tuned for
/// short social-media and news text.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Create a new scorer. Building the lexicon is not free, so reuse one
    /// instance across a batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}
