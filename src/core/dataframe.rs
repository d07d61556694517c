use polars::prelude::*;

use crate::feed::NewsRecord;
use crate::sentiment::ScoredRecord;
use crate::summary::PortfolioSummary;

/// Trait for converting feed and sentiment data into Polars DataFrames.
///
/// This provides a consistent interface for moving the crate's data
/// structures into Polars for further analysis and plotting.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    ///
    /// # Errors
    ///
    /// Returns any error raised by Polars while assembling the frame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for [NewsRecord] {
    /// Columns: `symbol` (str), `published_at` (epoch seconds, i64),
    /// `headline` (str).
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let symbols: Vec<&str> = self.iter().map(|r| r.symbol.as_str()).collect();
        let published: Vec<i64> = self.iter().map(|r| r.published_at.timestamp()).collect();
        let headlines: Vec<&str> = self.iter().map(|r| r.headline.as_str()).collect();

        df!(
            "symbol" => symbols,
            "published_at" => published,
            "headline" => headlines,
        )
    }
}

impl ToDataFrame for [ScoredRecord] {
    /// The [`NewsRecord`] columns plus `score` (f64) and `category` (str).
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let symbols: Vec<&str> = self.iter().map(|sr| sr.record.symbol.as_str()).collect();
        let published: Vec<i64> = self
            .iter()
            .map(|sr| sr.record.published_at.timestamp())
            .collect();
        let headlines: Vec<&str> = self.iter().map(|sr| sr.record.headline.as_str()).collect();
        let scores: Vec<f64> = self.iter().map(|sr| sr.score).collect();
        let categories: Vec<&str> = self.iter().map(|sr| sr.category.as_str()).collect();

        df!(
            "symbol" => symbols,
            "published_at" => published,
            "headline" => headlines,
            "score" => scores,
            "category" => categories,
        )
    }
}

impl ToDataFrame for PortfolioSummary {
    /// One row per ticker: `symbol`, `article_count`, `mean_score`,
    /// `min_score`, `max_score`.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let symbols: Vec<&str> = self.tickers.iter().map(|t| t.symbol.as_str()).collect();
        let counts: Vec<i64> = self
            .tickers
            .iter()
            .map(|t| t.article_count as i64)
            .collect();
        let means: Vec<f64> = self.tickers.iter().map(|t| t.mean_score).collect();
        let mins: Vec<f64> = self.tickers.iter().map(|t| t.min_score).collect();
        let maxs: Vec<f64> = self.tickers.iter().map(|t| t.max_score).collect();

        df!(
            "symbol" => symbols,
            "article_count" => counts,
            "mean_score" => means,
            "min_score" => mins,
            "max_score" => maxs,
        )
    }
}
