//! newspulse: portfolio news sentiment for Yahoo Finance.
//!
//! Fetch recent headlines for a list of ticker symbols, keep the ones
//! published after a UTC cutoff, score them through a pluggable sentiment
//! scorer, classify the compound scores into three categories, and roll the
//! results up per ticker.
//!
//! # Example
//!
//! ```no_run
//! use newspulse::{NewsFeedBuilder, PulseClient};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = PulseClient::default();
//! let feed = NewsFeedBuilder::new(&client)
//!     .symbols(["SPY", "QQQ"])
//!     .weeks_back(1)
//!     .fetch()
//!     .await;
//!
//! for record in &feed.records {
//!     println!("{} {} {}", record.symbol, record.published_at, record.headline);
//! }
//! for failure in &feed.failures {
//!     eprintln!("{}: {}", failure.symbol, failure.error);
//! }
//! # }
//! ```

pub mod core;
pub mod feed;
pub mod news;
pub mod sentiment;
pub mod summary;

pub use crate::core::{Backoff, PulseClient, PulseClientBuilder, PulseError, RetryConfig};
pub use crate::feed::{FeedResponse, NewsFeedBuilder, NewsRecord, SymbolFailure};
pub use crate::news::{NewsArticle, NewsBuilder, NewsTab};
#[cfg(feature = "vader")]
pub use crate::sentiment::VaderScorer;
pub use crate::sentiment::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, ScoredRecord, SentimentCategory, SentimentScorer,
    classify, score_records,
};
pub use crate::summary::{
    CategoryCounts, HistogramBin, PortfolioSummary, TickerSentiment, category_counts,
    score_histogram, summarize, ticker_sentiment,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
