use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::PulseError;

/// One row of the portfolio news feed: an article pinned to the symbol it
/// was fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    /// The ticker symbol the article was retrieved for.
    pub symbol: String,
    /// Publication time, normalized to UTC.
    pub published_at: DateTime<Utc>,
    /// The article headline. Empty when the provider omitted it.
    pub headline: String,
}

/// A symbol whose fetch failed, together with the error that sank it.
#[derive(Debug)]
pub struct SymbolFailure {
    /// The ticker symbol that could not be fetched.
    pub symbol: String,
    /// The underlying error.
    pub error: PulseError,
}

/// The outcome of a multi-symbol news fetch.
///
/// A failed symbol never poisons the batch: its error is parked in
/// [`failures`](Self::failures) while every other symbol's records are
/// returned as usual.
#[derive(Debug, Default)]
pub struct FeedResponse {
    /// Records for every symbol that fetched successfully, in the order the
    /// symbols were requested.
    pub records: Vec<NewsRecord>,
    /// Symbols whose fetch failed, in the order they were requested.
    pub failures: Vec<SymbolFailure>,
}

impl FeedResponse {
    /// `true` when the fetch produced neither records nor failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.failures.is_empty()
    }

    /// Consumes the response, discarding failure details.
    #[must_use]
    pub fn into_records(self) -> Vec<NewsRecord> {
        self.records
    }
}
