mod model;

pub use model::{FeedResponse, NewsRecord, SymbolFailure};

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;

use crate::{
    core::{PulseClient, client::RetryConfig},
    news::{NewsBuilder, NewsTab},
};

/// A builder for fetching recent news across a whole list of symbols
/// concurrently.
///
/// Each symbol is fetched independently; a symbol that errors out is
/// reported in [`FeedResponse::failures`] and never aborts the batch.
pub struct NewsFeedBuilder {
    client: PulseClient,
    symbols: Vec<String>,
    cutoff: Option<DateTime<Utc>>,
    count: u32,
    tab: NewsTab,
    retry_override: Option<RetryConfig>,
}

impl NewsFeedBuilder {
    /// Creates a new `NewsFeedBuilder` with no symbols and no cutoff.
    #[must_use]
    pub fn new(client: &PulseClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            cutoff: None,
            count: 10,
            tab: NewsTab::default(),
            retry_override: None,
        }
    }

    /// Replaces the current list of symbols with a new list.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(std::convert::Into::into).collect();
        self
    }

    /// Adds a single symbol to the list.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Keep only articles published at or after `cutoff`.
    ///
    /// Articles published exactly at the cutoff are included.
    #[must_use]
    pub const fn since(mut self, cutoff: DateTime<Utc>) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Keep only articles from the last `weeks` weeks, relative to now.
    #[must_use]
    pub fn weeks_back(self, weeks: u32) -> Self {
        self.since(Utc::now() - Duration::weeks(i64::from(weeks)))
    }

    /// Sets the maximum number of articles requested per symbol.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the category of news to fetch.
    #[must_use]
    pub const fn tab(mut self, tab: NewsTab) -> Self {
        self.tab = tab;
        self
    }

    /// Overrides the default retry policy for all API calls made by this builder.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches news for every symbol concurrently and assembles the feed.
    ///
    /// The result is deterministic for a given set of responses: records
    /// appear grouped by symbol in the order the symbols were requested,
    /// preserving the provider's per-symbol ordering within each group.
    /// An empty symbol list yields an empty response.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(symbols = self.symbols.len())))]
    pub async fn fetch(self) -> FeedResponse {
        let cutoff = self.cutoff;

        let futures = self.symbols.iter().map(|sym| {
            let sym = sym.clone();
            let nb = NewsBuilder::new(&self.client, &sym)
                .count(self.count)
                .tab(self.tab)
                .retry_policy(self.retry_override.clone());

            async move { (sym, nb.fetch().await) }
        });

        let mut response = FeedResponse::default();
        for (symbol, outcome) in join_all(futures).await {
            match outcome {
                Ok(articles) => {
                    response.records.extend(
                        articles
                            .into_iter()
                            .filter(|a| cutoff.is_none_or(|c| a.published_at >= c))
                            .map(|a| NewsRecord {
                                symbol: symbol.clone(),
                                published_at: a.published_at,
                                headline: a.title,
                            }),
                    );
                }
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(symbol = %symbol, error = %error, "symbol fetch failed");
                    response.failures.push(SymbolFailure { symbol, error });
                }
            }
        }
        response
    }
}
