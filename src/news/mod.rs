mod api;
mod model;
mod wire;

pub use model::NewsArticle;

use crate::core::{PulseClient, PulseError, client::RetryConfig};

/// The category of news to fetch for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsTab {
    /// Recent editorial coverage (the default site tab).
    #[default]
    News,
    /// Everything, including syndicated wires.
    All,
    /// Company press releases only.
    PressReleases,
}

impl NewsTab {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::News => "latestNews",
            Self::All => "newsAll",
            Self::PressReleases => "pressRelease",
        }
    }
}

/// A builder for fetching news articles for a specific symbol.
pub struct NewsBuilder {
    client: PulseClient,
    symbol: String,
    count: u32,
    tab: NewsTab,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    pub fn new(client: &PulseClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            count: 10,
            tab: NewsTab::default(),
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Sets the maximum number of news articles to return.
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

    /// Executes the request and fetches the news articles.
    ///
    /// Articles with a missing or unparsable publication date are dropped;
    /// a missing title comes back as an empty string.
    ///
    /// # Errors
    ///
    /// Returns a `PulseError` if the request fails, the endpoint responds
    /// with a non-success status, or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, PulseError> {
        api::fetch_news(
            &self.client,
            &self.symbol,
            self.count,
            self.tab,
            self.retry_override.as_ref(),
        )
        .await
    }
}
