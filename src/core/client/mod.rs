//! Public client surface + builder.
//! Internals are split into `retry` (policy + send loop) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::PulseError;
use constants::{DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A reusable handle to the news endpoint: HTTP client, base URL, and the
/// default retry policy applied to every request.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PulseClient {
    http: Client,
    base_news: Url,
    retry: RetryConfig,
}

impl Default for PulseClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl PulseClient {
    /// Create a new builder.
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PulseClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl PulseClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news site base (e.g., `https://finance.yahoo.com/`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the client-wide retry policy. Individual builders can still
    /// override it per call.
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    pub fn build(self) -> Result<PulseClient, PulseError> {
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PulseClient {
            http,
            base_news,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
