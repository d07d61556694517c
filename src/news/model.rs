use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a single news article for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// A unique identifier for the article.
    pub uuid: String,
    /// The headline of the article. Empty when the provider omitted it.
    pub title: String,
    /// The publisher of the article (e.g., "Reuters", "Associated Press").
    pub publisher: Option<String>,
    /// A direct link to the article.
    pub link: Option<String>,
    /// When the article was published, normalized to UTC.
    pub published_at: DateTime<Utc>,
}
