use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::{
    core::{PulseClient, PulseError, client::RetryConfig, net},
    news::{NewsTab, model::NewsArticle, wire},
};

#[derive(Serialize)]
struct ServiceConfig<'a> {
    #[serde(rename = "snippetCount")]
    snippet_count: u32,
    s: &'a [&'a str],
}

#[derive(Serialize)]
struct NewsPayload<'a> {
    #[serde(rename = "serviceConfig")]
    service_config: ServiceConfig<'a>,
}

pub(super) async fn fetch_news(
    client: &PulseClient,
    symbol: &str,
    count: u32,
    tab: NewsTab,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsArticle>, PulseError> {
    let mut url = client.base_news().join("xhr/ncp")?;
    url.query_pairs_mut()
        .append_pair("queryRef", tab.as_str())
        .append_pair("serviceKey", "ncp_fin");

    let payload = NewsPayload {
        service_config: ServiceConfig {
            snippet_count: count,
            s: &[symbol],
        },
    };

    let req = client.http().post(url).json(&payload);
    let resp = client.send_with_retry(req, retry_override).await?;

    if !resp.status().is_success() {
        return Err(net::status_error(
            resp.status().as_u16(),
            resp.url().to_string(),
        ));
    }

    let body = resp.text().await?;
    let envelope: wire::NewsEnvelope = serde_json::from_str(&body).map_err(PulseError::Json)?;

    let items = envelope
        .data
        .and_then(|d| d.ticker_stream)
        .and_then(|ts| ts.stream)
        .unwrap_or_default();

    Ok(items.into_iter().filter_map(article_from_item).collect())
}

fn article_from_item(item: wire::StreamItem) -> Option<NewsArticle> {
    // Sponsored entries are not articles.
    if item.ad.is_some() {
        return None;
    }

    let content = item.content?;
    // No usable publication date means the item cannot be placed on a
    // timeline, so it is dropped rather than guessed at.
    let published_at = content.pub_date.as_deref().and_then(parse_pub_date)?;

    Some(NewsArticle {
        uuid: item.id.unwrap_or_default(),
        title: content.title.unwrap_or_default(),
        publisher: content.provider.and_then(|p| p.display_name),
        link: content.canonical_url.and_then(|u| u.url),
        published_at,
    })
}

/// Parse the feed's `pubDate` into a UTC timestamp.
///
/// The endpoint usually emits RFC 3339 with an offset; older items show up
/// as bare naive datetimes, which are taken to already be UTC.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}
