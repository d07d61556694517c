use chrono::{Duration, TimeZone, Utc};
use httpmock::{Method::POST, MockServer};
use newspulse::{NewsFeedBuilder, PulseError};
use serde_json::Value;

use crate::common;

/// Mock the news endpoint for one symbol with the given stream items.
fn mock_symbol<'a>(
    server: &'a MockServer,
    symbol: &str,
    items: &[Value],
) -> httpmock::Mock<'a> {
    let body = common::envelope(items);
    let payload = common::news_payload(symbol, 10);
    server.mock(move |when, then| {
        when.method(POST).path("/xhr/ncp").json_body(payload);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

#[tokio::test]
async fn cutoff_keeps_recent_and_drops_stale() {
    let server = MockServer::start();

    let spy = mock_symbol(
        &server,
        "SPY",
        &[common::stream_item(
            "spy-1",
            Some("Markets rally"),
            Some("2024-01-02T10:00:00Z"),
        )],
    );
    let qqq = mock_symbol(
        &server,
        "QQQ",
        &[common::stream_item(
            "qqq-1",
            Some("Tech selloff"),
            Some("2023-12-30T10:00:00Z"),
        )],
    );

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client)
        .symbols(["SPY", "QQQ"])
        .since(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .fetch()
        .await;

    spy.assert();
    qqq.assert();

    assert!(feed.failures.is_empty());
    assert_eq!(feed.records.len(), 1);
    assert_eq!(feed.records[0].symbol, "SPY");
    assert_eq!(feed.records[0].headline, "Markets rally");
    assert_eq!(
        feed.records[0].published_at,
        Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn article_exactly_at_cutoff_is_included() {
    let server = MockServer::start();

    let _mock = mock_symbol(
        &server,
        "SPY",
        &[
            common::stream_item("at", Some("On the line"), Some("2024-01-01T00:00:00Z")),
            common::stream_item(
                "before",
                Some("One second early"),
                Some("2023-12-31T23:59:59Z"),
            ),
        ],
    );

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client)
        .add_symbol("SPY")
        .since(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .fetch()
        .await;

    assert_eq!(feed.records.len(), 1);
    assert_eq!(feed.records[0].headline, "On the line");
}

#[tokio::test]
async fn failed_symbol_is_isolated_from_the_batch() {
    let server = MockServer::start();

    let spy = mock_symbol(
        &server,
        "SPY",
        &[common::stream_item(
            "spy-1",
            Some("Markets rally"),
            Some("2024-01-02T10:00:00Z"),
        )],
    );
    let xlf = server.mock(|when, then| {
        when.method(POST)
            .path("/xhr/ncp")
            .json_body(common::news_payload("XLF", 10));
        then.status(404).body("gone");
    });

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client)
        .symbols(["SPY", "XLF"])
        .fetch()
        .await;

    spy.assert();
    xlf.assert();

    // SPY's records arrive untouched; XLF's failure is reported, not raised.
    assert_eq!(feed.records.len(), 1);
    assert_eq!(feed.records[0].symbol, "SPY");

    assert_eq!(feed.failures.len(), 1);
    assert_eq!(feed.failures[0].symbol, "XLF");
    assert!(matches!(feed.failures[0].error, PulseError::NotFound { .. }));
}

#[tokio::test]
async fn records_follow_requested_symbol_order() {
    let server = MockServer::start();

    let _qqq = mock_symbol(
        &server,
        "QQQ",
        &[
            common::stream_item("q1", Some("QQQ first"), Some("2024-01-02T08:00:00Z")),
            common::stream_item("q2", Some("QQQ second"), Some("2024-01-02T07:00:00Z")),
        ],
    );
    let _spy = mock_symbol(
        &server,
        "SPY",
        &[common::stream_item(
            "s1",
            Some("SPY first"),
            Some("2024-01-02T09:00:00Z"),
        )],
    );

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client)
        .symbols(["QQQ", "SPY"])
        .fetch()
        .await;

    let headlines: Vec<&str> = feed.records.iter().map(|r| r.headline.as_str()).collect();
    assert_eq!(headlines, ["QQQ first", "QQQ second", "SPY first"]);
}

#[tokio::test]
async fn cutoff_from_another_timezone_compares_on_the_instant() {
    let server = MockServer::start();

    let _mock = mock_symbol(
        &server,
        "EWY",
        &[
            common::stream_item("kept", Some("Kept"), Some("2024-01-01T00:00:00Z")),
            common::stream_item("dropped", Some("Dropped"), Some("2023-12-31T23:59:00Z")),
        ],
    );

    // 09:00 Jan 1 in Seoul is midnight Jan 1 UTC; converting before `since`
    // keeps the comparison on the instant rather than the wall clock.
    let cutoff = chrono_tz::Asia::Seoul
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client)
        .add_symbol("EWY")
        .since(cutoff)
        .fetch()
        .await;

    assert_eq!(feed.records.len(), 1);
    assert_eq!(feed.records[0].headline, "Kept");
}

#[tokio::test]
async fn undated_items_never_reach_the_feed() {
    let server = MockServer::start();

    let _mock = mock_symbol(
        &server,
        "SPY",
        &[
            common::stream_item("ok", Some("Dated"), Some("2024-01-02T10:00:00Z")),
            common::stream_item("no-date", Some("Undated"), None),
            common::stream_item("bad-date", Some("Mangled"), Some("02/01/2024")),
            // No content block at all.
            serde_json::json!({ "id": "bare" }),
        ],
    );

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client).add_symbol("SPY").fetch().await;

    assert!(feed.failures.is_empty());
    assert_eq!(feed.records.len(), 1);
    assert_eq!(feed.records[0].headline, "Dated");
}

#[tokio::test]
async fn everything_filtered_is_still_a_success() {
    let server = MockServer::start();

    let mock = mock_symbol(
        &server,
        "SPY",
        &[common::stream_item(
            "old",
            Some("Ancient history"),
            Some("2020-06-01T00:00:00Z"),
        )],
    );

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client)
        .add_symbol("SPY")
        .since(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .fetch()
        .await;

    mock.assert();
    assert!(feed.is_empty());
    assert!(feed.failures.is_empty());
}

#[tokio::test]
async fn no_symbols_yields_empty_response() {
    let server = MockServer::start();

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client).fetch().await;

    assert!(feed.is_empty());
}

#[tokio::test]
async fn refetch_is_idempotent() {
    let server = MockServer::start();

    let mock = mock_symbol(
        &server,
        "SPY",
        &[common::stream_item(
            "spy-1",
            Some("Markets rally"),
            Some("2024-01-02T10:00:00Z"),
        )],
    );

    let client = common::test_client(&server);

    let first = NewsFeedBuilder::new(&client).add_symbol("SPY").fetch().await;
    let second = NewsFeedBuilder::new(&client).add_symbol("SPY").fetch().await;

    mock.assert_hits(2);
    assert_eq!(first.records, second.records);
}

#[tokio::test]
async fn weeks_back_cuts_off_relative_to_now() {
    let server = MockServer::start();

    let fresh = (Utc::now() - Duration::hours(1)).to_rfc3339();
    let _mock = mock_symbol(
        &server,
        "SPY",
        &[
            common::stream_item("fresh", Some("Fresh"), Some(&fresh)),
            common::stream_item("stale", Some("Stale"), Some("2020-01-01T00:00:00Z")),
        ],
    );

    let client = common::test_client(&server);
    let feed = NewsFeedBuilder::new(&client)
        .add_symbol("SPY")
        .weeks_back(1)
        .fetch()
        .await;

    assert_eq!(feed.records.len(), 1);
    assert_eq!(feed.records[0].headline, "Fresh");
}

#[tokio::test]
async fn into_records_discards_failures() {
    let server = MockServer::start();

    let _spy = mock_symbol(
        &server,
        "SPY",
        &[common::stream_item(
            "spy-1",
            Some("Markets rally"),
            Some("2024-01-02T10:00:00Z"),
        )],
    );
    let _bad = server.mock(|when, then| {
        when.method(POST)
            .path("/xhr/ncp")
            .json_body(common::news_payload("BAD", 10));
        then.status(500).body("oops");
    });

    let client = common::test_client(&server);
    let records = NewsFeedBuilder::new(&client)
        .symbols(["SPY", "BAD"])
        .fetch()
        .await
        .into_records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].symbol, "SPY");
}
