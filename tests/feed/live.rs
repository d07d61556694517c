use chrono::{Duration, Utc};
use newspulse::{NewsFeedBuilder, PulseClient};

#[tokio::test]
#[ignore]
async fn live_feed_respects_cutoff() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = PulseClient::builder().build().unwrap();
    let cutoff = Utc::now() - Duration::weeks(4);

    let feed = NewsFeedBuilder::new(&client)
        .symbols(["SPY", "QQQ"])
        .since(cutoff)
        .fetch()
        .await;

    for failure in &feed.failures {
        eprintln!("fetch failed for {}: {}", failure.symbol, failure.error);
    }

    assert!(
        !feed.records.is_empty(),
        "Expected some recent news for SPY/QQQ"
    );
    assert!(feed.records.iter().all(|r| r.published_at >= cutoff));
}
