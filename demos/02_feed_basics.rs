//! The news feed without any scoring: per-symbol builders, cutoffs, and
//! rendering UTC timestamps in a local market timezone.

use chrono::{Duration, Utc};
use newspulse::{NewsBuilder, NewsFeedBuilder, NewsTab, PulseClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PulseClient::default();

    println!("--- Single-symbol fetch with NewsBuilder ---");
    let articles = NewsBuilder::new(&client, "AAPL").count(5).fetch().await?;
    for a in &articles {
        println!(
            "  [{}] {} ({})",
            a.published_at.format("%Y-%m-%d %H:%M UTC"),
            a.title,
            a.publisher.as_deref().unwrap_or("unknown")
        );
    }
    println!();

    println!("--- Multi-symbol feed, last 3 days, press releases only ---");
    let cutoff = Utc::now() - Duration::days(3);
    let feed = NewsFeedBuilder::new(&client)
        .symbols(["SPY", "QQQ", "IWM"])
        .since(cutoff)
        .tab(NewsTab::PressReleases)
        .count(20)
        .fetch()
        .await;

    for failure in &feed.failures {
        eprintln!("  warning: {} failed: {}", failure.symbol, failure.error);
    }
    for r in &feed.records {
        // Timestamps are UTC internally; convert only for display.
        let local = r.published_at.with_timezone(&chrono_tz::America::New_York);
        println!(
            "  {:<5} {} {}",
            r.symbol,
            local.format("%Y-%m-%d %H:%M %Z"),
            r.headline
        );
    }
    println!("  {} records since {}.", feed.records.len(), cutoff.format("%Y-%m-%d"));

    Ok(())
}
