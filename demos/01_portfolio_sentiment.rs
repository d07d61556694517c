//! Fetch a week of headlines for an ETF portfolio, score them with VADER,
//! and print the per-ticker sentiment table a dashboard would plot.
//!
//! Run with: cargo run --example 01_portfolio_sentiment --features vader

#[cfg(feature = "vader")]
use newspulse::{NewsFeedBuilder, PulseClient, VaderScorer, score_records, summarize};

#[cfg(feature = "vader")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = PulseClient::default();
    let portfolio = ["ACWI", "IDEV", "IEMG", "SPY", "QQQ", "XLK", "XLF", "XLE"];

    println!("--- Fetching one week of news for {} tickers ---", portfolio.len());
    let feed = NewsFeedBuilder::new(&client)
        .symbols(portfolio)
        .weeks_back(1)
        .fetch()
        .await;

    for failure in &feed.failures {
        eprintln!("  warning: {} failed: {}", failure.symbol, failure.error);
    }
    println!("  {} headlines retrieved.", feed.records.len());
    println!();

    println!("--- Scoring headlines ---");
    let scorer = VaderScorer::new();
    let scored = score_records(&scorer, feed.into_records());
    let summary = summarize(&scored);

    println!("  {:<8} {:>9} {:>8} {:>8} {:>8}", "Ticker", "Articles", "Mean", "Min", "Max");
    for t in &summary.tickers {
        println!(
            "  {:<8} {:>9} {:>8.3} {:>8.3} {:>8.3}",
            t.symbol, t.article_count, t.mean_score, t.min_score, t.max_score
        );
    }
    println!();

    let c = summary.categories;
    println!(
        "  Categories: {} positive / {} neutral / {} negative (of {})",
        c.positive, c.neutral, c.negative, c.total()
    );
    println!("  Portfolio mean sentiment: {:.3}", summary.mean_score);

    Ok(())
}

#[cfg(not(feature = "vader"))]
fn main() {
    println!("This example requires the 'vader' feature to be enabled.");
    println!("Run with: cargo run --example 01_portfolio_sentiment --features vader");
}
