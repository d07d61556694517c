//! Moving feed and sentiment data into Polars for analysis.
//!
//! Run with: cargo run --example 04_dataframes --features dataframe

#[cfg(feature = "dataframe")]
use newspulse::{
    NewsFeedBuilder, PulseClient, SentimentScorer, ToDataFrame, score_records, summarize,
};
#[cfg(feature = "dataframe")]
use polars::prelude::ChunkAgg;

/// Keeps the demo self-contained; swap in `VaderScorer` for real scoring.
#[cfg(feature = "dataframe")]
struct HeadlineLengthScorer;

#[cfg(feature = "dataframe")]
impl SentimentScorer for HeadlineLengthScorer {
    fn score(&self, text: &str) -> f64 {
        // Long headlines trend slightly negative in this toy model.
        (40.0 - text.len() as f64) / 200.0
    }
}

#[cfg(feature = "dataframe")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PulseClient::default();

    println!("--- Fetching a small feed ---");
    let feed = NewsFeedBuilder::new(&client)
        .symbols(["SPY", "QQQ"])
        .weeks_back(2)
        .fetch()
        .await;
    for failure in &feed.failures {
        eprintln!("  warning: {} failed: {}", failure.symbol, failure.error);
    }

    let records = feed.into_records();
    let df = records.to_dataframe()?;
    println!("  Records frame shape: {:?}", df.shape());
    println!("  Columns: {:?}", df.get_column_names_str());
    println!();

    println!("--- Scored records as a frame ---");
    let scored = score_records(&HeadlineLengthScorer, records);
    let scored_df = scored.to_dataframe()?;
    println!("  Scored frame shape: {:?}", scored_df.shape());
    if let Some(mean) = scored_df.column("score")?.f64()?.mean() {
        println!("  Mean score via Polars: {mean:.3}");
    }
    println!();

    println!("--- Per-ticker summary as a frame ---");
    let summary_df = summarize(&scored).to_dataframe()?;
    println!("  Summary frame shape: {:?}", summary_df.shape());
    println!("  Columns: {:?}", summary_df.get_column_names_str());

    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    println!("This example requires the 'dataframe' feature to be enabled.");
    println!("Run with: cargo run --example 04_dataframes --features dataframe");
}
