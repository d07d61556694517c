//! Plugging a hand-rolled scorer into the sentiment pipeline. No network
//! access; the records are built by hand.

use chrono::{TimeZone, Utc};
use newspulse::{
    NewsRecord, SentimentScorer, classify, score_records, summarize,
};

/// A tiny keyword scorer for market headlines. Each bullish hit adds 0.4,
/// each bearish hit subtracts 0.4, and the sum is clamped to `[-1, 1]`.
struct KeywordScorer;

const BULLISH: &[&str] = &["rally", "surge", "soar", "record high", "beat", "upgrade"];
const BEARISH: &[&str] = &["selloff", "plunge", "crash", "miss", "downgrade", "lawsuit"];

impl SentimentScorer for KeywordScorer {
    fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut score: f64 = 0.0;
        for kw in BULLISH {
            if lower.contains(kw) {
                score += 0.4;
            }
        }
        for kw in BEARISH {
            if lower.contains(kw) {
                score -= 0.4;
            }
        }
        score.clamp(-1.0, 1.0)
    }
}

fn record(symbol: &str, headline: &str, day: u32) -> NewsRecord {
    NewsRecord {
        symbol: symbol.to_string(),
        published_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        headline: headline.to_string(),
    }
}

fn main() {
    let records = vec![
        record("SPY", "Markets rally to record high after Fed minutes", 2),
        record("SPY", "Earnings beat sends futures higher", 3),
        record("QQQ", "Tech selloff deepens as chip stocks plunge", 2),
        record("QQQ", "Analysts split on semiconductor outlook", 3),
        record("IWM", "Small caps drift sideways in quiet session", 4),
    ];

    println!("--- Scoring with a custom keyword scorer ---");
    let scored = score_records(&KeywordScorer, records);
    for sr in &scored {
        println!(
            "  {:<5} {:+.1} {:<8} {}",
            sr.record.symbol, sr.score, sr.category, sr.record.headline
        );
    }
    println!();

    // classify() is the same fixed rule every scorer feeds into.
    assert_eq!(classify(0.05), newspulse::SentimentCategory::Positive);

    let summary = summarize(&scored);
    println!("--- Summary ---");
    for t in &summary.tickers {
        println!(
            "  {:<5} mean {:+.2} over {} headline(s)",
            t.symbol, t.mean_score, t.article_count
        );
    }
    println!(
        "  Portfolio: {:+.2} across {} records",
        summary.mean_score, summary.record_count
    );
}
