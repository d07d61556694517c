use newspulse::{
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, SentimentCategory, classify,
};

#[test]
fn thresholds_are_inclusive() {
    assert_eq!(classify(0.05), SentimentCategory::Positive);
    assert_eq!(classify(-0.05), SentimentCategory::Negative);

    // Just inside the neutral band on either side.
    assert_eq!(classify(0.049), SentimentCategory::Neutral);
    assert_eq!(classify(-0.049), SentimentCategory::Neutral);
    assert_eq!(classify(0.0), SentimentCategory::Neutral);
}

#[test]
fn threshold_constants_match_the_boundaries() {
    assert_eq!(classify(POSITIVE_THRESHOLD), SentimentCategory::Positive);
    assert_eq!(classify(NEGATIVE_THRESHOLD), SentimentCategory::Negative);
}

#[test]
fn classification_is_total() {
    assert_eq!(classify(1.0), SentimentCategory::Positive);
    assert_eq!(classify(-1.0), SentimentCategory::Negative);

    // Out-of-range and non-finite inputs still classify.
    assert_eq!(classify(5.0), SentimentCategory::Positive);
    assert_eq!(classify(-3.2), SentimentCategory::Negative);
    assert_eq!(classify(f64::INFINITY), SentimentCategory::Positive);
    assert_eq!(classify(f64::NEG_INFINITY), SentimentCategory::Negative);
    assert_eq!(classify(f64::NAN), SentimentCategory::Neutral);
}

#[test]
fn categories_display_their_labels() {
    assert_eq!(SentimentCategory::Positive.to_string(), "Positive");
    assert_eq!(SentimentCategory::Negative.to_string(), "Negative");
    assert_eq!(SentimentCategory::Neutral.to_string(), "Neutral");
}
