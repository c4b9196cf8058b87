// src/sentiment.rs

//! Sentiment calibration and classification.
//!
//! The upstream analyzer returns a raw `(score, magnitude)` pair: score in
//! [-1.0, 1.0], magnitude in [0, +inf). Calibration pushes high-intensity
//! posts toward the extremes even when the raw score is moderate, and the
//! calibrated value is bucketed into one of seven ordered labels.
//!
//! The label is always derived at read time and never persisted, so the
//! bucketing rule can change without a data migration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weight applied to magnitude during calibration.
const MAGNITUDE_WEIGHT: f64 = 0.08;

/// Discrete sentiment bucket, ordered from most negative to most positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Unhappiest,
    Unhappier,
    Unhappy,
    Neutral,
    Happy,
    Happier,
    Happiest,
}

impl SentimentLabel {
    /// Lowercase name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Unhappiest => "unhappiest",
            SentimentLabel::Unhappier => "unhappier",
            SentimentLabel::Unhappy => "unhappy",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Happy => "happy",
            SentimentLabel::Happier => "happier",
            SentimentLabel::Happiest => "happiest",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw sentiment pair as returned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub score: f64,
    pub magnitude: f64,
}

/// Apply magnitude-weighted calibration to a raw score.
///
/// The magnitude boost is applied away from zero, on the side of the raw
/// score's sign. A score of exactly 0.0 counts as non-negative, so zero
/// score with nonzero magnitude calibrates to a small positive value.
/// No clamping: the result may leave [-1.0, 1.0] when magnitude is large.
pub fn calibrate(score: f64, magnitude: f64) -> f64 {
    let calibrated = score.abs() + MAGNITUDE_WEIGHT * magnitude;
    if score < 0.0 { -calibrated } else { calibrated }
}

/// Bucket a raw `(score, magnitude)` pair into a sentiment label.
///
/// The thresholds form an ordered decision table over the calibrated score;
/// the boundaries are deliberately asymmetric, so they are kept as literal
/// comparisons rather than derived from a formula. The final arm is an
/// unconditional catch-all for everything at or above 0.75 (this also
/// absorbs NaN inputs, whose comparisons fall through every earlier arm).
pub fn classify(score: f64, magnitude: f64) -> SentimentLabel {
    let score = calibrate(score, magnitude);

    // -0.25 to 0.25 is approximately neutral.
    if (-0.25..=0.25).contains(&score) {
        return SentimentLabel::Neutral;
    }

    if score > -0.45 && score < -0.25 {
        return SentimentLabel::Unhappy;
    }

    if score > -0.75 && score <= -0.45 {
        return SentimentLabel::Unhappier;
    }

    if score <= -0.75 {
        return SentimentLabel::Unhappiest;
    }

    if score > 0.25 && score < 0.45 {
        return SentimentLabel::Happy;
    }

    if score >= 0.45 && score < 0.75 {
        return SentimentLabel::Happier;
    }

    SentimentLabel::Happiest
}
