//! Analyzed post data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::{SentimentLabel, classify};

/// A post that has been run through the sentiment analyzer.
///
/// Only the raw analyzer output is stored. The sentiment label is derived
/// from `(score, magnitude)` on every read, so the bucketing thresholds can
/// change retroactively without touching stored data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostRecord {
    /// Upstream post identifier
    pub post_id: u64,

    /// Full post text
    pub text: String,

    /// URL the post was submitted under
    pub url: String,

    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,

    /// Raw analyzer score, [-1.0, 1.0]
    pub score: f64,

    /// Raw analyzer magnitude, [0, +inf)
    pub magnitude: f64,
}

impl PostRecord {
    /// Derive the sentiment label from the stored raw pair.
    pub fn sentiment(&self) -> SentimentLabel {
        classify(self.score, self.magnitude)
    }
}

/// A post record paired with its derived label, ready for rendering.
#[derive(Debug, Clone)]
pub struct PostView {
    pub record: PostRecord,
    pub sentiment: SentimentLabel,
}

impl From<PostRecord> for PostView {
    fn from(record: PostRecord) -> Self {
        let sentiment = record.sentiment();
        Self { record, sentiment }
    }
}

impl PostView {
    /// Format the post for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{text}`, `{url}`, `{date}`
    /// - `{score}`, `{magnitude}`, `{sentiment}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.record.post_id.to_string())
            .replace("{text}", &self.record.text)
            .replace("{url}", &self.record.url)
            .replace(
                "{date}",
                &self.record.analyzed_at.format("%Y-%m-%d %H:%M").to_string(),
            )
            .replace("{score}", &format!("{:.2}", self.record.score))
            .replace("{magnitude}", &format!("{:.2}", self.record.magnitude))
            .replace("{sentiment}", self.sentiment.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> PostRecord {
        PostRecord {
            post_id: 1125718312,
            text: "what a great day".to_string(),
            url: "https://twitter.com/someone/status/1125718312".to_string(),
            analyzed_at: Utc.with_ymd_and_hms(2026, 2, 1, 12, 30, 0).unwrap(),
            score: 0.8,
            magnitude: 0.9,
        }
    }

    #[test]
    fn sentiment_is_derived_from_raw_pair() {
        assert_eq!(sample_record().sentiment(), SentimentLabel::Happiest);
    }

    #[test]
    fn format_fills_placeholders() {
        let view = PostView::from(sample_record());
        let result = view.format("[{sentiment}] {text}");
        assert_eq!(result, "[happiest] what a great day");
    }

    #[test]
    fn format_renders_numbers() {
        let view = PostView::from(sample_record());
        let result = view.format("{score}/{magnitude} {date}");
        assert_eq!(result, "0.80/0.90 2026-02-01 12:30");
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: PostRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
