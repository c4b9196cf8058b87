// src/pipeline/analyze.rs

//! Post analysis pipeline.
//!
//! One submitted URL flows through: id extraction → post fetch → sentiment
//! analysis → persistence. The record is written only after both upstream
//! calls have succeeded; there is no retry and no partial write.

use chrono::Utc;

use crate::error::Result;
use crate::models::PostRecord;
use crate::sentiment::classify;
use crate::services::{PostSource, SentimentAnalyzer};
use crate::storage::PostStorage;
use crate::utils::log;

/// Analyze one post URL and persist the result.
pub async fn run_analyze(
    source: &PostSource,
    analyzer: &SentimentAnalyzer,
    storage: &dyn PostStorage,
    post_url: &str,
) -> Result<PostRecord> {
    log::header("Analyzing post");

    let post_id = source.parse_post_id(post_url)?;
    log::info(&format!("Post id: {}", post_id));

    let post = source.fetch(post_id).await?;
    log::info(&format!("Fetched {} characters of text", post.text.len()));

    let sentiment = analyzer.analyze(&post.text).await?;
    let label = classify(sentiment.score, sentiment.magnitude);

    let record = PostRecord {
        post_id,
        text: post.text,
        url: post_url.to_string(),
        analyzed_at: Utc::now(),
        score: sentiment.score,
        magnitude: sentiment.magnitude,
    };

    storage.insert(&record).await?;

    log::summary(
        "Analysis complete",
        &[
            ("post", record.post_id.to_string()),
            ("score", format!("{:.2}", record.score)),
            ("magnitude", format!("{:.2}", record.magnitude)),
            ("sentiment", label.to_string()),
        ],
    );

    Ok(record)
}
