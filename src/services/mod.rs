//! Service layer for the application.
//!
//! This module contains the clients for both upstream systems:
//! - Post fetching (`PostSource`)
//! - Sentiment analysis (`SentimentAnalyzer`)

mod analyzer;
mod source;

pub use analyzer::{AnalyzerCredentials, SentimentAnalyzer};
pub use source::{FetchedPost, PostSource, SourceCredentials, parse_post_id};
