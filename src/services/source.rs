// src/services/source.rs

//! Post source client.
//!
//! Validates submitted post URLs and fetches the full post text from the
//! upstream API. Post URLs are of the form:
//! `https://<host>/<user>/status/<id>`

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{HttpConfig, SourceConfig};

/// Bearer credentials for the post source API.
#[derive(Debug, Clone)]
pub struct SourceCredentials {
    pub bearer_token: String,
}

/// A post fetched from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPost {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct PostEnvelope {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    text: String,
}

/// Extract the numeric post id from a post URL.
///
/// The host must match `expected_host` and the path must split into exactly
/// four segments (`"" / <user> / status / <id>`). Only the host and the
/// segment count are checked; the literal `status` segment is not.
pub fn parse_post_id(expected_host: &str, post_url: &str) -> Result<u64> {
    let parsed = Url::parse(post_url)
        .map_err(|e| AppError::invalid_post_url(post_url, e))?;

    match parsed.host_str() {
        Some(host) if host.eq_ignore_ascii_case(expected_host) => {}
        _ => return Err(AppError::invalid_post_url(post_url, "invalid hostname")),
    }

    let parts: Vec<&str> = parsed.path().split('/').collect();
    if parts.len() != 4 {
        return Err(AppError::invalid_post_url(post_url, "invalid path"));
    }

    parts[3]
        .parse::<u64>()
        .map_err(|_| AppError::invalid_post_url(post_url, "post id is not an integer"))
}

/// Client for fetching posts from the upstream social-media API.
pub struct PostSource {
    config: SourceConfig,
    credentials: SourceCredentials,
    client: Client,
}

impl PostSource {
    /// Create a new post source client.
    pub fn new(
        http: &HttpConfig,
        config: SourceConfig,
        credentials: SourceCredentials,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&http.user_agent)
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            credentials,
            client,
        })
    }

    /// Validate a post URL against the configured host and extract its id.
    pub fn parse_post_id(&self, post_url: &str) -> Result<u64> {
        parse_post_id(&self.config.host, post_url)
    }

    /// Fetch the full text of a post by id.
    pub async fn fetch(&self, post_id: u64) -> Result<FetchedPost> {
        let endpoint = format!("{}/tweets/{}", self.config.api_base, post_id);
        log::debug!("Fetching post {} from {}", post_id, endpoint);

        let response = self
            .client
            .get(&endpoint)
            .bearer_auth(&self.credentials.bearer_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(
                format!("post {}", post_id),
                format!("upstream returned {}", status),
            ));
        }

        let envelope: PostEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::fetch(format!("post {}", post_id), e))?;

        Ok(FetchedPost {
            id: post_id,
            text: envelope.data.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_post_url() {
        let id = parse_post_id("twitter.com", "https://twitter.com/someone/status/1125718312");
        assert_eq!(id.unwrap(), 1125718312);
    }

    #[test]
    fn parse_rejects_wrong_host() {
        let result = parse_post_id("twitter.com", "https://evil.example/someone/status/1");
        assert!(matches!(result, Err(AppError::InvalidPostUrl { .. })));
    }

    #[test]
    fn parse_rejects_wrong_segment_count() {
        // Three segments
        let result = parse_post_id("twitter.com", "https://twitter.com/someone/1125718312");
        assert!(result.is_err());
        // Five segments (trailing slash)
        let result = parse_post_id(
            "twitter.com",
            "https://twitter.com/someone/status/1125718312/",
        );
        assert!(result.is_err());
    }

    #[test]
    fn parse_ignores_the_middle_segment_literal() {
        // Only host and segment count are validated.
        let id = parse_post_id("twitter.com", "https://twitter.com/someone/posts/42");
        assert_eq!(id.unwrap(), 42);
    }

    #[test]
    fn parse_rejects_non_integer_id() {
        let result = parse_post_id("twitter.com", "https://twitter.com/someone/status/abc");
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_post_id("twitter.com", "not a url at all").is_err());
    }

    #[test]
    fn parse_host_check_is_case_insensitive() {
        let id = parse_post_id("twitter.com", "https://TWITTER.com/someone/status/7");
        assert_eq!(id.unwrap(), 7);
    }

    #[test]
    fn envelope_deserializes_upstream_shape() {
        let envelope: PostEnvelope =
            serde_json::from_str(r#"{"data": {"id": "42", "text": "hello"}}"#).unwrap();
        assert_eq!(envelope.data.text, "hello");
    }
}
