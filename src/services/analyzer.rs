// src/services/analyzer.rs

//! Sentiment analyzer client.
//!
//! Submits post text to the external analysis service and returns the raw
//! `(score, magnitude)` pair. The pair is passed through exactly as the
//! service returned it; no clamping or range validation happens here.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{AnalyzerConfig, HttpConfig};
use crate::sentiment::Sentiment;

/// API key credentials for the analyzer service.
#[derive(Debug, Clone)]
pub struct AnalyzerCredentials {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    document: Document<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    #[serde(rename = "type")]
    doc_type: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    #[serde(default)]
    document_sentiment: DocumentSentiment,
}

/// Zero-valued fields are omitted by the service, so both default to 0.0.
#[derive(Debug, Deserialize, Default)]
struct DocumentSentiment {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    magnitude: f64,
}

/// Client for the external sentiment analysis service.
pub struct SentimentAnalyzer {
    config: AnalyzerConfig,
    credentials: AnalyzerCredentials,
    client: Client,
}

impl SentimentAnalyzer {
    /// Create a new analyzer client.
    pub fn new(
        http: &HttpConfig,
        config: AnalyzerConfig,
        credentials: AnalyzerCredentials,
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

    /// Analyze the sentiment of a piece of text.
    pub async fn analyze(&self, text: &str) -> Result<Sentiment> {
        let endpoint = format!(
            "{}/v1/documents:analyzeSentiment",
            self.config.endpoint
        );
        log::debug!("Submitting {} bytes of text to analyzer", text.len());

        let request = AnalyzeRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: text,
            },
        };

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.credentials.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::analyzer(format!(
                "analyzer returned {}",
                status
            )));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AppError::analyzer(format!("bad analyzer response: {e}")))?;

        Ok(Sentiment {
            score: body.document_sentiment.score,
            magnitude: body.document_sentiment.magnitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = AnalyzeRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: "hello world",
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["document"]["type"], "PLAIN_TEXT");
        assert_eq!(json["document"]["content"], "hello world");
    }

    #[test]
    fn response_deserializes_wire_shape() {
        let body: AnalyzeResponse = serde_json::from_str(
            r#"{"documentSentiment": {"score": -0.4, "magnitude": 1.2}, "language": "en"}"#,
        )
        .unwrap();
        assert_eq!(body.document_sentiment.score, -0.4);
        assert_eq!(body.document_sentiment.magnitude, 1.2);
    }

    #[test]
    fn omitted_fields_default_to_zero() {
        // The service drops zero-valued fields from the JSON.
        let body: AnalyzeResponse =
            serde_json::from_str(r#"{"documentSentiment": {"magnitude": 0.1}}"#).unwrap();
        assert_eq!(body.document_sentiment.score, 0.0);

        let body: AnalyzeResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.document_sentiment.score, 0.0);
        assert_eq!(body.document_sentiment.magnitude, 0.0);
    }
}
