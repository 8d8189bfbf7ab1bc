use crate::config::GeminiConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Gemini response body is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("No candidates in Gemini response")]
    MissingCandidates,

    #[error("No content in first Gemini candidate")]
    MissingContent,

    #[error("No parts in Gemini candidate content")]
    MissingParts,

    #[error("No text in first Gemini content part")]
    MissingText,
}

impl GeminiError {
    /// Short label used in logs and metrics to tell network failures from
    /// malformed bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            GeminiError::Request(e) if e.is_timeout() => "timeout",
            GeminiError::Request(_) => "request",
            GeminiError::Status { .. } => "status",
            GeminiError::Decode(_) => "decode",
            GeminiError::MissingCandidates => "missing_candidates",
            GeminiError::MissingContent => "missing_content",
            GeminiError::MissingParts => "missing_parts",
            GeminiError::MissingText => "missing_text",
        }
    }
}

/// A single-prompt text generation backend.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GeminiError::Request)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl TextGeneration for GeminiClient {
    #[tracing::instrument(skip_all, fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = json!({
            "contents": [{
                "parts": [
                    { "text": prompt }
                ]
            }]
        });

        let res = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(GeminiError::Request)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let json: Value = res.json().await.map_err(GeminiError::Decode)?;

        extract_text(&json).map(str::to_string)
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a generateContent
/// response, reporting which level was missing.
pub fn extract_text(json: &Value) -> Result<&str, GeminiError> {
    let candidate = json
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .ok_or(GeminiError::MissingCandidates)?;

    let content = candidate
        .get("content")
        .filter(|c| c.is_object())
        .ok_or(GeminiError::MissingContent)?;

    let part = content
        .get("parts")
        .and_then(Value::as_array)
        .and_then(|p| p.first())
        .ok_or(GeminiError::MissingParts)?;

    part.get("text")
        .and_then(Value::as_str)
        .ok_or(GeminiError::MissingText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_happy_path() {
        let json = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "기쁨, 불안" }, { "text": "ignored" } ] } },
                { "content": { "parts": [ { "text": "second candidate" } ] } }
            ]
        });
        assert_eq!(extract_text(&json).unwrap(), "기쁨, 불안");
    }

    #[test]
    fn test_extract_text_reports_missing_level() {
        let cases = [
            (json!({}), "missing_candidates"),
            (json!({ "candidates": [] }), "missing_candidates"),
            (json!({ "candidates": [ {} ] }), "missing_content"),
            (json!({ "candidates": [ { "content": {} } ] }), "missing_parts"),
            (json!({ "candidates": [ { "content": { "parts": [] } } ] }), "missing_parts"),
            (json!({ "candidates": [ { "content": { "parts": [ {} ] } } ] }), "missing_text"),
            (
                json!({ "candidates": [ { "content": { "parts": [ { "text": 42 } ] } } ] }),
                "missing_text",
            ),
        ];

        for (json, kind) in cases {
            let err = extract_text(&json).unwrap_err();
            assert_eq!(err.kind(), kind, "for {json}");
        }
    }
}
