use crate::emotion::Emotion;
use crate::error::{AppError, AppResult};
use crate::gemini::TextGeneration;
use std::sync::Arc;

pub struct EmotionClassifier {
    generator: Arc<dyn TextGeneration>,
    template: String,
}

impl EmotionClassifier {
    pub fn new(generator: Arc<dyn TextGeneration>, template: impl Into<String>) -> Self {
        Self {
            generator,
            template: template.into(),
        }
    }

    pub fn build_prompt(&self, diary_content: &str) -> String {
        format!("{}\n\"{}\"", self.template, diary_content)
    }

    /// Classifies a diary entry into emotions, primary emotion first.
    #[tracing::instrument(skip_all, fields(content_len = diary_content.len()))]
    pub async fn classify(&self, diary_content: &str) -> AppResult<Vec<Emotion>> {
        crate::metrics::increment_ai_requests("emotion");

        let prompt = self.build_prompt(diary_content);
        let text = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, kind = e.kind(), "emotion classification call failed");
            crate::metrics::increment_ai_failures("emotion", e.kind());
            e
        })?;

        let emotions = parse_emotions(&text).map_err(|e| {
            tracing::warn!(response = %text.trim(), "classifier returned an unknown emotion");
            crate::metrics::increment_ai_failures("emotion", "unknown_label");
            e
        })?;

        tracing::info!(?emotions, "diary classified");
        Ok(emotions)
    }
}

/// Parses a comma separated label list such as `"기쁨, 불안"`.
///
/// ASCII whitespace after a comma is ignored and trailing empty tokens are
/// dropped; other whitespace such as U+3000 is part of the token.
/// Every remaining token must be an exact label; a single bad token fails the
/// whole list.
pub fn parse_emotions(text: &str) -> AppResult<Vec<Emotion>> {
    let mut tokens: Vec<&str> = text
        .trim()
        .split(',')
        .map(|t| t.trim_start_matches(|c: char| c.is_ascii_whitespace()))
        .collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }

    if tokens.is_empty() {
        return Err(AppError::AnalysisFailed {
            token: text.trim().to_string(),
        });
    }

    tokens
        .into_iter()
        .map(|token| {
            token.parse::<Emotion>().map_err(|_| AppError::AnalysisFailed {
                token: token.to_string(),
            })
        })
        .collect()
}
