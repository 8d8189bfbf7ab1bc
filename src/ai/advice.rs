use crate::emotion::Emotion;
use crate::error::{AppError, AppResult};
use crate::gemini::TextGeneration;
use std::sync::Arc;

pub struct AdviceGenerator {
    generator: Arc<dyn TextGeneration>,
    template: String,
}

impl AdviceGenerator {
    pub fn new(generator: Arc<dyn TextGeneration>, template: impl Into<String>) -> Self {
        Self {
            generator,
            template: template.into(),
        }
    }

    pub fn build_prompt(&self, diary_content: &str, emotion: Emotion) -> String {
        format!(
            "{}\n일기내용 :{}감정 : {}",
            self.template,
            diary_content,
            emotion.label()
        )
    }

    /// Returns the model's supportive comment, untrimmed.
    ///
    /// `emotion` must be one of the eight labels; anything else is rejected
    /// before the network call.
    #[tracing::instrument(skip(self, diary_content), fields(content_len = diary_content.len()))]
    pub async fn advise(&self, diary_content: &str, emotion: &str) -> AppResult<String> {
        let emotion: Emotion = emotion
            .parse()
            .map_err(|_| AppError::InvalidEmotion(emotion.to_string()))?;

        crate::metrics::increment_ai_requests("advice");

        let prompt = self.build_prompt(diary_content, emotion);
        let comment = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, kind = e.kind(), "advice call failed");
            crate::metrics::increment_ai_failures("advice", e.kind());
            e
        })?;

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GeminiError;
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl TextGeneration for Unreachable {
        async fn generate(&self, _prompt: &str) -> Result<String, GeminiError> {
            panic!("generation must not be called");
        }
    }

    #[test]
    fn test_prompt_layout() {
        let advice = AdviceGenerator::new(Arc::new(Unreachable), "TEMPLATE");
        assert_eq!(
            advice.build_prompt("오늘은 좋았다.", Emotion::Happiness),
            "TEMPLATE\n일기내용 :오늘은 좋았다.감정 : 행복"
        );
    }

    #[tokio::test]
    async fn test_unknown_emotion_rejected_before_call() {
        let advice = AdviceGenerator::new(Arc::new(Unreachable), "TEMPLATE");
        let err = advice.advise("content", "happy").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidEmotion(e) if e == "happy"));
    }
}
