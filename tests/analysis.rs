mod common;

use common::StubGenerator;
use diary_server::ai::{AdviceGenerator, EmotionClassifier};
use diary_server::emotion::Emotion;
use diary_server::error::AppError;
use diary_server::gemini::GeminiError;
use std::sync::Arc;

#[tokio::test]
async fn test_classify_returns_emotions_in_order() {
    let stub = Arc::new(StubGenerator::replying("기쁨, 불안\n"));
    let classifier = EmotionClassifier::new(stub.clone(), "감정을 분류해줘");

    let emotions = classifier.classify("시험을 잘 봤지만 결과가 걱정된다").await.unwrap();

    assert_eq!(emotions, vec![Emotion::Joy, Emotion::Anxiety]);
    assert_eq!(
        stub.prompts.lock().unwrap().as_slice(),
        ["감정을 분류해줘\n\"시험을 잘 봤지만 결과가 걱정된다\""]
    );
}

#[tokio::test]
async fn test_classify_unknown_label_fails() {
    let stub = Arc::new(StubGenerator::replying("happyyy"));
    let classifier = EmotionClassifier::new(stub, "template");

    let err = classifier.classify("content").await.unwrap_err();

    assert!(matches!(err, AppError::AnalysisFailed { token } if token == "happyyy"));
}

#[tokio::test]
async fn test_classify_propagates_transport_failure() {
    let stub = Arc::new(StubGenerator::failing(GeminiError::MissingParts));
    let classifier = EmotionClassifier::new(stub, "template");

    let err = classifier.classify("content").await.unwrap_err();

    assert!(matches!(err, AppError::Gemini(GeminiError::MissingParts)));
}

#[tokio::test]
async fn test_advise_returns_untrimmed_comment() {
    let stub = Arc::new(StubGenerator::replying("  오늘 하루도 수고했어요.\n"));
    let advice = AdviceGenerator::new(stub.clone(), "조언해줘");

    let comment = advice.advise("피곤한 하루", "우울").await.unwrap();

    assert_eq!(comment, "  오늘 하루도 수고했어요.\n");
    assert_eq!(
        stub.prompts.lock().unwrap().as_slice(),
        ["조언해줘\n일기내용 :피곤한 하루감정 : 우울"]
    );
}

#[tokio::test]
async fn test_advise_rejects_unknown_emotion_without_calling() {
    let stub = Arc::new(StubGenerator::replying("unused"));
    let advice = AdviceGenerator::new(stub.clone(), "조언해줘");

    let err = advice.advise("피곤한 하루", "tired").await.unwrap_err();

    assert!(matches!(err, AppError::InvalidEmotion(_)));
    assert_eq!(stub.calls(), 0);
}
