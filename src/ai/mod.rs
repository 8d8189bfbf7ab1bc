//! Gemini-backed diary analysis: emotion classification and advice.

pub mod advice;
pub mod classifier;

pub use advice::AdviceGenerator;
pub use classifier::{parse_emotions, EmotionClassifier};
