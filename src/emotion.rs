use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of emotions a diary entry can be tagged with.
///
/// Labels are the exact strings the classifier prompt asks the model to emit,
/// and the values stored in the `diaries.emotion` column. Declaration order is
/// the tie-break order used when ranking.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Emotion {
    #[sea_orm(string_value = "기쁨")]
    #[serde(rename = "기쁨")]
    Joy,
    #[sea_orm(string_value = "신남")]
    #[serde(rename = "신남")]
    Excitement,
    #[sea_orm(string_value = "행복")]
    #[serde(rename = "행복")]
    Happiness,
    #[sea_orm(string_value = "평온")]
    #[serde(rename = "평온")]
    Calm,
    #[sea_orm(string_value = "우울")]
    #[serde(rename = "우울")]
    Depression,
    #[sea_orm(string_value = "불안")]
    #[serde(rename = "불안")]
    Anxiety,
    #[sea_orm(string_value = "슬픔")]
    #[serde(rename = "슬픔")]
    Sadness,
    #[sea_orm(string_value = "분노")]
    #[serde(rename = "분노")]
    Anger,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Excitement,
        Emotion::Happiness,
        Emotion::Calm,
        Emotion::Depression,
        Emotion::Anxiety,
        Emotion::Sadness,
        Emotion::Anger,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Joy => "기쁨",
            Emotion::Excitement => "신남",
            Emotion::Happiness => "행복",
            Emotion::Calm => "평온",
            Emotion::Depression => "우울",
            Emotion::Anxiety => "불안",
            Emotion::Sadness => "슬픔",
            Emotion::Anger => "분노",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion label: {0:?}")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    // Exact, case-sensitive match only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.label() == s)
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}
