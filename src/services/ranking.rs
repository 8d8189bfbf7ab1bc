use crate::emotion::Emotion;
use crate::entities::emotion_statistics;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionCount {
    pub emotion: Emotion,
    pub count: i64,
}

/// Top three emotions with a positive count, highest first.
///
/// Equal counts keep `Emotion` declaration order. `None` means there is no
/// statistics row for the month; an all-zero row yields an empty list.
pub fn top_three(statistics: Option<&emotion_statistics::Model>) -> Option<Vec<EmotionCount>> {
    let statistics = statistics?;

    let mut counts: Vec<EmotionCount> = Emotion::ALL
        .into_iter()
        .map(|emotion| EmotionCount {
            emotion,
            count: statistics.count(emotion),
        })
        .filter(|c| c.count > 0)
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.emotion.cmp(&b.emotion)));
    counts.truncate(3);

    Some(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> emotion_statistics::Model {
        emotion_statistics::Model {
            id: 1,
            user_id: 1,
            year: 2026,
            month: 10,
            joy: 0,
            excitement: 0,
            happiness: 0,
            calm: 0,
            depression: 0,
            anxiety: 0,
            sadness: 0,
            anger: 0,
        }
    }

    fn pairs(counts: &[EmotionCount]) -> Vec<(Emotion, i64)> {
        counts.iter().map(|c| (c.emotion, c.count)).collect()
    }

    #[test]
    fn test_absent_statistics() {
        assert_eq!(top_three(None), None);
    }

    #[test]
    fn test_all_zero_is_empty_not_absent() {
        assert_eq!(top_three(Some(&stats())), Some(vec![]));
    }

    #[test]
    fn test_single_positive_emotion() {
        let s = emotion_statistics::Model { anxiety: 2, ..stats() };
        assert_eq!(pairs(&top_three(Some(&s)).unwrap()), vec![(Emotion::Anxiety, 2)]);
    }

    #[test]
    fn test_ties_follow_declaration_order() {
        let s = emotion_statistics::Model {
            joy: 5,
            calm: 5,
            sadness: 3,
            anger: 0,
            ..stats()
        };
        assert_eq!(
            pairs(&top_three(Some(&s)).unwrap()),
            vec![(Emotion::Joy, 5), (Emotion::Calm, 5), (Emotion::Sadness, 3)]
        );
    }

    #[test]
    fn test_keeps_at_most_three_sorted_descending() {
        let s = emotion_statistics::Model {
            joy: 1,
            excitement: 7,
            happiness: 2,
            calm: 4,
            depression: 9,
            anxiety: 3,
            sadness: 0,
            anger: 4,
            ..stats()
        };
        assert_eq!(
            pairs(&top_three(Some(&s)).unwrap()),
            vec![(Emotion::Depression, 9), (Emotion::Excitement, 7), (Emotion::Calm, 4)]
        );
    }

    #[test]
    fn test_negative_counts_are_dropped() {
        let s = emotion_statistics::Model { joy: -1, anger: 1, ..stats() };
        assert_eq!(pairs(&top_three(Some(&s)).unwrap()), vec![(Emotion::Anger, 1)]);
    }
}
