pub use super::diary::Entity as Diary;
pub use super::emotion_statistics::Entity as EmotionStatistics;
pub use super::today_comment::Entity as TodayComment;
pub use super::user::Entity as User;
