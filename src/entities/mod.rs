pub mod diary;
pub mod emotion_statistics;
pub mod today_comment;
pub mod user;

pub use diary::Entity as Diary;
pub use emotion_statistics::Entity as EmotionStatistics;
pub use today_comment::Entity as TodayComment;
pub use user::Entity as User;

pub mod prelude;
