pub mod main_page;
pub mod ranking;
pub mod today_comment;

pub use main_page::{DiaryResponse, MainPageResponse, MainPageService};
pub use ranking::{top_three, EmotionCount};
pub use today_comment::TodayCommentService;
