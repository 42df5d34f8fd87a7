pub mod app;
pub mod catalog;
pub mod config;
pub mod countdown;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use catalog::Catalog;
pub use config::Config;
pub use countdown::{Clock, ManualClock, SystemClock, Ticker};
pub use error::{QuizError, Result};
pub use models::{
    Advance, AnswerRecord, AnswerStatus, AppState, Category, Countdown, Lifecycle, Question,
    QuizResult, QuizSession, TickOutcome,
};
pub use ui::draw;
