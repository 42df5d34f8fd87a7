use crate::catalog::Catalog;
use crate::countdown::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Seconds allowed per question.
    pub time_per_question: u32,
    /// Minimum percentage needed to pass.
    pub passing_score: u32,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: u32,
    /// `None` when the question timed out or was skipped.
    pub selected_option: Option<usize>,
    pub is_correct: bool,
    pub time_taken_secs: u32,
}

impl AnswerRecord {
    pub fn unanswered(question_id: u32, time_limit: u32) -> Self {
        Self {
            question_id,
            selected_option: None,
            is_correct: false,
            time_taken_secs: time_limit,
        }
    }

    pub fn status(&self) -> AnswerStatus {
        match self.selected_option {
            None => AnswerStatus::Unanswered,
            Some(_) if self.is_correct => AnswerStatus::Correct,
            Some(_) => AnswerStatus::Incorrect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Unanswered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub score: usize,
    pub percentage: u32,
    pub passed: bool,
    pub time_spent_secs: u32,
    /// One record per question, in question order.
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    NotStarted,
    Started,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub remaining: u32,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    AtLastQuestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Running(u32),
    TimeUp,
}

/// State of a single quiz attempt. Mutated only through the operations in
/// `session.rs`; views read it through the accessors.
#[derive(Debug)]
pub struct QuizSession<C: Clock = SystemClock> {
    pub(crate) catalog: Catalog,
    pub(crate) category: Option<Category>,
    pub(crate) answers: Vec<AnswerRecord>,
    pub(crate) current_index: usize,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) countdown: Countdown,
    pub(crate) time_up: bool,
    pub(crate) question_started_at: Option<Instant>,
    pub(crate) started_at: Option<chrono::DateTime<chrono::Local>>,
    pub(crate) result: Option<QuizResult>,
    pub(crate) attempt: u64,
    pub(crate) clock: C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Instructions,
    Quiz,
    SubmitConfirm,
    QuizQuitConfirm,
    Results,
    Review,
}
