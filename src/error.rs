use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in the quiz.
///
/// The first five variants are precondition failures raised by the session
/// controller. They mean the operation was declined and nothing changed.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no category selected")]
    NoCategorySelected,
    #[error("attempt not started")]
    NotStarted,
    #[error("attempt already completed")]
    AlreadyCompleted,
    #[error("invalid option index {0}")]
    InvalidOption(usize),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("failed to read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl QuizError {
    /// True for the declined-operation variants the presenting layer answers
    /// with a redirect rather than an error message.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            QuizError::NoCategorySelected
                | QuizError::NotStarted
                | QuizError::AlreadyCompleted
                | QuizError::InvalidOption(_)
                | QuizError::UnknownCategory(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
