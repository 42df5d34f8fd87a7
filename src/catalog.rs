use crate::error::{QuizError, Result};
use crate::models::{Category, OPTION_COUNT};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATEGORIES: &str = include_str!("../data/categories.json");

/// Longest allowed time limit for a single question, in seconds.
pub const MAX_TIME_PER_QUESTION: u32 = 3600;

/// Immutable list of categories the player can pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The categories shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATEGORIES)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| QuizError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(content)?;
        Self::new(categories)
    }

    pub fn new(categories: Vec<Category>) -> Result<Self> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn validate(categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        return Err(invalid("catalog has no categories"));
    }

    let mut category_ids = HashSet::new();
    for category in categories {
        if category.id.trim().is_empty() {
            return Err(invalid("category id must not be empty"));
        }
        if !category_ids.insert(category.id.as_str()) {
            return Err(invalid(format!("duplicate category id '{}'", category.id)));
        }
        if category.time_per_question == 0 || category.time_per_question > MAX_TIME_PER_QUESTION {
            return Err(invalid(format!(
                "category '{}': time per question must be between 1 and {} seconds",
                category.id, MAX_TIME_PER_QUESTION
            )));
        }
        if category.passing_score > 100 {
            return Err(invalid(format!(
                "category '{}': passing score {} exceeds 100",
                category.id, category.passing_score
            )));
        }
        if category.questions.is_empty() {
            return Err(invalid(format!("category '{}' has no questions", category.id)));
        }

        let mut question_ids = HashSet::new();
        for question in &category.questions {
            if !question_ids.insert(question.id) {
                return Err(invalid(format!(
                    "category '{}': duplicate question id {}",
                    category.id, question.id
                )));
            }
            if question.prompt.trim().is_empty() {
                return Err(invalid(format!(
                    "category '{}': question {} has an empty prompt",
                    category.id, question.id
                )));
            }
            if question.options.iter().any(|o| o.trim().is_empty()) {
                return Err(invalid(format!(
                    "category '{}': question {} has an empty option",
                    category.id, question.id
                )));
            }
            if question.correct_option >= OPTION_COUNT {
                return Err(invalid(format!(
                    "category '{}': question {} marks option {} as correct",
                    category.id, question.id, question.correct_option
                )));
            }
        }
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> QuizError {
    QuizError::InvalidCatalog(message.into())
}
