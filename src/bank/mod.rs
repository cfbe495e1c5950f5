//! Question and world data
//!
//! Both quizzes ship a built-in JSON data set embedded in the binary.
//! A file on disk can replace it; parse or validation failures are fatal
//! at startup.

pub mod labyrinth;
pub mod mbti;

pub use labyrinth::{Scenario, ScenarioOption, World};
pub use mbti::{DimensionInfo, Question, QuestionBank, QuestionOption};

use crate::errors::{QuizError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Anything presented to the user as a numbered list of options
pub trait Choices {
    /// Option texts in display order
    fn option_texts(&self) -> Vec<&str>;

    fn option_count(&self) -> usize {
        self.option_texts().len()
    }
}

/// Parse a JSON document, naming its source in errors
pub(crate) fn parse_json<T: DeserializeOwned>(source_name: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| QuizError::InvalidData {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Read and parse a JSON data file
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!("Loading quiz data from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_json(&path.display().to_string(), &contents)
}

/// Fail with a validation error for `source_name`
pub(crate) fn invalid(source_name: &str, reason: impl Into<String>) -> QuizError {
    QuizError::InvalidData {
        source_name: source_name.to_string(),
        reason: reason.into(),
    }
}
