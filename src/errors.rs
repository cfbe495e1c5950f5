//! Error types for agentquiz
//!
//! The scoring and rendering core is infallible; errors only come from
//! loading data/configuration and from terminal or file I/O.

use thiserror::Error;

/// Main error type for the quiz system
#[derive(Error, Debug)]
pub enum QuizError {
    /// Question or world data failed validation after parsing
    #[error("Invalid question data in {source_name}: {reason}")]
    InvalidData {
        source_name: String,
        reason: String,
    },

    /// Unknown or malformed personality type code
    #[error("Invalid type code '{code}': {reason}")]
    InvalidTypeCode { code: String, reason: String },

    /// Terminal input errors
    #[error("Input error: {0}")]
    InputError(String),

    /// Input stream closed before the quiz finished
    #[error("Input closed before question {question} was answered")]
    InputClosed { question: usize },

    /// JSON parsing errors
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Quiz error: {0}")]
    Generic(String),
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Convert anyhow errors to QuizError
impl From<anyhow::Error> for QuizError {
    fn from(err: anyhow::Error) -> Self {
        QuizError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuizError::InvalidData {
            source_name: "questions.json".to_string(),
            reason: "question 3 has fewer than two options".to_string(),
        };
        assert!(err.to_string().contains("questions.json"));
        assert!(err.to_string().contains("question 3"));
    }

    #[test]
    fn test_input_closed_error() {
        let err = QuizError::InputClosed { question: 7 };
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope");
        let err: QuizError = parse.unwrap_err().into();
        assert!(matches!(err, QuizError::JsonParseError(_)));
    }
}
