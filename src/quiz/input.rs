//! Line input for quiz sessions
//!
//! The run loop reads through the `LineSource` trait so the same code can
//! be driven by a terminal (rustyline) or by a fixed script.

use crate::errors::{QuizError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;

/// Source of user input, one line per call
pub trait LineSource {
    /// Read one line after showing `prompt`
    ///
    /// Returns:
    /// - Ok(Some(line)) for normal input, trimmed
    /// - Ok(None) for EOF
    /// - Err on interrupt or other failures
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input backed by rustyline
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| QuizError::InputError(format!("Failed to open terminal: {}", e)))?;
        Ok(InputHandler { editor })
    }
}

impl LineSource for InputHandler {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Err(QuizError::InputError("Interrupted".to_string())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(QuizError::InputError(format!("Readline error: {}", err))),
        }
    }
}

/// Pre-recorded input lines, consumed in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Every prompt shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().map(|l| l.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_in_order() {
        let mut input = ScriptedInput::new(["1", " 2 ", "hello"]);
        assert_eq!(input.read_line("> ").unwrap(), Some("1".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), Some("2".to_string()));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line("goal: ").unwrap(), Some("hello".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), None);
        assert_eq!(input.prompts().len(), 4);
        assert_eq!(input.prompts()[2], "goal: ");
    }

    #[test]
    fn test_scripted_input_empty() {
        let mut input = ScriptedInput::default();
        assert_eq!(input.read_line("> ").unwrap(), None);
    }
}
