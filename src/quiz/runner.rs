//! Choice resolution, scripted answers and report persistence

use crate::bank::QuestionBank;
use crate::errors::Result;
use crate::scoring::{Answer, TypeCode};
use std::path::{Path, PathBuf};

/// Default report file for the MBTI quiz
pub const MBTI_RESULT_FILE: &str = "agent-mbti-result.txt";

/// Default report file for the labyrinth quiz
pub const LABYRINTH_RESULT_FILE: &str = "labyrinth-pattern-report.txt";

/// Outcome of interpreting one line of input as an option number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceResolution {
    /// 0-based option index
    pub index: usize,

    /// False when the input was rejected and option 1 substituted
    pub valid: bool,
}

/// Interpret a 1-based choice
///
/// Non-numeric, zero, negative and out-of-range input all resolve to the
/// first option.
pub fn resolve_choice(input: &str, option_count: usize) -> ChoiceResolution {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= option_count as u64 => ChoiceResolution {
            index: (n - 1) as usize,
            valid: true,
        },
        _ => ChoiceResolution {
            index: 0,
            valid: false,
        },
    }
}

/// Build the answer a question yields for a chosen option
pub fn answer_for(bank: &QuestionBank, question_index: usize, option_index: usize) -> Option<Answer> {
    let question = bank.questions.get(question_index)?;
    let option = question.options.get(option_index)?;
    Some(Answer {
        dimension: question.dimension,
        weight: option.weight,
        choice: option_index,
    })
}

/// Answers that steer every question toward a given type code
///
/// Option 1 is picked when the code holds the first pole of the question's
/// dimension, option 2 otherwise.
pub fn quick_answers(bank: &QuestionBank, code: &TypeCode) -> Vec<Answer> {
    bank.questions
        .iter()
        .enumerate()
        .filter_map(|(i, question)| {
            let choice = if code.prefers_first(question.dimension) { 0 } else { 1 };
            answer_for(bank, i, choice)
        })
        .collect()
}

/// Write a report verbatim into `dir/file_name`
pub fn save_report(dir: &Path, file_name: &str, report: &str) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir)?;
    }
    let path = dir.join(file_name);
    std::fs::write(&path, report)?;
    tracing::info!("Report written to {}", path.display());
    Ok(path)
}
