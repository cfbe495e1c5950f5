//! Folds an answer sequence into a score vector

use crate::scoring::types::{Answer, ScoreVector};

/// Sum answer weights per dimension
///
/// Answers without a weight are skipped. Dimensions nobody answered stay
/// at zero.
pub fn accumulate(answers: &[Answer]) -> ScoreVector {
    let mut scores = ScoreVector::new();
    let mut skipped = 0usize;

    for answer in answers {
        match answer.weight {
            Some(weight) => scores.add(answer.dimension, weight),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} answers without a weight", skipped);
    }

    scores
}
