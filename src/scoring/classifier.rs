//! Thresholds a score vector into a four-letter type code

use crate::errors::{QuizError, Result};
use crate::scoring::profiles::{self, TypeProfile};
use crate::scoring::types::{Dimension, ScoreVector};
use std::fmt;

/// Four-letter personality code such as `ISTJ`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeCode([char; 4]);

impl TypeCode {
    /// Build the code a score vector selects
    pub fn from_scores(scores: &ScoreVector) -> Self {
        let mut letters = [' '; 4];
        for dimension in Dimension::ALL {
            letters[dimension.index()] = dimension.letter_for(scores.get(dimension));
        }
        TypeCode(letters)
    }

    /// Parse a user-supplied code (case-insensitive)
    pub fn parse(input: &str) -> Result<Self> {
        let upper = input.trim().to_uppercase();
        let chars: Vec<char> = upper.chars().collect();
        if chars.len() != 4 {
            return Err(QuizError::InvalidTypeCode {
                code: input.to_string(),
                reason: "expected exactly four letters".to_string(),
            });
        }

        let mut letters = [' '; 4];
        for dimension in Dimension::ALL {
            let letter = chars[dimension.index()];
            let (first, second) = dimension.poles();
            if letter != first && letter != second {
                return Err(QuizError::InvalidTypeCode {
                    code: input.to_string(),
                    reason: format!(
                        "position {} must be '{}' or '{}'",
                        dimension.index() + 1,
                        first,
                        second
                    ),
                });
            }
            letters[dimension.index()] = letter;
        }

        Ok(TypeCode(letters))
    }

    /// Letter chosen on a dimension
    pub fn letter(&self, dimension: Dimension) -> char {
        self.0[dimension.index()]
    }

    /// True when the code picks the first-listed pole of a dimension
    pub fn prefers_first(&self, dimension: Dimension) -> bool {
        self.letter(dimension) == dimension.poles().0
    }

    pub fn as_string(&self) -> String {
        self.0.iter().collect()
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Result of classifying a completed session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Code computed from the scores
    pub code: TypeCode,

    /// Registered description, or the fallback description
    pub profile: &'static TypeProfile,

    /// True when `profile` is the fallback because `code` is unregistered
    pub used_fallback: bool,
}

/// Classify against the built-in type table
pub fn classify(scores: &ScoreVector) -> Classification {
    classify_with(scores, profiles::lookup)
}

/// Classify against an arbitrary description registry
pub fn classify_with<F>(scores: &ScoreVector, registry: F) -> Classification
where
    F: Fn(&str) -> Option<&'static TypeProfile>,
{
    let code = TypeCode::from_scores(scores);
    let key = code.as_string();

    match registry(&key) {
        Some(profile) => Classification {
            code,
            profile,
            used_fallback: false,
        },
        None => {
            tracing::warn!(
                "No description registered for type {}, using {}",
                key,
                profiles::FALLBACK_CODE
            );
            Classification {
                code,
                profile: profiles::fallback(),
                used_fallback: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::accumulator::accumulate;
    use crate::scoring::profiles::NEUTRAL_CODE;
    use crate::scoring::types::Answer;

    fn answers_for(code: &str) -> Vec<Answer> {
        let code = TypeCode::parse(code).unwrap();
        Dimension::ALL
            .iter()
            .flat_map(|d| {
                let weight = if code.prefers_first(*d) { 0.0 } else { 2.0 };
                vec![Answer::new(*d, weight, 0), Answer::new(*d, weight, 0)]
            })
            .collect()
    }

    #[test]
    fn test_all_zero_scores_give_neutral_type() {
        let result = classify(&ScoreVector::new());
        assert_eq!(result.code.to_string(), NEUTRAL_CODE);
        assert!(!result.used_fallback);
    }

    #[test]
    fn test_every_code_round_trips_through_classifier() {
        for profile in profiles::PROFILES.iter() {
            let scores = accumulate(&answers_for(profile.code));
            let result = classify(&scores);
            assert_eq!(result.code.to_string(), profile.code);
            assert_eq!(result.profile.code, profile.code);
        }
    }

    #[test]
    fn test_negative_scores_pick_first_pole() {
        let mut scores = ScoreVector::new();
        scores.add(Dimension::IE, -4.0);
        scores.add(Dimension::SN, 0.5);
        scores.add(Dimension::TF, -1.0);
        scores.add(Dimension::JP, 6.0);
        assert_eq!(classify(&scores).code.to_string(), "INTP");
    }

    #[test]
    fn test_unregistered_code_falls_back() {
        let result = classify_with(&ScoreVector::new(), |_| None);
        assert_eq!(result.code.to_string(), "ISTJ");
        assert_eq!(result.profile.code, "INTJ");
        assert!(result.used_fallback);
    }

    #[test]
    fn test_parse_accepts_lowercase() {
        let code = TypeCode::parse("enfp").unwrap();
        assert_eq!(code.to_string(), "ENFP");
        assert!(!code.prefers_first(Dimension::IE));
        assert!(!code.prefers_first(Dimension::SN));
        assert!(!code.prefers_first(Dimension::JP));
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!(TypeCode::parse("ISTX").is_err());
        assert!(TypeCode::parse("IST").is_err());
        assert!(TypeCode::parse("SITJ").is_err());
        assert!(TypeCode::parse("").is_err());
    }
}
