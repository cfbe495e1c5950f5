//! Scoring type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One axis of the personality classification
///
/// Each dimension has two poles. The first-listed pole wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Introversion / Extraversion (session energy)
    #[serde(rename = "IE")]
    IE,
    /// Sensing / Intuition (information processing)
    #[serde(rename = "SN")]
    SN,
    /// Thinking / Feeling (response calibration)
    #[serde(rename = "TF")]
    TF,
    /// Judging / Perceiving (task flow)
    #[serde(rename = "JP")]
    JP,
}

impl Dimension {
    /// All dimensions in type-code order
    pub const ALL: [Dimension; 4] = [Dimension::IE, Dimension::SN, Dimension::TF, Dimension::JP];

    /// Pole letters as (first, second)
    pub fn poles(&self) -> (char, char) {
        match self {
            Dimension::IE => ('I', 'E'),
            Dimension::SN => ('S', 'N'),
            Dimension::TF => ('T', 'F'),
            Dimension::JP => ('J', 'P'),
        }
    }

    /// Two-letter tag as used in question data
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::IE => "IE",
            Dimension::SN => "SN",
            Dimension::TF => "TF",
            Dimension::JP => "JP",
        }
    }

    /// Position of this dimension's letter within a type code
    pub fn index(&self) -> usize {
        match self {
            Dimension::IE => 0,
            Dimension::SN => 1,
            Dimension::TF => 2,
            Dimension::JP => 3,
        }
    }

    /// Which pole a score selects: `true` for the first-listed pole
    pub fn is_first_pole(score: f64) -> bool {
        score <= 0.0
    }

    /// Letter selected by a score on this dimension
    pub fn letter_for(&self, score: f64) -> char {
        let (first, second) = self.poles();
        if Self::is_first_pole(score) {
            first
        } else {
            second
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub dimension: Dimension,

    /// Missing weights mark a malformed answer; the accumulator skips them
    pub weight: Option<f64>,

    /// 0-based option index that produced this answer
    pub choice: usize,
}

impl Answer {
    /// Create a well-formed answer
    pub fn new(dimension: Dimension, weight: f64, choice: usize) -> Self {
        Self {
            dimension,
            weight: Some(weight),
            choice,
        }
    }
}

/// Per-dimension accumulated weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    scores: BTreeMap<Dimension, f64>,
}

impl ScoreVector {
    /// Every dimension starts at zero
    pub fn new() -> Self {
        Self {
            scores: Dimension::ALL.iter().map(|d| (*d, 0.0)).collect(),
        }
    }

    /// Score for a dimension
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.scores.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Add a weight to a dimension
    ///
    /// Non-finite weights are ignored so a score can never become NaN.
    pub fn add(&mut self, dimension: Dimension, weight: f64) {
        if !weight.is_finite() {
            tracing::warn!("Ignoring non-finite weight {} on {}", weight, dimension);
            return;
        }
        let score = self.scores.entry(dimension).or_insert(0.0);
        *score = (*score + weight).clamp(-f64::MAX, f64::MAX);
    }

    /// Iterate (dimension, score) pairs in type-code order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.scores.iter().map(|(d, s)| (*d, *s))
    }

    /// True when every dimension is still zero
    pub fn is_neutral(&self) -> bool {
        self.scores.values().all(|s| *s == 0.0)
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_vector_starts_at_zero() {
        let scores = ScoreVector::new();
        for dimension in Dimension::ALL {
            assert_eq!(scores.get(dimension), 0.0);
        }
        assert!(scores.is_neutral());
    }

    #[test]
    fn test_score_vector_iterates_in_code_order() {
        let scores = ScoreVector::new();
        let order: Vec<Dimension> = scores.iter().map(|(d, _)| d).collect();
        assert_eq!(order, Dimension::ALL.to_vec());
    }

    #[test]
    fn test_tie_goes_to_first_pole() {
        assert_eq!(Dimension::IE.letter_for(0.0), 'I');
        assert_eq!(Dimension::SN.letter_for(-3.0), 'S');
        assert_eq!(Dimension::TF.letter_for(1.0), 'F');
        assert_eq!(Dimension::JP.letter_for(0.0), 'J');
        assert_eq!(Dimension::JP.letter_for(0.5), 'P');
    }

    #[test]
    fn test_huge_weights_stay_finite() {
        let mut scores = ScoreVector::new();
        scores.add(Dimension::IE, f64::MAX);
        scores.add(Dimension::IE, f64::MAX);
        assert_eq!(scores.get(Dimension::IE), f64::MAX);
        assert_eq!(Dimension::IE.letter_for(scores.get(Dimension::IE)), 'E');

        scores.add(Dimension::IE, f64::NAN);
        scores.add(Dimension::IE, f64::NEG_INFINITY);
        assert_eq!(scores.get(Dimension::IE), f64::MAX);
    }

    #[test]
    fn test_dimension_deserializes_from_tag() {
        let dimension: Dimension = serde_json::from_str("\"TF\"").unwrap();
        assert_eq!(dimension, Dimension::TF);
        assert!(serde_json::from_str::<Dimension>("\"XY\"").is_err());
    }
}
