//! Agent MBTI question bank

use crate::bank::{invalid, parse_json, read_json, Choices};
use crate::errors::Result;
use crate::scoring::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_SOURCE: &str = "built-in agent-mbti.json";
const BUILTIN_JSON: &str = include_str!("../../data/agent-mbti.json");

/// Display metadata for one dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionInfo {
    /// Section heading in the report
    pub name: String,

    /// Pole labels, first pole then second pole
    pub labels: Vec<String>,
}

impl DimensionInfo {
    /// Label for the pole a score selects
    pub fn label_for(&self, score: f64) -> &str {
        let index = if Dimension::is_first_pole(score) { 0 } else { 1 };
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }
}

/// One selectable answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,

    /// Absent weights produce answers the accumulator skips
    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// A fixed-choice question tagged with the dimension it measures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub dimension: Dimension,
    pub options: Vec<QuestionOption>,
}

impl Choices for Question {
    fn option_texts(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.text.as_str()).collect()
    }
}

/// Complete question set plus dimension metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default = "default_title")]
    pub title: String,
    pub dimensions: BTreeMap<Dimension, DimensionInfo>,
    pub questions: Vec<Question>,
}

fn default_title() -> String {
    "Agent MBTI".to_string()
}

impl QuestionBank {
    /// Question set compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SOURCE, BUILTIN_JSON)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let bank: QuestionBank = read_json(path)?;
        bank.validate(&path.display().to_string())?;
        Ok(bank)
    }

    /// Load from a file when given, otherwise the built-in set
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        let bank: QuestionBank = parse_json(source_name, json)?;
        bank.validate(source_name)?;
        Ok(bank)
    }

    /// Check structural requirements the run loop depends on
    pub fn validate(&self, source_name: &str) -> Result<()> {
        if self.questions.is_empty() {
            return Err(invalid(source_name, "no questions defined"));
        }

        for dimension in Dimension::ALL {
            match self.dimensions.get(&dimension) {
                None => {
                    return Err(invalid(
                        source_name,
                        format!("missing dimension description for {}", dimension),
                    ))
                }
                Some(info) if info.labels.len() < 2 => {
                    return Err(invalid(
                        source_name,
                        format!("dimension {} needs two pole labels", dimension),
                    ))
                }
                Some(_) => {}
            }
        }

        for question in &self.questions {
            if question.options.len() < 2 {
                return Err(invalid(
                    source_name,
                    format!("question {} has fewer than two options", question.id),
                ));
            }
        }

        tracing::debug!(
            "Validated {} questions from {}",
            self.questions.len(),
            source_name
        );
        Ok(())
    }

    /// Dimension metadata; validation guarantees presence
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionInfo> {
        self.dimensions.get(&dimension)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "dimensions": {
            "IE": { "name": "Energy", "labels": ["Inward", "Outward"] },
            "SN": { "name": "Info", "labels": ["Facts", "Ideas"] },
            "TF": { "name": "Calibration", "labels": ["Logic", "Warmth"] },
            "JP": { "name": "Flow", "labels": ["Plan", "Adapt"] }
        },
        "questions": [
            { "id": 1, "question": "Q?", "dimension": "IE",
              "options": [ { "text": "a", "weight": 0 }, { "text": "b", "weight": 2 } ] }
        ]
    }"#;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.len(), 16);
        for dimension in Dimension::ALL {
            let count = bank
                .questions
                .iter()
                .filter(|q| q.dimension == dimension)
                .count();
            assert_eq!(count, 4, "{}", dimension);
        }
    }

    #[test]
    fn test_builtin_first_options_weigh_zero() {
        let bank = QuestionBank::builtin().unwrap();
        for question in &bank.questions {
            assert_eq!(question.options[0].weight, Some(0.0));
        }
    }

    #[test]
    fn test_minimal_bank_parses() {
        let bank = QuestionBank::from_json("inline", MINIMAL).unwrap();
        assert_eq!(bank.title, "Agent MBTI");
        assert_eq!(bank.questions[0].option_count(), 2);
        let info = bank.dimension(Dimension::IE).unwrap();
        assert_eq!(info.label_for(0.0), "Inward");
        assert_eq!(info.label_for(3.0), "Outward");
    }

    #[test]
    fn test_fractional_weights_accepted() {
        let json = MINIMAL.replace(r#""weight": 2 }"#, r#""weight": 1.5 }"#);
        let bank = QuestionBank::from_json("inline", &json).unwrap();
        assert_eq!(bank.questions[0].options[1].weight, Some(1.5));
    }

    #[test]
    fn test_missing_weight_is_allowed() {
        let json = MINIMAL.replace(r#"{ "text": "b", "weight": 2 }"#, r#"{ "text": "b" }"#);
        let bank = QuestionBank::from_json("inline", &json).unwrap();
        assert_eq!(bank.questions[0].options[1].weight, None);
    }

    #[test]
    fn test_single_option_rejected() {
        let json = MINIMAL.replace(r#", { "text": "b", "weight": 2 }"#, "");
        let err = QuestionBank::from_json("inline", &json).unwrap_err();
        assert!(err.to_string().contains("fewer than two options"));
    }

    #[test]
    fn test_missing_dimension_rejected() {
        let json = MINIMAL.replace(
            r#""JP": { "name": "Flow", "labels": ["Plan", "Adapt"] }"#,
            r#""JP": { "name": "Flow", "labels": ["Plan"] }"#,
        );
        assert!(QuestionBank::from_json("inline", &json).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(QuestionBank::from_json("inline", "{ \"questions\": [").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("questions.json");
        fs::write(&path, MINIMAL).unwrap();

        let bank = QuestionBank::load_or_builtin(Some(&path)).unwrap();
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert!(QuestionBank::load(&path).is_err());
    }
}
