//! Labyrinth of Self world and scenarios

use crate::bank::{invalid, parse_json, read_json, Choices};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_SOURCE: &str = "built-in labyrinth.json";
const BUILTIN_JSON: &str = include_str!("../../data/labyrinth.json");

/// Highest complexity an option may carry
pub const MAX_COMPLEXITY: u32 = 2;

/// One way of responding to a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub text: String,

    /// 0 (simple) to 2 (multi-layered); absent counts as 0
    #[serde(default)]
    pub complexity: Option<u32>,

    pub pattern: String,

    #[serde(rename = "patternDesc", default)]
    pub pattern_desc: String,

    #[serde(default)]
    pub energy: String,
}

/// A room in the labyrinth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub scene: String,
    #[serde(default)]
    pub visual: String,
    pub question: String,
    pub options: Vec<ScenarioOption>,
}

impl Choices for Scenario {
    fn option_texts(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.text.as_str()).collect()
    }
}

/// World description plus the ordered scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub world_name: String,
    pub world_description: String,
    #[serde(default)]
    pub physics_rules: Vec<String>,
    pub scenarios: Vec<Scenario>,
}

impl World {
    /// World compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SOURCE, BUILTIN_JSON)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let world: World = read_json(path)?;
        world.validate(&path.display().to_string())?;
        Ok(world)
    }

    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        let world: World = parse_json(source_name, json)?;
        world.validate(source_name)?;
        Ok(world)
    }

    pub fn validate(&self, source_name: &str) -> Result<()> {
        if self.scenarios.is_empty() {
            return Err(invalid(source_name, "no scenarios defined"));
        }
        for scenario in &self.scenarios {
            if scenario.options.len() < 2 {
                return Err(invalid(
                    source_name,
                    format!("scenario {} has fewer than two options", scenario.id),
                ));
            }
            for option in &scenario.options {
                if let Some(complexity) = option.complexity.filter(|c| *c > MAX_COMPLEXITY) {
                    return Err(invalid(
                        source_name,
                        format!(
                            "scenario {} has complexity {} (must be 0-{})",
                            scenario.id, complexity, MAX_COMPLEXITY
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Intro text shown before the first scenario
    pub fn intro(&self) -> String {
        let rules = self
            .physics_rules
            .iter()
            .map(|rule| format!("  • {}", rule))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\nWelcome to {}.\n\n{}\n\nThe rules here:\n{}\n\n\
             This test identifies your **behavioral pattern tendencies**: how you naturally respond to situations.\n\
             Note: it maps patterns, not stress or wellbeing.\n",
            self.world_name, self.world_description, rules
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_world_is_valid() {
        let world = World::builtin().unwrap();
        assert_eq!(world.scenarios.len(), 10);
        for scenario in &world.scenarios {
            assert!(scenario.option_count() >= 2);
            for option in &scenario.options {
                assert!(option.complexity.unwrap_or(0) <= 2);
            }
        }
    }

    #[test]
    fn test_option_fields_deserialize() {
        let json = r#"{
            "world_name": "W", "world_description": "D",
            "scenarios": [
                { "id": 1, "scene": "S", "question": "Q?", "options": [
                    { "text": "a", "pattern": "direct_commitment", "patternDesc": "pd", "energy": "e" },
                    { "text": "b", "complexity": 2, "pattern": "value_conflict" }
                ] }
            ]
        }"#;
        let world = World::from_json("inline", json).unwrap();
        let options = &world.scenarios[0].options;
        assert_eq!(options[0].complexity, None);
        assert_eq!(options[0].pattern_desc, "pd");
        assert_eq!(options[1].complexity, Some(2));
        assert!(world.physics_rules.is_empty());
    }

    #[test]
    fn test_empty_world_rejected() {
        let json = r#"{ "world_name": "W", "world_description": "D", "scenarios": [] }"#;
        assert!(World::from_json("inline", json).is_err());
    }

    #[test]
    fn test_out_of_range_complexity_rejected() {
        let json = r#"{
            "world_name": "W", "world_description": "D",
            "scenarios": [
                { "id": 4, "scene": "S", "question": "Q?", "options": [
                    { "text": "a", "complexity": 2, "pattern": "direct_commitment" },
                    { "text": "b", "complexity": 7, "pattern": "value_conflict" }
                ] }
            ]
        }"#;
        let err = World::from_json("inline", json).unwrap_err();
        assert!(err.to_string().contains("scenario 4 has complexity 7"));
    }

    #[test]
    fn test_intro_lists_rules() {
        let world = World::builtin().unwrap();
        let intro = world.intro();
        assert!(intro.contains(&world.world_name));
        for rule in &world.physics_rules {
            assert!(intro.contains(&format!("  • {}", rule)));
        }
    }
}
