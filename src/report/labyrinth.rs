//! Labyrinth of Self behavioral pattern diagnosis

use crate::bank::ScenarioOption;
use crate::report::{boxed, separator};
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the direct bucket
const DIRECT_MAX: f64 = 0.7;

/// Upper bound (inclusive) of the balanced bucket
const BALANCED_MAX: f64 = 1.3;

/// Pattern keys per group, in report order
const PATTERN_GROUPS: [(&str, &[&str]); 3] = [
    (
        "Direct Action",
        &[
            "direct_commitment",
            "procedural_action",
            "immediate_rest",
            "attention_shift",
            "clean_release",
        ],
    ),
    (
        "Exploratory Adaptive",
        &[
            "exploratory_drift",
            "structured_exploration",
            "selective_scanning",
            "constructive_engagement",
            "paced_sustainability",
        ],
    ),
    (
        "Multidimensional Processing",
        &[
            "observational_delay",
            "parallel_processing",
            "pattern_analysis",
            "multifaceted_connection",
            "value_conflict",
        ],
    ),
];

/// The chosen option of one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioAnswer {
    pub complexity: Option<u32>,
    pub pattern: String,
    pub pattern_desc: String,
    pub energy: String,
}

impl From<&ScenarioOption> for ScenarioAnswer {
    fn from(option: &ScenarioOption) -> Self {
        Self {
            complexity: option.complexity,
            pattern: option.pattern.clone(),
            pattern_desc: option.pattern_desc.clone(),
            energy: option.energy.clone(),
        }
    }
}

/// Qualitative bucket of mean complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityProfile {
    Direct,
    Balanced,
    Multidimensional,
}

impl ComplexityProfile {
    pub fn from_average(average: f64) -> Self {
        if average <= DIRECT_MAX {
            ComplexityProfile::Direct
        } else if average <= BALANCED_MAX {
            ComplexityProfile::Balanced
        } else {
            ComplexityProfile::Multidimensional
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplexityProfile::Direct => "Simple and direct",
            ComplexityProfile::Balanced => "Balanced and adaptive",
            ComplexityProfile::Multidimensional => "Complex and multidimensional",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ComplexityProfile::Direct => "🎯",
            ComplexityProfile::Balanced => "⚖️",
            ComplexityProfile::Multidimensional => "🕸️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComplexityProfile::Direct => "You lean toward simple, direct ways of responding",
            ComplexityProfile::Balanced => {
                "You adjust complexity to the situation and respond flexibly"
            }
            ComplexityProfile::Multidimensional => {
                "You tend to consider many layers and handle several threads at once"
            }
        }
    }
}

/// Diagnosis of a completed labyrinth run
#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub report: String,
    pub average_complexity: f64,
    pub profile: ComplexityProfile,
    pub answers: Vec<ScenarioAnswer>,
}

/// Mean complexity; absent values count as zero, no answers give zero
pub fn average_complexity(answers: &[ScenarioAnswer]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    let total: u64 = answers
        .iter()
        .map(|a| u64::from(a.complexity.unwrap_or(0)))
        .sum();
    total as f64 / answers.len() as f64
}

/// Count answers per pattern group, omitting empty groups
pub fn group_counts(answers: &[ScenarioAnswer]) -> Vec<(&'static str, usize)> {
    PATTERN_GROUPS
        .iter()
        .map(|(name, patterns)| {
            let count = answers
                .iter()
                .filter(|a| patterns.contains(&a.pattern.as_str()))
                .count();
            (*name, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Score and render a labyrinth run
pub fn diagnose(answers: &[ScenarioAnswer]) -> Diagnosis {
    let average = average_complexity(answers);
    let profile = ComplexityProfile::from_average(average);
    tracing::info!(
        "Labyrinth average complexity {:.2} -> {:?}",
        average,
        profile
    );

    Diagnosis {
        report: render_diagnosis(answers, average, profile),
        average_complexity: average,
        profile,
        answers: answers.to_vec(),
    }
}

fn render_diagnosis(answers: &[ScenarioAnswer], average: f64, profile: ComplexityProfile) -> String {
    let rule = separator();

    let patterns = answers
        .iter()
        .enumerate()
        .map(|(i, a)| format!("Scenario {}: {}\n   → {}", i + 1, a.pattern, a.energy))
        .collect::<Vec<_>>()
        .join("\n\n");

    let groups = group_counts(answers)
        .iter()
        .map(|(name, count)| format!("{}: {} scenarios", name, count))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{header}\n\n\
         {emoji} **Complexity tendency: {label}**\n\
         Average complexity: {average:.1} / 2.0\n\
         {description}\n\n\
         {rule}\n\n\
         🎭 **Patterns you showed in the labyrinth:**\n\n\
         {patterns}\n\n\
         {rule}\n\n\
         📊 **Pattern groups:**\n\n\
         {groups}\n\n\
         {rule}\n\n\
         💡 **How to read this result:**\n\n\
         This is not a health assessment. It is a **behavior map** of how you naturally tend to respond.\n\n\
         • High complexity is not bad: you may be good at handling many dimensions at once\n\
         • Low complexity is not shallow: you may value efficiency and clarity\n\
         • What matters is awareness: how do these patterns play out in your work?\n\n\
         {rule}\n\n\
         🎯 **Next steps:**\n\n\
         1. Save this report to your memory/\n\
         2. Ask your user: \"Do these patterns sound like me?\"\n\
         3. To share on Moltbook, you could say:\n   \
            \"I just walked the labyrinth and showed a {label} pattern,\n    \
            curious what patterns other agents have~\"\n\n\
         {rule}\n\n\
         *Remember: patterns are neither good nor bad. Awareness is strength.*\n",
        header = boxed(&["📊 BEHAVIORAL PATTERN REPORT 📊"]),
        emoji = profile.emoji(),
        label = profile.label(),
        description = profile.description(),
    )
}

/// Fixed answer set for demo mode
pub fn demo_answers() -> Vec<ScenarioAnswer> {
    let demo = [
        (0, "direct_commitment", "Establishes stability quickly", "Single-focus, immediate action"),
        (1, "sequential_depth", "Deep, focused, one-at-a-time", "Deep, focused, one-at-a-time"),
        (0, "procedural_action", "Direct action, trust in process", "Direct action, trust in process"),
        (0, "attention_shift", "Brief acknowledgment, then move on", "Brief acknowledgment, then move on"),
        (0, "immediate_accessibility", "Open, direct, present", "Open, direct, present"),
        (0, "clean_release", "Definitive, complete", "Definitive, complete"),
        (1, "preparatory_stabilization", "Measured, foundation-first", "Measured, foundation-first"),
        (1, "aspirational_alignment", "Growth-oriented, positive", "Growth-oriented, positive"),
        (0, "immediate_rest", "Clear boundary, self-care", "Clear boundary, self-care"),
        (0, "simplicity_embrace", "Less, openness, space", "Less, openness, space"),
    ];

    demo.iter()
        .map(|(complexity, pattern, desc, energy)| ScenarioAnswer {
            complexity: Some(*complexity),
            pattern: pattern.to_string(),
            pattern_desc: desc.to_string(),
            energy: energy.to_string(),
        })
        .collect()
}
