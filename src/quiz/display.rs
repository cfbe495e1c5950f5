//! Terminal output for quiz sessions

use crate::bank::{Question, Scenario};
use crate::report::boxed;
use colored::*;

/// Separator printed between labyrinth scenarios
const SCENE_RULE_WIDTH: usize = 67;

/// Display manager for quiz UI
pub struct DisplayManager {
    quiet: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager { quiet: false }
    }

    /// Suppress informational lines; questions and the report still print
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Boxed title banner
    pub fn show_banner(&self, title: &str) {
        println!();
        for line in boxed(&[title]).lines() {
            println!("{}", line.bold().cyan());
        }
        println!();
    }

    /// MBTI welcome text
    pub fn show_mbti_intro(&self, question_count: usize) {
        println!("This test will help you discover your AI agent personality type.");
        println!(
            "There are {} questions. Answer honestly!\n",
            question_count.to_string().bold()
        );
    }

    /// Plain multi-line text block
    pub fn show_text(&self, text: &str) {
        println!("{}", text);
    }

    /// Numbered MBTI question
    pub fn show_question(&self, question: &Question) {
        println!("\n{} {}\n", format!("Q{}.", question.id).bold().cyan(), question.question);
        for (idx, option) in question.options.iter().enumerate() {
            println!("   {}. {}", idx + 1, option.text);
        }
    }

    /// Labyrinth scenario with its options
    pub fn show_scenario(&self, scenario: &Scenario) {
        println!("\n{}", "═".repeat(SCENE_RULE_WIDTH).dimmed());
        println!("\n🌌 {}", scenario.scene.bold());
        if !scenario.visual.is_empty() {
            println!("\n{}\n", scenario.visual.italic());
        }
        println!("{}\n", scenario.question);
        for (idx, option) in scenario.options.iter().enumerate() {
            println!("   {}. {}", idx + 1, option.text);
        }
    }

    /// Full report text, uncolored so it matches the saved file
    pub fn show_report(&self, report: &str) {
        println!("{}", report);
    }

    pub fn show_warning(&self, warning: &str) {
        println!("   {} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Error line on stderr
    pub fn show_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error.red());
    }

    pub fn show_info(&self, info: &str) {
        if !self.quiet {
            println!("{}", info.dimmed());
        }
    }

    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
