//! Report rendering
//!
//! Renderers are pure: identical inputs always produce byte-identical
//! text. Printing and saving belong to the caller.

pub mod advice;
pub mod chart;
pub mod labyrinth;
pub mod mbti;

pub use advice::{matching_rules, render_advice, AdviceRule};
pub use chart::bar_chart;
pub use labyrinth::{diagnose, ComplexityProfile, Diagnosis, ScenarioAnswer};
pub use mbti::{generate_report, render_report, MbtiReport};

use unicode_width::UnicodeWidthStr;

/// Inner width of boxed headers
const BOX_WIDTH: usize = 66;

/// Layout knobs for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Score magnitude drawn as a full bar
    pub bar_max: u32,

    /// Number of cells in a bar
    pub bar_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            bar_max: 8,
            bar_width: 10,
        }
    }
}

/// Double-line box around centered lines
///
/// Padding is measured in terminal columns; emoji and CJK take two.
pub(crate) fn boxed(lines: &[&str]) -> String {
    let mut out = format!("╔{}╗\n", "═".repeat(BOX_WIDTH));
    for line in lines {
        let pad = BOX_WIDTH.saturating_sub(line.width());
        let left = pad / 2;
        let right = pad - left;
        out.push_str(&format!("║{}{}{}║\n", " ".repeat(left), line, " ".repeat(right)));
    }
    out.push_str(&format!("╚{}╝", "═".repeat(BOX_WIDTH)));
    out
}

/// Horizontal section separator
pub(crate) fn separator() -> String {
    "═".repeat(BOX_WIDTH + 1)
}

/// Bulleted list, one item per line
pub(crate) fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("   • {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
