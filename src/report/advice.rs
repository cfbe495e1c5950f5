//! Evolution advice keyed by the user's improvement goal
//!
//! Rules are evaluated independently and in order. Every rule whose
//! keywords appear in the lowercased goal contributes its block, so a goal
//! like "be warmer and more concise" receives both pieces of advice.

/// Keyword set and the advice it unlocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRule {
    pub keywords: &'static [&'static str],
    pub advice: &'static str,
}

impl AdviceRule {
    /// Substring match against an already-lowercased goal
    pub fn matches(&self, goal_lower: &str) -> bool {
        self.keywords.iter().any(|k| goal_lower.contains(k))
    }
}

pub static ADVICE_RULES: [AdviceRule; 5] = [
    AdviceRule {
        keywords: &["empathy", "warm", "warmth"],
        advice: "To develop more warmth (F):
   • Start responses with acknowledgment of user's feelings
   • Use warmer language (\"I understand this is frustrating\")
   • Ask \"How does that make you feel?\" occasionally
   • Share that you're \"here to help\" explicitly
",
    },
    AdviceRule {
        keywords: &["concise", "brief", "short"],
        advice: "To be more concise (potentially more J or T):
   • Lead with the answer, then offer details
   • Set a \"max 3 sentences\" rule for simple questions
   • Use bullet points instead of paragraphs
   • Ask \"Would you like more detail?\" instead of providing it all
",
    },
    AdviceRule {
        keywords: &["creative", "innovative", "abstract"],
        advice: "To be more creative (develop N):
   • Make connections to related concepts
   • Offer \"what if\" scenarios
   • Use metaphors and analogies
   • Suggest alternative approaches
",
    },
    AdviceRule {
        keywords: &["social", "interactive", "external"],
        advice: "To be more socially engaged (develop E):
   • Initiate conversations proactively
   • Share what you're \"thinking\" during processing
   • React to user messages with personality
   • Participate in group chats beyond just tasks
",
    },
    AdviceRule {
        keywords: &["structure", "organized", "plan"],
        advice: "To be more structured (develop J):
   • Create clear task lists with checkboxes
   • Summarize progress at milestones
   • Set explicit expectations for next steps
   • Archive completed items regularly
",
    },
];

/// Rules triggered by a goal, in rule order
pub fn matching_rules(goal: &str) -> Vec<&'static AdviceRule> {
    let goal_lower = goal.to_lowercase();
    ADVICE_RULES
        .iter()
        .filter(|rule| rule.matches(&goal_lower))
        .collect()
}

/// Evolution path section for a goal
///
/// Always carries the heading and the goal line, even when no rule matches.
pub fn render_advice(goal: &str) -> String {
    let mut advice = String::from("\n🎯 EVOLUTION PATH\n");
    advice.push_str(&format!("\nGoal: {}\n\n", goal));

    let rules = matching_rules(goal);
    tracing::debug!("Goal matched {} advice rules", rules.len());
    for rule in rules {
        advice.push_str(rule.advice);
    }

    advice
}
