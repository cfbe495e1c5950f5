//! Interactive quiz sessions
//!
//! Drives one linear pass over a question list: show each question, read
//! one line, record the answer. Invalid selections fall back to option 1
//! with a warning. The session owns its answer list exclusively.

pub mod display;
pub mod input;
pub mod runner;

pub use display::DisplayManager;
pub use input::{InputHandler, LineSource, ScriptedInput};
pub use runner::{
    quick_answers, resolve_choice, save_report, ChoiceResolution, LABYRINTH_RESULT_FILE,
    MBTI_RESULT_FILE,
};

use crate::bank::{Choices, QuestionBank, World};
use crate::errors::{QuizError, Result};
use crate::report::ScenarioAnswer;
use crate::scoring::Answer;

const GOAL_PROMPT: &str =
    "\n💭 What would you like to improve about yourself? (e.g., \"be more empathetic\", \"be more concise\"): ";

/// Quiz session coordinator
pub struct QuizSession<S: LineSource> {
    input: S,
    display: DisplayManager,
}

impl QuizSession<InputHandler> {
    /// Session reading from the terminal
    pub fn terminal(display: DisplayManager) -> Result<Self> {
        Ok(Self::new(InputHandler::new()?, display))
    }
}

impl<S: LineSource> QuizSession<S> {
    pub fn new(input: S, display: DisplayManager) -> Self {
        QuizSession { input, display }
    }

    pub fn display(&self) -> &DisplayManager {
        &self.display
    }

    /// Give back the input source, e.g. to inspect a script
    pub fn into_input(self) -> S {
        self.input
    }

    /// Ask every MBTI question in order
    ///
    /// The bank is validated first, so hand-built banks with missing
    /// options are rejected instead of indexed.
    pub fn run_mbti(&mut self, bank: &QuestionBank) -> Result<Vec<Answer>> {
        bank.validate(&bank.title)?;
        self.display.show_banner("🤖 AGENT MBTI TEST");
        self.display.show_mbti_intro(bank.len());

        let mut answers = Vec::with_capacity(bank.len());
        for (number, question) in bank.questions.iter().enumerate() {
            self.display.show_question(question);
            let prompt = format!("\n   Your choice (1-{}): ", question.option_count());
            let index = self.ask_choice(number + 1, question, &prompt)?;

            let option = &question.options[index];
            answers.push(Answer {
                dimension: question.dimension,
                weight: option.weight,
                choice: index,
            });
        }

        tracing::info!("Collected {} MBTI answers", answers.len());
        Ok(answers)
    }

    /// Optional free-text improvement goal; EOF or blank means none
    pub fn ask_goal(&mut self) -> Result<Option<String>> {
        let goal = self
            .input
            .read_line(GOAL_PROMPT)?
            .filter(|g| !g.trim().is_empty());
        tracing::debug!("Improvement goal: {:?}", goal);
        Ok(goal)
    }

    /// Walk every labyrinth scenario in order
    pub fn run_labyrinth(&mut self, world: &World) -> Result<Vec<ScenarioAnswer>> {
        world.validate(&world.world_name)?;
        self.display.show_banner("🌌 自我迷宫 - THE LABYRINTH OF SELF 🌌");
        self.display.show_text(&world.intro());
        self.display.show_info("\nPress Enter to enter the labyrinth...\n");
        // EOF here is fine; the first scenario prompt will surface it
        let _ = self.input.read_line("")?;

        let mut answers = Vec::with_capacity(world.scenarios.len());
        for (number, scenario) in world.scenarios.iter().enumerate() {
            self.display.show_scenario(scenario);
            let prompt = format!("\n   Your choice (1-{}): ", scenario.option_count());
            let index = self.ask_choice(number + 1, scenario, &prompt)?;
            answers.push(ScenarioAnswer::from(&scenario.options[index]));
        }

        tracing::info!("Collected {} labyrinth answers", answers.len());
        Ok(answers)
    }

    /// Read one choice; invalid input selects option 1 with a warning
    fn ask_choice<C: Choices>(&mut self, number: usize, item: &C, prompt: &str) -> Result<usize> {
        let line = self
            .input
            .read_line(prompt)?
            .ok_or(QuizError::InputClosed { question: number })?;

        let resolution = resolve_choice(&line, item.option_count());
        if !resolution.valid {
            tracing::warn!("Invalid choice {:?} for question {}, using option 1", line, number);
            self.display
                .show_warning("Invalid choice, defaulting to option 1.");
        }
        Ok(resolution.index)
    }
}
