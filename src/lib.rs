//! agentquiz v0.3.0 - Self-assessment quizzes for software agents
//!
//! Turns a run of fixed-choice answers into a personality profile and a
//! formatted text report.
//!
//! # Architecture
//!
//! - **scoring**: answer accumulation, type classification, type table
//! - **report**: MBTI and labyrinth report renderers, goal advice
//! - **bank**: question and world data (built-in or from JSON files)
//! - **quiz**: interactive run loop, terminal input and display
//! - **cli**: argument parsing and TOML configuration

pub mod errors;

// Re-export commonly used types
pub use errors::{QuizError, Result};

// Pure core
pub mod scoring;
pub mod report;

// Data and interaction layer
pub mod bank;
pub mod quiz;
pub mod cli;
