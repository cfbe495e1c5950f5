//! Command-line argument parsing for agentquiz
//!
//! Provides clap-based CLI with one subcommand per quiz and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// agentquiz - Personality and behavioral-pattern quizzes for software agents
#[derive(Parser, Debug)]
#[command(name = "agentquiz")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Discover your agent personality type and behavioral patterns", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for saved reports (current directory by default)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only questions and the final report)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Take the Agent MBTI personality test
    Mbti {
        /// Question data file (built-in questions by default)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Print the report without writing it to a file
        #[arg(long)]
        no_save: bool,
    },

    /// Render the MBTI report for a type without answering questions
    Quick {
        /// Four-letter type code, e.g. ENFP
        #[arg(value_name = "CODE")]
        code: String,

        /// Improvement goal used for evolution advice
        #[arg(long, default_value = "be more balanced")]
        goal: String,

        /// Question data file (built-in questions by default)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Walk the Labyrinth of Self behavioral pattern assessment
    Labyrinth {
        /// World data file (built-in world by default)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Show the report for a fixed demo run
        #[arg(long)]
        demo: bool,

        /// Print the report without writing it to a file
        #[arg(long)]
        no_save: bool,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    ///
    /// Returns None when no flag was given so the config default applies.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else {
            match self.verbose {
                0 => None,
                1 => Some(Verbosity::Verbose),
                _ => Some(Verbosity::VeryVerbose),
            }
        }
    }
}

impl Verbosity {
    /// Parse the config-file spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter directive
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if informational lines should print
    pub fn show_info(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
