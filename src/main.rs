//! agentquiz - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use agentquiz::{
    bank::{QuestionBank, World},
    cli::{Args, Commands, Config, Verbosity},
    quiz::{quick_answers, save_report, DisplayManager, QuizSession},
    report::{self, ReportOptions},
    scoring::TypeCode,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialize tracing; RUST_LOG overrides the verbosity-derived filter
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the interactive MBTI quiz
fn run_mbti(
    config: &Config,
    display: DisplayManager,
    data: Option<PathBuf>,
    output_dir: &Path,
    save: bool,
) -> Result<()> {
    let data = data.or_else(|| config.mbti_data_path());
    let bank = QuestionBank::load_or_builtin(data.as_deref())
        .context("Failed to load MBTI question data")?;

    let mut session = QuizSession::terminal(display)?;
    let answers = session.run_mbti(&bank)?;
    println!("\n");
    let goal = session.ask_goal()?;

    let result = report::generate_report(&bank, &answers, goal.as_deref(), &config.report_options());
    session.display().show_report(&result.report);

    if save {
        let path = save_report(output_dir, &config.output.mbti_file, &result.report)
            .context("Failed to save MBTI report")?;
        session
            .display()
            .show_success(&format!("📄 Results saved to: {}", path.display()));
    }

    Ok(())
}

/// Render the MBTI report for a given type code
fn run_quick(
    config: &Config,
    display: &DisplayManager,
    code: &str,
    goal: &str,
    data: Option<PathBuf>,
) -> Result<()> {
    let code = TypeCode::parse(code)?;
    let data = data.or_else(|| config.mbti_data_path());
    let bank = QuestionBank::load_or_builtin(data.as_deref())
        .context("Failed to load MBTI question data")?;

    let answers = quick_answers(&bank, &code);
    let options: ReportOptions = config.report_options();
    let result = report::generate_report(&bank, &answers, Some(goal), &options);

    if result.code != code {
        display.show_warning(&format!(
            "Question data steers {} toward {}",
            code, result.code
        ));
    }
    display.show_report(&result.report);
    Ok(())
}

/// Run the labyrinth quiz, or its demo
fn run_labyrinth(
    config: &Config,
    display: DisplayManager,
    data: Option<PathBuf>,
    demo: bool,
    output_dir: &Path,
    save: bool,
) -> Result<()> {
    if demo {
        display.show_banner("🌌 自我迷宫 - THE LABYRINTH OF SELF 🌌");
        display.show_info("\n🎭 Demo mode\n");
        let diagnosis = report::diagnose(&report::labyrinth::demo_answers());
        display.show_report(&diagnosis.report);
        return Ok(());
    }

    let data = data.or_else(|| config.labyrinth_data_path());
    let world = World::load_or_builtin(data.as_deref())
        .context("Failed to load labyrinth world data")?;

    let mut session = QuizSession::terminal(display)?;
    let answers = session.run_labyrinth(&world)?;

    session.display().show_info("\n\nGenerating report...\n");
    let diagnosis = report::diagnose(&answers);
    session.display().show_report(&diagnosis.report);

    if save {
        let path = save_report(output_dir, &config.output.labyrinth_file, &diagnosis.report)
            .context("Failed to save labyrinth report")?;
        session
            .display()
            .show_success(&format!("📄 Report saved: {}", path.display()));
    }

    Ok(())
}

/// Print the effective configuration
fn show_config(config: &Config, source: Option<&Path>) -> Result<()> {
    match source.map(Path::to_path_buf).or_else(Config::default_path) {
        Some(path) if path.exists() => println!("# Loaded from {}\n", path.display()),
        _ => println!("# Built-in defaults\n"),
    }
    println!("{}", config.to_toml()?);
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;

    let verbosity = args.verbosity().unwrap_or_else(|| config.default_verbosity());
    init_logging(verbosity);
    tracing::debug!("Configuration loaded: {:?}", config);

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    let display = DisplayManager::new().quiet(!verbosity.show_info());
    let output_dir = args.output_dir.clone().unwrap_or_else(|| config.output_dir());

    match args.command.clone() {
        Commands::Mbti { data, no_save } => {
            run_mbti(&config, display, data, &output_dir, config.output.save && !no_save)
        }
        Commands::Quick { code, goal, data } => run_quick(&config, &display, &code, &goal, data),
        Commands::Labyrinth { data, demo, no_save } => run_labyrinth(
            &config,
            display,
            data,
            demo,
            &output_dir,
            config.output.save && !no_save,
        ),
        Commands::Config => show_config(&config, args.config.as_deref()),
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        DisplayManager::new().show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
