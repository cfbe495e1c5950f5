//! Integration tests for agentquiz
//!
//! Drives full quiz sessions through scripted input without a terminal.

use agentquiz::{
    bank::{QuestionBank, World},
    quiz::{
        quick_answers, save_report, DisplayManager, QuizSession, ScriptedInput, MBTI_RESULT_FILE,
    },
    report::{self, ReportOptions},
    scoring::{self, profiles, Answer, Dimension, TypeCode},
};
use std::fs;
use tempfile::TempDir;

fn session(lines: Vec<String>) -> QuizSession<ScriptedInput> {
    QuizSession::new(ScriptedInput::new(lines), DisplayManager::new().quiet(true))
}

// End-to-end MBTI tests

#[test]
fn test_weight_zero_script_produces_istj() {
    let bank = QuestionBank::builtin().unwrap();
    let answers: Vec<Answer> = (0..10)
        .map(|i| Answer::new(Dimension::ALL[i % 4], 0.0, 0))
        .collect();

    let result = report::generate_report(&bank, &answers, None, &ReportOptions::default());

    assert_eq!(result.code.to_string(), "ISTJ");
    let istj = profiles::lookup("ISTJ").unwrap();
    for strength in istj.strengths {
        assert!(result.report.contains(strength), "missing strength {}", strength);
    }
}

#[test]
fn test_interactive_session_all_first_options() {
    let bank = QuestionBank::builtin().unwrap();
    let mut lines: Vec<String> = (0..bank.len()).map(|_| "1".to_string()).collect();
    lines.push("be more organized".to_string());

    let mut quiz = session(lines);
    let answers = quiz.run_mbti(&bank).unwrap();
    let goal = quiz.ask_goal().unwrap();
    let result = report::generate_report(&bank, &answers, goal.as_deref(), &ReportOptions::default());

    assert_eq!(result.code.to_string(), "ISTJ");
    assert!(result.report.contains("Goal: be more organized"));
    assert!(result.report.contains("To be more structured (develop J):"));
}

#[test]
fn test_interactive_session_all_second_options() {
    let bank = QuestionBank::builtin().unwrap();
    let lines: Vec<String> = (0..bank.len()).map(|_| "2".to_string()).collect();

    let mut quiz = session(lines);
    let answers = quiz.run_mbti(&bank).unwrap();
    let result = report::generate_report(&bank, &answers, None, &ReportOptions::default());

    assert_eq!(result.code.to_string(), "ENFP");
    for dimension in Dimension::ALL {
        assert_eq!(result.scores.get(dimension), 8.0);
    }
    assert_eq!(result.report.matches("██████████ 100%").count(), 4);
}

#[test]
fn test_invalid_inputs_match_option_one() {
    let bank = QuestionBank::builtin().unwrap();
    let invalid = ["0", "-1", "7", "yes"];

    let ones: Vec<String> = (0..bank.len()).map(|_| "1".to_string()).collect();
    let junk: Vec<String> = (0..bank.len())
        .map(|i| invalid[i % invalid.len()].to_string())
        .collect();

    let with_ones = session(ones).run_mbti(&bank).unwrap();
    let with_junk = session(junk).run_mbti(&bank).unwrap();
    assert_eq!(with_ones, with_junk);
}

#[test]
fn test_quick_answers_classify_each_code() {
    let bank = QuestionBank::builtin().unwrap();
    for profile in profiles::PROFILES.iter() {
        let code = TypeCode::parse(profile.code).unwrap();
        let scores = scoring::accumulate(&quick_answers(&bank, &code));
        assert_eq!(scoring::classify(&scores).code.to_string(), profile.code);
    }
}

#[test]
fn test_report_saved_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let bank = QuestionBank::builtin().unwrap();
    let code = TypeCode::parse("INFJ").unwrap();
    let result = report::generate_report(
        &bank,
        &quick_answers(&bank, &code),
        Some("be warmer"),
        &ReportOptions::default(),
    );

    let path = save_report(temp_dir.path(), MBTI_RESULT_FILE, &result.report).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), result.report);
}

#[test]
fn test_custom_bar_options() {
    let bank = QuestionBank::builtin().unwrap();
    let answers = vec![Answer::new(Dimension::IE, 2.0, 1)];
    let options = ReportOptions {
        bar_max: 4,
        bar_width: 4,
    };
    let result = report::generate_report(&bank, &answers, None, &options);
    assert!(result.report.contains("██░░ 50%"));
}

// Labyrinth tests

#[test]
fn test_labyrinth_session_simple_path() {
    let world = World::builtin().unwrap();
    let mut lines = vec![String::new()];
    lines.extend((0..world.scenarios.len()).map(|_| "1".to_string()));

    let answers = session(lines).run_labyrinth(&world).unwrap();
    let diagnosis = report::diagnose(&answers);

    assert_eq!(diagnosis.profile, report::ComplexityProfile::Direct);
    assert!(diagnosis.report.contains("Simple and direct"));
}

#[test]
fn test_labyrinth_session_complex_path() {
    let world = World::builtin().unwrap();
    let mut lines = vec![String::new()];
    lines.extend((0..world.scenarios.len()).map(|_| "3".to_string()));

    let answers = session(lines).run_labyrinth(&world).unwrap();
    let diagnosis = report::diagnose(&answers);

    assert_eq!(diagnosis.average_complexity, 2.0);
    assert_eq!(diagnosis.profile, report::ComplexityProfile::Multidimensional);
    assert!(diagnosis.report.contains("Average complexity: 2.0 / 2.0"));
}

#[test]
fn test_labyrinth_invalid_choice_uses_first_option() {
    let world = World::builtin().unwrap();
    let mut lines = vec![String::new()];
    lines.extend((0..world.scenarios.len()).map(|_| "42".to_string()));

    let answers = session(lines).run_labyrinth(&world).unwrap();
    for (answer, scenario) in answers.iter().zip(&world.scenarios) {
        assert_eq!(answer.pattern, scenario.options[0].pattern);
    }
}

// Binary tests

#[test]
fn test_failing_command_reports_error_once() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_agentquiz"))
        .arg("--no-color")
        .arg("-c")
        .arg(&config_path)
        .args(["quick", "XXXX"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Invalid type code 'XXXX'").count(), 1, "{}", stderr);
    assert!(stderr.starts_with("Error: "), "{}", stderr);
    assert!(output.stdout.is_empty());
}
