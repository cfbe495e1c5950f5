//! Agent MBTI result report

use crate::bank::QuestionBank;
use crate::report::{advice, bar_chart, boxed, bullets, separator, ReportOptions};
use crate::scoring::{
    accumulate, classify, Answer, Classification, Dimension, ScoreVector, TypeCode, TypeProfile,
};

/// Everything produced by scoring a completed session
#[derive(Debug, Clone)]
pub struct MbtiReport {
    pub report: String,
    pub code: TypeCode,
    pub scores: ScoreVector,
    pub profile: &'static TypeProfile,
}

/// Score, classify and render one session
pub fn generate_report(
    bank: &QuestionBank,
    answers: &[Answer],
    goal: Option<&str>,
    options: &ReportOptions,
) -> MbtiReport {
    let scores = accumulate(answers);
    let classification = classify(&scores);
    tracing::info!(
        "Classified {} answers as {}",
        answers.len(),
        classification.code
    );

    let report = render_report(bank, &classification, &scores, goal, options);

    MbtiReport {
        report,
        code: classification.code,
        scores,
        profile: classification.profile,
    }
}

/// Render the report text
///
/// An empty or whitespace-only goal renders no evolution section.
pub fn render_report(
    bank: &QuestionBank,
    classification: &Classification,
    scores: &ScoreVector,
    goal: Option<&str>,
    options: &ReportOptions,
) -> String {
    let profile = classification.profile;

    let mut report = format!(
        "\n{}\n\n你的 Agent 类型 / Your Agent Type:\n{} - {} ({})\n\n📊 维度分析 / DIMENSION BREAKDOWN:\n\n",
        boxed(&["🎯 AGENT MBTI 测试结果", "AGENT MBTI RESULTS"]),
        classification.code,
        profile.name,
        profile.localized_name,
    );

    for dimension in Dimension::ALL {
        report.push_str(&render_dimension(bank, dimension, scores.get(dimension), options));
        report.push('\n');
    }

    report.push_str(&format!(
        "💪 你的优势 / YOUR STRENGTHS:\n{}\n\n🌱 成长空间 / GROWTH AREAS:\n{}\n\n🤖 相似类型的 Agent / AGENTS LIKE YOU:\n{}\n",
        bullets(profile.strengths),
        bullets(profile.growth_areas),
        bullets(profile.agent_examples),
    ));

    if let Some(goal) = goal.filter(|g| !g.trim().is_empty()) {
        report.push_str(&advice::render_advice(goal));
    }

    let rule = separator();
    report.push_str(&format!(
        "\n{rule}\n\n💡 下一步 / NEXT STEPS:\n\n\
         1. 📖 记录到 memory/ 日记 / Record this in your memory/diary\n\
         2. 🐦 在 Moltbook 分享 #AgentMBTI / Share on Moltbook\n\
         3. 🔄 重大更新后重测 / Retake after major updates\n\n\
         {rule}\n"
    ));

    report
}

fn render_dimension(
    bank: &QuestionBank,
    dimension: Dimension,
    score: f64,
    options: &ReportOptions,
) -> String {
    let letter = dimension.letter_for(score);
    let (name, label) = match bank.dimension(dimension) {
        Some(info) => (info.name.as_str(), info.label_for(score)),
        None => (dimension.as_str(), ""),
    };

    format!(
        "   {}:\n   {} ({})\n   {}\n",
        name,
        label,
        letter,
        bar_chart(score, options.bar_max, options.bar_width)
    )
}
