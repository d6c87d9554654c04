//! Human-readable cards and tables for analyses, stored ideas and the
//! mentor dashboard.

use ideascore_core::dashboard::{average_score, insights};
use ideascore_core::{
    AnalysisResult, Answers, DashboardSummary, Dimension, IdeaRecord, InsightKind, LeanCanvas,
    ScoreVector,
};
use ideascore_core::answers::AnswerField;

const BAR_WIDTH: usize = 20;
const MAX_TITLE_CHARS: usize = 40;

// ── Public API ──

/// Print a fresh analysis as a card.
pub fn print_analysis(result: &AnalysisResult, title: Option<&str>) {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => println!("=== {title} ==="),
        None => println!("=== Idea analysis ==="),
    }
    println!("  {:<26} {}", "Source", result.source);
    println!();
    print_scores(&result.scores);
    print_insights(&result.scores);
    print_canvas(&result.lean_canvas);
}

/// Print a stored idea with its metadata, answers and analysis.
pub fn print_idea_card(record: &IdeaRecord) {
    println!("=== {} ===", record.title());
    println!();

    println!("Identity");
    println!("  {:<26} {}", "id", record.id);
    if let Some(founder) = record.idea.founder_name.as_deref() {
        println!("  {:<26} {}", "founder", founder);
    }
    println!("  {:<26} {}", "analysis source", record.idea.analysis_source);
    println!();

    print_answers(&record.idea.answers);
    print_scores(record.scores());
    print_insights(record.scores());
    print_canvas(&record.idea.lean_canvas);

    println!("Timestamps");
    println!("  {:<26} {}", "created_at", record.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  {:<26} {}", "updated_at", record.updated_at.format("%Y-%m-%d %H:%M:%S UTC"));
}

/// One row per stored idea.
pub fn print_ideas_table(records: &[IdeaRecord]) {
    println!(
        "{:<36}  {:<16}  {:<40}  {:<9}  {:>7}",
        "id", "created", "title", "source", "average"
    );
    for record in records {
        println!(
            "{:<36}  {:<16}  {:<40}  {:<9}  {:>7.1}",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            truncate(&record.title(), MAX_TITLE_CHARS),
            record.idea.analysis_source.as_str(),
            average_score(record.scores()),
        );
    }
    println!();
    println!("{} idea(s)", records.len());
}

/// Print the mentor summary, trend table and blind spots.
pub fn print_dashboard(summary: &DashboardSummary) {
    println!("=== Mentor dashboard ===");
    println!("  {:<26} {}", "Ideas analysed", summary.total_ideas);
    if let Some(avg) = summary.first_average {
        println!("  {:<26} {avg:.1}", "First idea average");
    }
    if let Some(avg) = summary.last_average {
        println!("  {:<26} {avg:.1}", "Latest idea average");
    }
    if let Some(diff) = summary.improvement {
        println!("  {:<26} {}", "Improvement", signed(diff));
    }
    println!();
    println!("{}", summary.message);

    if !summary.trends.is_empty() {
        println!();
        println!("Score trend (first → latest)");
        for trend in &summary.trends {
            println!(
                "  {:<26} {:>5.0} → {:>5.0}  {:>6}",
                trend.dimension.label(),
                trend.first,
                trend.last,
                signed(trend.diff),
            );
        }
    }

    if !summary.blind_spots.is_empty() {
        println!();
        println!("Blind spots (latest idea)");
        for spot in &summary.blind_spots {
            println!("  {:<26} {:>5.0}  {}", spot.dimension.label(), spot.score, bar(spot.score));
        }
    }
}

// ── Sections ──

fn print_scores(scores: &ScoreVector) {
    println!("Scores");
    for dim in Dimension::ALL {
        let score = scores.get(dim);
        println!("  {:<26} {:>5.0}  {}", dim.label(), score, bar(score));
    }
    println!("  {:<26} {:>5.1}", "Average", average_score(scores));
    println!();
}

fn print_insights(scores: &ScoreVector) {
    let found = insights(scores);
    if found.is_empty() {
        return;
    }
    println!("Insights");
    for insight in &found {
        println!("  {} {}", insight_marker(insight.kind), insight.title);
        println!("  {:<26} {}", "", insight.message);
    }
    println!();
}

fn print_canvas(canvas: &LeanCanvas) {
    println!("Lean Canvas");
    for (label, text) in canvas.sections() {
        print_multiline(label, text);
    }
    println!();
}

fn print_answers(answers: &Answers) {
    if answers.answered_count() == 0 {
        return;
    }
    println!("Answers");
    for field in AnswerField::ALL {
        if let Some(text) = answers.get(field) {
            print_multiline(field.label(), text);
        }
    }
    println!();
}

// ── Formatting helpers ──

/// Label in the first column, continuation lines aligned under the text.
fn print_multiline(label: &str, text: &str) {
    let mut lines = text.lines();
    println!("  {:<26} {}", label, lines.next().unwrap_or(""));
    for line in lines {
        println!("  {:<26} {}", "", line);
    }
}

fn insight_marker(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "[!]",
        InsightKind::Strength => "[+]",
    }
}

fn bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{head}...")
}
