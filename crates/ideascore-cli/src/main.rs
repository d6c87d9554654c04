mod display;
mod samples;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use ideascore_ai::config::{self, DEFAULT_MODEL};
use ideascore_ai::{AiConfig, AnalysisOrchestrator};
use ideascore_core::dashboard::{insights, summarize};
use ideascore_core::{Answers, NewIdea, ScoreVector, Source};
use ideascore_store::IdeaStore;
use serde_json::Value;
use tracing::{Level, info};
use uuid::Uuid;

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Score startup ideas and build Lean Canvases, with AI or heuristics.
#[derive(Parser)]
#[command(name = "ideascore", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    ai: AiArgs,

    /// JSON Lines file holding analysed ideas
    #[arg(long, global = true, env = "IDEASCORE_STORE", default_value = "ideas.jsonl")]
    store: PathBuf,

    /// Log at debug level (per-dimension scores, request details)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct AiArgs {
    /// AI feature flag; only the literal value `false` disables it
    #[arg(long, global = true, env = "AI_ENABLED", default_value = "true")]
    ai_enabled: String,

    /// OpenAI-compatible chat-completions endpoint
    #[arg(long, global = true, env = "AI_API_URL", default_value = DEFAULT_API_URL)]
    ai_api_url: String,

    /// Bearer token for the completion endpoint
    #[arg(long, global = true, env = "AI_API_KEY", hide_env_values = true)]
    ai_api_key: Option<String>,

    /// Model identifier sent with every request
    #[arg(long, global = true, env = "AI_MODEL", default_value = DEFAULT_MODEL)]
    ai_model: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "AI_TIMEOUT_SECS", default_value_t = 30)]
    ai_timeout_secs: u64,
}

impl AiArgs {
    fn to_config(&self) -> AiConfig {
        AiConfig {
            enabled: config::flag_enabled(&self.ai_enabled),
            api_url: Some(self.ai_api_url.clone()),
            api_key: self.ai_api_key.clone(),
            model: self.ai_model.clone(),
            timeout: Duration::from_secs(self.ai_timeout_secs),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Analyse a founder's answers (JSON file) and print scores and Lean Canvas
    Analyze {
        /// Path to a JSON object with the seven answers (camelCase keys)
        answers: PathBuf,
        /// Founder name stored with the idea
        #[arg(long)]
        founder: Option<String>,
        /// Idea title
        #[arg(long)]
        title: Option<String>,
        /// Save the analysed idea to the store
        #[arg(long)]
        save: bool,
        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },

    /// Show the AI configuration and whether AI analysis is available
    CheckAi,

    /// Run an analysis on built-in sample answers to exercise the AI path
    TestAi {
        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },

    /// List stored ideas, oldest first
    Ideas,

    /// Show one stored idea
    Show {
        /// Idea id (UUID)
        id: Uuid,
        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },

    /// Summarise progress across stored ideas for a mentor
    Dashboard {
        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let ai_config = cli.ai.to_config();
    let store = IdeaStore::open(&cli.store);

    match cli.command {
        Command::Analyze {
            answers,
            founder,
            title,
            save,
            json,
        } => cmd_analyze(&ai_config, &store, &answers, founder, title, save, json).await,
        Command::CheckAi => {
            cmd_check_ai(&ai_config);
            Ok(())
        }
        Command::TestAi { json } => cmd_test_ai(&ai_config, json).await,
        Command::Ideas => cmd_ideas(&store),
        Command::Show { id, json } => cmd_show(&store, id, json),
        Command::Dashboard { json } => cmd_dashboard(&store, json),
    }
}

// ── Commands ──

async fn cmd_analyze(
    ai_config: &AiConfig,
    store: &IdeaStore,
    path: &Path,
    founder: Option<String>,
    title: Option<String>,
    save: bool,
    json: bool,
) -> anyhow::Result<()> {
    let answers = read_answers(path)?;
    let orchestrator = build_orchestrator(ai_config);
    let result = orchestrator.analyze(&answers).await;

    if !save {
        if json {
            println!("{}", to_json_with_insights(&result, &result.scores)?);
        } else {
            display::print_analysis(&result, title.as_deref());
        }
        return Ok(());
    }

    let idea = NewIdea::from_analysis(founder, title, answers, result);
    let record = store
        .insert(idea)
        .with_context(|| format!("saving idea to {}", store.path().display()))?;
    if json {
        println!("{}", to_json_with_insights(&record, record.scores())?);
    } else {
        display::print_idea_card(&record);
        println!();
        println!("Saved as {} in {}", record.id, store.path().display());
    }
    Ok(())
}

fn cmd_check_ai(ai_config: &AiConfig) {
    let caps = config::capabilities(&ai_config.model);

    println!("=== AI configuration ===");
    println!("  {:<26} {}", "AI_ENABLED", ai_config.enabled);
    println!(
        "  {:<26} {}",
        "AI_API_URL",
        ai_config.endpoint().unwrap_or("(not set)")
    );
    println!(
        "  {:<26} {}",
        "AI_API_KEY",
        ai_config
            .masked_key()
            .map(|k| format!("set ({k})"))
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("  {:<26} {}", "AI_MODEL", ai_config.model);
    println!("  {:<26} {}s", "AI_TIMEOUT_SECS", ai_config.timeout.as_secs());
    println!(
        "  {:<26} {}",
        "structured output",
        if caps.structured_output { "yes" } else { "no" }
    );
    println!();

    match ai_config.unavailable_reason() {
        None => {
            println!("AI is AVAILABLE.");
            println!("Run `ideascore test-ai` to exercise a real analysis.");
        }
        Some(reason) => {
            println!("AI is NOT AVAILABLE: {reason}.");
            println!();
            println!("To enable AI analysis, set these in the environment or a .env file:");
            println!("  AI_API_URL={DEFAULT_API_URL}");
            println!("  AI_API_KEY=<your-api-key>");
            println!("  AI_MODEL={DEFAULT_MODEL}");
            println!("  AI_ENABLED=true");
        }
    }
}

async fn cmd_test_ai(ai_config: &AiConfig, json: bool) -> anyhow::Result<()> {
    if let Some(reason) = ai_config.unavailable_reason() {
        bail!("AI is not available: {reason}; run `ideascore check-ai` for details");
    }

    let answers = samples::sample_answers();
    let result = AnalysisOrchestrator::new(ai_config).analyze(&answers).await;

    if json {
        println!("{}", to_json_with_insights(&result, &result.scores)?);
    } else {
        display::print_analysis(&result, Some("Sample idea: SMB bookkeeping"));
    }

    match result.source {
        Source::Ai => eprintln!("AI analysis completed successfully."),
        Source::Heuristic => eprintln!("AI analysis failed; the heuristic fallback was used."),
    }
    Ok(())
}

fn cmd_ideas(store: &IdeaStore) -> anyhow::Result<()> {
    let records = store
        .list()
        .with_context(|| format!("reading {}", store.path().display()))?;
    if records.is_empty() {
        println!("No ideas stored in {}.", store.path().display());
        return Ok(());
    }
    display::print_ideas_table(&records);
    Ok(())
}

fn cmd_show(store: &IdeaStore, id: Uuid, json: bool) -> anyhow::Result<()> {
    let record = store.get(id)?;
    if json {
        println!("{}", to_json_with_insights(&record, record.scores())?);
    } else {
        display::print_idea_card(&record);
    }
    Ok(())
}

fn cmd_dashboard(store: &IdeaStore, json: bool) -> anyhow::Result<()> {
    let records = store
        .list()
        .with_context(|| format!("reading {}", store.path().display()))?;
    let summary = summarize(&records);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display::print_dashboard(&summary);
    }
    Ok(())
}

/// Heuristic-only when the configuration rules AI out.
fn build_orchestrator(ai_config: &AiConfig) -> AnalysisOrchestrator {
    match ai_config.unavailable_reason() {
        Some(reason) => {
            info!(reason, "AI analysis unavailable, using heuristic methods");
            AnalysisOrchestrator::heuristic_only()
        }
        None => AnalysisOrchestrator::new(ai_config),
    }
}

// ── Output ──

/// Pretty JSON of `item` with an `insights` array for `scores` added.
fn to_json_with_insights<T: serde::Serialize>(
    item: &T,
    scores: &ScoreVector,
) -> anyhow::Result<String> {
    let mut value = serde_json::to_value(item)?;
    if let Value::Object(map) = &mut value {
        map.insert("insights".to_string(), serde_json::to_value(insights(scores))?);
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

// ── Input ──

fn read_answers(path: &Path) -> anyhow::Result<Answers> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading answers from {}", path.display()))?;
    let answers: Answers = serde_json::from_str(&text)
        .with_context(|| format!("parsing answers in {}", path.display()))?;
    if answers.answered_count() == 0 {
        tracing::warn!(path = %path.display(), "no questions answered; every score will be low");
    }
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_build_ai_config() {
        let cli = Cli::try_parse_from([
            "ideascore",
            "--ai-enabled",
            "false",
            "--ai-api-url",
            "http://localhost:8080/v1/chat/completions",
            "--ai-model",
            "gpt-4o",
            "--ai-timeout-secs",
            "5",
            "check-ai",
        ])
        .unwrap();
        let config = cli.ai.to_config();

        assert!(!config.enabled);
        assert!(!config.is_available());
        assert_eq!(config.endpoint(), Some("http://localhost:8080/v1/chat/completions"));
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(matches!(cli.command, Command::CheckAi));
    }

    #[test]
    fn unavailable_config_builds_heuristic_orchestrator() {
        let config = AiConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(!build_orchestrator(&config).ai_enabled());
    }

    #[test]
    fn json_output_carries_insights() {
        use ideascore_core::{AnalysisResult, LeanCanvas};

        let mut scores = ScoreVector::from_fn(|_| 60.0);
        scores.set(ideascore_core::Dimension::Competition, 20.0);
        scores.set(ideascore_core::Dimension::TechFeasibility, 85.0);
        let result = AnalysisResult {
            scores,
            lean_canvas: LeanCanvas::default(),
            source: Source::Heuristic,
        };

        let text = to_json_with_insights(&result, &result.scores).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["source"], "heuristic");
        let found = value["insights"].as_array().unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0]["kind"], "warning");
        assert_eq!(found[0]["dimension"], "competition");
        assert_eq!(found[1]["kind"], "strength");
        assert_eq!(found[1]["dimension"], "techFeasibility");
    }

    #[test]
    fn analyze_takes_path_and_options() {
        let cli = Cli::try_parse_from([
            "ideascore", "analyze", "answers.json", "--title", "Invoicer", "--save",
        ])
        .unwrap();
        match cli.command {
            Command::Analyze { answers, title, save, json, .. } => {
                assert_eq!(answers, PathBuf::from("answers.json"));
                assert_eq!(title.as_deref(), Some("Invoicer"));
                assert!(save);
                assert!(!json);
            }
            _ => panic!("expected analyze"),
        }
    }
}
