//! Command line front end for the chatmood scorers.
//!
//! `score` prints one JSON record per message; `summary` aggregates per
//! sender. Lexicon locations come from flags or from the environment
//! (`CHATMOOD_POLARITY_LEXICON`, `CHATMOOD_EMOTION_LEXICON`). All logging
//! goes to stderr so stdout stays machine-readable.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use chatmood_core::{AppConfig, EmotionScores, PolarityScores};
use chatmood_sentiment::{normalize, tokenize, EmotionLexicon, PolarityLexicon};

mod input;
mod score;
mod summary;


#[derive(Debug, Parser)]
#[command(
    name = "chatmood-cli",
    about = "Lexicon sentiment and emotion scoring for chat logs",
    version
)]
struct Cli {
    /// Polarity lexicon file (overrides CHATMOOD_POLARITY_LEXICON).
    #[arg(long, global = true, value_name = "PATH")]
    polarity_lexicon: Option<PathBuf>,

    /// Emotion lexicon file (overrides CHATMOOD_EMOTION_LEXICON).
    #[arg(long, global = true, value_name = "PATH")]
    emotion_lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score each message and print one JSON record per line.
    Score(InputArgs),
    /// Aggregate scores per sender and print one JSON report.
    Summary(InputArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Input file; reads stdin when omitted or "-".
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Input format.
    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    format: InputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// One message per line, text only.
    Text,
    /// One JSON object per line with sender, timestamp, and text fields.
    Jsonl,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Command::Score(args) => score::run(&config, &args),
        Command::Summary(args) => summary::run(&config, &args),
    }
}

/// Flags override the environment configuration; each lexicon path falls
/// back to its environment variable independently.
fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let polarity_lexicon_path = resolve_lexicon_path(
        cli.polarity_lexicon.as_ref(),
        "CHATMOOD_POLARITY_LEXICON",
        "--polarity-lexicon",
    )?;
    let emotion_lexicon_path = resolve_lexicon_path(
        cli.emotion_lexicon.as_ref(),
        "CHATMOOD_EMOTION_LEXICON",
        "--emotion-lexicon",
    )?;
    let log_level = std::env::var("CHATMOOD_LOG_LEVEL")
        .unwrap_or_else(|_| chatmood_core::config::DEFAULT_LOG_LEVEL.to_string());

    Ok(AppConfig {
        polarity_lexicon_path,
        emotion_lexicon_path,
        log_level,
    })
}

fn resolve_lexicon_path(
    flag: Option<&PathBuf>,
    var: &str,
    flag_name: &str,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.clone());
    }
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => anyhow::bail!("lexicon path missing; set {var} or pass {flag_name}"),
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_lexicons(config: &AppConfig) -> anyhow::Result<(PolarityLexicon, EmotionLexicon)> {
    let polarity = PolarityLexicon::load(&config.polarity_lexicon_path)?;
    tracing::info!(words = polarity.len(), "polarity lexicon ready");
    let emotion = EmotionLexicon::load(&config.emotion_lexicon_path)?;
    tracing::info!(words = emotion.len(), "emotion lexicon ready");
    Ok((polarity, emotion))
}

/// Run both scorers over one message text. Polarity sees the raw text
/// (capitalization and punctuation carry signal); the emotion scorer sees
/// normalized alphanumeric words.
fn score_text(
    polarity: &PolarityLexicon,
    emotion: &EmotionLexicon,
    text: &str,
) -> (PolarityScores, EmotionScores) {
    let polarity_scores = polarity.polarity_scores(text);
    let words = tokenize::alnum_words(&normalize::normalize_contractions(text));
    let emotion_scores = emotion.score_words(&words);
    (polarity_scores, emotion_scores)
}
