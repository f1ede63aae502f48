use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

use workback::config::Config;
use workback::embedding::onnx::OnnxEmbedder;
use workback::error::EngineError;
use workback::graph::auth::DeviceCodeAuth;
use workback::graph::client::GraphClient;
use workback::graph::events::{self, CalendarEvent};
use workback::pipeline::prompts::parse_timestamp;
use workback::scoring::classifier::MeetingClassifier;

/// Workback: meeting value estimation for your calendar.
///
/// Scores your recent meetings by strategic value using local semantic
/// embeddings, classifies them into preparation categories, and assembles
/// an interactive annotation package of workback-plan prompts.
#[derive(Parser)]
#[command(name = "workback", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the ONNX embedding model (~90 MB)
    DownloadModel,

    /// Fetch, score, and package meetings into an annotation report
    Run {
        /// Your email address (identity for sign-in context and role detection)
        email: String,

        /// Use a local JSON export instead of calling Microsoft Graph
        #[arg(long)]
        file: Option<String>,

        /// Days of calendar history to analyze (default: 180)
        #[arg(long, default_value = "180")]
        days: i64,

        /// Directory for the generated package (overrides WORKBACK_OUTPUT_DIR)
        #[arg(long)]
        output: Option<String>,

        /// Number of meetings to score in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Score meetings from a local JSON file and write scored JSON
    Estimate {
        /// Path to a JSON file of calendar events
        input: String,

        /// Path for the scored JSON output
        #[arg(long, short)]
        output: Option<String>,

        /// Number of meetings to score in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workback=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DownloadModel => {
            let config = Config::load()?;

            println!("Downloading ONNX embedding model...");
            println!("  Destination: {}", config.model_dir.display());

            workback::embedding::download::download_model(&config.model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("You can now run `workback run <your-email>`.");
        }

        Commands::Run {
            email,
            file,
            days,
            output,
            concurrency,
        } => {
            let config = Config::load()?;
            config.require_model()?;

            let classifier = build_classifier(&config).await?;

            let meetings = match file {
                Some(path) => {
                    println!("Loading local file: {path}");
                    let meetings = load_events_file(&path, Some(days))?;
                    println!("  {} meetings in the last {days} days", meetings.len());
                    meetings
                }
                None => {
                    let auth = DeviceCodeAuth::new(
                        &config.login_endpoint,
                        &config.tenant,
                        &config.client_id,
                    )?;
                    let token = auth.acquire_token().await?;
                    let client = GraphClient::new(&config.graph_endpoint, token)?;

                    println!("Fetching calendar events for the last {days} days...");
                    let meetings = client.fetch_calendar_events(days).await?;
                    println!("  {} events fetched", meetings.len());
                    meetings
                }
            };

            println!("\nAnalyzing meetings...");
            let entries =
                workback::pipeline::run(&classifier, meetings, &email, concurrency).await?;

            workback::output::terminal::display_package_summary(&entries);

            let output_dir = output.map(PathBuf::from).unwrap_or(config.output_dir);
            let path = workback::output::html::generate_package(&entries, &email, &output_dir)?;

            println!(
                "\n{}",
                format!("Annotation package written to: {}", path.display()).bold()
            );
            println!("  Open it in your browser to start annotating.");
        }

        Commands::Estimate {
            input,
            output,
            concurrency,
        } => {
            let config = Config::load()?;
            config.require_model()?;

            let classifier = build_classifier(&config).await?;

            println!("Loading meetings from {input}...");
            let meetings = load_events_file(&input, None)?;
            println!("  {} meetings loaded", meetings.len());

            if meetings.is_empty() {
                return Err(EngineError::NoMeetings.into());
            }

            // Unlike `run`, estimate scores everything — no small-meeting
            // skip and no role detection.
            let scored = workback::pipeline::score::score_events(
                &classifier,
                meetings,
                0,
                None,
                concurrency,
            )
            .await?;

            let records: Vec<EstimateRecord> = scored
                .iter()
                .map(|m| EstimateRecord {
                    meeting: m.event.subject_or_untitled().to_string(),
                    score: round_to(m.score, 1),
                    category: m.category.as_str(),
                    confidence: round_to(m.confidence, 2),
                    reasoning: &m.reasoning,
                    original_data: &m.event,
                })
                .collect();

            let output_path = match output {
                Some(path) => PathBuf::from(path),
                None => {
                    let stem = Path::new(&input)
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("meetings");
                    config.output_dir.join(format!("{stem}_estimated.json"))
                }
            };
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }

            let json = serde_json::to_string_pretty(&records)
                .context("Failed to serialize scored records")?;
            std::fs::write(&output_path, json)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;

            println!(
                "\n{}",
                format!("Results saved to: {}", output_path.display()).bold()
            );
        }
    }

    Ok(())
}

/// One scored record in the `estimate` output.
#[derive(Serialize)]
struct EstimateRecord<'a> {
    meeting: String,
    score: f64,
    category: &'a str,
    confidence: f64,
    reasoning: &'a str,
    original_data: &'a CalendarEvent,
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Load the embedder and build the classifier (embedding all anchors).
async fn build_classifier(config: &Config) -> Result<MeetingClassifier> {
    println!("Loading embedding model...");
    let embed_dir = workback::embedding::download::embedding_model_dir(&config.model_dir);
    let embedder =
        OnnxEmbedder::load(&embed_dir).map_err(|e| EngineError::ModelUnavailable(e.to_string()))?;

    println!("Preparing anchor embeddings...");
    let classifier = MeetingClassifier::new(Arc::new(embedder)).await?;
    Ok(classifier)
}

/// Load a calendar export from disk, optionally windowed to the last
/// `days_back` days (events whose start won't parse are dropped from a
/// windowed load, mirroring the API's date filter).
fn load_events_file(path: &str, days_back: Option<i64>) -> Result<Vec<CalendarEvent>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {path}"))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {path}"))?;

    let mut meetings = events::parse_events_json(value)?;

    if let Some(days) = days_back {
        let end = Utc::now().naive_utc();
        let start = end - Duration::days(days);
        meetings.retain(|event| {
            event
                .start_date_time()
                .and_then(parse_timestamp)
                .is_some_and(|dt| dt >= start && dt <= end)
        });
    }

    Ok(meetings)
}
