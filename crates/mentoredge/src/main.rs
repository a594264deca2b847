//! MentorEdge - Entry Point
//!
//! Builds recommendations for one profile and exports them, or serves the
//! recommendation tool over MCP stdio.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mentoredge::config::{Config, api, defaults};
use mentoredge::formatters;
use mentoredge::models::{ProfileInput, ResponseFormat, ScoringWeights, UserProfile};
use mentoredge::server::McpServer;
use mentoredge::{Recommender, SemanticScholarClient};

#[derive(Parser, Debug)]
#[command(name = "mentoredge")]
#[command(about = "Personalized academic paper recommendations from Semantic Scholar")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// JSON profile file (camelCase keys); overrides the inline profile flags
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Researcher name
    #[arg(long, default_value = "")]
    name: String,

    /// Research interest (repeatable, descriptive only)
    #[arg(long = "interest")]
    interests: Vec<String>,

    /// Search keyword (repeatable, one query each)
    #[arg(long = "keyword", short = 'k')]
    keywords: Vec<String>,

    /// Only consider papers published in or after this year
    #[arg(long)]
    min_year: Option<i32>,

    /// Weight of search relevance
    #[arg(long, default_value_t = 0.5)]
    relevance_weight: f64,

    /// Weight of citation impact
    #[arg(long, default_value_t = 0.3)]
    citations_weight: f64,

    /// Weight of recency
    #[arg(long, default_value_t = 0.2)]
    recency_weight: f64,

    /// Papers fetched per keyword (1-100)
    #[arg(long, default_value_t = defaults::PAPERS_PER_KEYWORD)]
    papers_per_keyword: usize,

    /// Recommendations to return
    #[arg(long, default_value_t = defaults::TOP_N)]
    top_n: usize,

    /// Keyword queries in flight at once
    #[arg(long, default_value_t = defaults::FETCH_CONCURRENCY)]
    concurrency: usize,

    /// CSV file to export to
    #[arg(long, short = 'o', default_value = defaults::OUTPUT_FILE)]
    output: PathBuf,

    /// Format printed to stdout
    #[arg(long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Serve the recommendation tool over MCP stdio instead of running once
    #[arg(long)]
    mcp: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable listing
    #[default]
    Markdown,
    /// JSON array
    Json,
    /// Export records
    Csv,
}

impl From<OutputFormat> for ResponseFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Json => Self::Json,
            OutputFormat::Csv => Self::Csv,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries results (and MCP frames), so logs go to stderr
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn load_profile(cli: &Cli) -> anyhow::Result<UserProfile> {
    if let Some(path) = &cli.profile {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("Invalid profile {}", path.display()));
    }

    let input = ProfileInput {
        name: cli.name.clone(),
        research_interests: cli.interests.clone(),
        primary_keywords: cli.keywords.clone(),
        min_year: cli.min_year,
        scoring_weights: ScoringWeights::new(
            cli.relevance_weight,
            cli.citations_weight,
            cli.recency_weight,
        ),
    };

    UserProfile::try_from(input).context("Invalid profile")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        mcp = cli.mcp,
        "Starting MentorEdge"
    );

    let config = Config::new(cli.api_key.clone().filter(|key| !key.trim().is_empty()));
    if config.has_api_key() {
        tracing::info!("API key found, using authenticated requests");
    } else {
        tracing::info!("No API key found, using public rate limits (5 req/s)");
    }

    let client = SemanticScholarClient::new(config)?;
    let recommender = Recommender::new(Arc::new(client)).with_fetch_concurrency(cli.concurrency);

    if cli.mcp {
        return McpServer::new(recommender).run_stdio().await;
    }

    let profile = load_profile(&cli)?;
    tracing::info!(
        profile = profile.name(),
        keywords = ?profile.primary_keywords(),
        min_year = ?profile.min_year(),
        "Loaded profile"
    );

    let papers_per_keyword = cli.papers_per_keyword.clamp(1, api::MAX_SEARCH_LIMIT);
    let recommendations = recommender
        .build(&profile, papers_per_keyword, cli.top_n)
        .await
        .context("Error generating recommendations")?;

    let rendered = formatters::render_report(&profile, &recommendations, cli.format.into())?;
    println!("{rendered}");

    if recommendations.is_empty() {
        tracing::warn!("No recommendations generated, skipping export");
        return Ok(());
    }

    formatters::export_recommendations_csv(&cli.output, &recommendations)
        .with_context(|| format!("Failed to export to {}", cli.output.display()))?;

    Ok(())
}
