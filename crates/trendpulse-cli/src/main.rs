use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trendpulse_api::PulseClient;
use trendpulse_core::format::format_interest;
use trendpulse_core::transform::to_display_trends;
use trendpulse_core::{snapshot, ApiFeed, Config, Language, PrefStore, TrendFeed};

#[derive(Parser)]
#[command(name = "trendpulse")]
#[command(version, about = "Terminal dashboard for real-time trend analytics", long_about = None)]
struct Cli {
    /// Base URL of the trend-analytics API
    #[arg(long)]
    api_url: Option<String>,

    /// Display language (ko or en); defaults to the stored preference
    #[arg(long)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch one snapshot and print the ranking table, then exit
    Snapshot {
        /// Print raw JSON instead of the table
        #[arg(long)]
        json: bool,

        /// Maximum rows to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging goes to stderr - the TUI owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendpulse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("config unavailable, using defaults: {}", e);
        Config::default()
    });
    let prefs = PrefStore::load();

    let language = cli
        .lang
        .as_deref()
        .and_then(Language::parse)
        .unwrap_or_else(|| prefs.language());

    let base_url = config.resolve_base_url(cli.api_url.clone());
    tracing::info!("using API at {}", base_url);

    let feed = ApiFeed::new(PulseClient::with_base_url(base_url));

    match cli.command {
        Some(Commands::Snapshot { json, limit }) => print_snapshot(&feed, language, json, limit).await,
        None => {
            let app = trendpulse_tui::App::new(language, prefs.dark_mode());
            let poll_interval = Duration::from_millis(config.ui.poll_interval_ms);
            trendpulse_tui::run_tui(app, Arc::new(feed), prefs, poll_interval).await
        }
    }
}

/// One-shot fetch through the full pipeline, printed headlessly.
async fn print_snapshot(
    feed: &dyn TrendFeed,
    language: Language,
    json: bool,
    limit: usize,
) -> anyhow::Result<()> {
    let snapshot = snapshot::refresh(feed, language).await;

    let mut rng = rand::thread_rng();
    let trends = to_display_trends(&snapshot.rankings, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&trends)?);
        return Ok(());
    }

    if let Some(stats) = &snapshot.stats {
        println!(
            "collected {}  analyses {}  rankings {}",
            stats.total_collected, stats.total_analysis, stats.total_rankings
        );
    }

    println!(
        "{:>4}  {:<28} {:<14} {:>9}  {:>6}  {}",
        "rank", "keyword", "category", "interest", "change", "platform"
    );
    for trend in trends.iter().take(limit) {
        println!(
            "{:>4}  {:<28} {:<14} {:>9}  {:>5}%  {}",
            trend.id,
            trend.keyword,
            trend.category.label(language),
            format_interest(trend.interest_score),
            trend.change,
            trend.platform
        );
    }

    for surge in &snapshot.surges {
        println!(
            "surge: {}  +{:.0}%  #{} → #{}  {:.1}x",
            surge.topic,
            surge.interest_change_rate,
            surge.previous_rank,
            surge.current_rank,
            surge.interest_multiplier
        );
    }

    Ok(())
}
