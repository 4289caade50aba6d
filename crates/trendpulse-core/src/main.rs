//! TrendPulse CLI
//!
//! Command-line interface for the TrendPulse dashboard.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use trendpulse::api::{ApiClient, DashboardSource};
use trendpulse::config::{default_log_dir, LogFormat};
use trendpulse::dashboard::agents::default_roster;
use trendpulse::dashboard::engagement::{lift_progress, target_reached, LIFT_TARGET_PERCENT};
use trendpulse::dashboard::format::{
    capitalize, format_compact, format_grouped, format_percent, truncate, CONTENT_PREVIEW_CHARS,
};
use trendpulse::dashboard::{Payload, Resource, StatusCounts};
use trendpulse::models::PostStatus;
use trendpulse::tui::theme::post_status_style;
use trendpulse::tui::App;
use trendpulse::Config;

/// TrendPulse - Multi-agent social media intelligence dashboard
#[derive(Parser)]
#[command(name = "trendpulse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TRENDPULSE_CONFIG")]
    config: Option<PathBuf>,

    /// Backend base URL, overrides api.base_url
    #[arg(long, global = true, env = "TRENDPULSE_API_URL")]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (for commands that support it)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Launch the TUI dashboard (default)
    Dashboard {
        /// Clock tick interval (e.g. "1s", "500ms")
        #[arg(long)]
        tick_rate: Option<humantime::Duration>,
    },

    /// List trending topics
    Trends,

    /// List content drafts
    Drafts,

    /// List scheduled posts with per-status counts
    Posts,

    /// Show engagement summary and per-post metrics
    Metrics,

    /// Show per-platform connection status and trend counts
    Platforms,

    /// Show the agent roster
    Agents,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env first so env-backed flags see it
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();
    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::Dashboard { tick_rate: None });

    // Load configuration
    let config = match load_config(cli.config.as_deref(), cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The dashboard owns the terminal, so it logs to a file
    let log_to_file = matches!(command, Commands::Dashboard { .. });
    let _guard = match init_logging(&config, cli.verbose, log_to_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error initialising logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Execute command
    let result = match command {
        Commands::Dashboard { tick_rate } => run_dashboard(config, tick_rate.map(Into::into)).await,
        Commands::Trends => run_trends(&config, cli.format).await,
        Commands::Drafts => run_drafts(&config, cli.format).await,
        Commands::Posts => run_posts(&config, cli.format).await,
        Commands::Metrics => run_metrics(&config, cli.format).await,
        Commands::Platforms => run_platforms(&config, cli.format).await,
        Commands::Agents => run_agents(cli.format),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>, api_url: Option<&str>) -> anyhow::Result<Config> {
    let config = Config::load(path)?;
    match api_url {
        Some(url) => Ok(config.with_base_url(url)?),
        None => Ok(config),
    }
}

fn init_logging(
    config: &Config,
    verbose: bool,
    log_to_file: bool,
) -> anyhow::Result<Option<WorkerGuard>> {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (writer, guard) = if log_to_file {
        let dir = config.tui.log_dir.clone().unwrap_or_else(default_log_dir);
        std::fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::daily(&dir, "trendpulse.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (BoxMakeWriter::new(writer), Some(guard))
    } else {
        (BoxMakeWriter::new(std::io::stderr), None)
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!log_to_file);

    match config.logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(guard)
}

async fn run_dashboard(config: Config, tick_rate: Option<Duration>) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let tick_rate = tick_rate.unwrap_or(config.tui.tick_rate);
    info!(base_url = %client.base_url(), ?tick_rate, "starting dashboard");

    let mut app = App::new(tick_rate);
    app.run(Arc::new(client)).await?;

    info!("dashboard closed");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_trends(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let trends = client.trends().await?;

    if format == OutputFormat::Json {
        return print_json(&trends);
    }

    println!("{:<28} {:<10} {:>10} {:>9} {:>7}", "TOPIC", "PLATFORM", "MENTIONS", "SENTIMENT", "GROWTH");
    for trend in &trends {
        println!(
            "{:<28} {:<10} {:>10} {:>9} {:>7}",
            truncate(&trend.topic, 25),
            trend.platform.display_name(),
            format_grouped(trend.volume),
            trend.sentiment.map_or_else(|| "-".to_string(), |s| s.to_string()),
            trend.growth.as_ref().map_or_else(|| "-".to_string(), ToString::to_string),
        );
    }
    println!("\n{} trends", trends.len());
    Ok(())
}

async fn run_drafts(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let drafts = client.drafts().await?;

    if format == OutputFormat::Json {
        return print_json(&drafts);
    }

    for draft in &drafts {
        let variant = draft
            .variant
            .map(|v| format!(" variant {v}"))
            .unwrap_or_default();
        println!(
            "[{}] {} ({}){variant}, created {}",
            capitalize(&draft.status.to_string()),
            draft.topic,
            draft.platform.display_name(),
            draft.created_at,
        );
        if let Some(when) = &draft.scheduled_for {
            println!("    scheduled for {when}");
        }
        println!("    {}", truncate(&draft.content, CONTENT_PREVIEW_CHARS));
    }
    println!("\n{} drafts", drafts.len());
    Ok(())
}

async fn run_posts(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let posts = client.posts().await?;
    let counts = StatusCounts::tally(&posts);

    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct PostsView<'a> {
            counts: &'a StatusCounts,
            posts: &'a [trendpulse::models::ScheduledPost],
        }
        return print_json(&PostsView {
            counts: &counts,
            posts: &posts,
        });
    }

    let summary: Vec<String> = PostStatus::ALL
        .into_iter()
        .map(|status| format!("{}: {}", capitalize(status.as_str()), counts.get(status)))
        .collect();
    println!("{}\n", summary.join("  "));

    for post in &posts {
        let (_, glyph) = post_status_style(post.status);
        let variant = post.variant.map(|v| format!(" [{v}]")).unwrap_or_default();
        println!(
            "{glyph} {:<8} {}{variant} ({}) {}",
            post.status.as_str(),
            post.topic,
            post.platform.display_name(),
            post.scheduled_for.as_deref().unwrap_or(""),
        );
        if let Some(buffer_id) = &post.buffer_post_id {
            println!("    buffer id {buffer_id}");
        }
        println!("    {}", truncate(&post.content, CONTENT_PREVIEW_CHARS));
    }
    Ok(())
}

async fn run_metrics(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let report = client.metrics().await?;

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    let summary = &report.summary;
    println!("Total posts:     {}", format_grouped(summary.total_posts));
    println!("Avg engagement:  {}", format_percent(summary.avg_engagement));
    if let Some(reach) = summary.total_reach {
        println!("Total reach:     {}", format_compact(reach));
    }
    if let Some(baseline) = summary.baseline_engagement {
        println!("Baseline:        {}", format_percent(baseline));
    }
    println!(
        "Lift:            {} of {} target ({:.0}% progress){}",
        format_percent(summary.engagement_lift),
        format_percent(LIFT_TARGET_PERCENT),
        lift_progress(summary.engagement_lift),
        if target_reached(summary.engagement_lift) {
            ", target reached"
        } else {
            ""
        },
    );

    if !report.metrics.is_empty() {
        println!("\n{:<12} {:>8} {:>9} {:>8} {:>8} {:>10}", "PLATFORM", "LIKES", "COMMENTS", "SHARES", "REACH", "ENGAGEMENT");
        for metric in &report.metrics {
            println!(
                "{:<12} {:>8} {:>9} {:>8} {:>8} {:>10}",
                metric.platform.display_name(),
                format_compact(metric.likes),
                format_compact(metric.comments),
                format_compact(metric.shares),
                metric.reach.map_or_else(|| "-".to_string(), format_compact),
                format_percent(metric.engagement_rate),
            );
        }
    }
    Ok(())
}

async fn run_platforms(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let Payload::PlatformOverview(rows) = Resource::PlatformOverview.load(&client).await? else {
        anyhow::bail!("unexpected payload for platform overview");
    };

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    for row in &rows {
        println!(
            "{:<10} {:>3} trends  {}",
            row.platform.display_name(),
            row.trend_count,
            row.label()
        );
    }
    Ok(())
}

fn run_agents(format: OutputFormat) -> anyhow::Result<()> {
    let agents = default_roster();

    if format == OutputFormat::Json {
        return print_json(&agents);
    }

    for agent in &agents {
        println!("{} [{}] - {}", agent.name, agent.status, agent.description);
        let metrics: Vec<String> = agent
            .metrics
            .iter()
            .map(|(key, value)| format!("{value} {}", key.to_lowercase()))
            .collect();
        println!("    {}  (last activity {})", metrics.join(", "), agent.last_activity);
    }
    Ok(())
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "trendpulse", &mut io::stdout());
}
