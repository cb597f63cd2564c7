use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use lfg_core::LfgConfig;

mod commands;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "lfg.toml";

#[derive(Parser)]
#[command(
    name = "lfg",
    about = "lfg — backend connectivity checks and feed ranking",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to lfg.toml (default: ./lfg.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the backend health endpoint
    Health {
        #[command(subcommand)]
        action: HealthAction,
    },
    /// Order feed pages the way the dashboard shows them
    Feed {
        #[command(subcommand)]
        action: FeedAction,
    },
}

#[derive(Subcommand)]
enum HealthAction {
    /// Probe once and report the connection state
    Check {
        /// Health URL (overrides [health].url)
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Poll every interval until the backend answers or time runs out
    Wait {
        #[arg(short, long)]
        url: Option<String>,
        /// Maximum time to wait, e.g. "30s" or "2m"
        #[arg(short, long, default_value = "30s")]
        max_wait: String,
    },
    /// Run one exponential-backoff reconnect sequence.
    ///
    /// Ctrl-C abandons the sequence.
    Reconnect {
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[derive(Subcommand)]
enum FeedAction {
    /// Rank a saved feed page (the list endpoint's JSON response)
    Rank {
        /// Path to the page JSON
        #[arg(short, long)]
        input: PathBuf,
        /// Comma-separated author ids the viewer follows
        #[arg(short, long, value_delimiter = ',')]
        following: Vec<String>,
        /// Reference time (RFC 3339); defaults to now
        #[arg(long)]
        now: Option<String>,
        /// Print the priority order without the shuffle
        #[arg(long)]
        ordered: bool,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lfg=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Health { action } => {
            let settings = config.health_settings()?;
            let ok = match action {
                HealthAction::Check { url } => {
                    commands::health::check(&settings, url.as_deref()).await?
                }
                HealthAction::Wait { url, max_wait } => {
                    commands::health::wait(&settings, url.as_deref(), &max_wait).await?
                }
                HealthAction::Reconnect { url } => {
                    commands::health::reconnect(&settings, url.as_deref()).await?
                }
            };
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Feed { action } => match action {
            FeedAction::Rank {
                input,
                following,
                now,
                ordered,
                seed,
                format,
            } => {
                let opts = commands::feed::RankOptions {
                    following,
                    now: now.as_deref(),
                    ordered,
                    seed,
                    format: &format,
                };
                commands::feed::rank(&config.feed_settings()?, &input, &opts)?;
                Ok(ExitCode::SUCCESS)
            }
        },
    }
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<LfgConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return Ok(LfgConfig::from_file(path)?);
    }
    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        debug!(path = %fallback.display(), "loading config");
        Ok(LfgConfig::from_file(fallback)?)
    } else {
        Ok(LfgConfig::default())
    }
}
