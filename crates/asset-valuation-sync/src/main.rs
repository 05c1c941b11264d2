//! Asset valuation sync — entry point.

use std::time::Duration;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use asset_valuation::{classify, load_config, ConfigEntry};
use asset_valuation_sync::renderer::chromium::ChromiumRenderer;
use asset_valuation_sync::renderer::Renderer;
use asset_valuation_sync::settings;
use asset_valuation_sync::{ExtractOptions, LunchMoneyClient, Pipeline, DEFAULT_WAIT_TIMEOUT};

#[derive(Parser)]
#[command(
    name = "asset-valuation-sync",
    about = "Scrape vehicle and home valuations and update Lunch Money asset balances",
    version
)]
struct Cli {
    /// Path to the asset config JSON.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape every configured asset and update the ledger (default).
    Run {
        /// Lunch Money API base URL.
        /// Also reads from LUNCH_MONEY_API_BASE env var.
        #[arg(long)]
        api_base: Option<String>,

        /// Chromium executable. Also reads from ASSET_SYNC_CHROMIUM_PATH env var.
        #[arg(long)]
        chromium: Option<String>,

        /// Directory for failure screenshots (default: system temp dir).
        #[arg(long)]
        screenshot_dir: Option<String>,

        /// Seconds to wait for a price node before reading anyway.
        #[arg(long, default_value_t = DEFAULT_WAIT_TIMEOUT.as_secs())]
        wait_timeout_secs: u64,

        /// Compute balances but do not call the ledger.
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse the asset config and show what each entry would scrape.
    Check,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = settings::resolve_config_path(cli.config.as_deref());

    match cli.command.unwrap_or(Commands::Run {
        api_base: None,
        chromium: None,
        screenshot_dir: None,
        wait_timeout_secs: DEFAULT_WAIT_TIMEOUT.as_secs(),
        dry_run: false,
    }) {
        Commands::Run {
            api_base,
            chromium,
            screenshot_dir,
            wait_timeout_secs,
            dry_run,
        } => {
            let token = match settings::resolve_api_key() {
                Ok(token) => token,
                Err(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(1);
                }
            };

            let entries = load_config(&config_path)?;
            tracing::info!("loaded {} asset(s) from {}", entries.len(), config_path.display());

            let ledger = LunchMoneyClient::with_base(
                token,
                settings::resolve_api_base(api_base.as_deref()),
            )
            .context("cannot build the Lunch Money client")?;
            let options = ExtractOptions {
                navigation_timeout: None,
                wait_timeout: Duration::from_secs(wait_timeout_secs),
                screenshot_dir: settings::resolve_screenshot_dir(screenshot_dir.as_deref()),
            };

            let renderer = ChromiumRenderer::new(chromium.map(Into::into))
                .await
                .context("cannot start the browser")?;

            let summary = Pipeline::new(&renderer, &ledger, options)
                .dry_run(dry_run)
                .run(&entries)
                .await;

            if let Err(e) = renderer.shutdown().await {
                tracing::warn!("browser shutdown failed: {e:#}");
            }

            tracing::info!(
                updated = summary.updated,
                would_update = summary.would_update,
                skipped = summary.skipped,
                unsupported = summary.unsupported,
                ledger_failed = summary.ledger_failed,
                "run finished"
            );
            println!(
                "assets updated ({} of {} sent)",
                summary.updated,
                summary.total()
            );
        }

        Commands::Check => {
            let entries = load_config(&config_path)?;
            println!("Config: {}", config_path.display());
            for entry in &entries {
                match entry {
                    ConfigEntry::Asset(asset) => match classify(&asset.source) {
                        Ok(plan) => println!(
                            "  {}: {} ({} source(s))",
                            asset.id,
                            serde_json::to_string(&plan)?,
                            plan.source_count()
                        ),
                        Err(e) => println!("  {}: unsupported ({e})", asset.id),
                    },
                    ConfigEntry::Rejected { key, reason } => {
                        println!("  {key}: rejected ({reason})")
                    }
                }
            }
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                shell,
                &mut cmd,
                "asset-valuation-sync",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
