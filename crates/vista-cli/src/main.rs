use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vista_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vista")]
#[command(author, version, about = "A scroll-revealed landing page in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/vista/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the page in the terminal (default)
    Run,
    /// Scroll a headless page and print every page event
    Simulate {
        /// Page width in columns
        #[arg(short = 'w', long, default_value_t = 100)]
        width: u16,
        /// Terminal height in rows
        #[arg(short = 'H', long, default_value_t = 40)]
        height: u16,
        /// Final scroll offset in pixels
        #[arg(short = 't', long, default_value_t = 6000.0)]
        to: f64,
        /// Scroll step in pixels
        #[arg(short = 's', long, default_value_t = 20.0)]
        step: f64,
        /// Print JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = Arc::new(
        AppConfig::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?,
    );

    // The TUI owns the terminal, so its logs go to a file
    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Simulate {
            width,
            height,
            to,
            step,
            json,
        }) => commands::simulate::run(&config, width, height, to, step, json),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

/// RUST_LOG wins; otherwise `general.log_level` from config
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
