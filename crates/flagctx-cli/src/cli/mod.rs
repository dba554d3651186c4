//! CLI entry and dispatch.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use flagctx_core::config::{self, Config};
use flagctx_core::{FlagProvider, logging};

mod commands;

#[derive(Parser)]
#[command(name = "flagctx")]
#[command(version)]
#[command(about = "Log in and watch the feature-flag context switch")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of $FLAGCTX_HOME/config.toml
    #[arg(long, global = true, value_name = "PATH", env = "FLAGCTX_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Submit the login form without the TUI
    Login {
        /// Username (becomes the context key)
        #[arg(long)]
        username: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Role used for access targeting
        #[arg(long)]
        role: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Shows the config file path
    Path,
    /// Writes the default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = match logging::init(&config::paths::logs_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(config::paths::config_path);
    tracing::debug!(path = %config_path.display(), "using config");

    match cli.command {
        None => {
            let config = Config::load_from(&config_path)?;
            let provider = bootstrap(&config).await?;
            crate::modes::run_login_form(&config, provider).await
        }
        Some(Commands::Login {
            username,
            email,
            role,
        }) => {
            let config = Config::load_from(&config_path)?;
            let provider = bootstrap(&config).await?;
            commands::login::run(&provider, username, email, role).await
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
    }
}

/// Constructs the provider with the anonymous context from config.
///
/// Any failure here is fatal; there is no fallback UI.
async fn bootstrap(config: &Config) -> Result<FlagProvider> {
    let source = Arc::new(config.flag_source()?);
    FlagProvider::initialize(config.provider_config(), source)
        .await
        .context("Failed to initialize flag provider")
}
