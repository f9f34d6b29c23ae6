pub mod ask;
pub mod chat;
pub mod config;

use clap::{Parser, Subcommand};

/// siterep, a construction-project report assistant.
#[derive(Debug, Parser)]
#[command(name = "siterep", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the dashboard server (default when no subcommand is given).
    Serve,
    /// Open an interactive chat REPL against the project record.
    Chat {
        /// Session key (defaults to "cli:chat").
        #[arg(long, default_value = "cli:chat")]
        session: String,
    },
    /// Ask a single question and print the reply.
    Ask {
        /// The question to ask.
        question: String,
        /// Session key (defaults to "cli:ask").
        #[arg(long, default_value = "cli:ask")]
        session: String,
        /// Output the full turn as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `SITEREP_CONFIG` (or
/// `config.toml` by default). Returns the parsed config and the path used.
///
/// Shared by every subcommand so the logic lives in one place.
pub fn load_config() -> anyhow::Result<(sr_domain::config::Config, String)> {
    let config_path =
        std::env::var("SITEREP_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let config = if std::path::Path::new(&config_path).exists() {
        let raw = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        sr_domain::config::Config::default()
    };

    Ok((config, config_path))
}
