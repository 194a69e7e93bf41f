//! CLI module for spmon
//!
//! Command-line interface definitions and handlers for the self-play monitor.
//!
//! # Commands
//!
//! - `watch` - Open the live terminal dashboard
//! - `status` - Fetch one snapshot and print a worker table
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Watch a trainer on another host
//! spmon watch --url http://trainer:5000/api/status
//!
//! # One-shot status as JSON
//! spmon status --json
//!
//! # Generate shell completions
//! spmon completions bash > ~/.bash_completion.d/spmon
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod status;
pub mod watch;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// spmon - Self-play training monitor
#[derive(Parser, Debug)]
#[command(
    name = "spmon",
    version,
    about = "Terminal dashboard for self-play training workers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the live dashboard
    Watch(WatchArgs),
    /// Print a one-shot worker summary
    Status(StatusArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "spmon.toml")]
    pub config: PathBuf,

    /// Override status endpoint URL
    #[arg(short, long, env = "SPMON_URL")]
    pub url: Option<String>,

    /// Override poll interval in milliseconds
    #[arg(short, long, env = "SPMON_POLL_INTERVAL_MS")]
    pub interval_ms: Option<u64>,

    /// Worker to show first
    #[arg(short, long, env = "SPMON_WORKER")]
    pub worker: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SPMON_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "spmon.toml")]
    pub config: PathBuf,

    /// Override status endpoint URL
    #[arg(short, long, env = "SPMON_URL")]
    pub url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "spmon.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parse_watch_defaults() {
        let cli = Cli::try_parse_from(["spmon", "watch"]).unwrap();
        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.config, PathBuf::from("spmon.toml"));
                assert!(args.interval_ms.is_none());
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_parse_watch_overrides() {
        let cli = Cli::try_parse_from([
            "spmon",
            "watch",
            "-u",
            "http://trainer:5000/api/status",
            "-i",
            "250",
            "-w",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.url.as_deref(), Some("http://trainer:5000/api/status"));
                assert_eq!(args.interval_ms, Some(250));
                assert_eq!(args.worker.as_deref(), Some("3"));
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_parse_status_json() {
        let cli = Cli::try_parse_from(["spmon", "status", "--json"]).unwrap();
        match cli.command {
            Commands::Status(args) => assert!(args.json),
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_parse_config_init() {
        let cli = Cli::try_parse_from(["spmon", "config", "init", "-o", "custom.toml"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Init(args)) => {
                assert_eq!(args.output, PathBuf::from("custom.toml"));
                assert!(!args.force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_interval() {
        assert!(Cli::try_parse_from(["spmon", "watch", "-i", "soon"]).is_err());
    }
}
