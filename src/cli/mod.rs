//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for auractl using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// auractl - EbookAura operations toolkit
#[derive(Parser, Debug)]
#[command(name = "auractl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "auractl.toml", env = "AURACTL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "AURACTL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the configured MongoDB collection to a JSON file
    Export(commands::export::ExportArgs),

    /// Run the smoke-test probes against the EbookAura API
    Probe(commands::probe::ProbeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["auractl", "export"]);
        assert_eq!(cli.config, "auractl.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["auractl", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["auractl", "--log-level", "debug", "probe"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_probe_with_overrides() {
        let cli = Cli::parse_from([
            "auractl",
            "probe",
            "--base-url",
            "http://localhost:5000",
            "--skip-auth",
        ]);
        match cli.command {
            Commands::Probe(args) => {
                assert_eq!(args.base_url, Some("http://localhost:5000".to_string()));
                assert!(args.skip_auth);
            }
            other => panic!("expected probe command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_flags() {
        let cli = Cli::parse_from(["auractl", "export", "--yes", "--output", "dump.json"]);
        match cli.command {
            Commands::Export(args) => {
                assert!(args.yes);
                assert_eq!(args.output, Some("dump.json".to_string()));
            }
            other => panic!("expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["auractl", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["auractl", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
