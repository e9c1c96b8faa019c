// auractl - EbookAura Operations Toolkit
// Copyright (c) 2026 Auractl Contributors
// Licensed under the MIT License

use auractl::cli::{Cli, Commands};
use auractl::config::LoggingConfig;
use auractl::domain::AuraError;
use auractl::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present.
    // Optional - if .env doesn't exist, it's silently ignored.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging for the CLI; file logging is opted into via the
    // configuration file once a command loads it.
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig::console_only();
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "auractl - EbookAura operations toolkit"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    };

    process::exit(exit_code);
}

/// Map a bubbled-up error to the exit code its category owns
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<AuraError>() {
        Some(AuraError::Configuration(_)) => 2,
        Some(AuraError::Database(_)) => 4,
        _ => 5, // Fatal error exit code
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(&cli.config).await,
        Commands::Probe(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
