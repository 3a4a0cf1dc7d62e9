// Listing Reports - MongoDB listings to CSV reports
// Copyright (c) 2025 Listing Reports Contributors
// Licensed under the MIT License

use clap::Parser;
use listing_reports::cli::{Cli, Commands};
use listing_reports::config::LoggingConfig;
use listing_reports::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging_config = match &cli.log_dir {
        Some(dir) => LoggingConfig {
            local_enabled: true,
            local_path: dir.to_string_lossy().to_string(),
            ..LoggingConfig::default()
        },
        None => LoggingConfig::default(),
    };
    let guard = match init_logging(&cli.log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("[ERROR] Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Listing Reports - MongoDB listings to CSV reports"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("[ERROR] {e}");
            5
        }
    };

    // process::exit skips destructors, flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Run(args) => args.execute(config_path).await,
        Commands::ValidateConfig(args) => args.execute(config_path).await,
    }
}
