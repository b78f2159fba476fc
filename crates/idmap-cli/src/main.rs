//! idmap CLI - Main entry point

use clap::Parser;
use idmap_cli::{Cli, Commands, Config};
use idmap_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let defaults = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .log_file_prefix("idmap")
        .build();

    // Environment variables take precedence over the verbose flag
    let log_config = defaults.clone().merge_env().unwrap_or_else(|e| {
        eprintln!("Ignoring invalid logging settings: {}", e);
        defaults
    });

    // The CLI works without logging, so a failed init is not fatal
    let guard = init_logging(&log_config).ok().flatten();

    let result = execute_command(cli).await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        drop(guard);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: Cli) -> idmap_cli::Result<()> {
    let mut config = Config::from_env()?;
    config.apply_api(&cli.api);

    match cli.command {
        Commands::Map {
            input,
            batch,
            by,
            organism,
            output,
            format,
        } => {
            idmap_cli::commands::map::run(&input, &batch, by, organism, output, format, config)
                .await
        },

        Commands::Entries {
            input,
            batch,
            output,
            format,
        } => idmap_cli::commands::entries::run(&input, &batch, output, format, config).await,

        Commands::Pubmed {
            query,
            query_file,
            retmax,
            fetch_limit,
            output,
        } => {
            idmap_cli::commands::pubmed::run(query, query_file, retmax, fetch_limit, output, config)
                .await
        },

        Commands::Gmt { input, output } => idmap_cli::commands::gmt::run(input, output).await,
    }
}
