// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use codecollect::cli::Cli;
use codecollect::config::ConfigBuilder;
use codecollect::errors::Error;
use codecollect::lifecycle::PlatformLauncher;
use codecollect::output::SystemClipboard;
use codecollect::run;
use codecollect::signal::{setup_signal_handler, INTERRUPTED_EXIT_CODE};
use codecollect::CleanupRegistry;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let default_directive = if cfg!(debug_assertions) {
        "codecollect=debug"
    } else {
        "codecollect=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();

    log::info!("Starting codecollect v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).and_then(|builder| builder.build()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    // --- Execution ---
    let registry = CleanupRegistry::new();
    let token =
        setup_signal_handler(registry.clone()).context("Failed to install interrupt handler")?;
    let launcher = PlatformLauncher::from_config(&config);

    let reports = match run(&config, &token, &registry, &launcher, &SystemClipboard) {
        Ok(reports) => reports,
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            registry.purge();
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // --- Reporting ---
    let mut failed = 0;
    for report in &reports {
        match &report.error {
            Some(error) => {
                failed += 1;
                eprintln!(
                    "codecollect: {} ({}): {}",
                    report.root.display(),
                    report.state,
                    error
                );
            }
            None => log::info!(
                "{}: {} file(s), {}",
                report.root.display(),
                report.files_collected,
                report.state
            ),
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
