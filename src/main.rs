//! Mortar CLI - minimal incremental build tool
//!
//! Entry point for the mortar command-line application.

use clap::Parser;

use mortar::cli::output::display_error;
use mortar::cli::Cli;
use mortar::error::MortarError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber; -v raises the default level
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    // Run the command and handle errors
    if let Err(e) = cli.run().await {
        display_error(&e);
        let code = e.downcast_ref::<MortarError>().map_or(1, MortarError::exit_code);
        std::process::exit(code);
    }
}
