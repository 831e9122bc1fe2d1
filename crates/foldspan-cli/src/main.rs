mod cli;
mod config;
mod error;
mod evaluate;
mod logging;

use crate::cli::Cli;
use crate::config::PartialBridgeConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use foldspan::core::io::wire;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        emit_error_envelope(&e);
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Writes the `{"error": ...}` document that callers parse in place of a
/// response when evaluation fails.
fn emit_error_envelope(e: &CliError) {
    if wire::write_error(std::io::stdout().lock(), &e.to_string()).is_err() {
        eprintln!("Failed to write the error envelope to standard output.");
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();

    let partial_config = match &cli.config {
        Some(path) => PartialBridgeConfig::from_file(path)?,
        None => PartialBridgeConfig::default(),
    };
    let settings = partial_config.merge_with_cli(&cli);

    logging::setup_logging(cli.verbose, cli.quiet, settings.log_file.clone())?;

    info!("🚀 FoldSpan CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = evaluate::run(&cli, &settings);

    match &command_result {
        Ok(_) => {
            info!("✅ Evaluation completed successfully.");
        }
        Err(e) => {
            error!("❌ Evaluation failed: {}", e);
        }
    }

    command_result
}
