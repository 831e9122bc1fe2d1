use crate::cli::Cli;
use crate::config::BridgeSettings;
use crate::error::{CliError, Result};
use foldspan::core::io::wire;
use foldspan::core::models::request::EvaluationRequest;
use foldspan::engine::backend::Backend;
use foldspan::workflows;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Drives one complete bridge invocation: read, evaluate, respond.
pub fn run(cli: &Cli, settings: &BridgeSettings) -> Result<()> {
    let request = read_request(cli.input.as_deref())?;
    debug!("Parsed request: {:?}", &request);

    let backend = Backend::select(settings.backend)?;

    info!("Invoking the core evaluation workflow...");
    let response = workflows::evaluate::run(&request, backend, settings.seed)?;

    wire::write_response(io::stdout().lock(), &response)?;
    Ok(())
}

fn read_request(input: Option<&Path>) -> Result<EvaluationRequest> {
    match input {
        Some(path) => {
            info!("Reading request document from {:?}", path);
            let file = File::open(path)?;
            wire::read_request(BufReader::new(file)).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })
        }
        None => {
            info!("Reading request document from standard input.");
            Ok(wire::read_request(io::stdin().lock())?)
        }
    }
}
