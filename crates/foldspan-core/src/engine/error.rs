use crate::core::models::request::RequestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid request: {source}")]
    InvalidRequest {
        #[from]
        source: RequestError,
    },

    #[error("Simulation backend requested but unavailable: {reason}")]
    SimulationUnavailable { reason: &'static str },

    #[error("Simulation diverged after {steps} steps: {reason}")]
    NumericalInstability { steps: usize, reason: String },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
