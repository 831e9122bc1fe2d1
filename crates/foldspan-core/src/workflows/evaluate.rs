use crate::core::models::request::EvaluationRequest;
use crate::core::models::response::SpanResponse;
use crate::engine::backend::Backend;
use crate::engine::error::EngineError;
use crate::engine::heuristic;
use tracing::{info, instrument};

/// Integration steps simulated per requested millisecond.
#[cfg(feature = "simulation")]
const STEPS_PER_MILLISECOND: i64 = 10;

/// Lower bound on the integration window, in steps.
#[cfg(feature = "simulation")]
const MIN_STEP_COUNT: i64 = 20;

/// Evaluates one rotation command under the pre-selected backend.
///
/// This is the single entry point of the library: validation, strategy
/// dispatch, and response assembly all happen here. The backend is taken as
/// an argument rather than probed, so the strategy resolved at startup is the
/// one that runs, with no mid-call re-selection.
///
/// The `seed` fixes the thermal noise stream of the simulation strategy and
/// is ignored by the heuristic, which is deterministic by construction.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRequest`] when the request fails validation,
/// [`EngineError::SimulationUnavailable`] when the simulated backend is
/// requested from a build without the toolkit, and the underlying engine
/// error when the integration window diverges.
#[instrument(skip_all, name = "evaluation_workflow")]
pub fn run(
    request: &EvaluationRequest,
    backend: Backend,
    seed: Option<u64>,
) -> Result<SpanResponse, EngineError> {
    // === Phase 1: Request validation ===
    request.validate()?;

    info!(
        "Starting evaluation: {} residue(s) at the '{}' level via the {} strategy.",
        request.residues.len(),
        request.level,
        backend.name()
    );

    // === Phase 2: Strategy execution ===
    let response = match backend {
        Backend::Heuristic => heuristic::evaluate(request),
        Backend::Simulated => simulate(request, seed)?,
    };

    info!(
        "Evaluation complete. Gibbs energy {:.6} kJ/mol over a {} ms window.",
        response.gibbs_energy, response.duration_ms
    );
    Ok(response)
}

/// Runs the full simulation pipeline for one request.
#[cfg(feature = "simulation")]
fn simulate(request: &EvaluationRequest, seed: Option<u64>) -> Result<SpanResponse, EngineError> {
    use crate::engine::{builder, metrics, runner};

    let system = builder::build_chain(&request.residues, request.level);
    let steps = step_count(request.command.duration_ms);
    let summary = runner::integrate(system, request.temperature, steps, seed)?;
    Ok(metrics::derive(request, &summary))
}

#[cfg(not(feature = "simulation"))]
fn simulate(_request: &EvaluationRequest, _seed: Option<u64>) -> Result<SpanResponse, EngineError> {
    Err(EngineError::SimulationUnavailable {
        reason: "the simulation strategy is not compiled into this build",
    })
}

/// Maps the requested duration onto an integration step count.
///
/// The raw duration is scaled, not the floored one reported on the wire, so
/// a zero or negative request still runs the minimum window.
#[cfg(feature = "simulation")]
fn step_count(duration_ms: i64) -> usize {
    duration_ms
        .saturating_mul(STEPS_PER_MILLISECOND)
        .max(MIN_STEP_COUNT) as usize
}
