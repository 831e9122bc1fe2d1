use crate::core::models::request::EvaluationRequest;
use crate::core::models::response::SpanResponse;

/// Evaluates a request with the closed-form strategy.
///
/// This is a pure function: no randomness, no I/O, no state. The same
/// request always yields a bit-identical response, which is the invariant
/// that lets this strategy stand in for the simulation path in front of any
/// caller that expects reproducibility.
///
/// All metrics are analytic functions of the scaled command magnitude; the
/// level factor enters twice (once through the applied angle, once as a
/// direct scale) so coarser levels damp the reported effect quadratically.
pub fn evaluate(request: &EvaluationRequest) -> SpanResponse {
    let factor = request.level.scaling_factor();
    let applied_angle = request.command.angle_degrees * factor;
    let magnitude = applied_angle.abs();

    let delta_entropy = 0.015 * magnitude * factor;
    let delta_information = 0.0075 * magnitude * factor;
    let delta_energy = 0.001 * magnitude * (request.temperature / 300.0) * factor;
    let gibbs_energy = delta_energy - request.temperature * delta_entropy * 0.001;
    let duration_ms = request.command.effective_duration_ms();

    SpanResponse {
        applied_angle,
        delta_entropy,
        delta_information,
        delta_energy,
        gibbs_energy,
        duration_ms,
        rmsd: magnitude * 0.01,
        radius_of_gyration: 1.5 + magnitude * 0.002,
        potential_energy: delta_energy * 1000.0,
        kinetic_energy: delta_energy * 800.0,
        temperature: request.temperature,
        simulation_time_ps: duration_ms as f64 * 0.01,
        trajectory_path: None,
    }
}
