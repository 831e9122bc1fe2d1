use super::runner::SimulationSummary;
use crate::core::models::request::EvaluationRequest;
use crate::core::models::response::SpanResponse;
use crate::core::utils::geometry;

/// Derives the wire response from raw simulation state.
///
/// Thermodynamic deltas are scaled projections of the geometric metrics;
/// the Gibbs energy uses the equipartition temperature extracted from the
/// final state, not the requested bath temperature. The applied angle is
/// echoed unscaled because the simulation itself carries the physical
/// consequence of the command.
pub fn derive(request: &EvaluationRequest, summary: &SimulationSummary) -> SpanResponse {
    let rmsd = geometry::displacement_rmsd(&summary.initial_positions, &summary.final_positions)
        .unwrap_or(0.0);
    let radius_of_gyration = geometry::radius_of_gyration(&summary.final_positions).unwrap_or(0.0);

    let delta_entropy = rmsd * 0.02;
    let delta_information = radius_of_gyration * 0.01;
    let delta_energy = summary.potential_energy * 0.001;
    let gibbs_energy = delta_energy - summary.temperature * delta_entropy * 0.001;

    SpanResponse {
        applied_angle: request.command.angle_degrees,
        delta_entropy,
        delta_information,
        delta_energy,
        gibbs_energy,
        duration_ms: request.command.effective_duration_ms(),
        rmsd,
        radius_of_gyration,
        potential_energy: summary.potential_energy,
        kinetic_energy: summary.kinetic_energy,
        temperature: summary.temperature,
        simulation_time_ps: summary.elapsed_ps(),
        trajectory_path: None,
    }
}
