use serde::{Deserialize, Serialize};

/// The unified outcome record produced by either evaluation strategy.
///
/// Both strategies fill every field with the same semantic meaning, which is
/// what allows the heuristic path to stand in for the simulation path without
/// breaking any consumer. Field declaration order is the wire order.
///
/// Energetic fields are in kJ/mol, lengths in nm, the temperature in Kelvin,
/// and the elapsed simulation time in picoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanResponse {
    /// The rotation angle after level scaling (heuristic) or as issued
    /// (simulation).
    pub applied_angle: f64,
    /// Conformational entropy change attributed to the command.
    pub delta_entropy: f64,
    /// Information-content change attributed to the command.
    pub delta_information: f64,
    /// Internal energy change attributed to the command.
    pub delta_energy: f64,
    /// Gibbs free energy combining the energetic and entropic terms.
    pub gibbs_energy: f64,
    /// Evaluation window in milliseconds, floored to 1.
    pub duration_ms: u64,
    /// Root-mean-square displacement between initial and final geometry.
    pub rmsd: f64,
    /// Root-mean-square distance of particles from their centroid.
    pub radius_of_gyration: f64,
    /// Total potential energy of the final state.
    pub potential_energy: f64,
    /// Total kinetic energy of the final state.
    pub kinetic_energy: f64,
    /// Bath temperature (heuristic) or equipartition estimate (simulation).
    pub temperature: f64,
    /// Simulated time covered by the evaluation.
    pub simulation_time_ps: f64,
    /// Reserved for a future trajectory artifact; neither strategy populates
    /// it, and it serializes as an explicit null.
    pub trajectory_path: Option<String>,
}

impl SpanResponse {
    /// True when every numeric field holds a finite value.
    pub fn is_finite(&self) -> bool {
        [
            self.applied_angle,
            self.delta_entropy,
            self.delta_information,
            self.delta_energy,
            self.gibbs_energy,
            self.rmsd,
            self.radius_of_gyration,
            self.potential_energy,
            self.kinetic_energy,
            self.temperature,
            self.simulation_time_ps,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_response() -> SpanResponse {
        SpanResponse {
            applied_angle: 7.5,
            delta_entropy: 0.05625,
            delta_information: 0.028125,
            delta_energy: 0.00375,
            gibbs_energy: -0.013125,
            duration_ms: 5,
            rmsd: 0.075,
            radius_of_gyration: 1.515,
            potential_energy: 3.75,
            kinetic_energy: 3.0,
            temperature: 300.0,
            simulation_time_ps: 0.05,
            trajectory_path: None,
        }
    }

    #[test]
    fn serialization_emits_trajectory_path_as_null() {
        let serialized = serde_json::to_string(&create_response()).unwrap();
        assert!(serialized.contains(r#""trajectory_path":null"#));
    }

    #[test]
    fn serialization_starts_with_applied_angle() {
        let serialized = serde_json::to_string(&create_response()).unwrap();
        assert!(serialized.starts_with(r#"{"applied_angle":"#));
    }

    #[test]
    fn serialization_emits_integer_duration() {
        let serialized = serde_json::to_string(&create_response()).unwrap();
        assert!(serialized.contains(r#""duration_ms":5"#));
        assert!(!serialized.contains(r#""duration_ms":5.0"#));
    }

    #[test]
    fn is_finite_detects_poisoned_fields() {
        let mut response = create_response();
        assert!(response.is_finite());
        response.gibbs_energy = f64::NAN;
        assert!(!response.is_finite());
    }

    #[test]
    fn round_trip_preserves_all_fields() {
        let response = create_response();
        let serialized = serde_json::to_string(&response).unwrap();
        let parsed: SpanResponse = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, response);
    }
}
