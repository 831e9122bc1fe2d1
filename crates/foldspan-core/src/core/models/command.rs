use serde::{Deserialize, Serialize};

/// Represents one discrete conformational action issued by the contract
/// execution engine.
///
/// A command targets a single residue of the chain and carries the requested
/// rotation together with the integration window it should be evaluated over.
/// Commands are immutable once constructed; every downstream quantity is
/// derived from them, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationCommand {
    /// Index of the residue targeted by the rotation.
    pub residue: usize,
    /// Signed rotation angle in degrees.
    pub angle_degrees: f64,
    /// Requested evaluation window in milliseconds. The wire allows
    /// non-positive values; reported durations are floored to 1 ms.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,
    /// Free-text tag identifying the originating execution span.
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_duration_ms() -> i64 {
    1
}

fn default_label() -> String {
    "span".to_string()
}

impl RotationCommand {
    /// Creates a new `RotationCommand` with the default duration and label.
    ///
    /// # Arguments
    ///
    /// * `residue` - Index of the residue to rotate.
    /// * `angle_degrees` - Signed rotation angle in degrees.
    pub fn new(residue: usize, angle_degrees: f64) -> Self {
        Self {
            residue,
            angle_degrees,
            duration_ms: default_duration_ms(),
            label: default_label(),
        }
    }

    /// The reported duration with the 1 ms floor applied.
    pub fn effective_duration_ms(&self) -> u64 {
        self.duration_ms.max(1) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_command_uses_default_duration_and_label() {
        let command = RotationCommand::new(3, -42.0);
        assert_eq!(command.residue, 3);
        assert_eq!(command.angle_degrees, -42.0);
        assert_eq!(command.duration_ms, 1);
        assert_eq!(command.label, "span");
    }

    #[test]
    fn effective_duration_floors_non_positive_values() {
        let mut command = RotationCommand::new(0, 0.0);
        command.duration_ms = -5;
        assert_eq!(command.effective_duration_ms(), 1);
        command.duration_ms = 0;
        assert_eq!(command.effective_duration_ms(), 1);
        command.duration_ms = 7;
        assert_eq!(command.effective_duration_ms(), 7);
    }

    #[test]
    fn deserialization_fills_missing_optional_fields() {
        let command: RotationCommand =
            serde_json::from_str(r#"{"residue": 2, "angle_degrees": 15.0}"#).unwrap();
        assert_eq!(command.duration_ms, 1);
        assert_eq!(command.label, "span");
    }

    #[test]
    fn deserialization_rejects_missing_angle() {
        let result = serde_json::from_str::<RotationCommand>(r#"{"residue": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_rejects_negative_residue_index() {
        let result =
            serde_json::from_str::<RotationCommand>(r#"{"residue": -1, "angle_degrees": 1.0}"#);
        assert!(result.is_err());
    }
}
