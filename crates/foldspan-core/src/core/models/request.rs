use super::command::RotationCommand;
use super::level::ResolutionLevel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("Temperature must be a positive finite value, got {0}")]
    InvalidTemperature(f64),

    #[error("Rotation angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}

/// External geometry hint for one residue of the chain.
///
/// Positions arrive in angstrom and are optional; a missing or degenerate
/// position makes the system builder fall back to an ideal straight-chain
/// placement for that residue.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResidueDescriptor {
    /// Cartesian position in angstrom, when the caller supplies geometry.
    #[serde(default)]
    pub position: Option<[f64; 3]>,
}

impl ResidueDescriptor {
    /// Creates a descriptor carrying an explicit position in angstrom.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Some([x, y, z]),
        }
    }
}

/// Represents one complete physics-evaluation request.
///
/// A request pairs exactly one [`RotationCommand`] with the context needed to
/// evaluate it: the resolution level, the bath temperature, and the residue
/// geometry of the chain. It is constructed once per invocation from external
/// input and never mutated afterwards.
///
/// Wire defaults follow the boundary protocol: `level` defaults to toy,
/// `temperature` to 300 K, and `residues` to an empty list (which downstream
/// components treat as a single-particle system).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Resolution level controlling scaling and bond stiffness.
    #[serde(default)]
    pub level: ResolutionLevel,
    /// Bath temperature in Kelvin.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Ordered residue descriptors; may be empty.
    #[serde(default)]
    pub residues: Vec<ResidueDescriptor>,
    /// The single action evaluated by this request.
    pub command: RotationCommand,
}

fn default_temperature() -> f64 {
    300.0
}

impl EvaluationRequest {
    /// Creates a request for `command` with all contextual fields at their
    /// wire defaults.
    pub fn new(command: RotationCommand) -> Self {
        Self {
            level: ResolutionLevel::default(),
            temperature: default_temperature(),
            residues: Vec::new(),
            command,
        }
    }

    /// Checks the value-level invariants the wire types cannot express.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the temperature is not a positive
    /// finite number or the rotation angle is not finite.
    pub fn validate(&self) -> Result<(), RequestError> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(RequestError::InvalidTemperature(self.temperature));
        }
        if !self.command.angle_degrees.is_finite() {
            return Err(RequestError::NonFiniteAngle(self.command.angle_degrees));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> EvaluationRequest {
        EvaluationRequest::new(RotationCommand::new(0, 15.0))
    }

    #[test]
    fn new_request_uses_wire_defaults() {
        let request = create_request();
        assert_eq!(request.level, ResolutionLevel::Toy);
        assert_eq!(request.temperature, 300.0);
        assert!(request.residues.is_empty());
    }

    #[test]
    fn validate_accepts_default_request() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_temperature() {
        let mut request = create_request();
        request.temperature = 0.0;
        assert_eq!(
            request.validate(),
            Err(RequestError::InvalidTemperature(0.0))
        );
        request.temperature = -10.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_temperature() {
        let mut request = create_request();
        request.temperature = f64::NAN;
        assert!(request.validate().is_err());
        request.temperature = f64::INFINITY;
        assert!(request.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_angle() {
        let mut request = create_request();
        request.command.angle_degrees = f64::NAN;
        assert!(matches!(
            request.validate(),
            Err(RequestError::NonFiniteAngle(_))
        ));
    }

    #[test]
    fn descriptor_at_stores_angstrom_position() {
        let descriptor = ResidueDescriptor::at(1.0, 2.0, 3.0);
        assert_eq!(descriptor.position, Some([1.0, 2.0, 3.0]));
        assert_eq!(ResidueDescriptor::default().position, None);
    }

    #[test]
    fn deserialization_fills_contextual_defaults() {
        let request: EvaluationRequest =
            serde_json::from_str(r#"{"command": {"residue": 0, "angle_degrees": 15.0}}"#).unwrap();
        assert_eq!(request.level, ResolutionLevel::Toy);
        assert_eq!(request.temperature, 300.0);
        assert!(request.residues.is_empty());
    }

    #[test]
    fn deserialization_reads_residue_positions() {
        let request: EvaluationRequest = serde_json::from_str(
            r#"{
                "command": {"residue": 1, "angle_degrees": -30.0, "duration_ms": 4},
                "level": "coarse",
                "residues": [{"position": [1.0, 0.0, 2.5]}, {}]
            }"#,
        )
        .unwrap();
        assert_eq!(request.level, ResolutionLevel::Coarse);
        assert_eq!(request.residues.len(), 2);
        assert_eq!(request.residues[0].position, Some([1.0, 0.0, 2.5]));
        assert_eq!(request.residues[1].position, None);
    }
}
