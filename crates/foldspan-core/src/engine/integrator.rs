use super::error::EngineError;
use crate::core::utils::units::femtoseconds_to_picoseconds;
use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Molar gas constant in kJ/(mol·K). With masses in amu and velocities in
/// nm/ps, kinetic energy comes out directly in kJ/mol.
pub const MOLAR_GAS_CONSTANT: f64 = 8.31446261815324e-3;

/// Integration timestep: 2 fs expressed in ps.
pub const TIMESTEP_PS: f64 = femtoseconds_to_picoseconds(2.0);

/// Langevin friction coefficient, in ps⁻¹.
pub const FRICTION_PER_PS: f64 = 1.0;

/// Langevin thermostat integrator over the chain's velocities.
///
/// One step performs a velocity kick from the current forces, an exact
/// Ornstein-Uhlenbeck velocity update against the heat bath, and a position
/// drift. Velocities start at zero and are owned by the integrator for the
/// duration of one simulation window; the bath couples through the fixed
/// friction [`FRICTION_PER_PS`] at the requested temperature.
#[derive(Debug)]
pub struct LangevinIntegrator {
    temperature: f64,
    friction_decay: f64,
    noise_scale: f64,
    velocities: Vec<Vector3<f64>>,
    masses: Vec<f64>,
    rng: StdRng,
    normal: Normal<f64>,
}

impl LangevinIntegrator {
    /// Creates an integrator for `masses.len()` particles at rest.
    ///
    /// A seed makes the thermostat reproducible; without one the generator
    /// is seeded from OS entropy and every run draws a fresh noise stream.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Internal`] if the noise distribution cannot be
    /// constructed.
    pub fn new(masses: Vec<f64>, temperature: f64, seed: Option<u64>) -> Result<Self, EngineError> {
        let friction_decay = (-FRICTION_PER_PS * TIMESTEP_PS).exp();
        let noise_scale = (1.0 - friction_decay * friction_decay).sqrt();
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_entropy(),
        };
        let normal = Normal::new(0.0, 1.0)
            .map_err(|source| EngineError::Internal(format!("thermostat noise: {source}")))?;
        let velocities = vec![Vector3::zeros(); masses.len()];

        Ok(Self {
            temperature,
            friction_decay,
            noise_scale,
            velocities,
            masses,
            rng,
            normal,
        })
    }

    /// Advances positions and velocities by one timestep under `forces`.
    pub fn step(&mut self, positions: &mut [Point3<f64>], forces: &[Vector3<f64>]) {
        for (index, position) in positions.iter_mut().enumerate() {
            let mass = self.masses[index];
            let velocity = &mut self.velocities[index];

            *velocity += forces[index] / mass * TIMESTEP_PS;

            let thermal_velocity = (MOLAR_GAS_CONSTANT * self.temperature / mass).sqrt();
            let noise = Vector3::new(
                self.normal.sample(&mut self.rng),
                self.normal.sample(&mut self.rng),
                self.normal.sample(&mut self.rng),
            );
            *velocity = *velocity * self.friction_decay
                + noise * (self.noise_scale * thermal_velocity);

            *position += *velocity * TIMESTEP_PS;
        }
    }

    /// Current velocities, in particle order.
    pub fn velocities(&self) -> &[Vector3<f64>] {
        &self.velocities
    }

    /// Total kinetic energy in kJ/mol.
    pub fn kinetic_energy(&self) -> f64 {
        self.velocities
            .iter()
            .zip(&self.masses)
            .map(|(velocity, &mass)| 0.5 * mass * velocity.norm_squared())
            .sum()
    }
}

/// Equipartition temperature estimate for a chain of `particle_count`
/// particles with the given kinetic energy.
///
/// Degrees of freedom are `3N − 6` floored at 1, so the estimate stays
/// defined even for one- and two-particle chains.
pub fn equipartition_temperature(kinetic_energy: f64, particle_count: usize) -> f64 {
    let dof = (3 * particle_count).saturating_sub(6).max(1) as f64;
    2.0 * kinetic_energy / (dof * MOLAR_GAS_CONSTANT)
}
