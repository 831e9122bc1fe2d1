use super::error::EngineError;
use super::integrator::{LangevinIntegrator, TIMESTEP_PS, equipartition_temperature};
use crate::core::forcefield::params::NONBONDED_CUTOFF;
use crate::core::forcefield::potentials;
use crate::core::models::system::ParticleSystem;
use nalgebra::{Point3, Vector3};
use tracing::trace;

const PROGRESS_LOG_INTERVAL: usize = 1000;

/// Raw kinematic and energetic state extracted after one integration window.
///
/// The summary is everything metric derivation needs; the particle system
/// itself is consumed by [`integrate`] and never escapes it.
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    /// Positions before the first step, in nm.
    pub initial_positions: Vec<Point3<f64>>,
    /// Positions after the last step, in nm.
    pub final_positions: Vec<Point3<f64>>,
    /// Velocities after the last step, in nm/ps.
    pub final_velocities: Vec<Vector3<f64>>,
    /// Total potential energy of the final state, in kJ/mol.
    pub potential_energy: f64,
    /// Total kinetic energy of the final state, in kJ/mol.
    pub kinetic_energy: f64,
    /// Equipartition temperature estimate for the final state, in K.
    pub temperature: f64,
    /// Number of integration steps taken.
    pub step_count: usize,
}

impl SimulationSummary {
    /// Simulated time covered by the window, in ps.
    pub fn elapsed_ps(&self) -> f64 {
        self.step_count as f64 * TIMESTEP_PS
    }
}

/// Advances the chain through a bounded Langevin window and extracts state.
///
/// The system is owned by this call: it is integrated in place, measured,
/// and dropped. Non-finite state after integration is a numerical failure of
/// the simulation strategy and is reported as an error rather than a partial
/// result.
pub fn integrate(
    system: ParticleSystem,
    temperature: f64,
    steps: usize,
    seed: Option<u64>,
) -> Result<SimulationSummary, EngineError> {
    let initial_positions = system.positions();
    let mut positions = initial_positions.clone();
    let mut integrator = LangevinIntegrator::new(system.masses(), temperature, seed)?;

    for step in 0..steps {
        let forces = accumulate_forces(&system, &positions);
        integrator.step(&mut positions, &forces);
        if step % PROGRESS_LOG_INTERVAL == 0 {
            trace!(step, total = steps, "integration window advancing");
        }
    }

    let potential_energy = total_potential_energy(&system, &positions);
    let kinetic_energy = integrator.kinetic_energy();

    let finite_positions = positions
        .iter()
        .all(|position| position.coords.iter().all(|component| component.is_finite()));
    if !finite_positions || !potential_energy.is_finite() || !kinetic_energy.is_finite() {
        return Err(EngineError::NumericalInstability {
            steps,
            reason: "non-finite state after integration".to_string(),
        });
    }

    let temperature_estimate = equipartition_temperature(kinetic_energy, system.len());

    Ok(SimulationSummary {
        initial_positions,
        final_velocities: integrator.velocities().to_vec(),
        final_positions: positions,
        potential_energy,
        kinetic_energy,
        temperature: temperature_estimate,
        step_count: steps,
    })
}

fn accumulate_forces(system: &ParticleSystem, positions: &[Point3<f64>]) -> Vec<Vector3<f64>> {
    let mut forces = vec![Vector3::zeros(); positions.len()];

    for bond in system.bonds() {
        let delta = positions[bond.i] - positions[bond.j];
        let dist = delta.norm();
        if dist < 1e-6 {
            // Direction undefined at coincident beads; skip the pair.
            continue;
        }
        let direction = delta / dist;
        let magnitude =
            potentials::harmonic_bond_force(dist, bond.equilibrium_length, bond.stiffness);
        forces[bond.i] += direction * magnitude;
        forces[bond.j] -= direction * magnitude;
    }

    let beads = system.beads();
    for i in 0..beads.len() {
        for j in (i + 1)..beads.len() {
            let delta = positions[i] - positions[j];
            let dist = delta.norm();
            if dist < 1e-6 || dist >= NONBONDED_CUTOFF {
                continue;
            }
            let sigma = potentials::mixed_sigma(beads[i].sigma, beads[j].sigma);
            let epsilon = potentials::mixed_epsilon(beads[i].epsilon, beads[j].epsilon);
            let magnitude = potentials::lennard_jones_force(dist, sigma, epsilon);
            let direction = delta / dist;
            forces[i] += direction * magnitude;
            forces[j] -= direction * magnitude;
        }
    }

    forces
}

fn total_potential_energy(system: &ParticleSystem, positions: &[Point3<f64>]) -> f64 {
    let mut energy = 0.0;

    for bond in system.bonds() {
        let dist = (positions[bond.i] - positions[bond.j]).norm();
        energy += potentials::harmonic_bond(dist, bond.equilibrium_length, bond.stiffness);
    }

    let beads = system.beads();
    for i in 0..beads.len() {
        for j in (i + 1)..beads.len() {
            let dist = (positions[i] - positions[j]).norm();
            if dist >= NONBONDED_CUTOFF {
                continue;
            }
            let sigma = potentials::mixed_sigma(beads[i].sigma, beads[j].sigma);
            let epsilon = potentials::mixed_epsilon(beads[i].epsilon, beads[j].epsilon);
            energy += potentials::lennard_jones(dist, sigma, epsilon);
        }
    }

    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::level::ResolutionLevel;
    use crate::core::models::request::ResidueDescriptor;
    use crate::core::models::system::Bead;
    use crate::engine::builder::build_chain;
    use crate::engine::integrator::MOLAR_GAS_CONSTANT;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn create_chain(residue_count: usize) -> ParticleSystem {
        build_chain(
            &vec![ResidueDescriptor::default(); residue_count],
            ResolutionLevel::Toy,
        )
    }

    #[test]
    fn a_single_bead_window_stays_finite_and_thermalizes() {
        let summary = integrate(create_chain(0), 300.0, 20, Some(11)).unwrap();
        assert_eq!(summary.step_count, 20);
        assert_eq!(summary.initial_positions.len(), 1);
        assert!(summary.kinetic_energy > 0.0);
        assert!(summary.potential_energy.is_finite());
        assert!(f64_approx_equal(summary.elapsed_ps(), 0.04));
    }

    #[test]
    fn the_reported_temperature_matches_the_equipartition_relation() {
        let summary = integrate(create_chain(4), 300.0, 50, Some(3)).unwrap();
        let dof = (3 * 4 - 6) as f64;
        let expected = 2.0 * summary.kinetic_energy / (dof * MOLAR_GAS_CONSTANT);
        assert!(f64_approx_equal(summary.temperature, expected));
    }

    #[test]
    fn a_short_chain_window_produces_displacement() {
        let summary = integrate(create_chain(3), 300.0, 100, Some(5)).unwrap();
        let moved = summary
            .initial_positions
            .iter()
            .zip(&summary.final_positions)
            .any(|(a, b)| (b - a).norm() > 0.0);
        assert!(moved);
        assert_eq!(summary.final_velocities.len(), 3);
    }

    #[test]
    fn seeded_windows_are_reproducible() {
        let a = integrate(create_chain(2), 300.0, 30, Some(9)).unwrap();
        let b = integrate(create_chain(2), 300.0, 30, Some(9)).unwrap();
        assert_eq!(a.final_positions, b.final_positions);
        assert_eq!(a.kinetic_energy, b.kinetic_energy);
    }

    #[test]
    fn a_poisoned_system_surfaces_numerical_instability() {
        let mut system = ParticleSystem::new();
        system.add_bead(Bead {
            mass: 110.0,
            sigma: 0.35,
            epsilon: 0.05,
            position: Point3::new(f64::NAN, 0.0, 0.0),
        });
        let result = integrate(system, 300.0, 5, Some(1));
        assert!(matches!(
            result,
            Err(EngineError::NumericalInstability { steps: 5, .. })
        ));
    }

    #[test]
    fn bonded_beads_at_equilibrium_feel_only_the_nonbonded_term() {
        let system = create_chain(2);
        let positions = system.positions();
        let forces = accumulate_forces(&system, &positions);
        // The bond term vanishes at 0.38 nm, so the residual force is the
        // Lennard-Jones push at that separation, equal and opposite.
        let lj = potentials::lennard_jones_force(0.38, 0.35, 0.05);
        assert!(f64_approx_equal(forces[0].x, -lj));
        assert!(f64_approx_equal(forces[1].x, lj));
    }

    #[test]
    fn potential_energy_of_the_equilibrium_pair_is_the_lj_value() {
        let system = create_chain(2);
        let energy = total_potential_energy(&system, &system.positions());
        let expected = potentials::lennard_jones(0.38, 0.35, 0.05);
        assert!(f64_approx_equal(energy, expected));
    }

    #[test]
    fn beads_beyond_the_cutoff_do_not_interact() {
        let mut system = ParticleSystem::new();
        for x in [0.0, 2.0] {
            system.add_bead(Bead {
                mass: 110.0,
                sigma: 0.35,
                epsilon: 0.05,
                position: Point3::new(x, 0.0, 0.0),
            });
        }
        let positions = system.positions();
        assert!(f64_approx_equal(
            total_potential_energy(&system, &positions),
            0.0
        ));
        let forces = accumulate_forces(&system, &positions);
        assert!(f64_approx_equal(forces[0].norm(), 0.0));
    }
}
