use crate::core::forcefield::params::{
    BEAD_EPSILON, BEAD_MASS, BEAD_SIGMA, BOND_EQUILIBRIUM_LENGTH,
};
use crate::core::models::level::ResolutionLevel;
use crate::core::models::request::ResidueDescriptor;
use crate::core::models::system::{Bead, HarmonicBond, ParticleSystem};
use crate::core::utils::units::angstrom_to_nm;
use nalgebra::Point3;

// Positions whose components all sit inside this band are placeholder
// geometry, not real coordinates.
const DEGENERATE_POSITION_EPS: f64 = 1e-6;

/// Builds the linear coarse-grained chain for one simulation window.
///
/// The chain always has at least one bead, even for an empty residue list,
/// and consecutive beads are bonded at the equilibrium length with the
/// level's stiffness. Residues that supply a usable position are placed
/// there (angstrom input, converted to nm); everything else falls back to an
/// ideal straight chain along the x axis. The builder cannot fail.
pub fn build_chain(residues: &[ResidueDescriptor], level: ResolutionLevel) -> ParticleSystem {
    let bead_count = residues.len().max(1);
    let stiffness = level.bond_stiffness();
    let mut system = ParticleSystem::with_capacity(bead_count);

    for index in 0..bead_count {
        let position = match residues.get(index).and_then(|residue| residue.position) {
            Some(raw) if !is_degenerate(&raw) => Point3::new(
                angstrom_to_nm(raw[0]),
                angstrom_to_nm(raw[1]),
                angstrom_to_nm(raw[2]),
            ),
            _ => Point3::new(index as f64 * BOND_EQUILIBRIUM_LENGTH, 0.0, 0.0),
        };
        system.add_bead(Bead {
            mass: BEAD_MASS,
            sigma: BEAD_SIGMA,
            epsilon: BEAD_EPSILON,
            position,
        });
        if index > 0 {
            system.add_bond(HarmonicBond {
                i: index - 1,
                j: index,
                equilibrium_length: BOND_EQUILIBRIUM_LENGTH,
                stiffness,
            });
        }
    }

    system
}

fn is_degenerate(position: &[f64; 3]) -> bool {
    position
        .iter()
        .all(|component| component.abs() < DEGENERATE_POSITION_EPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn empty_residue_list_builds_a_single_particle_system() {
        let system = build_chain(&[], ResolutionLevel::Toy);
        assert_eq!(system.len(), 1);
        assert!(system.bonds().is_empty());
        assert_eq!(system.beads()[0].position, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn descriptors_without_positions_form_an_ideal_straight_chain() {
        let residues = vec![ResidueDescriptor::default(); 3];
        let system = build_chain(&residues, ResolutionLevel::Toy);
        assert_eq!(system.len(), 3);
        assert_eq!(system.bonds().len(), 2);
        let positions = system.positions();
        assert!(f64_approx_equal(positions[1].x, 0.38));
        assert!(f64_approx_equal(positions[2].x, 0.76));
        assert!(f64_approx_equal(positions[2].y, 0.0));
    }

    #[test]
    fn supplied_positions_are_converted_from_angstrom() {
        let residues = vec![
            ResidueDescriptor::at(1.0, 2.0, 3.0),
            ResidueDescriptor::at(4.0, 5.0, 6.0),
        ];
        let system = build_chain(&residues, ResolutionLevel::Gb);
        let positions = system.positions();
        assert!(f64_approx_equal(positions[0].x, 0.1));
        assert!(f64_approx_equal(positions[0].y, 0.2));
        assert!(f64_approx_equal(positions[0].z, 0.3));
        assert!(f64_approx_equal(positions[1].z, 0.6));
    }

    #[test]
    fn degenerate_positions_fall_back_to_the_straight_chain() {
        let residues = vec![
            ResidueDescriptor::at(0.0, 0.0, 0.0),
            ResidueDescriptor::at(1e-9, -1e-9, 1e-8),
        ];
        let system = build_chain(&residues, ResolutionLevel::Toy);
        let positions = system.positions();
        assert_eq!(positions[0], Point3::new(0.0, 0.0, 0.0));
        assert!(f64_approx_equal(positions[1].x, 0.38));
    }

    #[test]
    fn a_position_with_one_live_component_is_used_as_is() {
        let residues = vec![ResidueDescriptor::at(0.0, 0.0, 2.0)];
        let system = build_chain(&residues, ResolutionLevel::Toy);
        assert!(f64_approx_equal(system.positions()[0].z, 0.2));
    }

    #[test]
    fn bond_stiffness_tracks_the_level() {
        let residues = vec![ResidueDescriptor::default(); 2];
        for (level, expected) in [
            (ResolutionLevel::Toy, 30.0),
            (ResolutionLevel::Coarse, 60.0),
            (ResolutionLevel::Gb, 90.0),
            (ResolutionLevel::Full, 120.0),
            (ResolutionLevel::Other, 120.0),
        ] {
            let system = build_chain(&residues, level);
            assert_eq!(system.bonds()[0].stiffness, expected);
            assert_eq!(system.bonds()[0].equilibrium_length, 0.38);
        }
    }

    #[test]
    fn beads_carry_the_fixed_interaction_parameters() {
        let system = build_chain(&[], ResolutionLevel::Full);
        let bead = &system.beads()[0];
        assert_eq!(bead.mass, 110.0);
        assert_eq!(bead.sigma, 0.35);
        assert_eq!(bead.epsilon, 0.05);
    }
}
