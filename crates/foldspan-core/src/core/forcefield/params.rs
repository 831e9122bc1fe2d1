//! Fixed parameters of the coarse-grained chain, in internal units
//! (nm, kJ/mol, amu).
//!
//! Every residue is represented by one identical bead; only the bond
//! stiffness varies, and it is keyed by the resolution level (see
//! [`crate::core::models::level::ResolutionLevel::bond_stiffness`]).

/// Bead mass in amu.
pub const BEAD_MASS: f64 = 110.0;

/// Lennard-Jones sigma per bead, in nm.
pub const BEAD_SIGMA: f64 = 0.35;

/// Lennard-Jones well depth per bead, in kJ/mol.
pub const BEAD_EPSILON: f64 = 0.05;

/// Equilibrium length of consecutive-bead bonds, in nm. Also the spacing of
/// the straight-chain fallback geometry.
pub const BOND_EQUILIBRIUM_LENGTH: f64 = 0.38;

/// Nonbonded interaction cutoff, in nm. Pairs beyond this separation do not
/// interact at all.
pub const NONBONDED_CUTOFF: f64 = 1.2;
