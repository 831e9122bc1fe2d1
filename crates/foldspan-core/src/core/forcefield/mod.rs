//! # Force Field Module
//!
//! This module provides the molecular mechanics terms used by the simulation
//! strategy of the physics evaluation bridge.
//!
//! ## Overview
//!
//! The force field is deliberately minimal: a harmonic bond term between
//! consecutive beads and a truncated Lennard-Jones term between all bead
//! pairs. Both are implemented as pure functions over distances so they can
//! be tested in isolation and reused for energy and force accumulation.
//!
//! ## Key Components
//!
//! - [`params`] - The fixed bead and bond parameters of the coarse-grained chain
//! - [`potentials`] - Pair potential energies, their force magnitudes, and the
//!   Lorentz-Berthelot combining rules

pub mod params;
pub mod potentials;
