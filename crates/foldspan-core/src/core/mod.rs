//! # Core Module
//!
//! This module provides the fundamental building blocks for the physics
//! evaluation bridge, serving as the stateless computational core of the
//! library.
//!
//! ## Overview
//!
//! The core module implements the data structures, pure mathematics, and
//! boundary serialization required to evaluate one conformational change.
//! Nothing in this layer holds state across calls; everything is a plain
//! value or a pure function over values.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the evaluation:
//!
//! - **Data Models** ([`models`]) - Rotation commands, evaluation requests, the
//!   unified response record, resolution levels, and the ephemeral particle chain
//! - **Force Field** ([`forcefield`]) - Pair potentials and the fixed bead/bond
//!   parameters of the coarse-grained chain
//! - **Wire Protocol** ([`io`]) - Reading one request and writing one response
//!   (or an error envelope) at the process boundary
//! - **Utilities** ([`utils`]) - Geometric metrics and unit conversions
//!
//! ## Unit System
//!
//! Internal units are nanometers (length), kilojoules per mole (energy),
//! atomic mass units (mass), and picoseconds (time). External positions
//! arrive in angstrom and are converted exactly once, at the system-building
//! boundary.

pub mod forcefield;
pub mod io;
pub mod models;
pub mod utils;
