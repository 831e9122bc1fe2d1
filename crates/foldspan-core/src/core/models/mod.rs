//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent one
//! physics evaluation, providing the foundation for both execution strategies.
//!
//! ## Overview
//!
//! The models module defines the core abstractions exchanged across the
//! process boundary and inside the engine. These models are designed to:
//!
//! - **Represent the evaluation contract** - One command, one request, one response
//! - **Stay strategy-agnostic** - The same response record is produced by the
//!   heuristic and the simulation paths
//! - **Maintain type safety** - Strong typing for wire data, with total parsing
//!   where the contract demands graceful degradation (resolution levels)
//!
//! ## Key Components
//!
//! - [`command`] - The discrete rotation action driving one evaluation
//! - [`level`] - Resolution levels and their scaling/stiffness tables
//! - [`request`] - The full evaluation request with residue geometry
//! - [`response`] - The unified thirteen-field outcome record
//! - [`system`] - The ephemeral coarse-grained particle chain (simulation only)

pub mod command;
pub mod level;
pub mod request;
pub mod response;
#[cfg(feature = "simulation")]
pub mod system;
