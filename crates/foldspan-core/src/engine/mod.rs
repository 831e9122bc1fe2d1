//! # Engine Module
//!
//! This module implements the evaluation engine of the physics bridge: the
//! logic that turns one validated request into one complete response under a
//! chosen execution strategy.
//!
//! ## Overview
//!
//! The engine owns strategy selection and both strategies themselves. The
//! heuristic path is a pure closed-form computation; the simulation path
//! builds an ephemeral coarse-grained chain, advances it with a Langevin
//! integrator, and derives the response metrics from the raw final state.
//! Whichever path runs, it produces the entire response by itself; strategies
//! are never mixed within one evaluation.
//!
//! ## Architecture
//!
//! - **Strategy Selection** ([`backend`]) - Capability probe and the tagged
//!   backend value injected into the workflow
//! - **Closed-Form Path** ([`heuristic`]) - The deterministic analytic strategy
//! - **Simulation Path** - Chain construction ([`builder`]), Langevin
//!   integration ([`integrator`], [`runner`]), and metric extraction
//!   ([`metrics`]); present only with the `simulation` feature
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod backend;
pub mod error;
pub mod heuristic;

#[cfg(feature = "simulation")]
pub mod builder;
#[cfg(feature = "simulation")]
pub mod integrator;
#[cfg(feature = "simulation")]
pub mod metrics;
#[cfg(feature = "simulation")]
pub mod runner;
