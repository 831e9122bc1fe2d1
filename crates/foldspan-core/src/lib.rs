//! # FoldSpan Core Library
//!
//! A physics evaluation bridge that computes the thermodynamic and geometric
//! consequences of a single residue rotation command applied to a linear
//! coarse-grained polymer chain.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`EvaluationRequest`, `SpanResponse`,
//!   `ParticleSystem`), pure mathematical representations of the forcefield (`potentials`), geometric
//!   metrics, and the wire protocol used at the process boundary.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer executes one evaluation. It includes the
//!   capability-probed backend selector, the closed-form heuristic strategy, and the simulation
//!   strategy (chain construction, Langevin integration, metric derivation).
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties the
//!   `engine` and `core` together to turn one request into one response under a chosen backend.
//!   It provides a simple and powerful entry point for end-users of the library.
//!
//! ## Execution Strategies
//!
//! Two strategies produce the same response shape: a particle-based Langevin
//! simulation (behind the `simulation` cargo feature, on by default) and a
//! deterministic closed-form heuristic that keeps the pipeline available when
//! the simulation toolkit is absent. The strategy is selected exactly once at
//! startup and injected into the workflow; it never changes mid-call.

pub mod core;
pub mod engine;
pub mod workflows;
