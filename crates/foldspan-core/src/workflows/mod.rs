//! # Workflows Module
//!
//! This module provides the high-level entry point that orchestrates one
//! complete physics evaluation.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. The single workflow here
//! takes one validated request and one pre-selected backend and produces the
//! unified response, hiding the strategy dispatch, the simulation pipeline,
//! and the metric derivation behind one function call.
//!
//! ## Architecture
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Request validation, strategy
//!   dispatch, and response assembly for one rotation command.

pub mod evaluate;
