//! Utility functions for the core module.
//!
//! This module provides the geometric metrics shared by both evaluation
//! strategies and the unit conversions applied at the wire/internal
//! boundary.

pub mod geometry;
pub mod units;
