//! Provides serialization for the process-level boundary protocol.
//!
//! The bridge speaks a one-shot protocol: a single JSON request document is
//! read from the input channel and a single JSON response document (or an
//! error envelope) is written to the output channel. This module owns both
//! directions; no other file format exists in the system.

pub mod wire;
