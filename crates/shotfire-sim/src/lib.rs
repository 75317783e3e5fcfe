//! Simulation engine for SHOTFIRE.
//!
//! Owns the exercise state, applies operator commands, advances the
//! host-driven clock, and emits events. Completely headless (no UI
//! dependency), enabling deterministic testing.

pub mod engine;

pub use engine::{SimConfig, SimulationEngine};
pub use shotfire_core as core;
