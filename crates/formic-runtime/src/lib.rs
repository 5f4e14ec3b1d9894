//! # Formic Runtime
//!
//! Colony management and the foraging loop.
//!
//! The runtime is the colony: it owns the topology, the pheromone field,
//! and every ant, runs the tick-based simulation, and records the best
//! source-to-destination path the ants discover.

pub mod colony;
pub mod colony_builder;
pub mod prelude;
