//! Shared aliases used across the Formic crates.

/// A node in the foraging topology. Nodes are dense indices `0..node_count`.
pub type NodeId = usize;

/// The current tick of the simulation.
pub type Tick = u64;
