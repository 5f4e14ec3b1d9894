//! # Formic Core
//!
//! Core types for Formic, a Simple Ant Colony Optimization (S-ACO)
//! foraging simulation.
//!
//! A colony of ants walks a weighted directed graph from a nest (source)
//! toward a food site (destination). Each directed edge `(i, j)` carries an
//! artificial pheromone trail. Ants read trails stochastically when picking
//! the next node, deposit pheromone along every path that reaches the food,
//! and the trails evaporate between deposits. Shorter paths receive more
//! pheromone per edge, so the colony's traffic converges toward them.
//!
//! This crate holds the data model:
//!
//! - [`topology::Topology`] — the immutable foraging ground (edge lengths)
//! - [`pheromone::PheromoneField`] — the mutable trail state
//! - [`ant::Ant`] — one agent's movement record
//! - [`error::FormicError`] — validation and I/O failures
//!
//! The simulation loop that drives these lives in `formic-runtime`.
//!
//! ## Quick Start
//!
//! ```rust
//! use formic_core::prelude::*;
//!
//! let topology = Topology::double_bridge();
//! let mut field = PheromoneField::new(&topology, 1.0);
//!
//! field.deposit(&[0, 1, 3], 0.5);
//! assert!(field.trail(0, 1) > field.trail(0, 2));
//! ```

pub mod ant;
pub mod error;
pub mod pheromone;
pub mod prelude;
pub mod topology;
pub mod types;
