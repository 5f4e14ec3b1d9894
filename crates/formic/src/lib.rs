//! # Formic
//!
//! Shortest-path foraging with artificial pheromone trails.
//!
//! Formic implements Simple Ant Colony Optimization (S-ACO): a colony of
//! ants walks a weighted directed graph from a nest toward a food site.
//! Every directed edge carries a pheromone trail; ants pick their next
//! node stochastically in proportion to trail intensity, deposit
//! `1 / path_node_count` of pheromone along every completed trip, and all
//! trails evaporate toward a floor between deposits. Shorter trips lay
//! more pheromone per edge, so traffic converges toward short routes.
//!
//! ## Quick Start
//!
//! ```rust
//! use formic::prelude::*;
//!
//! // The classic two-branch experiment: nest 0, food 3.
//! let topology = Topology::double_bridge();
//!
//! let mut colony = ColonyBuilder::new(topology)
//!     .route(0, 3)
//!     .config(ForagingConfig::default())
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let outcome = colony.forage();
//! if let Some(path) = outcome.best_path {
//!     println!("best trip has {} nodes: {:?}", path.len(), path);
//! }
//! ```
//!
//! ## Architecture
//!
//! Formic is organized into a few small crates:
//!
//! - [`formic_core`] - topology, pheromone field, ant state, errors
//! - [`formic_runtime`] - the colony: tick loop, events, stats, snapshots
//! - `formic-cli` - the `formic` binary (TOML config, terminal output)
//!
//! ## Key Concepts
//!
//! | Mechanism | What it does |
//! |-----------|--------------|
//! | Pheromone trail | per-edge weight read stochastically by the ants |
//! | Deposit | every completed trip adds `1/nodes` to its edges |
//! | Evaporation | trails decay toward a floor, forgetting stale routes |
//! | Predecessor exclusion | an ant never immediately reverses its last hop |
//!
//! The colony emits typed [`ColonyEvent`](prelude::ColonyEvent)s each tick
//! and keeps the full history, so a run can be inspected or exported as a
//! JSON snapshot after the fact.

// Re-export all subcrates
pub use formic_core as core;
pub use formic_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use formic::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use formic_core::ant::Ant;
    pub use formic_core::pheromone::PheromoneField;
    pub use formic_core::topology::Topology;
    pub use formic_core::types::{NodeId, Tick};

    // Error types
    pub use formic_core::error::{ConfigError, FormicError, Result, TopologyError};

    // Runtime
    pub use formic_runtime::colony::{
        AntSnapshot, Colony, ColonyEvent, ColonySnapshot, ColonyStats, ForagingConfig,
        ForagingOutcome, TrailSnapshot,
    };
    pub use formic_runtime::colony_builder::ColonyBuilder;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
