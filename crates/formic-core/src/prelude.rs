//! Formic Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formic_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::ant::Ant;
pub use crate::pheromone::PheromoneField;
pub use crate::topology::Topology;
pub use crate::types::{NodeId, Tick};

// Re-export error types
pub use crate::error::{ConfigError, FormicError, Result, TopologyError};
