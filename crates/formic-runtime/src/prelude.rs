//! Formic Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use formic_runtime::prelude::*;
//! ```

// Re-export colony
pub use crate::colony::{
    AntSnapshot, Colony, ColonyEvent, ColonySnapshot, ColonyStats, ForagingConfig,
    ForagingOutcome, TrailSnapshot,
};

// Re-export colony builder
pub use crate::colony_builder::ColonyBuilder;

// Re-export from core
pub use formic_core::prelude::*;
