//! Error types for Formic operations.
//!
//! Provides structured error handling instead of panics. Everything a
//! caller can get wrong — a malformed length matrix, an out-of-range
//! endpoint, a nonsensical parameter — is rejected at construction time
//! with a descriptive error.

use std::error::Error;
use std::fmt;

/// Result type for Formic operations.
pub type Result<T> = std::result::Result<T, FormicError>;

/// Errors that can occur during Formic operations.
#[derive(Debug, Clone)]
pub enum FormicError {
    /// Topology construction errors.
    Topology(TopologyError),
    /// Simulation parameter errors.
    Config(ConfigError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for FormicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormicError::Topology(e) => write!(f, "Topology error: {}", e),
            FormicError::Config(e) => write!(f, "Config error: {}", e),
            FormicError::Io(msg) => write!(f, "I/O error: {}", msg),
            FormicError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for FormicError {}

impl From<std::io::Error> for FormicError {
    fn from(e: std::io::Error) -> Self {
        FormicError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FormicError {
    fn from(e: serde_json::Error) -> Self {
        FormicError::Serialization(e.to_string())
    }
}

/// Topology construction errors.
#[derive(Debug, Clone)]
pub enum TopologyError {
    /// The length matrix has no nodes.
    Empty,
    /// A row's width does not match the node count.
    NotSquare { nodes: usize, row: usize, width: usize },
    /// An edge length is negative or not finite.
    InvalidLength { from: usize, to: usize, length: f64 },
    /// An edge references a node outside `0..nodes`.
    EdgeOutOfRange { from: usize, to: usize, nodes: usize },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyError::Empty => write!(f, "Topology has no nodes"),
            TopologyError::NotSquare { nodes, row, width } => {
                write!(
                    f,
                    "Length matrix is not square: row {} has width {} (expected {})",
                    row, width, nodes
                )
            }
            TopologyError::InvalidLength { from, to, length } => {
                write!(
                    f,
                    "Invalid length for edge {} -> {}: {} (must be finite and nonnegative)",
                    from, to, length
                )
            }
            TopologyError::EdgeOutOfRange { from, to, nodes } => {
                write!(
                    f,
                    "Edge {} -> {} references a node outside 0..{}",
                    from, to, nodes
                )
            }
        }
    }
}

/// Simulation parameter errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// A node id is outside the topology.
    NodeOutOfRange {
        field: String,
        node: usize,
        nodes: usize,
    },
    /// A numeric parameter is outside its allowed range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// Invalid value.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NodeOutOfRange { field, node, nodes } => {
                write!(f, "{} node {} is outside 0..{}", field, node, nodes)
            }
            ConfigError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
        }
    }
}

// Convenience constructors
impl FormicError {
    pub fn node_out_of_range(field: impl Into<String>, node: usize, nodes: usize) -> Self {
        FormicError::Config(ConfigError::NodeOutOfRange {
            field: field.into(),
            node,
            nodes,
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        FormicError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FormicError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
