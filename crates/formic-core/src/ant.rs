//! Ant — one foraging agent's movement record.
//!
//! An ant is a plain value struct owned by the colony; there is exactly
//! one kind of agent, so no trait object is involved. The colony advances
//! the record in place each tick: pick a target, walk along the edge,
//! hop on arrival, start over from the nest after reaching the food.

use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Per-ant mutable state.
///
/// `predecessor` is the node the ant most recently departed from; the
/// selection rule excludes it so an ant cannot immediately reverse its
/// last move. `path` is the node sequence of the current trip only and
/// is cleared whenever the ant restarts from the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ant {
    /// Node the ant is currently at (or departing from).
    pub current: NodeId,
    /// Node the ant is walking toward; `None` while choosing.
    pub target: Option<NodeId>,
    /// Distance covered along the current edge.
    pub progress: f64,
    /// Last node departed from, excluded from the next choice.
    pub predecessor: Option<NodeId>,
    /// Nodes visited on the current trip.
    pub path: Vec<NodeId>,
}

impl Ant {
    /// A fresh ant sitting at the source with no history.
    pub fn at(source: NodeId) -> Self {
        Self {
            current: source,
            target: None,
            progress: 0.0,
            predecessor: None,
            path: Vec::new(),
        }
    }

    /// Return to the initial state after completing a trip.
    pub fn reset(&mut self, source: NodeId) {
        self.current = source;
        self.target = None;
        self.progress = 0.0;
        self.predecessor = None;
        self.path.clear();
    }

    /// Whether the ant is mid-edge (a target is chosen).
    pub fn is_traveling(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ant_has_no_history() {
        let ant = Ant::at(3);
        assert_eq!(ant.current, 3);
        assert_eq!(ant.target, None);
        assert_eq!(ant.predecessor, None);
        assert_eq!(ant.progress, 0.0);
        assert!(ant.path.is_empty());
        assert!(!ant.is_traveling());
    }

    #[test]
    fn reset_clears_the_trip() {
        let mut ant = Ant::at(0);
        ant.target = Some(2);
        ant.progress = 0.75;
        ant.predecessor = Some(1);
        ant.path = vec![0, 1, 2];

        ant.reset(0);

        assert_eq!(ant.current, 0);
        assert_eq!(ant.target, None);
        assert_eq!(ant.progress, 0.0);
        assert_eq!(ant.predecessor, None);
        assert!(ant.path.is_empty());
    }
}
