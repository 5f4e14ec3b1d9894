//! Pheromone field — the colony's shared memory.
//!
//! Ants never talk to each other. They coordinate through the trails they
//! leave on the ground: every completed trip to the food deposits pheromone
//! along its edges, and all trails evaporate between deposits. The field is
//! simultaneously the record of past trips and the bias for future ones.
//!
//! Trails are defined only on edges the topology actually has, and the
//! evaporation step clamps every trail up to a floor value, so a trail
//! never decays to zero and every existing edge always keeps a nonzero
//! chance of being explored.

use crate::topology::Topology;
use crate::types::NodeId;

/// Per-directed-edge pheromone intensities, same shape as the topology.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    trail: Vec<Vec<f64>>,
}

impl PheromoneField {
    /// Initialize the field: every existing edge starts at `floor`.
    ///
    /// Must happen once, before any ant moves — the selection rule divides
    /// by the sum of candidate trails.
    pub fn new(topology: &Topology, floor: f64) -> Self {
        let nodes = topology.node_count();
        let mut trail = vec![vec![0.0; nodes]; nodes];
        for (from, to, _) in topology.edges() {
            trail[from][to] = floor;
        }
        Self { trail }
    }

    /// Current trail intensity on `from -> to`.
    pub fn trail(&self, from: NodeId, to: NodeId) -> f64 {
        self.trail[from][to]
    }

    /// Decay every existing edge: `trail *= rate`, clamped up to `floor`.
    pub fn evaporate(&mut self, topology: &Topology, rate: f64, floor: f64) {
        for (from, to, _) in topology.edges() {
            self.trail[from][to] *= rate;
            if self.trail[from][to] < floor {
                self.trail[from][to] = floor;
            }
        }
    }

    /// Reinforce every edge of a completed path by `amount`.
    ///
    /// `path` is the full node sequence of the trip; each consecutive pair
    /// is one deposit. Edges not on the path are untouched.
    pub fn deposit(&mut self, path: &[NodeId], amount: f64) {
        for pair in path.windows(2) {
            self.trail[pair[0]][pair[1]] += amount;
        }
    }
}
