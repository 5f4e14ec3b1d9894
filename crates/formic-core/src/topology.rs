//! Topology — the foraging ground.
//!
//! The topology is a directed graph stored as a dense length matrix:
//! `lengths[i][j] > 0.0` means an edge from `i` to `j` of that length,
//! `0.0` means no edge. It is immutable after construction — ants read
//! edge lengths, and only the pheromone field ever changes during a run.
//!
//! Edges are directed and not necessarily symmetric, though the built-in
//! benchmark topologies mirror every edge.

use crate::error::{FormicError, Result, TopologyError};
use crate::types::NodeId;

/// An immutable weighted directed graph over nodes `0..node_count`.
#[derive(Debug, Clone)]
pub struct Topology {
    node_count: usize,
    lengths: Vec<Vec<f64>>,
}

impl Topology {
    /// Build a topology from a dense length matrix.
    ///
    /// The matrix must be square and every entry finite and nonnegative;
    /// `0.0` encodes "no edge".
    pub fn from_lengths(lengths: Vec<Vec<f64>>) -> Result<Self> {
        let nodes = lengths.len();
        if nodes == 0 {
            return Err(FormicError::Topology(TopologyError::Empty));
        }
        for (i, row) in lengths.iter().enumerate() {
            if row.len() != nodes {
                return Err(FormicError::Topology(TopologyError::NotSquare {
                    nodes,
                    row: i,
                    width: row.len(),
                }));
            }
            for (j, &length) in row.iter().enumerate() {
                if !length.is_finite() || length < 0.0 {
                    return Err(FormicError::Topology(TopologyError::InvalidLength {
                        from: i,
                        to: j,
                        length,
                    }));
                }
            }
        }
        Ok(Self {
            node_count: nodes,
            lengths,
        })
    }

    /// Build a topology from a directed edge list over `nodes` vertices.
    pub fn from_edges(nodes: usize, edges: &[(NodeId, NodeId, f64)]) -> Result<Self> {
        let mut lengths = vec![vec![0.0; nodes]; nodes];
        for &(from, to, length) in edges {
            if from >= nodes || to >= nodes {
                return Err(FormicError::Topology(TopologyError::EdgeOutOfRange {
                    from,
                    to,
                    nodes,
                }));
            }
            lengths[from][to] = length;
        }
        Self::from_lengths(lengths)
    }

    /// Build a topology from an undirected edge list: every pair is
    /// mirrored into both directions, as the benchmark configurations do.
    pub fn from_symmetric_edges(nodes: usize, edges: &[(NodeId, NodeId, f64)]) -> Result<Self> {
        let mut directed = Vec::with_capacity(edges.len() * 2);
        for &(a, b, length) in edges {
            directed.push((a, b, length));
            directed.push((b, a, length));
        }
        Self::from_edges(nodes, &directed)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether a directed edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.lengths[from][to] > 0.0
    }

    /// Length of the edge `from -> to`; `0.0` when the edge is absent.
    pub fn edge_length(&self, from: NodeId, to: NodeId) -> f64 {
        self.lengths[from][to]
    }

    /// Out-neighbors of a node, in ascending node order.
    ///
    /// The selection rule in the runtime iterates candidates in exactly
    /// this order, so the ordering here is part of the contract.
    pub fn neighbors(&self, from: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.lengths[from]
            .iter()
            .enumerate()
            .filter(|(_, &length)| length > 0.0)
            .map(|(to, _)| to)
    }

    /// All directed edges as `(from, to, length)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.lengths.iter().enumerate().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &length)| length > 0.0)
                .map(move |(to, &length)| (from, to, length))
        })
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// The minimal two-route benchmark: source 0, two equal branches
    /// (via 1 or via 2) to node 3. Both routes have the same length, so
    /// whichever branch the colony reinforces first tends to win.
    pub fn double_bridge() -> Self {
        Self::from_symmetric_edges(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 1.0), (2, 3, 1.0)])
            .expect("double bridge topology is valid")
    }

    /// The 19-node extended double bridge benchmark.
    ///
    /// A chain 0..8 competes with a denser mesh of alternatives between
    /// the same endpoints; the foraging run is usually configured with
    /// source 0 and destination 8.
    pub fn extended_double_bridge() -> Self {
        Self::from_symmetric_edges(
            19,
            &[
                (0, 1, 1.0),
                (0, 9, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
                (4, 5, 1.0),
                (5, 6, 1.0),
                (6, 7, 1.0),
                (7, 8, 1.0),
                (8, 13, 1.0),
                (9, 10, 1.0),
                (9, 16, 1.0),
                (10, 11, 1.0),
                (10, 12, 1.0),
                (10, 14, 1.0),
                (11, 12, 1.0),
                (12, 13, 1.0),
                (12, 15, 1.0),
                (13, 17, 1.0),
                (14, 15, 1.0),
                (14, 16, 1.0),
                (15, 17, 1.0),
                (16, 17, 1.0),
                (16, 18, 1.0),
                (17, 18, 1.0),
            ],
        )
        .expect("extended double bridge topology is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_matrix() {
        let err = Topology::from_lengths(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            FormicError::Topology(TopologyError::Empty)
        ));
    }

    #[test]
    fn rejects_ragged_matrix() {
        let err = Topology::from_lengths(vec![vec![0.0, 1.0], vec![0.0]]).unwrap_err();
        assert!(matches!(
            err,
            FormicError::Topology(TopologyError::NotSquare { row: 1, width: 1, .. })
        ));
    }

    #[test]
    fn rejects_negative_length() {
        let err = Topology::from_lengths(vec![vec![0.0, -1.0], vec![0.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            FormicError::Topology(TopologyError::InvalidLength { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn rejects_edge_outside_node_range() {
        let err = Topology::from_edges(2, &[(0, 2, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            FormicError::Topology(TopologyError::EdgeOutOfRange { from: 0, to: 2, nodes: 2 })
        ));
    }

    #[test]
    fn zero_length_means_no_edge() {
        let topology = Topology::from_lengths(vec![vec![0.0, 2.5], vec![0.0, 0.0]]).unwrap();
        assert!(topology.has_edge(0, 1));
        assert!(!topology.has_edge(1, 0));
        assert_eq!(topology.edge_length(0, 1), 2.5);
        assert_eq!(topology.edge_count(), 1);
    }

    #[test]
    fn neighbors_are_ascending() {
        let topology =
            Topology::from_edges(4, &[(0, 3, 1.0), (0, 1, 1.0), (0, 2, 1.0)]).unwrap();
        let neighbors: Vec<NodeId> = topology.neighbors(0).collect();
        assert_eq!(neighbors, vec![1, 2, 3]);
    }

    #[test]
    fn symmetric_edges_are_mirrored() {
        let topology = Topology::from_symmetric_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
        assert!(topology.has_edge(0, 1) && topology.has_edge(1, 0));
        assert!(topology.has_edge(1, 2) && topology.has_edge(2, 1));
        assert_eq!(topology.edge_length(2, 1), 2.0);
    }

    #[test]
    fn extended_double_bridge_shape() {
        let topology = Topology::extended_double_bridge();
        assert_eq!(topology.node_count(), 19);
        assert_eq!(topology.edge_count(), 50);
        // The chain route and the mesh route both leave the source.
        assert!(topology.has_edge(0, 1));
        assert!(topology.has_edge(0, 9));
        // The destination is reachable from both sides.
        assert!(topology.has_edge(7, 8));
        assert!(topology.has_edge(13, 8));
    }
}
