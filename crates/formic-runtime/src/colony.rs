//! Colony — ant lifecycle management and the foraging loop.
//!
//! The colony is the organism. It owns the topology, the pheromone field,
//! and every ant, and advances them through discrete ticks.
//!
//! Each tick, for each ant in population order:
//! 1. The whole field evaporates once
//! 2. That ant advances one step (choose a target / walk / arrive)
//!
//! Evaporation therefore runs once per *ant advancement*, not once per
//! tick — with `ants` ants the effective decay per tick is
//! `rate^ants`. The tuned reference parameters assume this cadence, so it
//! is kept deliberately; `evaporation_applied_per_ant_advancement` pins it.
//!
//! On reaching the destination an ant deposits `1 / path_node_count` of
//! pheromone along every edge of its trip, the best-path record is updated
//! when the trip is strictly shorter (fewer nodes) than the current best,
//! and the ant restarts from the source.

use formic_core::ant::Ant;
use formic_core::error::{FormicError, Result};
use formic_core::pheromone::PheromoneField;
use formic_core::topology::Topology;
use formic_core::types::{NodeId, Tick};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::colony_builder::ColonyBuilder;

/// Event emitted by the colony during simulation.
#[derive(Debug, Clone, Serialize)]
pub enum ColonyEvent {
    /// An ant committed to its next edge.
    Departed { ant: usize, from: NodeId, to: NodeId },
    /// An ant finished an edge mid-trip.
    Arrived { ant: usize, node: NodeId },
    /// An ant reached the destination and reinforced its trip.
    PathCompleted {
        ant: usize,
        path: Vec<NodeId>,
        deposit: f64,
    },
    /// A completed trip was strictly shorter than the best so far.
    BestPathImproved { ant: usize, path: Vec<NodeId> },
    /// An ant has no edge to take and no predecessor to back out to.
    Stuck { ant: usize, node: NodeId },
    /// A tick completed.
    TickComplete { tick: Tick, completions: usize },
}

/// Statistics about the colony.
#[derive(Debug, Clone, Serialize)]
pub struct ColonyStats {
    pub tick: Tick,
    pub ants: usize,
    pub paths_completed: u64,
    pub best_path_len: Option<usize>,
    pub edges: usize,
    pub trail_total: f64,
    pub trail_max: f64,
}

/// A serializable snapshot of one ant's state.
#[derive(Debug, Clone, Serialize)]
pub struct AntSnapshot {
    pub ant: usize,
    pub current: NodeId,
    pub target: Option<NodeId>,
    pub progress: f64,
    pub visited: usize,
}

/// A serializable snapshot of one edge's trail.
#[derive(Debug, Clone, Serialize)]
pub struct TrailSnapshot {
    pub from: NodeId,
    pub to: NodeId,
    pub length: f64,
    pub trail: f64,
}

/// A complete serializable snapshot of the colony at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct ColonySnapshot {
    pub run_id: Uuid,
    pub tick: Tick,
    pub source: NodeId,
    pub destination: NodeId,
    pub ants: Vec<AntSnapshot>,
    pub trails: Vec<TrailSnapshot>,
    pub best_path: Option<Vec<NodeId>>,
    pub stats: ColonyStats,
}

/// The final result of a foraging run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForagingOutcome {
    /// Shortest (fewest nodes) completed path, `None` when no trip ever
    /// reached the destination.
    pub best_path: Option<Vec<NodeId>>,
    pub ticks: Tick,
    pub paths_completed: u64,
}

/// Configuration for foraging simulation parameters.
///
/// The defaults are the reference benchmark parameters. Note the default
/// evaporation of 0.01 is a *retention* rate per evaporation pass — trails
/// collapse back to the floor almost immediately unless re-deposited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForagingConfig {
    /// Ant population size (default: 5).
    pub ants: usize,
    /// Ticks a full run lasts (default: 100).
    pub ticks: u64,
    /// Distance an ant covers per tick (default: 0.5).
    pub speed: f64,
    /// Trail retention factor per evaporation pass, 0.0-1.0 (default: 0.01).
    pub evaporation: f64,
    /// Floor every trail is clamped up to (default: 1.0). Must be positive,
    /// or the selection draw would divide by a zero trail sum.
    pub pheromone_min: f64,
}

impl Default for ForagingConfig {
    fn default() -> Self {
        Self {
            ants: 5,
            ticks: 100,
            speed: 0.5,
            evaporation: 0.01,
            pheromone_min: 1.0,
        }
    }
}

/// The colony — owns all simulation state and advances it tick by tick.
pub struct Colony {
    run_id: Uuid,
    topology: Topology,
    pheromone: PheromoneField,
    ants: Vec<Ant>,
    rng: StdRng,
    source: NodeId,
    destination: NodeId,
    config: ForagingConfig,
    tick: Tick,
    best_path: Option<Vec<NodeId>>,
    paths_completed: u64,
    event_history: Vec<(Tick, ColonyEvent)>,
    reported_stuck: Vec<bool>,
}

impl Colony {
    /// Create a colony with default parameters and an entropy seed.
    pub fn new(topology: Topology, source: NodeId, destination: NodeId) -> Result<Self> {
        ColonyBuilder::new(topology)
            .route(source, destination)
            .build()
    }

    pub(crate) fn from_parts(
        topology: Topology,
        source: NodeId,
        destination: NodeId,
        config: ForagingConfig,
        seed: Option<u64>,
    ) -> Result<Self> {
        let nodes = topology.node_count();
        if source >= nodes {
            return Err(FormicError::node_out_of_range("source", source, nodes));
        }
        if destination >= nodes {
            return Err(FormicError::node_out_of_range(
                "destination",
                destination,
                nodes,
            ));
        }
        if config.pheromone_min <= 0.0 || !config.pheromone_min.is_finite() {
            return Err(FormicError::invalid_config(
                "pheromone_min",
                config.pheromone_min.to_string(),
                "must be positive",
            ));
        }
        if config.speed <= 0.0 || !config.speed.is_finite() {
            return Err(FormicError::invalid_config(
                "speed",
                config.speed.to_string(),
                "must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&config.evaporation) {
            return Err(FormicError::out_of_range(
                "evaporation",
                0.0,
                1.0,
                config.evaporation,
            ));
        }
        if config.ants == 0 {
            return Err(FormicError::invalid_config(
                "ants",
                "0",
                "colony needs at least one ant",
            ));
        }

        let pheromone = PheromoneField::new(&topology, config.pheromone_min);
        let ants = vec![Ant::at(source); config.ants];
        let reported_stuck = vec![false; config.ants];
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // An ant born on the food site has nothing to discover.
        let best_path = (source == destination).then(|| vec![source]);

        Ok(Self {
            run_id: Uuid::new_v4(),
            topology,
            pheromone,
            ants,
            rng,
            source,
            destination,
            config,
            tick: 0,
            best_path,
            paths_completed: 0,
            event_history: Vec::new(),
            reported_stuck,
        })
    }

    /// Run a single simulation tick.
    pub fn tick(&mut self) -> Vec<ColonyEvent> {
        let mut events = Vec::new();
        let mut completions = 0usize;

        if self.source != self.destination {
            for idx in 0..self.ants.len() {
                self.pheromone.evaporate(
                    &self.topology,
                    self.config.evaporation,
                    self.config.pheromone_min,
                );
                self.advance_ant(idx, &mut events, &mut completions);
            }
        }

        self.tick += 1;
        events.push(ColonyEvent::TickComplete {
            tick: self.tick,
            completions,
        });

        for event in &events {
            self.event_history.push((self.tick, event.clone()));
        }

        events
    }

    /// Advance one ant through the choose / walk / arrive sequence.
    ///
    /// The three steps run in order within the same tick, so a short edge
    /// can be chosen, walked, and arrived at in a single advancement.
    fn advance_ant(&mut self, idx: usize, events: &mut Vec<ColonyEvent>, completions: &mut usize) {
        // Step 1: pick a target if none is committed.
        if self.ants[idx].target.is_none() {
            let from = self.ants[idx].current;
            let predecessor = self.ants[idx].predecessor;
            match self.choose_next(from, predecessor) {
                Some(next) => {
                    self.ants[idx].target = Some(next);
                    events.push(ColonyEvent::Departed {
                        ant: idx,
                        from,
                        to: next,
                    });
                }
                None => {
                    if !self.reported_stuck[idx] {
                        self.reported_stuck[idx] = true;
                        events.push(ColonyEvent::Stuck {
                            ant: idx,
                            node: from,
                        });
                    }
                    return;
                }
            }
        }

        let Some(target) = self.ants[idx].target else {
            return;
        };
        let length = self.topology.edge_length(self.ants[idx].current, target);

        // Step 2: walk. Progress may end past the edge length; the excess
        // is accepted, never trimmed back.
        if self.ants[idx].progress < length {
            self.ants[idx].progress += self.config.speed;
        }

        // Step 3: arrival.
        if self.ants[idx].progress >= length {
            let current = self.ants[idx].current;
            if target == self.destination {
                self.ants[idx].path.push(current);
                self.ants[idx].path.push(target);
                let path = self.ants[idx].path.clone();
                let deposit = 1.0 / path.len() as f64;
                self.pheromone.deposit(&path, deposit);
                self.paths_completed += 1;
                *completions += 1;
                events.push(ColonyEvent::PathCompleted {
                    ant: idx,
                    path: path.clone(),
                    deposit,
                });
                let improved = self
                    .best_path
                    .as_ref()
                    .map_or(true, |best| path.len() < best.len());
                if improved {
                    self.best_path = Some(path.clone());
                    events.push(ColonyEvent::BestPathImproved { ant: idx, path });
                }
                self.ants[idx].reset(self.source);
            } else {
                self.ants[idx].path.push(current);
                self.ants[idx].predecessor = Some(current);
                self.ants[idx].current = target;
                self.ants[idx].target = None;
                self.ants[idx].progress = 0.0;
                events.push(ColonyEvent::Arrived { ant: idx, node: target });
            }
        }
    }

    /// Stochastic next-node selection.
    ///
    /// Candidates are the out-neighbors of `from` minus the predecessor.
    /// Each candidate is weighted by its current trail; a uniform draw in
    /// `[0, 1)` walks the cumulative weights in ascending node order. An
    /// empty candidate set forces a backtrack to the predecessor (`None`
    /// when the ant has never moved — a genuinely stuck ant).
    fn choose_next(&mut self, from: NodeId, predecessor: Option<NodeId>) -> Option<NodeId> {
        let candidates: Vec<NodeId> = self
            .topology
            .neighbors(from)
            .filter(|&node| Some(node) != predecessor)
            .collect();
        if candidates.is_empty() {
            return predecessor;
        }

        let total: f64 = candidates
            .iter()
            .map(|&node| self.pheromone.trail(from, node))
            .sum();
        let draw: f64 = self.rng.gen();
        let mut cumulative = 0.0;
        for &node in &candidates {
            cumulative += self.pheromone.trail(from, node) / total;
            if draw < cumulative {
                return Some(node);
            }
        }
        // Rounding can leave the cumulative sum a hair under 1.0; the
        // fallthrough is defined to back off to the predecessor.
        predecessor
    }

    /// Run the simulation for N ticks.
    pub fn run(&mut self, ticks: u64) -> Vec<Vec<ColonyEvent>> {
        let mut all_events = Vec::new();
        for _ in 0..ticks {
            all_events.push(self.tick());
        }
        all_events
    }

    /// Run the configured full duration and report the outcome.
    pub fn forage(&mut self) -> ForagingOutcome {
        self.run(self.config.ticks);
        self.outcome()
    }

    /// The outcome so far. Reports "no path" rather than panicking when
    /// nothing ever completed.
    pub fn outcome(&self) -> ForagingOutcome {
        ForagingOutcome {
            best_path: self.best_path.clone(),
            ticks: self.tick,
            paths_completed: self.paths_completed,
        }
    }

    /// Get colony statistics.
    pub fn stats(&self) -> ColonyStats {
        let mut trail_total = 0.0;
        let mut trail_max = 0.0f64;
        let mut edges = 0usize;
        for (from, to, _) in self.topology.edges() {
            let trail = self.pheromone.trail(from, to);
            trail_total += trail;
            trail_max = trail_max.max(trail);
            edges += 1;
        }
        ColonyStats {
            tick: self.tick,
            ants: self.ants.len(),
            paths_completed: self.paths_completed,
            best_path_len: self.best_path.as_ref().map(Vec::len),
            edges,
            trail_total,
            trail_max,
        }
    }

    /// Take a serializable snapshot of the colony's current state.
    pub fn snapshot(&self) -> ColonySnapshot {
        let ants = self
            .ants
            .iter()
            .enumerate()
            .map(|(idx, ant)| AntSnapshot {
                ant: idx,
                current: ant.current,
                target: ant.target,
                progress: ant.progress,
                visited: ant.path.len(),
            })
            .collect();

        let trails = self
            .topology
            .edges()
            .map(|(from, to, length)| TrailSnapshot {
                from,
                to,
                length,
                trail: self.pheromone.trail(from, to),
            })
            .collect();

        ColonySnapshot {
            run_id: self.run_id,
            tick: self.tick,
            source: self.source,
            destination: self.destination,
            ants,
            trails,
            best_path: self.best_path.clone(),
            stats: self.stats(),
        }
    }

    /// Best (fewest nodes) completed path so far.
    pub fn best_path(&self) -> Option<&[NodeId]> {
        self.best_path.as_deref()
    }

    /// Get the full event history with tick numbers.
    pub fn event_history(&self) -> &[(Tick, ColonyEvent)] {
        &self.event_history
    }

    /// Current simulation tick.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Get a reference to the ants.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Get a reference to the topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Get a reference to the pheromone field.
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    /// Get a mutable reference to the pheromone field.
    pub fn pheromone_mut(&mut self) -> &mut PheromoneField {
        &mut self.pheromone
    }

    /// The configured parameters.
    pub fn config(&self) -> &ForagingConfig {
        &self.config
    }

    /// Source (nest) node.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Destination (food) node.
    pub fn destination(&self) -> NodeId {
        self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colony_builder::ColonyBuilder;

    fn single_edge() -> Topology {
        Topology::from_edges(2, &[(0, 1, 1.0)]).unwrap()
    }

    #[test]
    fn single_edge_trip_completes_on_the_second_tick() {
        let mut colony = ColonyBuilder::new(single_edge())
            .route(0, 1)
            .config(ForagingConfig {
                ants: 1,
                ..ForagingConfig::default()
            })
            .seed(7)
            .build()
            .unwrap();

        let first = colony.tick();
        assert!(
            !first
                .iter()
                .any(|e| matches!(e, ColonyEvent::PathCompleted { .. })),
            "half an edge walked, no completion yet"
        );

        let second = colony.tick();
        assert!(second
            .iter()
            .any(|e| matches!(e, ColonyEvent::PathCompleted { .. })));
        assert_eq!(colony.best_path(), Some(&[0, 1][..]));
        // Deposit is 1 / node_count = 0.5 on top of the 1.0 floor.
        assert!((colony.pheromone().trail(0, 1) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn double_bridge_trips_are_always_three_nodes() {
        // With the predecessor excluded, a middle node's only remaining
        // neighbor is the destination, so every trip is exactly
        // source -> middle -> destination and the best path never improves
        // past its first recording.
        let mut colony = ColonyBuilder::new(Topology::double_bridge())
            .route(0, 3)
            .config(ForagingConfig {
                ants: 1,
                ..ForagingConfig::default()
            })
            .seed(11)
            .build()
            .unwrap();
        colony.run(200);

        let outcome = colony.outcome();
        assert!(outcome.paths_completed > 1);
        assert_eq!(outcome.best_path.as_ref().map(Vec::len), Some(3));

        let improvements = colony
            .event_history()
            .iter()
            .filter(|(_, e)| matches!(e, ColonyEvent::BestPathImproved { .. }))
            .count();
        assert_eq!(
            improvements, 1,
            "equal-length trips must not re-record the best path"
        );
    }

    #[test]
    fn choose_next_excludes_the_predecessor() {
        let topology = Topology::from_symmetric_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let mut colony = ColonyBuilder::new(topology)
            .route(0, 2)
            .seed(3)
            .build()
            .unwrap();
        for _ in 0..50 {
            assert_eq!(colony.choose_next(1, Some(0)), Some(2));
        }
    }

    #[test]
    fn choose_next_backtracks_when_nothing_else_remains() {
        let topology = Topology::from_symmetric_edges(2, &[(0, 1, 1.0)]).unwrap();
        let mut colony = ColonyBuilder::new(topology)
            .route(0, 1)
            .seed(3)
            .build()
            .unwrap();
        assert_eq!(colony.choose_next(1, Some(0)), Some(0));
    }

    #[test]
    fn ant_with_no_exit_reports_stuck_once() {
        // Only edge points *into* the source; the ant can never leave.
        let topology = Topology::from_edges(2, &[(1, 0, 1.0)]).unwrap();
        let mut colony = ColonyBuilder::new(topology)
            .route(0, 1)
            .config(ForagingConfig {
                ants: 1,
                ..ForagingConfig::default()
            })
            .seed(5)
            .build()
            .unwrap();
        colony.run(10);

        let stuck = colony
            .event_history()
            .iter()
            .filter(|(_, e)| matches!(e, ColonyEvent::Stuck { .. }))
            .count();
        assert_eq!(stuck, 1);
        assert_eq!(colony.outcome().best_path, None);
    }

    #[test]
    fn evaporation_applied_per_ant_advancement() {
        // Three ants on a far-too-long edge: nobody completes, so the only
        // trail change in a tick is evaporation — applied once per ant.
        let topology = Topology::from_edges(2, &[(0, 1, 1000.0)]).unwrap();
        let mut colony = ColonyBuilder::new(topology)
            .route(0, 1)
            .config(ForagingConfig {
                ants: 3,
                evaporation: 0.5,
                pheromone_min: 0.001,
                ..ForagingConfig::default()
            })
            .seed(5)
            .build()
            .unwrap();

        colony.pheromone_mut().deposit(&[0, 1], 0.799);
        assert!((colony.pheromone().trail(0, 1) - 0.8).abs() < 1e-12);

        colony.tick();
        // 0.8 * 0.5^3, one halving per ant, not a single 0.5 for the tick.
        assert!((colony.pheromone().trail(0, 1) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn source_equals_destination_is_already_at_food() {
        let mut colony = ColonyBuilder::new(single_edge())
            .route(0, 0)
            .seed(1)
            .build()
            .unwrap();
        assert_eq!(colony.best_path(), Some(&[0][..]));

        let events = colony.tick();
        assert!(
            events
                .iter()
                .all(|e| matches!(e, ColonyEvent::TickComplete { .. })),
            "ants stay idle when the nest is the food"
        );
        assert_eq!(colony.best_path(), Some(&[0][..]));
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        assert!(Colony::new(single_edge(), 5, 1).is_err());
        assert!(Colony::new(single_edge(), 0, 5).is_err());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let bad_floor = ColonyBuilder::new(single_edge())
            .route(0, 1)
            .config(ForagingConfig {
                pheromone_min: 0.0,
                ..ForagingConfig::default()
            })
            .build();
        assert!(bad_floor.is_err());

        let bad_rate = ColonyBuilder::new(single_edge())
            .route(0, 1)
            .config(ForagingConfig {
                evaporation: 1.5,
                ..ForagingConfig::default()
            })
            .build();
        assert!(bad_rate.is_err());

        let no_ants = ColonyBuilder::new(single_edge())
            .route(0, 1)
            .config(ForagingConfig {
                ants: 0,
                ..ForagingConfig::default()
            })
            .build();
        assert!(no_ants.is_err());
    }

    #[test]
    fn stats_track_trail_aggregates() {
        let mut colony = ColonyBuilder::new(single_edge())
            .route(0, 1)
            .config(ForagingConfig {
                ants: 1,
                ..ForagingConfig::default()
            })
            .seed(7)
            .build()
            .unwrap();
        colony.run(2);

        let stats = colony.stats();
        assert_eq!(stats.tick, 2);
        assert_eq!(stats.ants, 1);
        assert_eq!(stats.edges, 1);
        assert_eq!(stats.paths_completed, 1);
        assert_eq!(stats.best_path_len, Some(2));
        assert!((stats.trail_max - 1.5).abs() < 1e-12);
        assert!((stats.trail_total - 1.5).abs() < 1e-12);
    }

    #[test]
    fn snapshot_serializes() {
        let colony = Colony::new(Topology::double_bridge(), 0, 3).unwrap();
        let snapshot = colony.snapshot();
        assert_eq!(snapshot.trails.len(), 8);
        assert_eq!(snapshot.ants.len(), 5);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"trails\""));
    }
}
