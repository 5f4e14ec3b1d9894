//! Configuration management for the Formic CLI.
//!
//! A project is described by a `formic.toml` found in the current or a
//! parent directory. The defaults reproduce the extended-double-bridge
//! benchmark run.

use anyhow::{bail, Context, Result};
use formic::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Formic project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub colony: ColonySection,
    #[serde(default)]
    pub route: RouteSection,
    #[serde(default)]
    pub topology: TopologySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonySection {
    #[serde(default = "default_ants")]
    pub ants: usize,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_evaporation")]
    pub evaporation: f64,
    #[serde(default = "default_pheromone_min")]
    pub pheromone_min: f64,
    /// Fixed seed for reproducible runs; omit for OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSection {
    #[serde(default)]
    pub source: usize,
    #[serde(default = "default_destination")]
    pub destination: usize,
}

/// Either a built-in preset or an explicit edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySection {
    /// Built-in preset name; see `formic topologies`.
    #[serde(default = "default_preset", skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Node count for an explicit edge list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<usize>,
    /// Explicit directed edges as `[from, to, length]` triples.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<(usize, usize, f64)>,
}

// Default value functions — the reference benchmark parameters.
fn default_ants() -> usize {
    5
}
fn default_ticks() -> u64 {
    100
}
fn default_speed() -> f64 {
    0.5
}
fn default_evaporation() -> f64 {
    0.01
}
fn default_pheromone_min() -> f64 {
    1.0
}
fn default_destination() -> usize {
    8
}
fn default_preset() -> Option<String> {
    Some("extended-double-bridge".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colony: ColonySection::default(),
            route: RouteSection::default(),
            topology: TopologySection::default(),
        }
    }
}

impl Default for ColonySection {
    fn default() -> Self {
        Self {
            ants: default_ants(),
            ticks: default_ticks(),
            speed: default_speed(),
            evaporation: default_evaporation(),
            pheromone_min: default_pheromone_min(),
            seed: None,
        }
    }
}

impl Default for RouteSection {
    fn default() -> Self {
        Self {
            source: 0,
            destination: default_destination(),
        }
    }
}

impl Default for TopologySection {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            nodes: None,
            edges: Vec::new(),
        }
    }
}

impl ColonySection {
    /// Simulation parameters for the runtime.
    pub fn foraging_config(&self) -> ForagingConfig {
        ForagingConfig {
            ants: self.ants,
            ticks: self.ticks,
            speed: self.speed,
            evaporation: self.evaporation,
            pheromone_min: self.pheromone_min,
        }
    }
}

impl TopologySection {
    /// Resolve this section into a topology.
    ///
    /// An explicit edge list takes precedence over the preset.
    pub fn build(&self) -> Result<Topology> {
        if !self.edges.is_empty() {
            let nodes = match self.nodes {
                Some(nodes) => nodes,
                None => bail!("[topology] edges require an explicit node count (nodes = N)"),
            };
            return Topology::from_edges(nodes, &self.edges)
                .context("invalid [topology] edge list");
        }
        match self.preset.as_deref() {
            Some(name) => preset_by_name(name),
            None => bail!("[topology] needs either a preset or an edge list"),
        }
    }
}

/// Look up a built-in topology by preset name.
pub fn preset_by_name(name: &str) -> Result<Topology> {
    match name {
        "double-bridge" => Ok(Topology::double_bridge()),
        "extended-double-bridge" => Ok(Topology::extended_double_bridge()),
        other => bail!(
            "Unknown topology preset '{}'. Run `formic topologies` for the built-in list.",
            other
        ),
    }
}

impl Config {
    /// Load config from formic.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        if let Some(path) = find_config_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find formic.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join("formic.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml_text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed.colony.ants, 5);
        assert_eq!(parsed.colony.ticks, 100);
        assert_eq!(parsed.route.destination, 8);
        assert_eq!(
            parsed.topology.preset.as_deref(),
            Some("extended-double-bridge")
        );
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.colony.speed, 0.5);
        assert_eq!(parsed.colony.evaporation, 0.01);
        assert_eq!(parsed.route.source, 0);
    }

    #[test]
    fn explicit_edges_override_the_preset() {
        let parsed: Config = toml::from_str(
            r#"
            [topology]
            nodes = 2
            edges = [[0, 1, 1.0]]
            "#,
        )
        .unwrap();
        let topology = parsed.topology.build().unwrap();
        assert_eq!(topology.node_count(), 2);
        assert_eq!(topology.edge_count(), 1);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(preset_by_name("moebius-bridge").is_err());
    }

    #[test]
    fn edges_without_node_count_are_rejected() {
        let section = TopologySection {
            preset: None,
            nodes: None,
            edges: vec![(0, 1, 1.0)],
        };
        assert!(section.build().is_err());
    }
}
