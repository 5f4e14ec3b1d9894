//! Run the foraging simulation.

use anyhow::{Context, Result};
use colored::Colorize;
use formic::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::config::Config;

pub fn run(
    ticks: Option<u64>,
    seed: Option<u64>,
    output: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let config = Config::load()?;
    let topology = config.topology.build()?;

    println!(
        "{} Building colony: {} nodes, {} edges, {} ants",
        "→".blue(),
        topology.node_count().to_string().cyan(),
        topology.edge_count().to_string().cyan(),
        config.colony.ants.to_string().cyan()
    );

    let mut builder = ColonyBuilder::new(topology)
        .route(config.route.source, config.route.destination)
        .config(config.colony.foraging_config());
    if let Some(seed) = seed.or(config.colony.seed) {
        builder = builder.seed(seed);
        println!("  Seed: {}", seed.to_string().cyan());
    }
    let mut colony = builder.build().context("Invalid simulation setup")?;

    let ticks = ticks.unwrap_or(config.colony.ticks);
    println!(
        "{} Foraging {} -> {} for {} ticks...",
        "→".blue(),
        config.route.source.to_string().cyan(),
        config.route.destination.to_string().cyan(),
        ticks.to_string().cyan()
    );

    let pb = ProgressBar::new(ticks);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")
            .unwrap()
            .progress_chars("#>-"),
    );

    for _ in 0..ticks {
        let events = colony.tick();
        if verbose {
            for event in &events {
                if let ColonyEvent::PathCompleted { ant, path, .. } = event {
                    pb.println(format!(
                        "  ant {} completed a {}-node trip: {}",
                        ant,
                        path.len(),
                        format_path(path)
                    ));
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let outcome = colony.outcome();
    println!();
    match &outcome.best_path {
        Some(path) => {
            println!("{} Foraging complete!", "✓".green().bold());
            println!(
                "  Best ({}) = {}",
                path.len().to_string().green(),
                format_path(path).cyan()
            );
        }
        None => {
            println!(
                "{} No path found from {} to {} after {} ticks",
                "✗".red().bold(),
                config.route.source,
                config.route.destination,
                ticks
            );
        }
    }
    println!(
        "  Completed trips: {}",
        outcome.paths_completed.to_string().cyan()
    );

    let stats = colony.stats();
    if verbose {
        println!(
            "  Strongest trail: {:.3} (floor {:.3})",
            stats.trail_max, config.colony.pheromone_min
        );
    }

    if let Some(output) = output {
        let snapshot = colony.snapshot();
        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize snapshot")?;
        std::fs::write(Path::new(output), json)
            .with_context(|| format!("Failed to write snapshot: {}", output))?;
        println!("  {} Snapshot written to {}", "✓".green(), output.cyan());
    }

    Ok(())
}

/// Render a path the way the benchmark prints it: `0->9->16->17->13->8`.
fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join("->")
}
