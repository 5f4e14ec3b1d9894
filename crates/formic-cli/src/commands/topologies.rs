//! List the built-in topologies.

use anyhow::Result;
use colored::Colorize;
use formic::prelude::*;

pub fn run() -> Result<()> {
    println!("{}", "Built-in topologies".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    for (name, topology, blurb) in [
        (
            "double-bridge",
            Topology::double_bridge(),
            "two equal branches between nest and food; the classic \
             symmetry-breaking experiment",
        ),
        (
            "extended-double-bridge",
            Topology::extended_double_bridge(),
            "19-node benchmark: a long chain competing with a denser mesh \
             (route 0 -> 8)",
        ),
    ] {
        println!(
            "  {} ({} nodes, {} edges)",
            name.cyan().bold(),
            topology.node_count(),
            topology.edge_count()
        );
        println!("    {}", blurb.dimmed());
        println!();
    }

    println!(
        "Select one in formic.toml: {}",
        "[topology] preset = \"extended-double-bridge\"".yellow()
    );

    Ok(())
}
