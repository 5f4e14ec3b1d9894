//! Formic CLI - ant-colony foraging simulations from the terminal.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "formic")]
#[command(author, version, about = "Formic - shortest-path foraging with pheromone trails", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Formic project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run the foraging simulation
    Run {
        /// Override the configured number of ticks
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Seed the random draws for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the final colony snapshot to a JSON file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the built-in topologies
    Topologies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run {
            ticks,
            seed,
            output,
        } => commands::run::run(ticks, seed, output.as_deref(), cli.verbose),
        Commands::Topologies => commands::topologies::run(),
    }
}
