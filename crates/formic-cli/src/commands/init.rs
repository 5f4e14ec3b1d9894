//! Initialize a new Formic project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = path
        .map(|p| Path::new(&p).to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    println!("{} Initializing Formic project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join("formic.toml");
    if !config_path.exists() {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!(
            "  {} {} already exists",
            "•".yellow(),
            config_path.display()
        );
    }

    println!();
    println!("{} Formic project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} formic topologies", "1.".blue());
    println!("  {} edit formic.toml", "2.".blue());
    println!("  {} formic run", "3.".blue());

    Ok(())
}
