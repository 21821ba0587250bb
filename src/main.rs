//! Gloomwarren - Entry Point
//!
//! Loads the generation config, runs the generator, prints the dungeon
//! to the console, and optionally writes it to a JSON save file.

use std::env;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use gloomwarren::config::GenConfig;
use gloomwarren::render::render_grid;
use gloomwarren::save::save_grid;
use gloomwarren::world::generation::generate;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Gloomwarren v{}", env!("CARGO_PKG_VERSION"));

    let mut args = env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "config.csv".to_string());
    let save_path = args.next();

    let config = GenConfig::from_path(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;
    log::info!(
        "generating a {0}x{0} dungeon with target grade {1}",
        config.size,
        config.target_grade
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let grid = generate(&config, &mut rng).context("dungeon generation failed")?;
    print!("{}", render_grid(&grid));

    if let Some(path) = save_path {
        save_grid(&grid, &path).with_context(|| format!("saving grid to {}", path))?;
    }

    log::info!("Gloomwarren finished cleanly");
    Ok(())
}
