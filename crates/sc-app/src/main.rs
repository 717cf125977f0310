use anyhow::{Context, Result};
use clap::Parser;
use sc_core::RunConfig;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Resolve the palette selector (fatal before any grid work)
    let palette = cli.resolve_palette()?;

    // 4. Build the per-run config and run the pipeline
    let config = RunConfig {
        image: cli.image,
        destination: cli.out,
        palette,
        outline: cli.outline,
    };
    run(&config)
}

/// One full conversion run: load, convert, emit.
fn run(config: &RunConfig) -> Result<()> {
    let frame = sc_source::load_sprite(&config.image)
        .with_context(|| format!("loading {}", config.image.display()))?;
    log::info!(
        "converting {} ({}×{}) with the {:?} palette, outline: {}",
        config.image.display(),
        frame.width,
        frame.height,
        config.palette,
        config.outline
    );

    let grid = sc_ascii::convert(&frame, config.palette, config.outline);

    sc_ascii::render::render(&grid, &config.destination)
        .with_context(|| format!("writing {}", config.destination.display()))?;
    log::info!("saved {}", config.destination.display());
    Ok(())
}
