use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use terrain_gen_core::{
    bed_ramp, generate_terrain, water_surface, HeightStats, Strategy, TerrainConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generator to run when no config file is given
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Generator {
    /// Recursive midpoint displacement
    Subdivision,
    /// 3x3 seed map doubled repeatedly
    Doubling,
    /// Randomized flood growth from one sink
    Flood,
}

/// Headless terrain generation demo
#[derive(Parser, Debug)]
#[command(name = "terrain-gen-demo")]
#[command(about = "Procedural heightmap generation demo", long_about = None)]
struct Args {
    /// JSON terrain config; overrides every generator option below
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generator to run
    #[arg(short, long, value_enum, default_value_t = Generator::Doubling)]
    generator: Generator,

    /// Random seed
    #[arg(short, long, default_value_t = terrain_gen_core::generator::DEFAULT_SEED)]
    seed: u64,

    /// Map side length (subdivision needs 2^k + 1)
    #[arg(long, default_value_t = 513)]
    size: usize,

    /// Noise strength (default depends on the generator)
    #[arg(long)]
    strength: Option<f64>,

    /// Doubling steps applied to the 3x3 seed map
    #[arg(long, default_value_t = 9)]
    doublings: u32,

    /// Strength multiplier per doubling step
    #[arg(long, default_value_t = 0.5)]
    decay: f64,

    /// Write raw native-endian u16 heights here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the initial water surface (4 x u16 per cell) here
    #[arg(long)]
    water_output: Option<PathBuf>,

    /// Print the resolved config and height statistics as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn terrain_config(&self) -> Result<TerrainConfig> {
        if let Some(path) = &self.config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            return serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()));
        }

        let strategy = match self.generator {
            Generator::Subdivision => Strategy::Subdivision {
                size: self.size,
                strength: self.strength.unwrap_or(20.0),
            },
            Generator::Doubling => Strategy::Doubling {
                seed_size: 3,
                seed_low: 14000,
                seed_span: 12000,
                doublings: self.doublings,
                strength: self.strength.unwrap_or(3500.0),
                decay: self.decay,
            },
            Generator::Flood => Strategy::FloodGrowth {
                size: self.size,
                strength: self.strength.unwrap_or(20.0),
            },
        };

        Ok(TerrainConfig {
            seed: self.seed,
            strategy,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.terrain_config()?;

    let heights = generate_terrain(&config).context("invalid terrain config")?;
    let stats = HeightStats::from_grid(&heights);

    if args.json {
        let report = serde_json::json!({
            "config": config,
            "width": heights.width(),
            "height": heights.height(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("=== Terrain Generation Demo ===\n");
        println!(
            "Strategy: {} (seed {})",
            config.strategy.name(),
            config.seed
        );
        println!("Size: {}x{}", heights.width(), heights.height());
        println!(
            "Heights: min {}, max {}, mean {:.1}, std dev {:.1}",
            stats.min, stats.max, stats.mean, stats.std_dev
        );
    }

    if let Some(path) = &args.output {
        fs::write(path, heights.as_bytes())
            .with_context(|| format!("writing heights to {}", path.display()))?;
        info!("Heights written to {}", path.display());
    }

    if let Some(path) = &args.water_output {
        let water = water_surface(&heights, bed_ramp);
        fs::write(path, water.as_bytes())
            .with_context(|| format!("writing water surface to {}", path.display()))?;
        info!("Water surface written to {}", path.display());
    }

    Ok(())
}
