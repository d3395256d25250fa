use crate::animator::WaveAnimator;
use crate::config::{GridConfig, WaveStyle};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

mod animations;
mod animator;
mod config;
mod render;

/// Render an animated color wave sweeping across a grid of terminal cells
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<u16>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<u16>,

    /// Milliseconds between animation ticks
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Number of trailing columns that fade behind the wave head
    #[arg(long)]
    wave_width: Option<u16>,

    /// Wave motion style
    #[arg(long, value_enum, default_value_t = WaveStyle::Sweep)]
    style: WaveStyle,
}

impl Cli {
    /// Defaults, overridden by the config file, overridden by flags
    fn build_config(&self) -> anyhow::Result<GridConfig> {
        let mut config = match &self.config {
            Some(path) => GridConfig::load(path)
                .with_context(|| format!("loading config file {}", path.display()))?,
            None => GridConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.tick_interval_ms = interval_ms;
        }
        if let Some(wave_width) = self.wave_width {
            config.wave_width = wave_width;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.build_config()?;
    let mut animator = WaveAnimator::new(config, cli.style);
    render::run(&mut animator, cli.style)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
