//! solid: solid Earth tide displacement for one site and one UTC day.
//!
//! Prints one row per minute (seconds, north, east, up in meters) to stdout, or to a file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use solid_tide::{solid_earth_tide_with, TideConfig, TideSystem};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// fixed-width rows
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "solid")]
#[command(about = "Solid Earth tide displacement (north, east, up) for every minute of a day")]
#[command(version, allow_negative_numbers = true)]
struct Cli {
    /// Year, 1901-2099
    year: i32,
    month: u32,
    day: u32,
    /// Latitude in degrees, positive north
    lat: f64,
    /// Longitude in degrees, positive east
    lon: f64,

    /// Remove the permanent tide (mean tide system)
    #[arg(long)]
    mean_tide: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the series here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<TideConfig> {
    let config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            TideConfig::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => TideConfig::default(),
    };
    if cli.mean_tide {
        return Ok(config.with_tide_system(TideSystem::Mean));
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    anyhow::ensure!((-90. ..=90.).contains(&cli.lat), "latitude {} is outside [-90, 90]", cli.lat);
    anyhow::ensure!((-360. ..=360.).contains(&cli.lon), "longitude {} is outside [-360, 360]", cli.lon);

    let config = load_config(&cli)?;
    let series = solid_earth_tide_with(&config, cli.year, cli.month, cli.day, cli.lat, cli.lon)?;

    let text = match cli.format {
        OutputFormat::Table => series.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&series)?,
    };
    match &cli.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(samples = series.len(), path = %path.display(), "series written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
