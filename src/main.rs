use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{FoodPolicy, GameConfig};
use grid_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid-snake")]
#[command(version, about = "Snake on a wraparound grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Game ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Terminal columns per cell
    #[arg(long)]
    cell_size: Option<u16>,

    /// Let food spawn on top of the snake
    #[arg(long)]
    allow_overlap: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if self.allow_overlap {
            config.food_policy = FoodPolicy::AllowOverlap;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

/// The terminal belongs to the game, so logs only go to a file
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    info!(
        width = config.grid_width,
        height = config.grid_height,
        tick_rate = config.tick_rate,
        food_policy = ?config.food_policy,
        "starting game"
    );

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    info!("game closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["grid-snake"]).unwrap();
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_width": 40, "grid_height": 30 }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "grid-snake",
            "--config",
            &path,
            "--height",
            "10",
            "--allow-overlap",
            "--seed",
            "4",
        ])
        .unwrap();
        let config = cli.game_config().unwrap();

        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 10);
        assert_eq!(config.food_policy, FoodPolicy::AllowOverlap);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_invalid_flag_value_rejected() {
        let cli = Cli::try_parse_from(["grid-snake", "--tick-rate", "0"]).unwrap();
        assert!(cli.game_config().is_err());
    }
}
