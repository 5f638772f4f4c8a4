//! Command-line settings.
//!
//! Every option has a default, so `ringsnek` with no arguments plays on the
//! classic 20x15 board.

use clap::Parser;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use thiserror::Error;

use crate::grid::Size;

/// Smallest side that still fits the starting snake.
pub const MIN_SIDE: u16 = 6;
pub const MAX_SIDE: u16 = 255;

#[derive(Debug, Parser)]
#[command(name = "ringsnek", version, about = "Snake on a wrap-around grid")]
pub struct Settings {
    /// Grid width in cells.
    #[arg(long, default_value_t = 20)]
    pub width: u16,
    /// Grid height in cells.
    #[arg(long, default_value_t = 15)]
    pub height: u16,
    /// Frames between two snake moves.
    #[arg(long, default_value_t = 8)]
    pub frq: u32,
    /// Simulation frames per second.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
    /// Seed for food placement; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value = "ringsnek.log")]
    pub log_file: PathBuf,
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "grid must be between {min}x{min} and {max}x{max} cells, got {width}x{height}",
        min = MIN_SIDE,
        max = MAX_SIDE
    )]
    GridSize { width: u16, height: u16 },
    #[error("frames per move must be at least 1")]
    ZeroFrq,
    #[error("frames per second must be at least 1")]
    ZeroFps,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = MIN_SIDE..=MAX_SIDE;
        if !side.contains(&self.width) || !side.contains(&self.height) {
            return Err(ConfigError::GridSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.frq == 0 {
            return Err(ConfigError::ZeroFrq);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    pub fn grid_size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
