//! Command-line configuration
//!
//! [`Cli`] is the raw `clap` surface; [`Config::from_cli`] validates it into the
//! values the rest of the program relies on.

use crate::engine::{Algorithm, Direction};
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Largest sequence the bar chart can meaningfully show
pub const MAX_LENGTH: usize = 1000;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 1000;

#[derive(Debug, Parser)]
#[command(name = "sortty", version, about = "Watch sorting algorithms work, one swap at a time")]
pub struct Cli {
    /// Number of values to sort
    #[arg(short = 'n', long, default_value_t = 50)]
    pub length: usize,

    /// Smallest value that can be generated
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest value that can be generated
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i64,

    /// Ticks per second; one swap is shown per tick while sorting
    #[arg(long, default_value_t = 120)]
    pub fps: u32,

    /// Seed for reproducible sequences
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start in descending order
    #[arg(short, long)]
    pub descending: bool,

    /// Initially selected algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors from validating the command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value range: min ({min}) is greater than max ({max})")]
    InvertedRange { min: i64, max: i64 },

    #[error("sequence length {0} exceeds the maximum of {MAX_LENGTH}")]
    LengthTooLarge(usize),

    #[error("fps must be between {MIN_FPS} and {MAX_FPS}, got {0}")]
    FpsOutOfRange(u32),
}

/// Validated runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub min: i64,
    pub max: i64,
    pub fps: u32,
    pub seed: Option<u64>,
    pub direction: Direction,
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            length: 50,
            min: 0,
            max: 100,
            fps: 120,
            seed: None,
            direction: Direction::Ascending,
            algorithm: Algorithm::Bubble,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.min > cli.max {
            return Err(ConfigError::InvertedRange {
                min: cli.min,
                max: cli.max,
            });
        }
        if cli.length > MAX_LENGTH {
            return Err(ConfigError::LengthTooLarge(cli.length));
        }
        if !(MIN_FPS..=MAX_FPS).contains(&cli.fps) {
            return Err(ConfigError::FpsOutOfRange(cli.fps));
        }

        Ok(Config {
            length: cli.length,
            min: cli.min,
            max: cli.max,
            fps: cli.fps,
            seed: cli.seed,
            direction: if cli.descending {
                Direction::Descending
            } else {
                Direction::Ascending
            },
            algorithm: cli.algorithm,
        })
    }
}
