//! Command line argument parsing for the TastyPair CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::menu::source::DEFAULT_INPUT_PATH;

/// TastyPair - ingredient pairings mined from restaurant menus
#[derive(Parser, Debug, Clone)]
#[command(name = "tastypair")]
#[command(about = "Build an ingredient co-occurrence model from restaurant menus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TastyPairArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "json", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Aggregator configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TASTYPAIR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute (defaults to `aggregate`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl TastyPairArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Log level selected by `-q`/`-v`. A `RUST_LOG` setting takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// The command to run, falling back to aggregating `menus.json`.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Aggregate(AggregateArgs::default()))
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Aggregate ingredient pairings over a venue dump
    Aggregate(AggregateArgs),

    /// Print the token set of every menu item
    Tokens(TokensArgs),

    /// Recommend ingredients that pair with the given foods
    Recommend(RecommendArgs),
}

/// Arguments for aggregation
#[derive(Parser, Debug, Clone)]
pub struct AggregateArgs {
    /// Venue dump written by the fetcher (JSON array)
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Write the pairings to this file instead of standard output
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Aggregate venue shards in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for parallel aggregation
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: None,
            parallel: false,
            threads: None,
        }
    }
}

/// Arguments for dumping item token sets
#[derive(Parser, Debug, Clone)]
pub struct TokensArgs {
    /// Venue dump written by the fetcher (JSON array)
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Maximum number of items to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Skip items that produced no tokens
    #[arg(long)]
    pub skip_empty: bool,
}

/// Arguments for recommendations
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// Pairings file written by `aggregate`
    #[arg(value_name = "PAIRINGS_FILE")]
    pub pairings: PathBuf,

    /// Foods already chosen
    #[arg(value_name = "FOOD", required = true)]
    pub foods: Vec<String>,

    /// Maximum number of recommendations
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
