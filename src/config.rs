//! Configuration for corpus aggregation.
//!
//! # Examples
//!
//! ```
//! use tastypair::config::AggregatorConfig;
//!
//! // Sequential by default
//! let config = AggregatorConfig::default();
//! assert!(!config.parallel);
//!
//! // Shard venues across the rayon pool
//! let config = AggregatorConfig {
//!     parallel: true,
//!     shard_size: 128,
//!     ..AggregatorConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TastyPairError};

/// Configuration for [`crate::pairing::PairingAggregator`].
///
/// In parallel mode venues are split into shards of `shard_size`, each shard
/// is aggregated into its own store and the stores are merged. The result is
/// identical to a sequential pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Aggregate shards on a rayon thread pool.
    pub parallel: bool,
    /// Number of venues per shard in parallel mode.
    pub shard_size: usize,
    /// Worker threads for parallel mode (None = rayon default).
    pub num_threads: Option<usize>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            shard_size: 64,
            num_threads: None,
        }
    }
}

impl AggregatorConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TastyPairError::config(format!("Cannot open {}: {e}", path.display()))
        })?;
        let config: AggregatorConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.shard_size == 0 {
            return Err(TastyPairError::config("shard_size must be greater than 0"));
        }
        if self.num_threads == Some(0) {
            return Err(TastyPairError::config("num_threads must be greater than 0"));
        }
        Ok(())
    }
}
