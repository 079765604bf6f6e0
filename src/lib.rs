//! # TastyPair
//!
//! Builds an ingredient co-occurrence model from restaurant menu records.
//!
//! ## Features
//!
//! - Menu text normalization into ingredient tokens
//! - Per-ingredient item frequencies and symmetric pairing counts
//! - Sequential or sharded parallel aggregation with associative merging
//! - Sorted, reproducible JSON snapshots
//! - Flavor-pairing recommendations from a snapshot
//!
//! ## Example
//!
//! ```
//! use tastypair::menu::Venue;
//! use tastypair::pairing::PairingAggregator;
//!
//! let venues: Vec<Venue> = serde_json::from_str(r#"[
//!     {"menus": [{"sections": [{"subsections": [{"contents": [
//!         {"name": "Salt & Pepper Wings", "description": "with lime"}
//!     ]}]}]}]}
//! ]"#).unwrap();
//!
//! let snapshot = PairingAggregator::default().aggregate(&venues).snapshot();
//! assert_eq!(snapshot.pairing_count("salt", "lime"), 1);
//! assert_eq!(snapshot.total_pairings, 10);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod pairing;
pub mod recommend;

pub mod prelude {
    pub use crate::analysis::extract_tokens;
    pub use crate::config::AggregatorConfig;
    pub use crate::error::{Result, TastyPairError};
    pub use crate::menu::{JsonFileSource, MenuItem, Venue, VenueSource};
    pub use crate::pairing::{ItemTokenSet, PairingAggregator, PairingSnapshot, PairingStore};
    pub use crate::recommend::Recommendation;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
