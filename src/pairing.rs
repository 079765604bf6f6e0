//! Ingredient pairing aggregation.
//!
//! Each menu item's text bundle is reduced to an [`ItemTokenSet`]; the
//! [`PairingStore`] counts how many items contain each token and how many
//! items contain each unordered pair of distinct tokens. A finished store is
//! exposed as an immutable [`PairingSnapshot`].

pub mod aggregator;
pub mod item;
pub mod snapshot;
pub mod store;

pub use aggregator::{AggregationStats, PairingAggregator};
pub use item::ItemTokenSet;
pub use snapshot::PairingSnapshot;
pub use store::PairingStore;
