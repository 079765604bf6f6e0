//! Corpus aggregation.
//!
//! Walks venues -> menus -> sections -> subsections -> items, turns each
//! item's text bundle into an [`ItemTokenSet`] and feeds it to a
//! [`PairingStore`]. In parallel mode each shard of venues gets its own store
//! and the stores are merged at the end.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::IngredientAnalyzer;
use crate::config::AggregatorConfig;
use crate::error::{Result, TastyPairError};
use crate::menu::source::VenueSource;
use crate::menu::venue::Venue;
use crate::pairing::item::ItemTokenSet;
use crate::pairing::store::PairingStore;

/// Counters describing one aggregation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationStats {
    /// Venues visited.
    pub venues: usize,
    /// Venues that yielded no items at all.
    pub venues_without_items: usize,
    /// Items visited.
    pub items: usize,
    /// Items whose text produced no tokens.
    pub empty_items: usize,
}

impl AggregationStats {
    /// Add another pass's counters to this one.
    pub fn merge(&mut self, other: AggregationStats) {
        self.venues += other.venues;
        self.venues_without_items += other.venues_without_items;
        self.items += other.items;
        self.empty_items += other.empty_items;
    }
}

/// Drives a full pass over a venue corpus.
pub struct PairingAggregator {
    config: AggregatorConfig,
    analyzer: IngredientAnalyzer,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl std::fmt::Debug for PairingAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairingAggregator")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

impl PairingAggregator {
    /// Create a new aggregator.
    pub fn new(config: AggregatorConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.parallel {
            let mut builder =
                ThreadPoolBuilder::new().thread_name(|i| format!("tastypair-shard-{i}"));
            if let Some(num_threads) = config.num_threads {
                builder = builder.num_threads(num_threads);
            }
            let pool = builder.build().map_err(|e| {
                TastyPairError::other(format!("Failed to create thread pool: {e}"))
            })?;
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(Self {
            config,
            analyzer: IngredientAnalyzer::new(),
            thread_pool,
        })
    }

    /// Create a sequential aggregator with default settings.
    pub fn sequential() -> Self {
        Self {
            config: AggregatorConfig::default(),
            analyzer: IngredientAnalyzer::new(),
            thread_pool: None,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate venues into a fresh store.
    pub fn aggregate(&self, venues: &[Venue]) -> PairingStore {
        self.aggregate_with_stats(venues).0
    }

    /// Aggregate venues into a fresh store, also returning pass counters.
    pub fn aggregate_with_stats(&self, venues: &[Venue]) -> (PairingStore, AggregationStats) {
        let start = Instant::now();

        let (store, stats) = match &self.thread_pool {
            Some(pool) => pool.install(|| {
                venues
                    .par_chunks(self.config.shard_size)
                    .map(|shard| self.aggregate_shard(shard))
                    .reduce(
                        || (PairingStore::new(), AggregationStats::default()),
                        |(mut store, mut stats), (shard_store, shard_stats)| {
                            store.merge(shard_store);
                            stats.merge(shard_stats);
                            (store, stats)
                        },
                    )
            }),
            None => self.aggregate_shard(venues),
        };

        info!(
            "Aggregated {} items from {} venues: {} distinct ingredients, {} pairs examined in {:.2?}",
            stats.items,
            stats.venues,
            store.num_ingredients(),
            store.total_pairings(),
            start.elapsed()
        );

        (store, stats)
    }

    /// Pull every venue from a source and aggregate it.
    pub fn aggregate_source(
        &self,
        source: &mut dyn VenueSource,
    ) -> Result<(PairingStore, AggregationStats)> {
        let venues = source.venues()?;
        debug!("Loaded {} venues from {} source", venues.len(), source.name());
        Ok(self.aggregate_with_stats(&venues))
    }

    /// The token set of every item, in corpus order.
    pub fn item_token_sets(&self, venues: &[Venue]) -> Vec<ItemTokenSet> {
        venues
            .iter()
            .flat_map(|venue| venue.items())
            .map(|item| ItemTokenSet::from_item_with(item, &self.analyzer))
            .collect()
    }

    /// Sequential fold of one shard into its own store.
    fn aggregate_shard(&self, venues: &[Venue]) -> (PairingStore, AggregationStats) {
        let mut store = PairingStore::new();
        let mut stats = AggregationStats::default();

        for venue in venues {
            stats.venues += 1;
            let mut venue_items = 0;

            for item in venue.items() {
                venue_items += 1;
                let tokens = ItemTokenSet::from_item_with(item, &self.analyzer);
                if tokens.is_empty() {
                    stats.empty_items += 1;
                }
                store.ingest_item(&tokens);
            }

            if venue_items == 0 {
                stats.venues_without_items += 1;
            }
            stats.items += venue_items;
            debug!("Venue {}: {} items", venue.label(), venue_items);
        }

        (store, stats)
    }
}

impl Default for PairingAggregator {
    fn default() -> Self {
        Self::sequential()
    }
}
