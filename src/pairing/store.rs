//! The pairing store: item frequencies and symmetric co-occurrence counts.
//!
//! # Invariants
//!
//! - `ingredients[t]` is the number of ingested items whose token set
//!   contained `t`.
//! - `pairings[a][b] == pairings[b][a]` after every operation, and neither
//!   `a` nor `b` is ever empty. No token is paired with itself.
//! - `total_ingredients` is the sum over ingested items of the token set size.
//! - `total_pairings` counts every pair handed to [`PairingStore::record_pairing`],
//!   including pairs rejected for containing an empty token.

use std::hash::Hash;

use ahash::AHashMap;

use crate::pairing::item::ItemTokenSet;
use crate::pairing::snapshot::PairingSnapshot;

/// Increment a counter, creating it at zero on first access.
fn bump<K: Eq + Hash>(counts: &mut AHashMap<K, u64>, key: K, by: u64) {
    *counts.entry(key).or_insert(0) += by;
}

/// Mutable aggregation structure for one corpus pass (or one shard of it).
#[derive(Clone, Debug, Default)]
pub struct PairingStore {
    ingredients: AHashMap<String, u64>,
    pairings: AHashMap<String, AHashMap<String, u64>>,
    total_ingredients: u64,
    total_pairings: u64,
}

impl PairingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest the token set of one menu item.
    ///
    /// Every token's item frequency goes up by one, then every unordered pair
    /// of distinct tokens is recorded once. Sets of zero or one token produce
    /// no pairs.
    pub fn ingest_item(&mut self, tokens: &ItemTokenSet) {
        for token in tokens {
            self.total_ingredients += 1;
            bump(&mut self.ingredients, token.clone(), 1);
        }

        for (a, b) in tokens.pairs() {
            self.record_pairing(a, b);
        }
    }

    /// Record one co-occurrence of `a` and `b`.
    ///
    /// `total_pairings` is incremented unconditionally. The symmetric counts
    /// are only updated when both tokens are non-empty and distinct.
    pub fn record_pairing(&mut self, a: &str, b: &str) {
        self.total_pairings += 1;

        if a.is_empty() || b.is_empty() || a == b {
            return;
        }

        bump(self.pairings.entry(a.to_string()).or_default(), b.to_string(), 1);
        bump(self.pairings.entry(b.to_string()).or_default(), a.to_string(), 1);
    }

    /// Fold another store into this one by summing every count.
    ///
    /// Merging is associative and commutative, so shards aggregated
    /// independently can be combined in any order.
    pub fn merge(&mut self, other: PairingStore) {
        self.total_ingredients += other.total_ingredients;
        self.total_pairings += other.total_pairings;

        for (token, count) in other.ingredients {
            bump(&mut self.ingredients, token, count);
        }

        for (a, partners) in other.pairings {
            let row = self.pairings.entry(a).or_default();
            for (b, count) in partners {
                *row.entry(b).or_insert(0) += count;
            }
        }
    }

    /// Item frequency of a token (zero if never seen).
    pub fn ingredient_count(&self, token: &str) -> u64 {
        self.ingredients.get(token).copied().unwrap_or(0)
    }

    /// Co-occurrence count of two tokens (zero if never seen together).
    pub fn pairing_count(&self, a: &str, b: &str) -> u64 {
        self.pairings
            .get(a)
            .and_then(|partners| partners.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// All tokens that co-occurred with `token`, with their counts.
    pub fn partners(&self, token: &str) -> Option<&AHashMap<String, u64>> {
        self.pairings.get(token)
    }

    /// Number of token occurrences processed (one per token per item).
    pub fn total_ingredients(&self) -> u64 {
        self.total_ingredients
    }

    /// Number of candidate pairs examined.
    pub fn total_pairings(&self) -> u64 {
        self.total_pairings
    }

    /// Number of distinct tokens seen.
    pub fn num_ingredients(&self) -> usize {
        self.ingredients.len()
    }

    /// Check whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.total_pairings == 0
    }

    /// Immutable, sorted view of the raw counts.
    pub fn snapshot(&self) -> PairingSnapshot {
        PairingSnapshot {
            ingredients: self
                .ingredients
                .iter()
                .map(|(token, count)| (token.clone(), *count))
                .collect(),
            pairings: self
                .pairings
                .iter()
                .map(|(a, partners)| {
                    let row = partners
                        .iter()
                        .map(|(b, count)| (b.clone(), *count))
                        .collect();
                    (a.clone(), row)
                })
                .collect(),
            total_ingredients: self.total_ingredients,
            total_pairings: self.total_pairings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> ItemTokenSet {
        tokens.iter().copied().collect()
    }

    fn assert_symmetric(store: &PairingStore) {
        for (a, partners) in store.pairings.iter() {
            assert!(!a.is_empty());
            for (b, count) in partners.iter() {
                assert!(!b.is_empty());
                assert_ne!(a, b, "self pairing recorded for {a}");
                assert_eq!(store.pairing_count(b, a), *count, "asymmetric pair {a}/{b}");
            }
        }
    }

    #[test]
    fn test_ingest_three_tokens() {
        let mut store = PairingStore::new();
        store.ingest_item(&set(&["salt", "pepper", "lime"]));

        assert_eq!(store.ingredient_count("salt"), 1);
        assert_eq!(store.ingredient_count("pepper"), 1);
        assert_eq!(store.ingredient_count("lime"), 1);
        assert_eq!(store.pairing_count("salt", "pepper"), 1);
        assert_eq!(store.pairing_count("pepper", "salt"), 1);
        assert_eq!(store.pairing_count("salt", "salt"), 0);
        assert_eq!(store.total_pairings(), 3);
        assert_eq!(store.total_ingredients(), 3);
        assert_symmetric(&store);
    }

    #[test]
    fn test_empty_and_single_token_items() {
        let mut store = PairingStore::new();
        store.ingest_item(&ItemTokenSet::new());
        assert!(store.is_empty());

        store.ingest_item(&set(&["tofu"]));
        assert_eq!(store.ingredient_count("tofu"), 1);
        assert_eq!(store.total_ingredients(), 1);
        assert_eq!(store.total_pairings(), 0);
        assert!(store.partners("tofu").is_none());
    }

    #[test]
    fn test_two_items_end_to_end() {
        let mut store = PairingStore::new();
        store.ingest_item(&set(&["a", "b"]));
        store.ingest_item(&set(&["b", "c"]));

        assert_eq!(store.ingredient_count("a"), 1);
        assert_eq!(store.ingredient_count("b"), 2);
        assert_eq!(store.ingredient_count("c"), 1);
        assert_eq!(store.pairing_count("a", "b"), 1);
        assert_eq!(store.pairing_count("b", "c"), 1);
        assert_eq!(store.pairing_count("a", "c"), 0);
        assert_eq!(store.total_ingredients(), 4);
        assert_eq!(store.total_pairings(), 2);
        assert_eq!(store.num_ingredients(), 3);
        assert_symmetric(&store);
    }

    #[test]
    fn test_record_pairing_rejects_empty_tokens() {
        let mut store = PairingStore::new();
        store.record_pairing("", "salt");
        store.record_pairing("salt", "");
        store.record_pairing("salt", "pepper");

        // Rejected pairs are still counted.
        assert_eq!(store.total_pairings(), 3);
        assert_eq!(store.pairing_count("salt", "pepper"), 1);
        assert!(store.partners("").is_none());
        assert_eq!(store.partners("salt").map(|p| p.len()), Some(1));
        assert_symmetric(&store);
    }

    #[test]
    fn test_record_pairing_rejects_self_pair() {
        let mut store = PairingStore::new();
        store.record_pairing("salt", "salt");
        assert_eq!(store.total_pairings(), 1);
        assert_eq!(store.pairing_count("salt", "salt"), 0);
    }

    #[test]
    fn test_merge_equals_direct_aggregation() {
        let items = [
            set(&["tomato", "basil", "mozzarella"]),
            set(&["tomato", "garlic"]),
            set(&["basil", "garlic", "pine", "nuts"]),
            set(&["lemon"]),
            set(&[]),
        ];

        let mut direct = PairingStore::new();
        for item in &items {
            direct.ingest_item(item);
        }

        let mut left = PairingStore::new();
        let mut right = PairingStore::new();
        for (i, item) in items.iter().enumerate() {
            if i % 2 == 0 {
                left.ingest_item(item);
            } else {
                right.ingest_item(item);
            }
        }

        let mut left_then_right = left.clone();
        left_then_right.merge(right.clone());
        let mut right_then_left = right;
        right_then_left.merge(left);

        assert_eq!(left_then_right.snapshot(), direct.snapshot());
        assert_eq!(right_then_left.snapshot(), direct.snapshot());
        assert_symmetric(&left_then_right);
    }

    #[test]
    fn test_merge_into_empty() {
        let mut populated = PairingStore::new();
        populated.ingest_item(&set(&["rice", "beans"]));

        let mut empty = PairingStore::new();
        empty.merge(populated.clone());
        assert_eq!(empty.snapshot(), populated.snapshot());
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let mut store = PairingStore::new();
        store.ingest_item(&set(&["zucchini", "apple", "mango"]));
        let snapshot = store.snapshot();

        let keys: Vec<_> = snapshot.ingredients.keys().cloned().collect();
        assert_eq!(keys, vec!["apple", "mango", "zucchini"]);
        let partners: Vec<_> = snapshot.pairings["mango"].keys().cloned().collect();
        assert_eq!(partners, vec!["apple", "zucchini"]);
    }
}
