//! Flavor-pairing recommendations.
//!
//! Given a handful of chosen foods, suggest other ingredients that most often
//! share a menu item with them. Each candidate's score is the sum of its
//! pairing counts with every chosen token.
//!
//! # Examples
//!
//! ```
//! use tastypair::pairing::{ItemTokenSet, PairingStore};
//!
//! let mut store = PairingStore::new();
//! store.ingest_item(&["tomato", "basil"].into_iter().collect::<ItemTokenSet>());
//! store.ingest_item(&["tomato", "basil", "garlic"].into_iter().collect::<ItemTokenSet>());
//!
//! let recommendations = store.snapshot().recommend(&["Tomato"], 5);
//! assert_eq!(recommendations[0].ingredient, "basil");
//! assert_eq!(recommendations[0].score, 2);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::extract_tokens;
use crate::pairing::snapshot::PairingSnapshot;

/// A suggested ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The suggested token.
    pub ingredient: String,
    /// Sum of co-occurrence counts with the chosen tokens.
    pub score: u64,
    /// Number of items containing the suggested token.
    pub frequency: u64,
}

impl PairingSnapshot {
    /// Recommend up to `limit` ingredients that pair with the chosen foods.
    ///
    /// Chosen foods go through the same normalization as menu text, so
    /// `"Sun-dried Tomato"` selects `sundried` and `tomato`. Chosen tokens are
    /// never recommended back. Ties are broken alphabetically. Unknown foods
    /// contribute nothing.
    pub fn recommend<S: AsRef<str>>(&self, chosen: &[S], limit: usize) -> Vec<Recommendation> {
        let chosen: BTreeSet<String> = chosen
            .iter()
            .flat_map(|food| extract_tokens(Some(food.as_ref())))
            .collect();

        let mut scores: BTreeMap<&str, u64> = BTreeMap::new();
        for token in &chosen {
            let Some(partners) = self.pairings.get(token) else {
                continue;
            };
            for (partner, count) in partners {
                if !chosen.contains(partner) {
                    *scores.entry(partner.as_str()).or_insert(0) += count;
                }
            }
        }

        let mut recommendations: Vec<Recommendation> = scores
            .into_iter()
            .map(|(ingredient, score)| Recommendation {
                ingredient: ingredient.to_string(),
                score,
                frequency: self.ingredient_count(ingredient),
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.ingredient.cmp(&b.ingredient))
        });
        recommendations.truncate(limit);
        recommendations
    }
}
