//! Item token sets.

use std::collections::BTreeSet;
use std::collections::btree_set;

use crate::analysis::analyzer::{IngredientAnalyzer, extract_tokens};
use crate::menu::venue::MenuItem;

/// The deduplicated union of tokens extracted from one item's text bundle.
///
/// A token named in several fields of the same item (or several times in one
/// field) is stored once. Empty strings are never stored. Iteration order is
/// sorted, which keeps pair enumeration deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemTokenSet {
    tokens: BTreeSet<String>,
}

impl ItemTokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the token set of a menu item using the shared analyzer.
    pub fn from_item(item: &MenuItem) -> Self {
        Self::from_texts(item.text_fields())
    }

    /// Build the token set of a menu item with a specific analyzer.
    pub fn from_item_with(item: &MenuItem, analyzer: &IngredientAnalyzer) -> Self {
        item.text_fields()
            .flat_map(|text| analyzer.extract(text))
            .collect()
    }

    /// Build a token set from any sequence of optional text fields.
    pub fn from_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        texts.into_iter().flat_map(extract_tokens).collect()
    }

    /// Add a token. Returns `false` if the token was empty or already present.
    pub fn insert<S: Into<String>>(&mut self, token: S) -> bool {
        let token = token.into();
        if token.is_empty() {
            return false;
        }
        self.tokens.insert(token)
    }

    /// Check whether the set contains a token.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Number of unordered pairs of distinct tokens, `n * (n - 1) / 2`.
    pub fn pair_count(&self) -> usize {
        let n = self.tokens.len();
        n * n.saturating_sub(1) / 2
    }

    /// Iterate each unordered pair of distinct tokens exactly once.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().enumerate().flat_map(move |(i, a)| {
            self.tokens
                .iter()
                .skip(i + 1)
                .map(move |b| (a.as_str(), b.as_str()))
        })
    }

    /// Consume the set, returning the sorted tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.tokens.into_iter().collect()
    }
}

impl FromIterator<String> for ItemTokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = ItemTokenSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for ItemTokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ItemTokenSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::venue::{MenuOption, OptionGroup};

    #[test]
    fn test_cross_field_duplicates_counted_once() {
        let mut item = MenuItem::new(Some("Lime Soda"), Some("Fresh lime, soda water"));
        item.option_groups.push(OptionGroup {
            text: Some("Add lime?".to_string()),
            options: vec![MenuOption {
                name: Some("Extra Lime".to_string()),
            }],
        });

        let set = ItemTokenSet::from_item(&item);
        assert_eq!(
            set.clone().into_vec(),
            vec!["add", "extra", "fresh", "lime", "soda", "water"]
        );
        assert!(set.contains("lime"));
    }

    #[test]
    fn test_item_without_text_is_empty() {
        let set = ItemTokenSet::from_item(&MenuItem::default());
        assert!(set.is_empty());
        assert_eq!(set.pair_count(), 0);
        assert_eq!(set.pairs().count(), 0);
    }

    #[test]
    fn test_empty_tokens_rejected() {
        let mut set = ItemTokenSet::new();
        assert!(!set.insert(""));
        assert!(set.insert("salt"));
        assert!(!set.insert("salt"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_pairs_enumerated_once() {
        let set: ItemTokenSet = ["salt", "pepper", "lime"].into_iter().collect();
        let pairs: Vec<_> = set.pairs().collect();
        assert_eq!(
            pairs,
            vec![("lime", "pepper"), ("lime", "salt"), ("pepper", "salt")]
        );
        assert_eq!(set.pair_count(), 3);
    }

    #[test]
    fn test_single_token_has_no_pairs() {
        let set: ItemTokenSet = ["salt"].into_iter().collect();
        assert_eq!(set.pair_count(), 0);
        assert_eq!(set.pairs().count(), 0);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let a = ItemTokenSet::from_texts([Some("tomato basil"), None, Some("Mozzarella")]);
        let b = ItemTokenSet::from_texts([Some("Mozzarella"), Some("basil, tomato")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_analyzer() {
        let analyzer = IngredientAnalyzer::new();
        let item = MenuItem::new(Some("Ginger Tea"), None);
        let set = ItemTokenSet::from_item_with(&item, &analyzer);
        assert_eq!(set.into_vec(), vec!["ginger", "tea"]);
    }
}
