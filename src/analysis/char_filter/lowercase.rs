//! Lowercase char filter.

use super::CharFilter;

/// A char filter that lowercases the entire input.
///
/// ASCII input takes a fast path; anything else goes through Unicode
/// lowercasing, so `"É"` becomes `"é"` (which later stages may strip).
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_ascii() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("Salt & PEPPER"), "salt & pepper");
    }

    #[test]
    fn test_lowercase_unicode() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("CRÈME Brûlée"), "crème brûlée");
        assert_eq!(filter.name(), "lowercase");
    }
}
