use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TastyPairError};

/// A char filter that replaces every match of a regex pattern.
///
/// With an empty replacement the matched characters simply disappear; no
/// separator is injected, so `"2%milk"` under `[^a-z ]` becomes `"milk"` and
/// `"half-and-half"` becomes `"halfandhalf"`.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| TastyPairError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
