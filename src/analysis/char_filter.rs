//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it reaches the tokenizer.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing of the whole text
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use tastypair::analysis::char_filter::CharFilter;
//! use tastypair::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new("[^a-z ]", "").unwrap();
//! assert_eq!(filter.filter("2%milk"), "milk");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
