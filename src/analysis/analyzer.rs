//! Ingredient analyzer.
//!
//! Combines the char filters and the whitespace tokenizer into the fixed
//! normalization used for menu text:
//!
//! 1. lowercase the entire string,
//! 2. delete every character that is not `a`-`z` or a space,
//! 3. split on whitespace, dropping empty fragments.
//!
//! Deleted characters leave no boundary behind, so `"2%milk"` yields `"milk"`
//! and `"Jalapeño"` yields `"jalapeo"`.
//!
//! # Examples
//!
//! ```
//! use tastypair::analysis::extract_tokens;
//!
//! assert_eq!(extract_tokens(Some("Salt & Pepper!")), vec!["salt", "pepper"]);
//! assert!(extract_tokens(None).is_empty());
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use log::warn;

use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter, PatternReplaceCharFilter};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Characters kept by the default analyzer; everything else is deleted.
pub const NON_INGREDIENT_PATTERN: &str = "[^a-z ]";

lazy_static! {
    static ref DEFAULT_ANALYZER: IngredientAnalyzer = IngredientAnalyzer::new();
}

/// Analyzer turning a nullable menu text field into ingredient tokens.
///
/// Extraction is total: absent, empty and all-punctuation input produce an
/// empty token list, never an error.
#[derive(Clone)]
pub struct IngredientAnalyzer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for IngredientAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngredientAnalyzer")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Default for IngredientAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientAnalyzer {
    /// Create the standard ingredient analyzer.
    pub fn new() -> Self {
        let strip = PatternReplaceCharFilter::new(NON_INGREDIENT_PATTERN, "")
            .expect("Default strip pattern should be valid");

        IngredientAnalyzer {
            char_filters: vec![Arc::new(LowercaseCharFilter::new()), Arc::new(strip)],
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
        }
    }

    /// Replace the tokenizer run after the char filters.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters applied before tokenization, in order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Analyze a possibly absent text field into a token stream.
    pub fn analyze(&self, text: Option<&str>) -> Result<TokenStream> {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(Box::new(std::iter::empty())),
        };

        let normalized = self
            .char_filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc));

        self.tokenizer.tokenize(&normalized)
    }

    /// Analyze a possibly absent text field into token strings.
    ///
    /// A tokenizer failure is logged and the field contributes no tokens.
    pub fn extract(&self, text: Option<&str>) -> Vec<String> {
        match self.analyze(text) {
            Ok(tokens) => tokens.map(Token::into_text).collect(),
            Err(e) => {
                warn!(
                    "Tokenizer '{}' failed, ignoring text field: {e}",
                    self.tokenizer.name()
                );
                Vec::new()
            }
        }
    }
}

/// Extract normalized ingredient tokens from a possibly absent text field.
///
/// Uses a shared [`IngredientAnalyzer`]. Never fails.
pub fn extract_tokens(text: Option<&str>) -> Vec<String> {
    DEFAULT_ANALYZER.extract(text)
}
