//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split (already normalized) text into tokens. They run after
//! the char filters in the analysis pipeline.
//!
//! # Examples
//!
//! ```
//! use tastypair::analysis::tokenizer::Tokenizer;
//! use tastypair::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("salt  pepper").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can be shared by
/// parallel aggregation shards.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
