//! Text analysis module for TastyPair.
//!
//! Turns free-text menu fields into ingredient tokens. The pipeline is
//! char filters (lowercasing, stripping everything outside `[a-z ]`) followed
//! by a whitespace tokenizer.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{IngredientAnalyzer, extract_tokens};
pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;
