//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace and drops empty fragments.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

fn split_whitespace(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (offset, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push(Token::with_offsets(
                    &text[begin..offset],
                    tokens.len(),
                    begin,
                    offset,
                ));
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        tokens.push(Token::with_offsets(
            &text[begin..],
            tokens.len(),
            begin,
            text.len(),
        ));
    }

    tokens
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(split_whitespace(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("salt  pepper\tlime").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "salt");
        assert_eq!(tokens[1].text, "pepper");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 12);
        assert_eq!(tokens[2].text, "lime");
    }

    #[test]
    fn test_only_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("   ").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
