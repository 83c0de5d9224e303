//! Stop filter implementation.
//!
//! Drops tokens found in a caller-supplied ignore list. There is no default
//! list: sentiment-bearing function words such as "not" must survive unless
//! a caller asks otherwise.
//!
//! # Examples
//!
//! ```
//! use polarity::analysis::token_filter::Filter;
//! use polarity::analysis::token_filter::stop::StopFilter;
//! use polarity::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let tokens = vec![Token::new("the", 0), Token::new("plot", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "plot");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes ignored tokens.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Check if a word is in the ignore list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of ignored words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the ignore list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter_removes() {
        let filter = StopFilter::from_words(vec!["a", "the"]);
        let tokens = vec![
            Token::new("the", 0),
            Token::new("movie", 1),
            Token::new("a", 2),
            Token::new("bore", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "movie");
        assert_eq!(result[1].text, "bore");
    }

    #[test]
    fn test_stop_filter_keeps_positions() {
        let filter = StopFilter::from_words(vec!["the"]);
        let tokens = vec![Token::new("the", 0), Token::new("end", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result, vec![Token::new("end", 1)]);
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = StopFilter::from_words(Vec::<String>::new());
        assert!(filter.is_empty());
        assert!(!filter.is_stop_word("not"));

        let tokens = vec![Token::new("not", 0), Token::new("good", 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result.len(), 2);
    }
}
