//! Punctuation-stripping whitespace tokenizer.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Characters replaced by a single space before splitting.
pub const STRIPPED_PUNCTUATION: &[char] =
    &[',', '.', ';', '"', '\'', ':', '{', '}', ')', '(', '/', '?'];

static PUNCTUATION_PATTERN: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    let class: String = STRIPPED_PUNCTUATION
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    Arc::new(Regex::new(&format!("[{class}]")).expect("punctuation class is a valid pattern"))
});

static WORD_PATTERN: LazyLock<Arc<Regex>> =
    LazyLock::new(|| Arc::new(Regex::new(r"\S+").expect("word pattern is a valid pattern")));

/// Splits text on whitespace after blanking out [`STRIPPED_PUNCTUATION`].
///
/// Punctuation outside that set (`!`, `-`, `_`, ...) is left in place and
/// stays fused to the adjacent word, so `"great!"` yields `"great!"`.
/// The tokenizer never lowercases; case folding is a filter concern.
///
/// Offsets point into the input text. Every stripped character is a single
/// ASCII byte replaced by a single ASCII space, so offsets in the blanked
/// text are offsets in the input.
#[derive(Clone, Debug)]
pub struct PunctuationTokenizer {
    punctuation: Arc<Regex>,
    word: Arc<Regex>,
}

impl PunctuationTokenizer {
    /// Create a new punctuation tokenizer.
    pub fn new() -> Self {
        PunctuationTokenizer {
            punctuation: Arc::clone(&PUNCTUATION_PATTERN),
            word: Arc::clone(&WORD_PATTERN),
        }
    }

    /// Split `text` into tokens. Never fails; empty or whitespace-only input
    /// yields an empty vector.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let leading = text.len() - text.trim_start().len();
        let stripped = self.strip(text.trim());

        self.word
            .find_iter(&stripped)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(
                    mat.as_str(),
                    position,
                    leading + mat.start(),
                    leading + mat.end(),
                )
            })
            .collect()
    }

    /// Blank out the stripped punctuation set, keeping byte offsets intact.
    pub fn strip(&self, text: &str) -> String {
        self.punctuation.replace_all(text, " ").into_owned()
    }
}

impl Default for PunctuationTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for PunctuationTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokens(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
