//! Analyzers combine a tokenizer with token filters.
//!
//! - [`SentimentAnalyzer`] - The default pipeline used by the classifier
//! - [`PipelineAnalyzer`] - Arbitrary tokenizer + filter chains

mod pipeline;
mod sentiment;

pub use pipeline::PipelineAnalyzer;
pub use sentiment::SentimentAnalyzer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that turn raw documents into token streams.
///
/// Both training and inference go through the same analyzer, so a document
/// is normalized identically on either side.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
