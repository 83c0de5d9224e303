//! The default analyzer used for training and inference.

use std::sync::Arc;

use super::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::punctuation::PunctuationTokenizer;
use crate::error::Result;

/// Strips the fixed punctuation set, splits on whitespace, case-folds and
/// optionally drops an ignore list.
///
/// Built as a [`PipelineAnalyzer`]: [`PunctuationTokenizer`], then
/// [`LowercaseFilter`], then a [`StopFilter`] when ignored tokens are set.
/// None of these stages fail, so every input (empty included) analyzes to
/// `Ok`.
///
/// # Examples
///
/// ```
/// use polarity::analysis::SentimentAnalyzer;
///
/// let analyzer = SentimentAnalyzer::new();
/// assert_eq!(analyzer.tokenize("Hello, world.").unwrap(), vec!["hello", "world"]);
/// ```
#[derive(Clone, Debug)]
pub struct SentimentAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl SentimentAnalyzer {
    /// Create the default analyzer with no ignore list.
    pub fn new() -> Self {
        let pipeline = PipelineAnalyzer::new(Arc::new(PunctuationTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));
        SentimentAnalyzer { pipeline }
    }

    /// Drop the given tokens after case folding.
    ///
    /// Entries are compared against case-folded tokens, so they are
    /// lowercased here too. An empty list leaves the pipeline unchanged.
    pub fn with_ignored_tokens<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filter = StopFilter::from_words(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        if !filter.is_empty() {
            self.pipeline = self.pipeline.add_filter(Arc::new(filter));
        }
        self
    }

    /// Analyze a document into tokens with their positions and offsets.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.pipeline.analyze(text)?.collect())
    }

    /// Tokenize a document into normalized words, in source order.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.terms(text)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "sentiment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(analyzer: &SentimentAnalyzer, text: &str) -> Vec<String> {
        analyzer.tokenize(text).unwrap()
    }

    #[test]
    fn test_tokenize_case_folds_and_strips() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(words(&analyzer, "Hello, world."), vec!["hello", "world"]);
        assert_eq!(
            words(&analyzer, "  I LOVED (this) \"movie\"?  "),
            vec!["i", "loved", "this", "movie"]
        );
    }

    #[test]
    fn test_tokenize_keeps_unlisted_punctuation() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(words(&analyzer, "Wow! Must-see"), vec!["wow!", "must-see"]);
    }

    #[test]
    fn test_tokenize_empty() {
        let analyzer = SentimentAnalyzer::new();
        assert!(words(&analyzer, "").is_empty());
        assert!(words(&analyzer, " \n\t ").is_empty());
    }

    #[test]
    fn test_ignored_tokens_are_case_folded() {
        let analyzer = SentimentAnalyzer::new().with_ignored_tokens(["The", "A"]);
        assert_eq!(words(&analyzer, "The film, a triumph"), vec!["film", "triumph"]);
    }

    #[test]
    fn test_empty_ignore_list_adds_no_filter() {
        let analyzer = SentimentAnalyzer::new().with_ignored_tokens(Vec::<String>::new());
        assert_eq!(format!("{analyzer:?}"), format!("{:?}", SentimentAnalyzer::new()));
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let analyzer = SentimentAnalyzer::new();
        let text = "b a c a b";
        assert_eq!(words(&analyzer, text), words(&analyzer, text));
        assert_eq!(words(&analyzer, text), vec!["b", "a", "c", "a", "b"]);
    }

    #[test]
    fn test_tokens_keep_source_offsets() {
        let analyzer = SentimentAnalyzer::new().with_ignored_tokens(["the"]);
        let input = " The PLOT, sadly.";
        let tokens = analyzer.tokens(input).unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "plot");
        assert_eq!(tokens[0].position, 1);
        assert_eq!(&input[tokens[0].start_offset..tokens[0].end_offset], "PLOT");
        assert_eq!(tokens[1].text, "sadly");
        assert_eq!(tokens[1].position, 2);
    }

    #[test]
    fn test_analyzer_trait_matches_tokenize() {
        let analyzer = SentimentAnalyzer::new();
        let via_trait = Analyzer::terms(&analyzer, "Good; BAD").unwrap();
        assert_eq!(via_trait, words(&analyzer, "Good; BAD"));
        assert_eq!(analyzer.name(), "sentiment");
    }
}
