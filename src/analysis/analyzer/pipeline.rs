//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! # Examples
//!
//! ```
//! use polarity::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use polarity::analysis::tokenizer::punctuation::PunctuationTokenizer;
//! use polarity::analysis::token_filter::lowercase::LowercaseFilter;
//! use polarity::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(PunctuationTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the"])));
//!
//! let terms = analyzer.terms("The plot, THE acting.").unwrap();
//! assert_eq!(terms, vec!["plot", "acting"]);
//! ```

use std::fmt;
use std::sync::Arc;

use super::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer: one tokenizer followed by filters applied in order.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::punctuation::PunctuationTokenizer;

    #[test]
    fn test_pipeline_applies_filters_in_order() {
        // Stop words are matched before lowercasing, so "The" survives.
        let analyzer = PipelineAnalyzer::new(Arc::new(PunctuationTokenizer::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the"])))
            .add_filter(Arc::new(LowercaseFilter::new()));

        let terms = analyzer.terms("The the END").unwrap();
        assert_eq!(terms, vec!["the", "end"]);
    }

    #[test]
    fn test_pipeline_without_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(PunctuationTokenizer::new()));
        let tokens: Vec<Token> = analyzer.analyze("Keep Case.").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Keep");
        assert_eq!(tokens[1].text, "Case");
    }

    #[test]
    fn test_pipeline_debug_lists_stages() {
        let analyzer = PipelineAnalyzer::new(Arc::new(PunctuationTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["meh"])));

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("punctuation"));
        assert!(debug.contains(r#"["lowercase", "stop"]"#));
        assert_eq!(analyzer.terms("meh film").unwrap(), vec!["film"]);
    }
}
