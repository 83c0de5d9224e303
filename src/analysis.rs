//! Text analysis for Polarity.
//!
//! Turns raw documents into the normalized word tokens that the classifier
//! counts. The pipeline is the usual one: a tokenizer splits the text, then
//! token filters transform or drop tokens.
//!
//! ```text
//! Document → PunctuationTokenizer → LowercaseFilter → StopFilter → tokens
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, SentimentAnalyzer};
pub use token::{Token, TokenStream};
