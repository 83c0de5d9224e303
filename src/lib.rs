//! # Polarity
//!
//! A binary (or N-ary) text classifier built on multinomial Naive Bayes with
//! Laplace smoothing, aimed at positive/negative sentiment.
//!
//! ## Features
//!
//! - Punctuation-stripping, case-folding tokenizer
//! - Per-class word counts over a shared vocabulary
//! - Add-one (or any positive pseudo-count) smoothing
//! - Log-space scoring that does not underflow on long documents
//! - Deterministic tie-breaking
//! - Corpus, lexicon and train/test split helpers plus a CLI
//!
//! ## Example
//!
//! ```
//! use polarity::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.train(
//!     &["good great awesome", "bad terrible awful"],
//!     &["positive", "negative"],
//! )?;
//! assert_eq!(classifier.identify("a great day")?, "positive");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::{Analyzer, SentimentAnalyzer};
    pub use crate::corpus::{LabeledCorpus, SplitConfig};
    pub use crate::error::{PolarityError, Result};
    pub use crate::evaluation::{EvaluationReport, evaluate};
    pub use crate::ml::naive_bayes::{
        NaiveBayesClassifier, NaiveBayesConfig, TextClassifier, TieBreak, TrainingSample,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
