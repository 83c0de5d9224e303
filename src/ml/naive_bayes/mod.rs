//! Multinomial Naive Bayes text classifier with Laplace smoothing.
//!
//! # Architecture
//!
//! - [`FrequencyBuilder`]: per-class token counts ("mega-documents") and the global vocabulary
//! - [`LikelihoodEstimator`]: class priors and smoothed per-word likelihoods
//! - [`TrainedModel`]: the immutable result of one training run
//! - [`NaiveBayesClassifier`]: owns the model, runs training and log-space inference
//! - [`TextClassifier`] trait: common interface for classifiers
//!
//! # Example
//!
//! ```
//! use polarity::ml::naive_bayes::NaiveBayesClassifier;
//!
//! # fn main() -> polarity::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.train(
//!     &["good great awesome", "bad terrible awful"],
//!     &["positive", "negative"],
//! )?;
//!
//! assert_eq!(classifier.identify("good")?, "positive");
//! assert_eq!(classifier.identify("terrible")?, "negative");
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod core;
mod estimator;
mod model;
mod multinomial;
mod types;
mod vocabulary;

pub use classifier::TextClassifier;
pub use config::{NaiveBayesConfig, TieBreak};
pub use self::core::{load_training_data, new_naive_bayes};
pub use estimator::{ClassPriors, LikelihoodEstimator, LikelihoodTable};
pub use model::TrainedModel;
pub use multinomial::NaiveBayesClassifier;
pub use types::{ClassScore, Label, TrainingSample};
pub use vocabulary::{ClassFrequencies, FrequencyBuilder, TokenCounts, Vocabulary};
