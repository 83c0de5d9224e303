//! Helper functions for creating classifiers.

use std::path::Path;

use crate::error::Result;
use crate::ml::naive_bayes::classifier::TextClassifier;
use crate::ml::naive_bayes::config::NaiveBayesConfig;
use crate::ml::naive_bayes::multinomial::NaiveBayesClassifier;
use crate::ml::naive_bayes::types::TrainingSample;

/// Load training data from a JSON array of `{"text": ..., "label": ...}` objects.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;
    Ok(samples)
}

/// Create a Naive Bayes classifier trained on `samples`.
pub fn new_naive_bayes(
    samples: &[TrainingSample],
    config: NaiveBayesConfig,
) -> Result<Box<dyn TextClassifier>> {
    let mut classifier = NaiveBayesClassifier::with_config(config)?;
    classifier.train_samples(samples)?;
    Ok(Box::new(classifier))
}
