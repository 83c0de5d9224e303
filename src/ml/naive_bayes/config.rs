//! Configuration for Naive Bayes training and inference.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

/// Configuration for [`NaiveBayesClassifier`](super::NaiveBayesClassifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Laplace pseudo-count added to every (word, class) count.
    pub smoothing: f64,
    /// How exact score ties between classes are resolved.
    pub tie_break: TieBreak,
    /// Tokenize training documents on the rayon thread pool.
    pub parallel: bool,
    /// Tokens dropped after case folding, before counting.
    pub ignored_tokens: Vec<String>,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            smoothing: 1.0,
            tie_break: TieBreak::HigherPrior,
            parallel: false,
            ignored_tokens: Vec::new(),
        }
    }
}

impl NaiveBayesConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NaiveBayesConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be trained with.
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(PolarityError::invalid_argument(format!(
                "smoothing must be a finite positive number, got {}",
                self.smoothing
            )));
        }
        Ok(())
    }
}

/// Tie-break rule applied when two classes reach the same log-score.
///
/// Whatever the rule, the lexicographically smallest label is the final
/// fallback, so the outcome never depends on map iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer the class with the higher prior, then the smaller label.
    #[default]
    HigherPrior,
    /// Prefer the lexicographically smallest label.
    LexicographicLabel,
}
