//! Common types for Naive Bayes classification.

use serde::{Deserialize, Serialize};

/// A class label such as `"positive"` or `"negative"`.
pub type Label = String;

/// Training sample: one document and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Document text.
    pub text: String,
    /// Class label.
    pub label: Label,
}

impl TrainingSample {
    /// Create a new training sample.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Score of one class for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    /// Class label.
    pub label: Label,
    /// `ln(prior) + Σ ln(P(w|c))` over the in-vocabulary tokens.
    pub log_score: f64,
    /// Prior probability of the class.
    pub prior: f64,
}
