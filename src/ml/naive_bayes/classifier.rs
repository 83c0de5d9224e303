//! Text classifier trait definition.

use crate::error::Result;

/// Common interface for trained text classifiers.
pub trait TextClassifier: Send + Sync {
    /// Predict the label of a document.
    fn predict(&self, text: &str) -> Result<String>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
