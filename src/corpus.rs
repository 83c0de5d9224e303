//! Labeled corpora: loading documents and lexicons from disk, and splitting
//! them into training and test sets.
//!
//! # Examples
//!
//! ```
//! use polarity::corpus::{LabeledCorpus, SplitConfig};
//!
//! let mut corpus = LabeledCorpus::new();
//! corpus.push("a joy to watch", "positive");
//! corpus.push("a waste of time", "negative");
//! corpus.push("simply wonderful", "positive");
//! corpus.push("painfully slow", "negative");
//!
//! let (train, test) = corpus.split(&SplitConfig { train_ratio: 0.5, seed: Some(7) }).unwrap();
//! assert_eq!(train.len(), 2);
//! assert_eq!(test.len(), 2);
//! ```

pub mod lexicon;
pub mod loader;
pub mod split;

pub use lexicon::load_lexicon;
pub use loader::load_directory;
pub use split::SplitConfig;

use std::collections::BTreeSet;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ml::naive_bayes::{Label, TrainingSample};

/// Ordered `(document, label)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledCorpus {
    samples: Vec<TrainingSample>,
}

impl LabeledCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `(directory, label)` pair, one document per file.
    pub fn from_directories<P, L>(sources: &[(P, L)]) -> Result<Self>
    where
        P: AsRef<Path>,
        L: AsRef<str>,
    {
        let mut corpus = Self::new();
        for (dir, label) in sources {
            let documents = load_directory(dir)?;
            info!(
                "loaded {} {} documents from {}",
                documents.len(),
                label.as_ref(),
                dir.as_ref().display()
            );
            for document in documents {
                corpus.push(document, label.as_ref());
            }
        }
        Ok(corpus)
    }

    /// Append one document.
    pub fn push<T: Into<String>, L: Into<String>>(&mut self, text: T, label: L) {
        self.samples.push(TrainingSample::new(text, label));
    }

    /// Add each lexicon entry as a one-word document of `label`.
    pub fn extend_with_lexicon(&mut self, lexicon: &BTreeSet<String>, label: &str) {
        for word in lexicon {
            self.push(word.as_str(), label);
        }
    }

    /// Documents in corpus order.
    pub fn documents(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.text.as_str()).collect()
    }

    /// Labels in corpus order, parallel to [`documents`](Self::documents).
    pub fn labels(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.label.as_str()).collect()
    }

    /// Distinct labels, sorted.
    pub fn distinct_labels(&self) -> BTreeSet<Label> {
        self.samples.iter().map(|s| s.label.clone()).collect()
    }

    /// The underlying samples.
    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<TrainingSample>> for LabeledCorpus {
    fn from(samples: Vec<TrainingSample>) -> Self {
        Self { samples }
    }
}

impl FromIterator<TrainingSample> for LabeledCorpus {
    fn from_iter<I: IntoIterator<Item = TrainingSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
