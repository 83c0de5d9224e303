//! Shuffled train/test splitting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::LabeledCorpus;
use crate::error::{PolarityError, Result};

/// Configuration for [`LabeledCorpus::split`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of documents used for training, in `(0, 1]`.
    pub train_ratio: f64,
    /// Shuffle seed; `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            seed: None,
        }
    }
}

impl LabeledCorpus {
    /// Shuffle and split into `(train, test)`.
    ///
    /// The training part holds `round(n * train_ratio)` documents, at least
    /// one when the corpus is not empty. The same seed always yields the same
    /// split.
    pub fn split(&self, config: &SplitConfig) -> Result<(LabeledCorpus, LabeledCorpus)> {
        if !(config.train_ratio > 0.0 && config.train_ratio <= 1.0) {
            return Err(PolarityError::invalid_argument(format!(
                "train_ratio must be in (0, 1], got {}",
                config.train_ratio
            )));
        }

        let mut samples = self.samples().to_vec();
        match config.seed {
            Some(seed) => shuffle(&mut samples, &mut StdRng::seed_from_u64(seed)),
            None => shuffle(&mut samples, &mut rand::rng()),
        }

        let n = samples.len();
        let train_len = ((n as f64 * config.train_ratio).round() as usize).clamp(n.min(1), n);
        let test = samples.split_off(train_len);

        Ok((LabeledCorpus::from(samples), LabeledCorpus::from(test)))
    }
}

fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
