//! Class priors and Laplace-smoothed word likelihoods.

use std::collections::BTreeMap;

use ahash::AHashMap;

use super::types::Label;
use super::vocabulary::ClassFrequencies;
use crate::error::{PolarityError, Result};

/// Probability that a random training document belongs to each class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassPriors {
    priors: BTreeMap<Label, f64>,
}

impl ClassPriors {
    /// Document-count fraction per class.
    pub fn from_frequencies(frequencies: &ClassFrequencies) -> Self {
        let total = frequencies.total_documents as f64;
        let priors = frequencies
            .document_counts
            .iter()
            .map(|(label, &count)| (label.clone(), count as f64 / total))
            .collect();
        Self { priors }
    }

    /// Prior of `label`, `None` for a label not seen in training.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.priors.get(label).copied()
    }

    /// Iterate over `(label, prior)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, f64)> {
        self.priors.iter().map(|(label, &p)| (label, p))
    }

    /// Sum over all classes; 1 up to rounding.
    pub fn sum(&self) -> f64 {
        self.priors.values().sum()
    }
}

/// Smoothed `P(w|c)` for every vocabulary word and every class.
///
/// Values are stored as natural logarithms so that scoring is a sum and
/// long documents cannot underflow.
#[derive(Debug, Clone, PartialEq)]
pub struct LikelihoodTable {
    log_likelihoods: BTreeMap<Label, AHashMap<String, f64>>,
}

impl LikelihoodTable {
    /// `ln P(word|label)`, `None` when either is unknown.
    pub fn log_probability(&self, word: &str, label: &str) -> Option<f64> {
        self.log_likelihoods.get(label)?.get(word).copied()
    }

    /// `P(word|label)`, `None` when either is unknown.
    pub fn probability(&self, word: &str, label: &str) -> Option<f64> {
        self.log_probability(word, label).map(f64::exp)
    }

    /// The log-likelihood map of one class.
    pub fn class(&self, label: &str) -> Option<&AHashMap<String, f64>> {
        self.log_likelihoods.get(label)
    }
}

/// Computes [`ClassPriors`] and a [`LikelihoodTable`] from counts.
///
/// `P(w|c) = (count(w, c) + α) / (α·V + total_tokens(c))` where `V` is the
/// vocabulary size. With the default `α = 1` this is add-one smoothing.
#[derive(Debug, Clone, Copy)]
pub struct LikelihoodEstimator {
    smoothing: f64,
}

impl Default for LikelihoodEstimator {
    fn default() -> Self {
        Self { smoothing: 1.0 }
    }
}

impl LikelihoodEstimator {
    /// Create an estimator with the given Laplace pseudo-count.
    pub fn new(smoothing: f64) -> Result<Self> {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(PolarityError::invalid_argument(format!(
                "smoothing must be a finite positive number, got {smoothing}"
            )));
        }
        Ok(Self { smoothing })
    }

    /// The Laplace pseudo-count.
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Estimate priors and likelihoods.
    pub fn estimate(&self, frequencies: &ClassFrequencies) -> (ClassPriors, LikelihoodTable) {
        let priors = ClassPriors::from_frequencies(frequencies);
        let vocabulary_size = frequencies.vocabulary.len() as f64;

        let log_likelihoods = frequencies
            .token_counts
            .iter()
            .map(|(label, counts)| {
                let log_denominator =
                    (self.smoothing * vocabulary_size + counts.total() as f64).ln();
                let table: AHashMap<String, f64> = frequencies
                    .vocabulary
                    .iter()
                    .map(|word| {
                        let numerator = counts.count(word) as f64 + self.smoothing;
                        (word.to_string(), numerator.ln() - log_denominator)
                    })
                    .collect();
                (label.clone(), table)
            })
            .collect();

        (priors, LikelihoodTable { log_likelihoods })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::naive_bayes::vocabulary::FrequencyBuilder;

    fn frequencies() -> ClassFrequencies {
        let documents = vec![
            vec!["good", "great", "good"],
            vec!["bad"],
            vec!["awful", "bad"],
        ];
        FrequencyBuilder::build(&documents, &["positive", "negative", "negative"]).unwrap()
    }

    #[test]
    fn test_priors() {
        let (priors, _) = LikelihoodEstimator::default().estimate(&frequencies());

        assert!((priors.get("positive").unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert!((priors.get("negative").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((priors.sum() - 1.0).abs() < 1e-12);
        assert_eq!(priors.get("neutral"), None);
    }

    #[test]
    fn test_add_one_smoothing() {
        let (_, table) = LikelihoodEstimator::default().estimate(&frequencies());

        // V = 4 (awful, bad, good, great); positive has 3 tokens, negative 3.
        let p = table.probability("good", "positive").unwrap();
        assert!((p - 3.0 / 7.0).abs() < 1e-12);

        let p = table.probability("bad", "positive").unwrap();
        assert!((p - 1.0 / 7.0).abs() < 1e-12);

        let p = table.probability("bad", "negative").unwrap();
        assert!((p - 3.0 / 7.0).abs() < 1e-12);

        assert_eq!(table.probability("xyzzy", "positive"), None);
    }

    #[test]
    fn test_every_pair_is_strictly_between_zero_and_one() {
        let frequencies = frequencies();
        let (_, table) = LikelihoodEstimator::default().estimate(&frequencies);

        for label in frequencies.classes() {
            let class = table.class(label).unwrap();
            assert_eq!(class.len(), frequencies.vocabulary.len());
            for word in frequencies.vocabulary.iter() {
                let p = table.probability(word, label).unwrap();
                assert!(p > 0.0 && p < 1.0, "P({word}|{label}) = {p}");
            }
        }
    }

    #[test]
    fn test_custom_smoothing() {
        let estimator = LikelihoodEstimator::new(0.5).unwrap();
        let (_, table) = estimator.estimate(&frequencies());

        // (2 + 0.5) / (0.5 * 4 + 3)
        let p = table.probability("good", "positive").unwrap();
        assert!((p - 2.5 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_smoothing() {
        assert!(LikelihoodEstimator::new(0.0).is_err());
        assert!(LikelihoodEstimator::new(-2.0).is_err());
        assert!(LikelihoodEstimator::new(f64::NAN).is_err());
    }

    #[test]
    fn test_degenerate_single_word_corpus() {
        let documents = vec![vec!["only"]];
        let frequencies = FrequencyBuilder::build(&documents, &["positive"]).unwrap();
        let (priors, table) = LikelihoodEstimator::default().estimate(&frequencies);

        assert_eq!(priors.get("positive"), Some(1.0));
        let p = table.probability("only", "positive").unwrap();
        assert!((p - 1.0).abs() < 1e-12);
    }
}
