//! The immutable result of a training run.

use super::estimator::{ClassPriors, LikelihoodEstimator, LikelihoodTable};
use super::types::Label;
use super::vocabulary::{ClassFrequencies, Vocabulary};

/// Priors, likelihoods, vocabulary and class set of one training run.
///
/// Created whole by [`TrainedModel::from_frequencies`] and never mutated;
/// retraining builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel {
    classes: Vec<Label>,
    priors: ClassPriors,
    likelihoods: LikelihoodTable,
    vocabulary: Vocabulary,
}

impl TrainedModel {
    /// Estimate a model from counted training data.
    pub fn from_frequencies(frequencies: ClassFrequencies, estimator: &LikelihoodEstimator) -> Self {
        let (priors, likelihoods) = estimator.estimate(&frequencies);
        let classes = frequencies.classes().cloned().collect();

        Self {
            classes,
            priors,
            likelihoods,
            vocabulary: frequencies.vocabulary,
        }
    }

    /// Class labels in lexicographic order.
    pub fn classes(&self) -> &[Label] {
        &self.classes
    }

    /// Class priors.
    pub fn priors(&self) -> &ClassPriors {
        &self.priors
    }

    /// Smoothed likelihood table.
    pub fn likelihoods(&self) -> &LikelihoodTable {
        &self.likelihoods
    }

    /// Training vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Shorthand for `P(word|label)`.
    pub fn probability(&self, word: &str, label: &str) -> Option<f64> {
        self.likelihoods.probability(word, label)
    }

    /// Shorthand for the prior of `label`.
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.priors.get(label)
    }
}
