//! Accuracy of a trained classifier on a held-out corpus.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::LabeledCorpus;
use crate::error::Result;
use crate::ml::naive_bayes::{Label, TextClassifier};

/// Hits and totals for one expected label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStats {
    /// Documents whose expected label is this one.
    pub total: usize,
    /// Of those, how many were predicted correctly.
    pub correct: usize,
}

impl LabelStats {
    /// Accuracy for this label in percent, 0 when there are no documents.
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }
}

/// Result of [`evaluate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Documents evaluated.
    pub total: usize,
    /// Documents predicted correctly.
    pub correct: usize,
    /// Breakdown by expected label.
    pub per_label: BTreeMap<Label, LabelStats>,
}

impl EvaluationReport {
    /// Overall accuracy in percent, 0 when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }

    /// Record one prediction.
    pub fn record(&mut self, expected: &str, predicted: &str) {
        let hit = expected == predicted;
        let stats = self.per_label.entry(expected.to_string()).or_default();
        stats.total += 1;
        self.total += 1;
        if hit {
            stats.correct += 1;
            self.correct += 1;
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Predict every document of `test` and compare with its label.
pub fn evaluate(classifier: &dyn TextClassifier, test: &LabeledCorpus) -> Result<EvaluationReport> {
    let mut report = EvaluationReport::default();
    for sample in test.samples() {
        let predicted = classifier.predict(&sample.text)?;
        report.record(&sample.label, &predicted);
    }

    info!(
        "{}: {}/{} correct ({:.2}%)",
        classifier.name(),
        report.correct,
        report.total,
        report.accuracy()
    );
    Ok(report)
}
