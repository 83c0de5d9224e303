//! Naive Bayes training and log-space inference.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use super::classifier::TextClassifier;
use super::config::{NaiveBayesConfig, TieBreak};
use super::estimator::LikelihoodEstimator;
use super::model::TrainedModel;
use super::types::{ClassScore, Label, TrainingSample};
use super::vocabulary::{FrequencyBuilder, validate_lengths};
use crate::analysis::analyzer::{Analyzer, SentimentAnalyzer};
use crate::error::{PolarityError, Result};

/// Multinomial Naive Bayes classifier.
///
/// Each call to [`train`](Self::train) builds a fresh [`TrainedModel`] and
/// replaces the previous one only once training succeeded. Inference takes
/// `&self`, so a trained classifier can be shared between threads.
pub struct NaiveBayesClassifier {
    config: NaiveBayesConfig,
    analyzer: Arc<dyn Analyzer>,
    model: Option<TrainedModel>,
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier with the default configuration.
    pub fn new() -> Self {
        Self {
            config: NaiveBayesConfig::default(),
            analyzer: Arc::new(SentimentAnalyzer::new()),
            model: None,
        }
    }

    /// Create an untrained classifier from a configuration.
    pub fn with_config(config: NaiveBayesConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = SentimentAnalyzer::new().with_ignored_tokens(&config.ignored_tokens);
        Ok(Self {
            config,
            analyzer: Arc::new(analyzer),
            model: None,
        })
    }

    /// Replace the analyzer used for both training and inference.
    ///
    /// Any existing model is dropped, since it was counted with a
    /// different tokenization.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self.model = None;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    /// The trained model, if any.
    pub fn model(&self) -> Option<&TrainedModel> {
        self.model.as_ref()
    }

    /// Whether `train` has succeeded at least once.
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Train on parallel slices of documents and labels.
    ///
    /// Fails with `InvalidArgument` when the slices differ in length or are
    /// empty; the previous model, if any, is kept in that case.
    pub fn train<D, L>(&mut self, documents: &[D], classes: &[L]) -> Result<()>
    where
        D: AsRef<str> + Sync,
        L: AsRef<str>,
    {
        validate_lengths(documents.len(), classes.len())?;
        let estimator = LikelihoodEstimator::new(self.config.smoothing)?;

        let tokenized = self.tokenize_all(documents)?;
        let frequencies = FrequencyBuilder::build(&tokenized, classes)?;

        debug!(
            "counted {} documents over {} classes, vocabulary size {}",
            frequencies.total_documents,
            frequencies.document_counts.len(),
            frequencies.vocabulary.len()
        );
        for (label, counts) in &frequencies.token_counts {
            debug!(
                "class {label}: {} documents, {} tokens, {} distinct",
                frequencies.document_counts[label],
                counts.total(),
                counts.distinct()
            );
        }

        self.model = Some(TrainedModel::from_frequencies(frequencies, &estimator));
        Ok(())
    }

    /// Train on labeled samples.
    pub fn train_samples(&mut self, samples: &[TrainingSample]) -> Result<()> {
        let documents: Vec<&str> = samples.iter().map(|s| s.text.as_str()).collect();
        let classes: Vec<&str> = samples.iter().map(|s| s.label.as_str()).collect();
        self.train(&documents, &classes)
    }

    /// Predict the most probable class of `text`.
    ///
    /// Out-of-vocabulary tokens are skipped, so a document without any known
    /// token is assigned the class with the best prior.
    pub fn identify(&self, text: &str) -> Result<Label> {
        let model = self.trained_model()?;
        let tokens = self.analyzer.terms(text)?;

        let mut classes = model.classes().iter();
        let first = classes
            .next()
            .ok_or_else(|| PolarityError::other("trained model has no classes"))?;

        let mut best = self.score_class(model, first, &tokens);
        for label in classes {
            let candidate = self.score_class(model, label, &tokens);
            if self.outranks(&candidate, &best) {
                best = candidate;
            }
        }

        Ok(best.label)
    }

    /// Score every class for `text`, best first.
    ///
    /// The first entry is always the class [`identify`](Self::identify)
    /// returns.
    pub fn scores(&self, text: &str) -> Result<Vec<ClassScore>> {
        let model = self.trained_model()?;
        let tokens = self.analyzer.terms(text)?;

        let mut remaining: Vec<ClassScore> = model
            .classes()
            .iter()
            .map(|label| self.score_class(model, label, &tokens))
            .collect();

        // Selection keeps the ranking identical to `identify`; the tolerant
        // comparison is not a total order, so `sort_by` cannot be used.
        let mut ranked = Vec::with_capacity(remaining.len());
        while !remaining.is_empty() {
            let best = (1..remaining.len()).fold(0, |best, i| {
                if self.outranks(&remaining[i], &remaining[best]) {
                    i
                } else {
                    best
                }
            });
            ranked.push(remaining.remove(best));
        }
        Ok(ranked)
    }

    fn trained_model(&self) -> Result<&TrainedModel> {
        self.model
            .as_ref()
            .ok_or_else(|| PolarityError::untrained_model("call train before identify"))
    }

    fn tokenize_all<D>(&self, documents: &[D]) -> Result<Vec<Vec<String>>>
    where
        D: AsRef<str> + Sync,
    {
        if self.config.parallel {
            // Indexed collect keeps document order.
            documents
                .par_iter()
                .map(|document| self.analyzer.terms(document.as_ref()))
                .collect()
        } else {
            documents
                .iter()
                .map(|document| self.analyzer.terms(document.as_ref()))
                .collect()
        }
    }

    fn score_class(&self, model: &TrainedModel, label: &str, tokens: &[String]) -> ClassScore {
        let prior = model.prior(label).unwrap_or(0.0);

        // Summed in ascending order so that the score depends only on the
        // multiset of tokens, not on where they appear in the document.
        let mut terms: Vec<f64> = match model.likelihoods().class(label) {
            Some(likelihoods) => tokens
                .iter()
                .filter_map(|token| likelihoods.get(token.as_str()).copied())
                .collect(),
            None => Vec::new(),
        };
        terms.sort_by(f64::total_cmp);

        ClassScore {
            label: label.to_string(),
            log_score: prior.ln() + terms.iter().sum::<f64>(),
            prior,
        }
    }

    /// Whether `a` ranks strictly ahead of `b`.
    ///
    /// Scores within [`SCORE_TOLERANCE`] of each other are tied and fall
    /// through to the configured tie-break, then to the smaller label.
    fn outranks(&self, a: &ClassScore, b: &ClassScore) -> bool {
        if !scores_tied(a.log_score, b.log_score) {
            return a.log_score > b.log_score;
        }
        let by_prior = match self.config.tie_break {
            TieBreak::HigherPrior => b.prior.total_cmp(&a.prior),
            TieBreak::LexicographicLabel => Ordering::Equal,
        };
        by_prior.then_with(|| a.label.cmp(&b.label)) == Ordering::Less
    }
}

/// Relative difference below which two log-scores count as equal.
///
/// Mathematically equal products can still come out of floating-point
/// summation a few ulps apart.
const SCORE_TOLERANCE: f64 = 1e-12;

fn scores_tied(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= SCORE_TOLERANCE * a.abs().max(b.abs())
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .field("classes", &self.model.as_ref().map(|m| m.classes()))
            .field(
                "vocabulary_size",
                &self.model.as_ref().map(|m| m.vocabulary().len()),
            )
            .finish()
    }
}

impl TextClassifier for NaiveBayesClassifier {
    fn predict(&self, text: &str) -> Result<String> {
        self.identify(text)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}
