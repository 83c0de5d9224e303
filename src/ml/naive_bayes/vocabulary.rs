//! Per-class token counts and the global vocabulary.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use super::types::Label;
use crate::error::{PolarityError, Result};

/// Multiset of tokens: occurrence count per token plus the running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: AHashMap<String, usize>,
    total: usize,
}

impl TokenCounts {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Add every token of a document.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    /// Fold another multiset into this one. Order of merges does not matter.
    pub fn merge(&mut self, other: &TokenCounts) {
        for (token, count) in &other.counts {
            *self.counts.entry(token.clone()).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Occurrences of `token`, 0 when it was never seen.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens, with repetition.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over distinct tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

/// The set of distinct tokens seen in training, across all classes.
///
/// Kept ordered so that iteration (and anything derived from it) is stable
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    /// Build the union of the tokens of several multisets.
    pub fn from_counts<'a, I>(counts: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenCounts>,
    {
        let words = counts
            .into_iter()
            .flat_map(|c| c.tokens().map(str::to_string))
            .collect();
        Self { words }
    }

    /// Whether `token` is part of the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Vocabulary size `V`.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no token was seen in training.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Everything counted from one training set.
#[derive(Debug, Clone)]
pub struct ClassFrequencies {
    /// Documents per class.
    pub document_counts: BTreeMap<Label, usize>,
    /// The per-class mega-document.
    pub token_counts: BTreeMap<Label, TokenCounts>,
    /// Union of all per-class tokens.
    pub vocabulary: Vocabulary,
    /// Number of training documents.
    pub total_documents: usize,
}

impl ClassFrequencies {
    /// Class labels in lexicographic order.
    pub fn classes(&self) -> impl Iterator<Item = &Label> {
        self.document_counts.keys()
    }
}

/// Aggregates tokenized documents into [`ClassFrequencies`].
///
/// # Examples
///
/// ```
/// use polarity::ml::naive_bayes::FrequencyBuilder;
///
/// let documents = vec![vec!["good", "good"], vec!["bad"]];
/// let frequencies = FrequencyBuilder::build(&documents, &["pos", "neg"]).unwrap();
///
/// assert_eq!(frequencies.vocabulary.len(), 2);
/// assert_eq!(frequencies.token_counts["pos"].count("good"), 2);
/// ```
#[derive(Debug, Default)]
pub struct FrequencyBuilder {
    document_counts: BTreeMap<Label, usize>,
    token_counts: BTreeMap<Label, TokenCounts>,
    total_documents: usize,
}

impl FrequencyBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tokenized document under `label`.
    ///
    /// A document without tokens still counts toward its class prior.
    pub fn add_document<I, S>(&mut self, tokens: I, label: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self.document_counts.entry(label.to_string()).or_insert(0) += 1;
        self.token_counts
            .entry(label.to_string())
            .or_default()
            .extend(tokens);
        self.total_documents += 1;
    }

    /// Fold another builder's counts into this one.
    pub fn merge(mut self, other: FrequencyBuilder) -> Self {
        for (label, count) in other.document_counts {
            *self.document_counts.entry(label).or_insert(0) += count;
        }
        for (label, counts) in other.token_counts {
            self.token_counts.entry(label).or_default().merge(&counts);
        }
        self.total_documents += other.total_documents;
        self
    }

    /// Finish counting and compute the vocabulary.
    pub fn finish(self) -> ClassFrequencies {
        let vocabulary = Vocabulary::from_counts(self.token_counts.values());
        ClassFrequencies {
            document_counts: self.document_counts,
            token_counts: self.token_counts,
            vocabulary,
            total_documents: self.total_documents,
        }
    }

    /// Count parallel slices of tokenized documents and labels.
    ///
    /// Fails with `InvalidArgument` when the slices differ in length or are empty.
    pub fn build<D, T, L>(documents: &[D], classes: &[L]) -> Result<ClassFrequencies>
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
        L: AsRef<str>,
    {
        validate_lengths(documents.len(), classes.len())?;

        let mut builder = FrequencyBuilder::new();
        for (document, label) in documents.iter().zip(classes) {
            builder.add_document(document.as_ref(), label.as_ref());
        }
        Ok(builder.finish())
    }
}

/// Reject mismatched or empty training inputs.
pub(crate) fn validate_lengths(documents: usize, classes: usize) -> Result<()> {
    if documents != classes {
        return Err(PolarityError::invalid_argument(format!(
            "got {documents} documents but {classes} class labels"
        )));
    }
    if documents == 0 {
        return Err(PolarityError::invalid_argument(
            "at least one training document is required",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_counts() {
        let mut counts = TokenCounts::new();
        counts.extend(["good", "good", "fine"]);

        assert_eq!(counts.count("good"), 2);
        assert_eq!(counts.count("fine"), 1);
        assert_eq!(counts.count("bad"), 0);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.distinct(), 2);
    }

    #[test]
    fn test_token_counts_merge() {
        let mut left = TokenCounts::new();
        left.extend(["a", "b"]);
        let mut right = TokenCounts::new();
        right.extend(["b", "c", "c"]);

        let mut forward = left.clone();
        forward.merge(&right);
        let mut backward = right.clone();
        backward.merge(&left);

        assert_eq!(forward, backward);
        assert_eq!(forward.count("b"), 2);
        assert_eq!(forward.total(), 5);
    }

    #[test]
    fn test_build_mega_documents() {
        let documents = vec![
            vec!["good", "movie"],
            vec!["bad", "movie"],
            vec!["good", "good"],
        ];
        let frequencies =
            FrequencyBuilder::build(&documents, &["positive", "negative", "positive"]).unwrap();

        assert_eq!(frequencies.total_documents, 3);
        assert_eq!(frequencies.document_counts["positive"], 2);
        assert_eq!(frequencies.document_counts["negative"], 1);

        let positive = &frequencies.token_counts["positive"];
        assert_eq!(positive.count("good"), 3);
        assert_eq!(positive.count("movie"), 1);
        assert_eq!(positive.total(), 4);

        let vocabulary: Vec<&str> = frequencies.vocabulary.iter().collect();
        assert_eq!(vocabulary, vec!["bad", "good", "movie"]);
        assert_eq!(
            frequencies.classes().collect::<Vec<_>>(),
            vec!["negative", "positive"]
        );
    }

    #[test]
    fn test_empty_document_counts_toward_prior() {
        let documents: Vec<Vec<&str>> = vec![vec![], vec!["bad"]];
        let frequencies = FrequencyBuilder::build(&documents, &["positive", "negative"]).unwrap();

        assert_eq!(frequencies.document_counts["positive"], 1);
        assert_eq!(frequencies.token_counts["positive"].total(), 0);
        assert_eq!(frequencies.vocabulary.len(), 1);
    }

    #[test]
    fn test_build_rejects_mismatched_lengths() {
        let documents = vec![vec!["a"]];
        let result = FrequencyBuilder::build(&documents, &["positive", "negative"]);
        assert!(matches!(result, Err(PolarityError::InvalidArgument(_))));
    }

    #[test]
    fn test_build_rejects_empty_input() {
        let documents: Vec<Vec<&str>> = Vec::new();
        let classes: Vec<&str> = Vec::new();
        let result = FrequencyBuilder::build(&documents, &classes);
        assert!(matches!(result, Err(PolarityError::InvalidArgument(_))));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = FrequencyBuilder::new();
        a.add_document(["good"], "positive");
        let mut b = FrequencyBuilder::new();
        b.add_document(["bad", "bad"], "negative");
        b.add_document(["good"], "positive");

        let mut a2 = FrequencyBuilder::new();
        a2.add_document(["good"], "positive");
        let mut b2 = FrequencyBuilder::new();
        b2.add_document(["bad", "bad"], "negative");
        b2.add_document(["good"], "positive");

        let ab = a.merge(b).finish();
        let ba = b2.merge(a2).finish();

        assert_eq!(ab.document_counts, ba.document_counts);
        assert_eq!(ab.token_counts, ba.token_counts);
        assert_eq!(ab.vocabulary, ba.vocabulary);
        assert_eq!(ab.total_documents, 3);
    }
}
