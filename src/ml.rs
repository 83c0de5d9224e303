//! Machine learning for Polarity.
//!
//! Currently a single model family: multinomial Naive Bayes over unigram
//! counts with Laplace smoothing, see [`naive_bayes`].

pub mod naive_bayes;
