//! Command implementations for the Polarity CLI.

use std::time::Instant;

use log::info;

use crate::analysis::SentimentAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{LabeledCorpus, SplitConfig, load_lexicon};
use crate::error::{PolarityError, Result};
use crate::evaluation::evaluate;
use crate::ml::naive_bayes::{NaiveBayesClassifier, NaiveBayesConfig};

const POSITIVE: &str = "positive";
const NEGATIVE: &str = "negative";

/// Execute a CLI command.
pub fn execute_command(args: PolarityArgs) -> Result<()> {
    match &args.command {
        Command::Evaluate(eval_args) => run_evaluate(eval_args, &args),
        Command::Classify(classify_args) => run_classify(classify_args, &args),
        Command::Tokenize(tokenize_args) => run_tokenize(tokenize_args, &args),
    }
}

/// Train on a split of the corpus and report accuracy on the rest.
fn run_evaluate(args: &EvaluateArgs, cli_args: &PolarityArgs) -> Result<()> {
    let start_time = Instant::now();
    let (train, test) = evaluation_split(args)?;

    let classifier = train_classifier(&args.corpus, &train)?;
    let report = evaluate(&classifier, &test)?;

    output_result(
        "Evaluation finished",
        &EvaluationResult {
            train_documents: train.len(),
            test_documents: test.len(),
            vocabulary_size: classifier
                .model()
                .map(|m| m.vocabulary().len())
                .unwrap_or(0),
            duration_ms: start_time.elapsed().as_millis() as u64,
            report,
        },
        cli_args,
    )
}

/// Split the labeled directories, then add lexicons to the training half.
///
/// Lexicon entries are single words, so keeping them out of the test half
/// keeps the reported accuracy about real documents.
fn evaluation_split(args: &EvaluateArgs) -> Result<(LabeledCorpus, LabeledCorpus)> {
    let corpus = load_documents(&args.corpus)?;
    let split = SplitConfig {
        train_ratio: args.train_ratio,
        seed: args.seed,
    };
    let (mut train, test) = corpus.split(&split)?;
    if test.is_empty() {
        return Err(PolarityError::invalid_argument(
            "the test split is empty; lower --train-ratio or add documents",
        ));
    }
    add_lexicons(&mut train, &args.corpus)?;
    info!("split into {} training and {} test documents", train.len(), test.len());

    Ok((train, test))
}

/// Train on the whole corpus and classify each text.
fn run_classify(args: &ClassifyArgs, cli_args: &PolarityArgs) -> Result<()> {
    let mut corpus = load_documents(&args.corpus)?;
    add_lexicons(&mut corpus, &args.corpus)?;
    let classifier = train_classifier(&args.corpus, &corpus)?;

    let predictions = args
        .texts
        .iter()
        .map(|text| -> Result<Prediction> {
            let scores = if args.scores {
                Some(classifier.scores(text)?)
            } else {
                None
            };
            Ok(Prediction {
                text: text.clone(),
                label: classifier.identify(text)?,
                scores,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Classification finished",
        &ClassificationResults { predictions },
        cli_args,
    )
}

/// Print the tokens the classifier would see.
fn run_tokenize(args: &TokenizeArgs, cli_args: &PolarityArgs) -> Result<()> {
    let analyzer = SentimentAnalyzer::new().with_ignored_tokens(&args.ignore);
    output_result(
        "Tokens",
        &TokenizeResult {
            tokens: analyzer.tokens(&args.text)?,
        },
        cli_args,
    )
}

/// Load the labeled directories.
fn load_documents(args: &CorpusArgs) -> Result<LabeledCorpus> {
    let corpus = LabeledCorpus::from_directories(&[
        (args.positive.as_path(), POSITIVE),
        (args.negative.as_path(), NEGATIVE),
    ])?;

    if corpus.is_empty() {
        return Err(PolarityError::corpus("no documents found"));
    }
    Ok(corpus)
}

/// Append each lexicon entry as a one-word document.
fn add_lexicons(corpus: &mut LabeledCorpus, args: &CorpusArgs) -> Result<()> {
    if let Some(path) = &args.positive_lexicon {
        corpus.extend_with_lexicon(&load_lexicon(path)?, POSITIVE);
    }
    if let Some(path) = &args.negative_lexicon {
        corpus.extend_with_lexicon(&load_lexicon(path)?, NEGATIVE);
    }
    Ok(())
}

fn train_classifier(args: &CorpusArgs, corpus: &LabeledCorpus) -> Result<NaiveBayesClassifier> {
    let config = match &args.config {
        Some(path) => NaiveBayesConfig::from_json_file(path)?,
        None => NaiveBayesConfig::default(),
    };
    let mut classifier = NaiveBayesClassifier::with_config(config)?;
    classifier.train_samples(corpus.samples())?;
    Ok(classifier)
}
