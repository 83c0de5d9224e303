//! Command line argument parsing for the Polarity CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Polarity - Naive Bayes sentiment classification
#[derive(Parser, Debug, Clone)]
#[command(name = "polarity")]
#[command(about = "Train and run a Naive Bayes sentiment classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PolarityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PolarityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a shuffled split of the corpus and report test accuracy
    Evaluate(EvaluateArgs),

    /// Train on the whole corpus and classify the given texts
    Classify(ClassifyArgs),

    /// Show how a text is tokenized
    Tokenize(TokenizeArgs),
}

/// Where training documents come from.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Directory of positive documents, one per file
    #[arg(long, value_name = "DIR")]
    pub positive: PathBuf,

    /// Directory of negative documents, one per file
    #[arg(long, value_name = "DIR")]
    pub negative: PathBuf,

    /// Positive opinion lexicon; each entry is added as a one-word positive document
    #[arg(long, value_name = "FILE")]
    pub positive_lexicon: Option<PathBuf>,

    /// Negative opinion lexicon; each entry is added as a one-word negative document
    #[arg(long, value_name = "FILE")]
    pub negative_lexicon: Option<PathBuf>,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "POLARITY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for evaluation
#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Fraction of documents used for training
    #[arg(long, default_value = "0.8")]
    pub train_ratio: f64,

    /// Shuffle seed for a reproducible split
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for classification
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Include per-class log-scores
    #[arg(long)]
    pub scores: bool,

    /// Texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for tokenization
#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Tokens to drop (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
