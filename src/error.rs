//! Error types for the Polarity library.
//!
//! All errors are represented by the [`PolarityError`] enum. Training and
//! inference only fail for caller mistakes (mismatched inputs, an untrained
//! model); the rest of the variants come from the corpus and CLI glue.
//!
//! # Examples
//!
//! ```
//! use polarity::error::{PolarityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PolarityError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Polarity operations.
#[derive(Error, Debug)]
pub enum PolarityError {
    /// I/O errors (reading corpora, lexicons, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller supplied inconsistent or empty arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Inference was requested before any successful training run
    #[error("Untrained model: {0}")]
    UntrainedModel(String),

    /// Malformed corpus or lexicon input
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PolarityError.
pub type Result<T> = std::result::Result<T, PolarityError>;

impl PolarityError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PolarityError::InvalidArgument(msg.into())
    }

    /// Create a new untrained model error.
    pub fn untrained_model<S: Into<String>>(msg: S) -> Self {
        PolarityError::UntrainedModel(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        PolarityError::Corpus(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PolarityError::Other(msg.into())
    }
}
