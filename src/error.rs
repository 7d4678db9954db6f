//! Errors raised while configuring metrics and tokenizers.
//!
//! Only construction can fail. Once a metric exists, scoring two strings
//! always yields a number.

use thiserror::Error;

/// Error type for building tokenizers, cost functions and metrics
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Q-grams must be at least one character long
    #[error("Invalid q-gram length {0}: min length of q-gram is 1")]
    InvalidQGramLength(usize),
    /// A delimiter pattern did not compile
    #[error("Invalid delimiter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// The transposition tolerance must lie in (0, 1]
    #[error("Invalid transposition tolerance {0}: expected a value in (0, 1]")]
    InvalidTranspositionTolerance(f64),
    /// The affine gap window must cover at least one position
    #[error("Invalid affine gap window size {0}")]
    InvalidWindowSize(usize),
    /// Options named a tokenizer-based metric without enough tokenizer settings
    #[error("Missing option: {0}")]
    MissingOption(&'static str),
    /// A RON configuration could not be parsed
    #[error("Error parsing configuration: {0}")]
    Config(#[from] ron::error::SpannedError),
    /// Reading a configuration or corpus file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
