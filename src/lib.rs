//! Simmetrics is a library of string similarity metrics.
//!
//! Every metric implements [`StringMetric`] and scores two strings into
//! `[0, 1]`, where `1` means identical. The metrics come in families:
//!
//! - [`alignment`]: edit distances computed by dynamic programming
//!   (Levenshtein, Needleman-Wunsch, Smith-Waterman, Smith-Waterman-Gotoh)
//! - [`token_set`]: set and vector comparisons of tokenized strings
//!   (Jaccard, Dice, Cosine, Overlap, block and euclidean distances)
//! - [`greedy`]: composites resolving candidate pairings greedily
//!   (TagLink, Monge-Elkan, Chapman ordered name)
//! - [`phonetic`]: Soundex, Jaro and Jaro-Winkler
//!
//! Metrics are immutable once built and can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use simmetrics::prelude::*;
//!
//! let levenshtein = Levenshtein;
//! assert_eq!(levenshtein.absolute_similarity("kitten", "sitting"), 3.0);
//!
//! let jaccard = Jaccard::new(QGramTokenizer::new(2).unwrap());
//! assert!(jaccard.similarity("night", "nacht") < 0.5);
//!
//! let options = MetricOptionsBuilder::default()
//!     .metric(MetricKind::MongeElkan)
//!     .build()
//!     .unwrap();
//! let monge_elkan = options.build_metric().unwrap();
//! assert_eq!(monge_elkan.similarity("paul", "paul johnson"), 1.0);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod alignment;
pub mod cost;
pub mod error;
pub mod greedy;
mod metric;
pub mod normalized;
pub mod options;
pub mod phonetic;
pub mod prelude;
pub mod token_set;
pub mod tokenizer;
pub mod util;

pub use crate::error::ConfigError;
pub use crate::metric::{StringMetric, TokenMetric, TokenScore};
pub use crate::options::{MetricOptions, MetricOptionsBuilder};
