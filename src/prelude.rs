//! Convenience re-exports of commonly used types.
//!
//! `use simmetrics::prelude::*;` brings every metric, tokenizer and the
//! configuration types into scope.

pub use crate::alignment::{Levenshtein, NeedlemanWunsch, SmithWaterman, SmithWatermanGotoh};
pub use crate::cost::{AffineGapCost, SubstitutionCost};
pub use crate::greedy::{ChapmanOrderedName, IdfTable, MongeElkan, TagLink, TagLinkToken};
pub use crate::normalized::NormalizedMetric;
pub use crate::options::{MetricKind, MetricOptions, MetricOptionsBuilder, TokenizerKind};
pub use crate::phonetic::{Jaro, JaroWinkler, Soundex};
pub use crate::token_set::{
    BlockDistance, Cosine, Dice, EuclideanDistance, Jaccard, MatchingCoefficient, Overlap, QGramsDistance,
};
pub use crate::tokenizer::{CsvTokenizer, QGramTokenizer, RegexTokenizer, Tokenizer, WhitespaceTokenizer};
pub use crate::{ConfigError, StringMetric, TokenMetric};
pub use std::sync::Arc;
