//! Configuration options for building metrics.
//!
//! [`MetricOptions`] names a metric and the settings it needs. It can be built
//! in code through [`MetricOptionsBuilder`], parsed from RON, or filled from
//! the command line, and then turned into a ready-to-use metric with
//! [`MetricOptions::build_metric`].
//!
//! ```
//! use simmetrics::options::{MetricKind, MetricOptions};
//!
//! let options = MetricOptions::from_ron("(metric: jaccard, tokenizer: q_gram, q: 2)").unwrap();
//! assert_eq!(options.metric, MetricKind::Jaccard);
//! let metric = options.build_metric().unwrap();
//! assert_eq!(metric.similarity("night", "night"), 1.0);
//! ```

use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::StringMetric;
use crate::alignment::{Levenshtein, NeedlemanWunsch, SmithWaterman, SmithWatermanGotoh};
use crate::error::ConfigError;
use crate::greedy::{ChapmanOrderedName, MongeElkan, TagLink, TagLinkToken};
use crate::normalized::NormalizedMetric;
use crate::phonetic::{Jaro, JaroWinkler, Soundex};
use crate::token_set::{Block, Cosine, Dice, Euclidean, Jaccard, MatchingCoefficient, Overlap, QGramsDistance, VectorDistance};
use crate::tokenizer::{CsvTokenizer, QGramTokenizer, RegexTokenizer, StopWordSet, Tokenizer, WhitespaceTokenizer};

//------------------------------------------------------------------------------
/// Similarity metric to build
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum MetricKind {
    /// Unit-cost edit distance
    #[default]
    Levenshtein,
    /// Global alignment with a linear gap cost
    NeedlemanWunsch,
    /// Local alignment with a linear gap cost
    SmithWaterman,
    /// Local alignment with windowed affine gaps
    SmithWatermanGotoh,
    /// Token set intersection over union
    Jaccard,
    /// Token set Dice coefficient
    Dice,
    /// Token set cosine
    Cosine,
    /// Token set overlap coefficient
    Overlap,
    /// Shared raw tokens over the larger token count
    MatchingCoefficient,
    /// L1 distance between token counts
    BlockDistance,
    /// L2 distance between token counts
    EuclideanDistance,
    /// Block distance over q-grams
    QGramsDistance,
    /// Character-level TagLink
    TagLinkToken,
    /// Token-level TagLink, IDF weighted when a corpus is given
    TagLink,
    /// Mean best token match of the first string
    MongeElkan,
    /// Ordered name similarity, weighting trailing tokens
    ChapmanOrderedName,
    /// Soundex codes compared with Jaro-Winkler
    Soundex,
    /// Jaro similarity
    Jaro,
    /// Jaro with a common prefix bonus
    JaroWinkler,
}

/// Tokenizer used by token-based metrics
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum TokenizerKind {
    /// Split on whitespace
    #[default]
    Whitespace,
    /// Split on commas
    Csv,
    /// Overlapping character q-grams
    QGram,
    /// Split on the given delimiter patterns
    Regex,
}

//------------------------------------------------------------------------------
/// Everything needed to build a metric
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct MetricOptions {
    /// Similarity metric
    #[cfg_attr(
        feature = "cli",
        arg(short, long, default_value = "levenshtein", value_enum, help_heading = "Metric")
    )]
    pub metric: MetricKind,

    /// Tokenizer for token-based metrics
    #[cfg_attr(
        feature = "cli",
        arg(short, long, default_value = "whitespace", value_enum, help_heading = "Tokenizer")
    )]
    pub tokenizer: TokenizerKind,

    /// Q-gram length
    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = 3, help_heading = "Tokenizer"))]
    pub q: usize,

    /// Pad both ends of the input before cutting q-grams
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Tokenizer"))]
    pub padding: Option<String>,

    /// Delimiter pattern for the regex tokenizer, can be repeated
    ///
    /// Escape sequences such as \t are handled by the regex engine
    #[cfg_attr(feature = "cli", arg(short, long = "delimiter", help_heading = "Tokenizer"))]
    pub delimiters: Vec<String>,

    /// Token to drop from tokenizer output, can be repeated
    #[cfg_attr(feature = "cli", arg(long = "stop-word", help_heading = "Tokenizer"))]
    pub stop_words: Vec<String>,

    /// Linear gap cost for Needleman-Wunsch and Smith-Waterman
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Metric"))]
    pub gap_cost: Option<f64>,

    /// How far back Smith-Waterman-Gotoh looks for a gap start
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 100, help_heading = "Metric"))]
    pub window: usize,

    /// Transposition tolerance of TagLink, in (0, 1]
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 0.3, help_heading = "Metric"))]
    pub tr: f64,

    /// Soundex code length, clamped to 4..=10
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 6, help_heading = "Metric"))]
    pub soundex_length: usize,

    /// Reference documents for TagLink IDF weights
    #[cfg_attr(feature = "cli", arg(skip))]
    pub corpus: Vec<String>,

    /// Strip diacritics before comparing
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Normalization"))]
    pub normalize: bool,

    /// Lowercase before comparing, implies --normalize
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Normalization"))]
    pub ignore_case: bool,
}

impl Default for MetricOptions {
    fn default() -> Self {
        Self {
            metric: MetricKind::default(),
            tokenizer: TokenizerKind::default(),
            q: 3,
            padding: Default::default(),
            delimiters: Default::default(),
            stop_words: Default::default(),
            gap_cost: Default::default(),
            window: 100,
            tr: 0.3,
            soundex_length: 6,
            corpus: Default::default(),
            normalize: Default::default(),
            ignore_case: Default::default(),
        }
    }
}

impl MetricOptions {
    /// Parse options from RON. Missing fields keep their defaults.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Read and parse a RON options file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Build the configured tokenizer
    pub fn build_tokenizer(&self) -> Result<Box<dyn Tokenizer>, ConfigError> {
        let stop_words = StopWordSet::new(self.stop_words.iter().cloned());
        let tokenizer: Box<dyn Tokenizer> = match self.tokenizer {
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer::default().stop_words(stop_words)),
            TokenizerKind::Csv => Box::new(CsvTokenizer::default().stop_words(stop_words)),
            TokenizerKind::QGram => Box::new(self.qgram_tokenizer()?.stop_words(stop_words)),
            TokenizerKind::Regex => Box::new(RegexTokenizer::new(&self.delimiters)?.stop_words(stop_words)),
        };
        Ok(tokenizer)
    }

    fn qgram_tokenizer(&self) -> Result<QGramTokenizer, ConfigError> {
        let tokenizer = QGramTokenizer::new(self.q)?;
        Ok(match &self.padding {
            Some(padding) => tokenizer.padding(padding),
            None => tokenizer,
        })
    }

    /// Build the configured metric
    pub fn build_metric(&self) -> Result<Box<dyn StringMetric>, ConfigError> {
        let metric: Box<dyn StringMetric> = match self.metric {
            MetricKind::Levenshtein => Box::new(Levenshtein),
            MetricKind::NeedlemanWunsch => {
                let nw = NeedlemanWunsch::default();
                Box::new(match self.gap_cost {
                    Some(gap) => nw.gap_cost(gap),
                    None => nw,
                })
            }
            MetricKind::SmithWaterman => {
                let sw = SmithWaterman::default();
                Box::new(match self.gap_cost {
                    Some(gap) => sw.gap_cost(gap),
                    None => sw,
                })
            }
            MetricKind::SmithWatermanGotoh => Box::new(SmithWatermanGotoh::new(self.window)?),
            MetricKind::Jaccard => Box::new(Jaccard::new(self.build_tokenizer()?)),
            MetricKind::Dice => Box::new(Dice::new(self.build_tokenizer()?)),
            MetricKind::Cosine => Box::new(Cosine::new(self.build_tokenizer()?)),
            MetricKind::Overlap => Box::new(Overlap::new(self.build_tokenizer()?)),
            MetricKind::MatchingCoefficient => Box::new(MatchingCoefficient::new(self.build_tokenizer()?)),
            MetricKind::BlockDistance => Box::new(VectorDistance::new(self.build_tokenizer()?, Block)),
            MetricKind::EuclideanDistance => Box::new(VectorDistance::new(self.build_tokenizer()?, Euclidean)),
            MetricKind::QGramsDistance => Box::new(QGramsDistance::new(self.qgram_tokenizer()?)),
            MetricKind::TagLinkToken => Box::new(TagLinkToken::new(self.tr)?),
            MetricKind::TagLink => {
                let tag_link = TagLink::default()
                    .tokenizer(self.build_tokenizer()?)
                    .inner(TagLinkToken::new(self.tr)?);
                Box::new(if self.corpus.is_empty() {
                    tag_link
                } else {
                    tag_link.corpus(&self.corpus)
                })
            }
            MetricKind::MongeElkan => Box::new(MongeElkan::default().tokenizer(self.build_tokenizer()?)),
            MetricKind::ChapmanOrderedName => Box::new(ChapmanOrderedName::default().tokenizer(self.build_tokenizer()?)),
            MetricKind::Soundex => Box::new(Soundex::default().length(self.soundex_length)),
            MetricKind::Jaro => Box::new(Jaro),
            MetricKind::JaroWinkler => Box::new(JaroWinkler::default()),
        };

        let metric: Box<dyn StringMetric> = if self.normalize || self.ignore_case {
            Box::new(NormalizedMetric::new(metric).ignore_case(self.ignore_case))
        } else {
            metric
        };
        debug!("Initialized metric {metric}");
        Ok(metric)
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MetricOptionsBuilder::default().build().unwrap();
        assert_eq!(options, MetricOptions::default());
        assert_eq!(options.q, 3);
        assert_eq!(options.window, 100);
        assert_eq!(options.build_metric().unwrap().to_string(), "Levenshtein");
    }

    #[test]
    fn test_builder() {
        let options = MetricOptionsBuilder::default()
            .metric(MetricKind::NeedlemanWunsch)
            .gap_cost(Some(1.0))
            .build()
            .unwrap();
        let metric = options.build_metric().unwrap();
        assert_eq!(metric.to_string(), "NeedlemanWunsch(gap=1, SubCost01)");
    }

    #[test]
    fn test_from_ron() {
        let options = MetricOptions::from_ron(
            r#"(
                metric: tag_link,
                tr: 0.5,
                corpus: ["acme corp", "globex corp"],
                ignore_case: true,
            )"#,
        )
        .unwrap();
        assert_eq!(options.metric, MetricKind::TagLink);
        assert_eq!(options.tr, 0.5);
        assert_eq!(options.q, 3);
        let metric = options.build_metric().unwrap();
        assert_eq!(
            metric.to_string(),
            "(Normalized, ignore case: TagLinkIdf(TagLinkToken(tr=0.5)))"
        );
        assert_eq!(metric.similarity("ACME Corp", "acme corp"), 1.0);
    }

    #[test]
    fn test_invalid_ron() {
        assert!(matches!(
            MetricOptions::from_ron("(metric: no_such_metric)"),
            Err(ConfigError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_settings() {
        let zero_q = MetricOptions {
            metric: MetricKind::Jaccard,
            tokenizer: TokenizerKind::QGram,
            q: 0,
            ..Default::default()
        };
        assert!(matches!(zero_q.build_metric(), Err(ConfigError::InvalidQGramLength(0))));

        let no_delimiters = MetricOptions {
            metric: MetricKind::Dice,
            tokenizer: TokenizerKind::Regex,
            ..Default::default()
        };
        assert!(matches!(
            no_delimiters.build_metric(),
            Err(ConfigError::MissingOption("delimiters"))
        ));

        let bad_pattern = MetricOptions {
            tokenizer: TokenizerKind::Regex,
            delimiters: vec!["(".to_string()],
            ..Default::default()
        };
        assert!(matches!(bad_pattern.build_tokenizer(), Err(ConfigError::InvalidPattern(_))));

        let zero_window = MetricOptions {
            metric: MetricKind::SmithWatermanGotoh,
            window: 0,
            ..Default::default()
        };
        assert!(zero_window.build_metric().is_err());

        let bad_tr = MetricOptions {
            metric: MetricKind::TagLinkToken,
            tr: 2.0,
            ..Default::default()
        };
        assert!(bad_tr.build_metric().is_err());
    }

    #[test]
    fn test_stop_words() {
        let options = MetricOptions {
            metric: MetricKind::Jaccard,
            stop_words: vec!["the".to_string()],
            ..Default::default()
        };
        let metric = options.build_metric().unwrap();
        assert_eq!(metric.similarity("the cat", "cat"), 1.0);
    }

    #[test]
    fn test_every_metric_builds() {
        let kinds = [
            MetricKind::Levenshtein,
            MetricKind::NeedlemanWunsch,
            MetricKind::SmithWaterman,
            MetricKind::SmithWatermanGotoh,
            MetricKind::Jaccard,
            MetricKind::Dice,
            MetricKind::Cosine,
            MetricKind::Overlap,
            MetricKind::MatchingCoefficient,
            MetricKind::BlockDistance,
            MetricKind::EuclideanDistance,
            MetricKind::QGramsDistance,
            MetricKind::TagLinkToken,
            MetricKind::TagLink,
            MetricKind::MongeElkan,
            MetricKind::ChapmanOrderedName,
            MetricKind::Soundex,
            MetricKind::Jaro,
            MetricKind::JaroWinkler,
        ];
        for kind in kinds {
            let options = MetricOptions {
                metric: kind,
                ..Default::default()
            };
            let metric = options.build_metric().unwrap();
            assert_eq!(metric.similarity("john smith", "john smith"), 1.0, "{kind:?}");
        }
    }
}
