//! Token-set metrics.
//!
//! Both inputs are tokenized and compared as sets of distinct tokens, except
//! [`MatchingCoefficient`] which counts raw tokens and the vector distances in
//! [`vector`] which keep token counts.

use std::collections::HashSet;
use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

pub mod vector;

pub use vector::{Block, BlockDistance, Euclidean, EuclideanDistance, QGramsDistance, VectorDistance, VectorNorm};

/// Sizes of two token sets and of their intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SetOverlap {
    pub common: usize,
    pub len_a: usize,
    pub len_b: usize,
}

impl SetOverlap {
    pub(crate) fn of(tokenizer: &dyn Tokenizer, a: &str, b: &str) -> Self {
        let set_a: HashSet<String> = tokenizer.tokenize_to_set(a);
        let set_b: HashSet<String> = tokenizer.tokenize_to_set(b);
        Self {
            common: set_a.intersection(&set_b).count(),
            len_a: set_a.len(),
            len_b: set_b.len(),
        }
    }
}

#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { numerator / denominator }
}

macro_rules! set_metric {
    ($(#[$doc:meta])* $name:ident, |$o:ident| $formula:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            tokenizer: Arc<dyn Tokenizer>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(WhitespaceTokenizer::default())
            }
        }

        impl $name {
            /// Compare the token sets produced by `tokenizer`
            pub fn new(tokenizer: impl Tokenizer + 'static) -> Self {
                Self {
                    tokenizer: Arc::new(tokenizer),
                }
            }
        }

        impl StringMetric for $name {
            fn similarity(&self, a: &str, b: &str) -> f64 {
                let $o = SetOverlap::of(self.tokenizer.as_ref(), a, b);
                $formula
            }

            /// Number of distinct tokens found in both strings
            fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
                SetOverlap::of(self.tokenizer.as_ref(), a, b).common as f64
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
                f.write_str(stringify!($name))
            }
        }
    };
}

set_metric!(
    /// `|A ∩ B| / |A ∪ B|`
    Jaccard,
    |o| ratio(o.common as f64, (o.len_a + o.len_b - o.common) as f64)
);

set_metric!(
    /// `2·|A ∩ B| / (|A| + |B|)`
    Dice,
    |o| ratio(2.0 * o.common as f64, (o.len_a + o.len_b) as f64)
);

set_metric!(
    /// `|A ∩ B| / sqrt(|A|·|B|)`
    Cosine,
    |o| ratio(o.common as f64, ((o.len_a * o.len_b) as f64).sqrt())
);

set_metric!(
    /// `|A ∩ B| / min(|A|, |B|)`
    Overlap,
    |o| ratio(o.common as f64, o.len_a.min(o.len_b) as f64)
);

//------------------------------------------------------------------------------
/// Counts tokens of the first string that also occur in the second,
/// duplicates included, over the larger token count.
#[derive(Debug, Clone)]
pub struct MatchingCoefficient {
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for MatchingCoefficient {
    fn default() -> Self {
        Self::new(WhitespaceTokenizer::default())
    }
}

impl MatchingCoefficient {
    /// Compare the token lists produced by `tokenizer`
    pub fn new(tokenizer: impl Tokenizer + 'static) -> Self {
        Self {
            tokenizer: Arc::new(tokenizer),
        }
    }

    fn count(&self, a: &str, b: &str) -> (usize, usize) {
        let tokens_a = self.tokenizer.tokenize(a);
        let tokens_b = self.tokenizer.tokenize(b);
        let found = tokens_a.iter().filter(|token| tokens_b.contains(token)).count();
        (found, tokens_a.len().max(tokens_b.len()))
    }
}

impl StringMetric for MatchingCoefficient {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let (found, total) = self.count(a, b);
        ratio(found as f64, total as f64)
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        self.count(a, b).0 as f64
    }
}

impl Display for MatchingCoefficient {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "MatchingCoefficient")
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::tokenizer::QGramTokenizer;

    const A: &str = "the quick brown fox";
    const B: &str = "the lazy brown dog dog";

    #[test]
    fn test_overlap_counts_distinct_tokens() {
        let overlap = SetOverlap::of(&WhitespaceTokenizer::default(), A, B);
        assert_eq!(
            overlap,
            SetOverlap {
                common: 2,
                len_a: 4,
                len_b: 4
            }
        );
    }

    #[test]
    fn test_set_formulas() {
        assert!((Jaccard::default().similarity(A, B) - 2.0 / 6.0).abs() < 1e-9);
        assert!((Dice::default().similarity(A, B) - 0.5).abs() < 1e-9);
        assert!((Cosine::default().similarity(A, B) - 0.5).abs() < 1e-9);
        assert!((Overlap::default().similarity(A, B) - 0.5).abs() < 1e-9);
        assert_eq!(Jaccard::default().absolute_similarity(A, B), 2.0);
    }

    #[test]
    fn test_empty_sets_score_zero() {
        assert_eq!(Jaccard::default().similarity("", ""), 0.0);
        assert_eq!(Dice::default().similarity("", "a"), 0.0);
        assert_eq!(Cosine::default().similarity("  ", "a"), 0.0);
        assert_eq!(Overlap::default().similarity("a", ""), 0.0);
        assert_eq!(MatchingCoefficient::default().similarity("", ""), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let metrics: [Box<dyn StringMetric>; 4] = [
            Box::new(Jaccard::default()),
            Box::new(Dice::default()),
            Box::new(Cosine::default()),
            Box::new(Overlap::default()),
        ];
        for metric in metrics {
            assert_eq!(metric.similarity(A, B), metric.similarity(B, A), "{metric}");
        }
    }

    #[test]
    fn test_custom_tokenizer() {
        let jaccard = Jaccard::new(QGramTokenizer::new(2).unwrap());
        // {ab, bc} vs {ab, bd}
        assert!((jaccard.similarity("abc", "abd") - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_matching_coefficient_counts_duplicates() {
        let mc = MatchingCoefficient::default();
        assert_eq!(mc.absolute_similarity("a a b", "a c"), 2.0);
        assert!((mc.similarity("a a b", "a c") - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(mc.similarity("x y", "x y"), 1.0);
    }
}
