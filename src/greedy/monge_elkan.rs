//! Monge-Elkan: mean best match of each token of the first string.
//!
//! Tokens of the second string may be reused, and only the first string's
//! token count divides the sum, so the metric is asymmetric.
//!
//! # Example:
//! ```
//! use simmetrics::StringMetric;
//! use simmetrics::greedy::MongeElkan;
//!
//! let monge_elkan = MongeElkan::default();
//! assert_eq!(monge_elkan.similarity("paul", "paul johnson"), 1.0);
//! assert!(monge_elkan.similarity("paul johnson", "paul") < 1.0);
//! ```

use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::alignment::SmithWaterman;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Monge-Elkan similarity over an inner token metric
#[derive(Debug, Clone)]
pub struct MongeElkan {
    inner: Arc<dyn StringMetric>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for MongeElkan {
    fn default() -> Self {
        Self {
            inner: Arc::new(SmithWaterman::gotoh()),
            tokenizer: Arc::new(WhitespaceTokenizer::default()),
        }
    }
}

impl MongeElkan {
    /// Compare tokens with `inner`
    pub fn inner(mut self, inner: impl StringMetric + 'static) -> Self {
        self.inner = Arc::new(inner);
        self
    }

    /// Split strings into tokens with `tokenizer`
    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }
}

impl StringMetric for MongeElkan {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let tokens_a = self.tokenizer.tokenize(a);
        let tokens_b = self.tokenizer.tokenize(b);
        if tokens_a.is_empty() {
            return 0.0;
        }

        let sum: f64 = tokens_a
            .iter()
            .map(|token_a| {
                tokens_b
                    .iter()
                    .map(|token_b| self.inner.similarity(token_a, token_b))
                    .fold(0.0, f64::max)
            })
            .sum();
        sum / tokens_a.len() as f64
    }
}

impl Display for MongeElkan {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "MongeElkan({})", self.inner)
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::alignment::Levenshtein;

    #[test]
    fn test_asymmetry() {
        let monge_elkan = MongeElkan::default();
        let forward = monge_elkan.similarity("paul", "paul johnson");
        let backward = monge_elkan.similarity("paul johnson", "paul");
        assert_eq!(forward, 1.0);
        assert!(backward < forward);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_tokens_may_be_reused() {
        let monge_elkan = MongeElkan::default().inner(Levenshtein);
        assert_eq!(monge_elkan.similarity("ab ab ab", "ab"), 1.0);
    }

    #[test]
    fn test_empty() {
        let monge_elkan = MongeElkan::default();
        assert_eq!(monge_elkan.similarity("", "abc"), 0.0);
        assert_eq!(monge_elkan.similarity("abc", ""), 0.0);
        assert_eq!(monge_elkan.similarity("abc def", "abc def"), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            MongeElkan::default().to_string(),
            "MongeElkan(SmithWaterman(gap=0.5, SubCost5_3Minus3))"
        );
    }
}
