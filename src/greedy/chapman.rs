//! Chapman ordered name compound similarity.
//!
//! Aligns the last tokens of both strings from the end, so surnames line up,
//! and weights later positions more. Each token pair scores the mean of a
//! phonetic and an alignment metric.

use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::alignment::SmithWaterman;
use crate::phonetic::Soundex;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Ordered name similarity, emphasizing trailing tokens
#[derive(Debug, Clone)]
pub struct ChapmanOrderedName {
    phonetic: Soundex,
    alignment: SmithWaterman,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for ChapmanOrderedName {
    fn default() -> Self {
        Self {
            phonetic: Soundex::default(),
            alignment: SmithWaterman::default(),
            tokenizer: Arc::new(WhitespaceTokenizer::default()),
        }
    }
}

impl ChapmanOrderedName {
    /// Split strings into tokens with `tokenizer`
    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    /// Weight of the `i`-th pair from the end, `1 <= i <= pairs`. The weights
    /// of all pairs sum to 1.
    fn weight(i: usize, pairs: usize) -> f64 {
        let n = pairs as f64;
        1.0 / n + (n - i as f64 + 0.5 - n / 2.0) / n / n
    }
}

impl StringMetric for ChapmanOrderedName {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let tokens_a = self.tokenizer.tokenize(a);
        let tokens_b = self.tokenizer.tokenize(b);
        let pairs = tokens_a.len().min(tokens_b.len());

        let sum: f64 = tokens_a
            .iter()
            .rev()
            .zip(tokens_b.iter().rev())
            .enumerate()
            .map(|(i, (token_a, token_b))| {
                let phonetic = self.phonetic.similarity(token_a, token_b);
                let alignment = self.alignment.similarity(token_a, token_b);
                0.5 * (phonetic + alignment) * Self::weight(i + 1, pairs)
            })
            .sum();
        sum.clamp(0.0, 1.0)
    }
}

impl Display for ChapmanOrderedName {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "ChapmanOrderedName({}, {})", self.phonetic, self.alignment)
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for pairs in 1..6 {
            let total: f64 = (1..=pairs).map(|i| ChapmanOrderedName::weight(i, pairs)).sum();
            assert!((total - 1.0).abs() < 1e-9, "{pairs}");
        }
        // the last tokens weigh more
        assert!(ChapmanOrderedName::weight(1, 3) > ChapmanOrderedName::weight(3, 3));
    }

    #[test]
    fn test_identical_names() {
        let chapman = ChapmanOrderedName::default();
        assert!((chapman.similarity("john smith", "john smith") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_aligns_from_the_end() {
        let chapman = ChapmanOrderedName::default();
        // only "smith" is compared with "smith"
        assert!((chapman.similarity("dr john smith", "smith") - 1.0).abs() < 1e-9);
        assert!(chapman.similarity("smith john", "smith") < 0.75);
    }

    #[test]
    fn test_numeric_tokens_get_no_phonetic_credit() {
        let chapman = ChapmanOrderedName::default();
        // only "unit", weighted 0.375, matches
        let sim = chapman.similarity("unit 12", "unit 99");
        assert!((sim - 0.375).abs() < 1e-9, "{sim}");
        assert!((chapman.similarity("unit 12", "unit 12") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(ChapmanOrderedName::default().similarity("", "smith"), 0.0);
    }
}
