//! Core traits shared by every similarity metric.

use std::fmt::{Debug, Display};

/// Trait for scoring how alike two strings are.
///
/// `similarity` is always normalized into `[0, 1]`, where `1` means identical
/// as far as the metric can tell. Implementations hold only immutable
/// configuration, so one instance can score any number of pairs, from any
/// number of threads.
pub trait StringMetric: Send + Sync + Debug + Display {
    /// Normalized similarity between `a` and `b`, in `[0, 1]`
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Unnormalized score, in the metric's own unit (edit operations,
    /// alignment score, matched token count...).
    ///
    /// Default implementation falls back to `similarity`.
    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b)
    }

    /// Human readable account of how the score was reached.
    fn explain(&self, a: &str, b: &str) -> String {
        format!("{self}({a:?}, {b:?}) = {:.3}", self.similarity(a, b))
    }
}

/// Score of a token pair along with the number of characters that matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenScore {
    /// Normalized similarity of the two tokens
    pub score: f64,
    /// Number of matched characters
    pub matched: usize,
}

/// A metric that can report how many characters of a token pair matched.
///
/// TagLink weights each candidate token pair with this count.
pub trait TokenMetric: StringMetric {
    /// Compare two tokens
    fn compare_tokens(&self, a: &str, b: &str) -> TokenScore;
}

impl<M: StringMetric + ?Sized> StringMetric for Box<M> {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        (**self).similarity(a, b)
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        (**self).absolute_similarity(a, b)
    }

    fn explain(&self, a: &str, b: &str) -> String {
        (**self).explain(a, b)
    }
}
