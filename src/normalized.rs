//! Metric wrapper that normalizes both inputs before scoring.
//!
//! Diacritics are always stripped; case folding is optional.

use std::borrow::Cow;
use std::fmt::{Display, Error, Formatter};

use crate::StringMetric;
use crate::util::strip_diacritics;

/// Scores normalized copies of its inputs with an inner metric
#[derive(Debug)]
pub struct NormalizedMetric {
    inner: Box<dyn StringMetric>,
    ignore_case: bool,
}

impl NormalizedMetric {
    /// Wrap `inner`, stripping diacritics from both inputs
    pub fn new(inner: Box<dyn StringMetric>) -> Self {
        Self {
            inner,
            ignore_case: false,
        }
    }

    /// Also lowercase both inputs
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    fn normalize<'a>(&self, s: &'a str) -> Cow<'a, str> {
        let stripped = if s.is_ascii() {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(strip_diacritics(s))
        };
        if self.ignore_case {
            Cow::Owned(stripped.to_lowercase())
        } else {
            stripped
        }
    }
}

impl StringMetric for NormalizedMetric {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.inner.similarity(&self.normalize(a), &self.normalize(b))
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        self.inner.absolute_similarity(&self.normalize(a), &self.normalize(b))
    }

    fn explain(&self, a: &str, b: &str) -> String {
        self.inner.explain(&self.normalize(a), &self.normalize(b))
    }
}

impl Display for NormalizedMetric {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        if self.ignore_case {
            write!(f, "(Normalized, ignore case: {})", self.inner)
        } else {
            write!(f, "(Normalized: {})", self.inner)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::alignment::Levenshtein;
    use crate::token_set::Jaccard;

    #[test]
    fn test_strips_diacritics() {
        let metric = NormalizedMetric::new(Box::new(Levenshtein));
        assert_eq!(metric.similarity("café", "cafe"), 1.0);
        assert_eq!(metric.absolute_similarity("Zürich", "Zurich"), 0.0);
        assert_eq!(metric.absolute_similarity("Zürich", "zurich"), 1.0);
    }

    #[test]
    fn test_ignore_case() {
        let metric = NormalizedMetric::new(Box::new(Jaccard::default())).ignore_case(true);
        assert_eq!(metric.similarity("São Paulo", "sao paulo"), 1.0);
        assert_eq!(metric.to_string(), "(Normalized, ignore case: Jaccard)");
    }
}
