//! Levenshtein distance (edit distance)
//!
//! Insertions, deletions and substitutions all cost 1. Strings made only of
//! whitespace count as empty.
//!
//! # Example:
//! ```
//! use simmetrics::StringMetric;
//! use simmetrics::alignment::Levenshtein;
//!
//! assert_eq!(Levenshtein.absolute_similarity("kitten", "sitting"), 3.0);
//! assert_eq!(Levenshtein.similarity("", ""), 1.0);
//! ```

use std::fmt::{Display, Error, Formatter};

use crate::StringMetric;
use crate::alignment::AlignmentMatrix;
use crate::tokenizer::is_blank;

/// Levenshtein edit distance
#[derive(Debug, Default, Clone, Copy)]
pub struct Levenshtein;

fn significant_chars(s: &str) -> Vec<char> {
    if is_blank(s) { Vec::new() } else { s.chars().collect() }
}

impl Levenshtein {
    /// Minimum number of single-character edits turning `a` into `b`
    pub fn distance(&self, a: &str, b: &str) -> usize {
        let a = significant_chars(a);
        let b = significant_chars(b);
        let (n, m) = (a.len(), b.len());

        let mut d = AlignmentMatrix::new(n + 1, m + 1);
        for i in 0..=n {
            d[(i, 0)] = i as f64;
        }
        for j in 0..=m {
            d[(0, j)] = j as f64;
        }

        for i in 1..=n {
            for j in 1..=m {
                let cost = if a[i - 1] == b[j - 1] { 0.0 } else { 1.0 };
                d[(i, j)] = (d[(i - 1, j)] + 1.0)
                    .min(d[(i, j - 1)] + 1.0)
                    .min(d[(i - 1, j - 1)] + cost);
            }
        }

        d[(n, m)] as usize
    }
}

impl StringMetric for Levenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let max_len = significant_chars(a).len().max(significant_chars(b).len());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - self.distance(a, b) as f64 / max_len as f64
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        self.distance(a, b) as f64
    }
}

impl Display for Levenshtein {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Levenshtein")
    }
}
