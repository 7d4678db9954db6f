//! Smith-Waterman local alignment
//!
//! Scores the best matching pair of substrings. Each cell is
//! `max(0, up - gap, left - gap, diagonal + cost)` and the result is the
//! largest cell anywhere in the matrix.
//!
//! # Example:
//! ```
//! use simmetrics::StringMetric;
//! use simmetrics::alignment::SmithWaterman;
//!
//! let sw = SmithWaterman::default();
//! assert_eq!(sw.absolute_similarity("xxabcxx", "abc"), 3.0);
//! assert_eq!(sw.similarity("xxabcxx", "abc"), 1.0);
//! ```

use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::alignment::{AlignmentMatrix, normalize_local};
use crate::cost::{SubCost1Minus2, SubCost5_3Minus3, SubstitutionCost};

const DEFAULT_GAP_COST: f64 = 0.5;

/// Smith-Waterman similarity with a linear gap cost
#[derive(Debug, Clone)]
pub struct SmithWaterman {
    gap_cost: f64,
    cost: Arc<dyn SubstitutionCost>,
}

impl Default for SmithWaterman {
    fn default() -> Self {
        Self {
            gap_cost: DEFAULT_GAP_COST,
            cost: Arc::new(SubCost1Minus2),
        }
    }
}

impl SmithWaterman {
    /// Linear-gap approximation of Gotoh scoring: gap 0.5 with
    /// [`SubCost5_3Minus3`]. Monge-Elkan compares tokens with this by default.
    pub fn gotoh() -> Self {
        Self {
            gap_cost: DEFAULT_GAP_COST,
            cost: Arc::new(SubCost5_3Minus3),
        }
    }

    /// Linear cost of each skipped character
    pub fn gap_cost(mut self, gap_cost: f64) -> Self {
        self.gap_cost = gap_cost;
        self
    }

    /// Score of aligning two characters
    pub fn cost_function(mut self, cost: impl SubstitutionCost + 'static) -> Self {
        self.cost = Arc::new(cost);
        self
    }

    fn best_local_score(&self, a: &[char], b: &[char]) -> f64 {
        let (n, m) = (a.len(), b.len());
        let mut d = AlignmentMatrix::new(n + 1, m + 1);
        let mut best = 0.0f64;

        for i in 1..=n {
            for j in 1..=m {
                let cost = self.cost.cost(a, i - 1, b, j - 1);
                let score = 0.0f64
                    .max(d[(i - 1, j)] - self.gap_cost)
                    .max(d[(i, j - 1)] - self.gap_cost)
                    .max(d[(i - 1, j - 1)] + cost);
                d[(i, j)] = score;
                best = best.max(score);
            }
        }

        best
    }
}

impl StringMetric for SmithWaterman {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let score = self.absolute_similarity(a, b);
        normalize_local(
            score,
            a.chars().count(),
            b.chars().count(),
            self.cost.max_cost(),
            self.gap_cost,
        )
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() {
            return b.len() as f64;
        }
        if b.is_empty() {
            return a.len() as f64;
        }
        self.best_local_score(&a, &b)
    }
}

impl Display for SmithWaterman {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "SmithWaterman(gap={}, {})", self.gap_cost, self.cost)
    }
}
