//! Needleman-Wunsch global alignment
//!
//! Generalizes Levenshtein with a pluggable substitution cost and a linear
//! gap cost. The first row and column hold plain index counts, so aligning
//! against an empty string costs its length whatever the gap cost is.

use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::alignment::AlignmentMatrix;
use crate::cost::{SubCost01, SubstitutionCost};

const DEFAULT_GAP_COST: f64 = 2.0;

/// Needleman-Wunsch distance
#[derive(Debug, Clone)]
pub struct NeedlemanWunsch {
    gap_cost: f64,
    cost: Arc<dyn SubstitutionCost>,
}

impl Default for NeedlemanWunsch {
    fn default() -> Self {
        Self {
            gap_cost: DEFAULT_GAP_COST,
            cost: Arc::new(SubCost01),
        }
    }
}

impl NeedlemanWunsch {
    /// Linear cost of each skipped character
    pub fn gap_cost(mut self, gap_cost: f64) -> Self {
        self.gap_cost = gap_cost;
        self
    }

    /// Cost of aligning two characters
    pub fn cost_function(mut self, cost: impl SubstitutionCost + 'static) -> Self {
        self.cost = Arc::new(cost);
        self
    }

    /// Minimum total cost of a global alignment of `a` onto `b`
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (n, m) = (a.len(), b.len());
        if n == 0 {
            return m as f64;
        }
        if m == 0 {
            return n as f64;
        }

        let mut d = AlignmentMatrix::new(n + 1, m + 1);
        for i in 0..=n {
            d[(i, 0)] = i as f64;
        }
        for j in 0..=m {
            d[(0, j)] = j as f64;
        }

        for i in 1..=n {
            for j in 1..=m {
                let cost = self.cost.cost(&a, i - 1, &b, j - 1);
                d[(i, j)] = (d[(i - 1, j)] + self.gap_cost)
                    .min(d[(i, j - 1)] + self.gap_cost)
                    .min(d[(i - 1, j - 1)] + cost);
            }
        }

        d[(n, m)]
    }
}

impl StringMetric for NeedlemanWunsch {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let distance = self.distance(a, b);
        let max_len = a.chars().count().max(b.chars().count()) as f64;

        let mut max_value = max_len * self.cost.max_cost().max(self.gap_cost);
        let min_value = max_len * self.cost.min_cost().min(self.gap_cost);
        let mut distance = distance;
        if min_value < 0.0 {
            max_value -= min_value;
            distance -= min_value;
        }

        if max_value == 0.0 {
            return 1.0;
        }
        (1.0 - distance / max_value).clamp(0.0, 1.0)
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        self.distance(a, b)
    }
}

impl Display for NeedlemanWunsch {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "NeedlemanWunsch(gap={}, {})", self.gap_cost, self.cost)
    }
}
