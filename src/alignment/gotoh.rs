//! Smith-Waterman-Gotoh with windowed affine gaps
//!
//! Gap penalties come from an [`AffineGapCost`], so a gap's cost depends on
//! its whole length. Each cell looks back at most `window` positions for the
//! start of a gap, which bounds the work to `O(n·m·window)`. A window that
//! covers the longer string gives the exact affine alignment score.

use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::alignment::{AlignmentMatrix, normalize_local};
use crate::cost::{AffineGap5_1, AffineGapCost, SubCost5_3Minus3, SubstitutionCost};
use crate::error::ConfigError;

const DEFAULT_WINDOW_SIZE: usize = 100;

/// Smith-Waterman-Gotoh similarity with a bounded gap lookback
#[derive(Debug, Clone)]
pub struct SmithWatermanGotoh {
    window: usize,
    gap: Arc<dyn AffineGapCost>,
    cost: Arc<dyn SubstitutionCost>,
}

impl Default for SmithWatermanGotoh {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW_SIZE,
            gap: Arc::new(AffineGap5_1),
            cost: Arc::new(SubCost5_3Minus3),
        }
    }
}

impl SmithWatermanGotoh {
    /// Create the metric with the given gap lookback window.
    ///
    /// Fails if `window` is zero.
    pub fn new(window: usize) -> Result<Self, ConfigError> {
        if window == 0 {
            return Err(ConfigError::InvalidWindowSize(window));
        }
        Ok(Self {
            window,
            ..Default::default()
        })
    }

    /// Penalty model for gaps
    pub fn gap_function(mut self, gap: impl AffineGapCost + 'static) -> Self {
        self.gap = Arc::new(gap);
        self
    }

    /// Score of aligning two characters
    pub fn cost_function(mut self, cost: impl SubstitutionCost + 'static) -> Self {
        self.cost = Arc::new(cost);
        self
    }

    /// Number of positions a gap may span backwards from a cell
    pub fn window(&self) -> usize {
        self.window
    }

    fn best_local_score(&self, a: &[char], b: &[char]) -> f64 {
        let (n, m) = (a.len(), b.len());
        let mut d = AlignmentMatrix::new(n + 1, m + 1);
        let mut best = 0.0f64;

        for i in 1..=n {
            for j in 1..=m {
                let mut score = 0.0f64.max(d[(i - 1, j - 1)] + self.cost.cost(a, i - 1, b, j - 1));

                for k in 1..=self.window.min(i) {
                    score = score.max(d[(i - k, j)] - self.gap.cost(a, i - k, i));
                }
                for k in 1..=self.window.min(j) {
                    score = score.max(d[(i, j - k)] - self.gap.cost(b, j - k, j));
                }

                d[(i, j)] = score;
                best = best.max(score);
            }
        }

        best
    }
}

impl StringMetric for SmithWatermanGotoh {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let score = self.absolute_similarity(a, b);
        normalize_local(
            score,
            a.chars().count(),
            b.chars().count(),
            self.cost.max_cost(),
            self.gap.max_cost(),
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

impl Display for SmithWatermanGotoh {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "SmithWatermanGotoh(window={}, {}, {})",
            self.window, self.gap, self.cost
        )
    }
}
