//! Pluggable cost models used by the alignment metrics.
//!
//! Substitution costs score a character pair, affine gap costs penalize a run
//! of skipped characters. Both report their extremes so that alignment scores
//! can be normalized into `[0, 1]`.

use std::fmt::{Debug, Display};

mod affine;
mod substitution;

pub use affine::{AffineGap1_1Over3, AffineGap5_1};
pub use substitution::{SubCost01, SubCost1Minus2, SubCost5_3Minus3};

/// Cost (or score) of aligning `a[i]` with `b[j]`
pub trait SubstitutionCost: Send + Sync + Debug + Display {
    /// Cost of aligning `a[i]` with `b[j]`. Indices out of range give the
    /// mismatch cost.
    fn cost(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64;

    /// Largest value `cost` can return
    fn max_cost(&self) -> f64;

    /// Smallest value `cost` can return
    fn min_cost(&self) -> f64;
}

/// Penalty for a gap spanning `text[from..to]`
pub trait AffineGapCost: Send + Sync + Debug + Display {
    /// Penalty for skipping the characters in `from..to`. An empty range
    /// costs nothing.
    fn cost(&self, text: &[char], from: usize, to: usize) -> f64;

    /// Largest value `cost` can return
    fn max_cost(&self) -> f64;

    /// Smallest value `cost` can return
    fn min_cost(&self) -> f64;
}
