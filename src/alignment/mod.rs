//! Alignment-based edit-distance metrics.
//!
//! All of them fill a dynamic-programming matrix sized to the two inputs:
//!
//! | Metric | Alignment | Gap model | Absolute score |
//! |--------|-----------|-----------|----------------|
//! | [`Levenshtein`] | global | unit | edit distance |
//! | [`NeedlemanWunsch`] | global | linear | weighted distance |
//! | [`SmithWaterman`] | local | linear | best local score |
//! | [`SmithWatermanGotoh`] | local | affine, windowed | best local score |

use std::ops::{Index, IndexMut};

mod gotoh;
mod levenshtein;
mod needleman_wunsch;
mod smith_waterman;

pub use gotoh::SmithWatermanGotoh;
pub use levenshtein::Levenshtein;
pub use needleman_wunsch::NeedlemanWunsch;
pub use smith_waterman::SmithWaterman;

/// Dense `rows × cols` grid of scores, stored row-major in a flat buffer.
#[derive(Debug, Clone)]
pub(crate) struct AlignmentMatrix {
    cols: usize,
    cells: Vec<f64>,
}

impl AlignmentMatrix {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        trace!("alignment matrix {rows}x{cols}");
        Self {
            cols,
            cells: vec![0.0; rows * cols],
        }
    }
}

impl Index<(usize, usize)> for AlignmentMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for AlignmentMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.cells[i * self.cols + j]
    }
}

/// Normalize a local alignment score against the best score the shorter
/// string could reach.
///
/// `gap_max` is the largest gap penalty; it only matters when it would be
/// negative enough, as a reward, to beat the best substitution.
pub(crate) fn normalize_local(score: f64, len_a: usize, len_b: usize, cost_max: f64, gap_max: f64) -> f64 {
    match (len_a, len_b) {
        (0, 0) => return 1.0,
        (0, _) | (_, 0) => return 0.0,
        _ => {}
    }
    let max_value = len_a.min(len_b) as f64 * cost_max.max(-gap_max);
    if max_value <= 0.0 {
        return 0.0;
    }
    (score / max_value).clamp(0.0, 1.0)
}
