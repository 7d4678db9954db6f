use std::fmt::{Display, Error, Formatter};

use crate::cost::AffineGapCost;

/// Gap of length `n` costs `5 + (n - 1)`
#[derive(Debug, Default, Clone, Copy)]
pub struct AffineGap5_1;

impl AffineGapCost for AffineGap5_1 {
    fn cost(&self, _text: &[char], from: usize, to: usize) -> f64 {
        if from >= to {
            return 0.0;
        }
        5.0 + (to - 1 - from) as f64
    }

    /// Gaps grow without bound
    fn max_cost(&self) -> f64 {
        f64::MAX
    }

    fn min_cost(&self) -> f64 {
        0.0
    }
}

impl Display for AffineGap5_1 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "AffineGap5_1")
    }
}

/// Gap of length `n` costs `1 + (n - 1) / 3`
#[derive(Debug, Default, Clone, Copy)]
pub struct AffineGap1_1Over3;

impl AffineGapCost for AffineGap1_1Over3 {
    fn cost(&self, _text: &[char], from: usize, to: usize) -> f64 {
        if from >= to {
            return 0.0;
        }
        1.0 + (to - 1 - from) as f64 / 3.0
    }

    fn max_cost(&self) -> f64 {
        f64::MAX
    }

    fn min_cost(&self) -> f64 {
        0.0
    }
}

impl Display for AffineGap1_1Over3 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "AffineGap1_1Over3")
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_affine_gap_5_1() {
        assert_eq!(AffineGap5_1.cost(&[], 3, 3), 0.0);
        assert_eq!(AffineGap5_1.cost(&[], 2, 3), 5.0);
        assert_eq!(AffineGap5_1.cost(&[], 2, 6), 8.0);
    }

    #[test]
    fn test_affine_gap_1_1_over_3() {
        assert_eq!(AffineGap1_1Over3.cost(&[], 0, 1), 1.0);
        assert_eq!(AffineGap1_1Over3.cost(&[], 0, 4), 2.0);
    }

    #[test]
    fn test_extension_cheaper_than_opening() {
        let open = AffineGap5_1.cost(&[], 0, 1);
        let extend = AffineGap5_1.cost(&[], 0, 2) - open;
        assert!(extend < open);
    }
}
