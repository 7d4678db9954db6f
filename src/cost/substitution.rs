use std::fmt::{Display, Error, Formatter};

use crate::cost::SubstitutionCost;

/// Characters judged close enough to score an approximate match
const APPROXIMATE_GROUPS: [&[char]; 7] = [
    &['d', 't'],
    &['g', 'j'],
    &['l', 'r'],
    &['m', 'n'],
    &['b', 'p', 'v'],
    &['a', 'e', 'i', 'o', 'u'],
    &[',', '.'],
];

#[inline]
fn pair(a: &[char], i: usize, b: &[char], j: usize) -> Option<(char, char)> {
    Some((*a.get(i)?, *b.get(j)?))
}

//------------------------------------------------------------------------------
/// Distance costs: 0 for equal characters, 1 otherwise
#[derive(Debug, Default, Clone, Copy)]
pub struct SubCost01;

impl SubstitutionCost for SubCost01 {
    fn cost(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64 {
        match pair(a, i, b, j) {
            Some((x, y)) if x == y => 0.0,
            _ => 1.0,
        }
    }

    fn max_cost(&self) -> f64 {
        1.0
    }

    fn min_cost(&self) -> f64 {
        0.0
    }
}

impl Display for SubCost01 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "SubCost01")
    }
}

//------------------------------------------------------------------------------
/// Scores +1 for equal characters, -2 otherwise
#[derive(Debug, Default, Clone, Copy)]
pub struct SubCost1Minus2;

impl SubstitutionCost for SubCost1Minus2 {
    fn cost(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64 {
        match pair(a, i, b, j) {
            Some((x, y)) if x == y => 1.0,
            _ => -2.0,
        }
    }

    fn max_cost(&self) -> f64 {
        1.0
    }

    fn min_cost(&self) -> f64 {
        -2.0
    }
}

impl Display for SubCost1Minus2 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "SubCost1Minus2")
    }
}

//------------------------------------------------------------------------------
/// Scores +5 for equal characters, +3 for characters in the same
/// approximate group (`d t`, `g j`, `l r`, `m n`, `b p v`, vowels, `, .`,
/// compared case-insensitively) and -3 otherwise
#[derive(Debug, Default, Clone, Copy)]
pub struct SubCost5_3Minus3;

const EXACT_MATCH: f64 = 5.0;
const APPROXIMATE_MATCH: f64 = 3.0;
const MISMATCH: f64 = -3.0;

impl SubCost5_3Minus3 {
    fn approximately_equal(x: char, y: char) -> bool {
        let x = x.to_ascii_lowercase();
        let y = y.to_ascii_lowercase();
        APPROXIMATE_GROUPS
            .iter()
            .any(|group| group.contains(&x) && group.contains(&y))
    }
}

impl SubstitutionCost for SubCost5_3Minus3 {
    fn cost(&self, a: &[char], i: usize, b: &[char], j: usize) -> f64 {
        match pair(a, i, b, j) {
            Some((x, y)) if x == y => EXACT_MATCH,
            Some((x, y)) if Self::approximately_equal(x, y) => APPROXIMATE_MATCH,
            _ => MISMATCH,
        }
    }

    fn max_cost(&self) -> f64 {
        EXACT_MATCH
    }

    fn min_cost(&self) -> f64 {
        MISMATCH
    }
}

impl Display for SubCost5_3Minus3 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "SubCost5_3Minus3")
    }
}
