//! Composite metrics built on candidate pairings.
//!
//! [`TagLinkToken`] pairs characters, [`TagLink`] pairs tokens. Both
//! enumerate scored [`Candidate`]s and keep a 1-to-1 subset of them with the
//! greedy [`assign`]. [`MongeElkan`] and [`ChapmanOrderedName`] combine inner
//! metrics over token lists without the 1-to-1 constraint.

use std::collections::HashSet;

mod chapman;
mod idf;
mod monge_elkan;
mod tag_link;
mod tag_link_token;

pub use chapman::ChapmanOrderedName;
pub use idf::IdfTable;
pub use monge_elkan::MongeElkan;
pub use tag_link::TagLink;
pub use tag_link_token::{TagLinkToken, TokenComparison};

/// A possible pairing of position `row` in the first sequence with position
/// `col` in the second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Position in the first sequence
    pub row: usize,
    /// Position in the second sequence
    pub col: usize,
    /// Score of the pairing
    pub score: f64,
}

impl Candidate {
    /// Create a candidate pairing
    pub fn new(row: usize, col: usize, score: f64) -> Self {
        Self { row, col, score }
    }
}

/// Greedy 1-to-1 assignment.
///
/// Visits candidates from the highest score down, keeping one only when
/// neither its row nor its column is taken yet. Candidates with equal scores
/// keep their generation order. The kept candidates are returned in the order
/// they were picked.
pub fn assign(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut rows = HashSet::new();
    let mut cols = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| {
            if rows.contains(&candidate.row) || cols.contains(&candidate.col) {
                return false;
            }
            rows.insert(candidate.row);
            cols.insert(candidate.col);
            true
        })
        .collect()
}
