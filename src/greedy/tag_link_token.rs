//! TagLinkToken: character-level TagLink.
//!
//! Characters of the longer token `T` are paired with equal characters of the
//! shorter token `U` that sit at most `1 / tr` positions away. A pairing at
//! offset `d` scores `1 - tr·d`. The greedy 1-to-1 selection of those
//! pairings, averaged over both token lengths and lifted by a Winkler prefix
//! bonus, is the similarity.

use std::fmt::{Display, Error, Formatter, Write};

use crate::error::ConfigError;
use crate::greedy::{Candidate, assign};
use crate::metric::{StringMetric, TokenMetric, TokenScore};
use crate::util::common_prefix_len;

const DEFAULT_TRANSPOSITION_TOLERANCE: f64 = 0.3;
const PREFIX_LIMIT: usize = 4;
const PREFIX_SCALE: f64 = 0.1;

/// Character-level TagLink similarity of two tokens
#[derive(Debug, Clone, Copy)]
pub struct TagLinkToken {
    tr: f64,
}

impl Default for TagLinkToken {
    fn default() -> Self {
        Self {
            tr: DEFAULT_TRANSPOSITION_TOLERANCE,
        }
    }
}

/// Outcome of comparing two tokens with [`TagLinkToken`]
#[derive(Debug, Clone, PartialEq)]
pub struct TokenComparison {
    /// Normalized similarity
    pub score: f64,
    /// Number of paired characters
    pub matched: usize,
    /// Largest paired position in the longer token
    pub largest_index: Option<usize>,
    /// Selected pairings, `row` in the longer token and `col` in the shorter
    pub pairs: Vec<Candidate>,
    /// The longer token
    pub longer: String,
    /// The shorter token
    pub shorter: String,
}

impl TokenComparison {
    /// Splits the longer token after its last paired character when the
    /// shorter token matched only its head.
    ///
    /// Returns `None` for exact matches, or unless at least three characters
    /// sit on each side of the cut, 80% of the shorter token was paired and
    /// the score reaches 0.7.
    pub fn split(&self) -> Option<(String, String)> {
        if self.score == 1.0 {
            return None;
        }
        let largest = self.largest_index?;
        let longer_len = self.longer.chars().count();
        let shorter_len = self.shorter.chars().count();
        let matched_rate = self.matched as f64 / shorter_len as f64;
        if largest < 3 || longer_len - largest < 3 || matched_rate < 0.8 || self.score < 0.7 {
            return None;
        }
        let head = self.longer.chars().take(largest + 1).collect();
        let tail = self.longer.chars().skip(largest + 1).collect();
        Some((head, tail))
    }
}

impl TagLinkToken {
    /// Create the metric with transposition tolerance `tr`, which must lie
    /// in `(0, 1]`
    pub fn new(tr: f64) -> Result<Self, ConfigError> {
        if !(tr > 0.0 && tr <= 1.0) {
            return Err(ConfigError::InvalidTranspositionTolerance(tr));
        }
        Ok(Self { tr })
    }

    /// Transposition tolerance
    pub fn tr(&self) -> f64 {
        self.tr
    }

    /// Character pairings of `t` (the longer token) against `u`
    fn candidates(&self, t: &[char], u: &[char]) -> Vec<Candidate> {
        let bound = (1.0 / self.tr) as usize;
        let mut candidates = Vec::new();

        for (row, &ch) in t.iter().enumerate() {
            let mut last_offset: Option<usize> = None;
            let end = (row + bound + 1).min(u.len());
            for col in row.saturating_sub(bound)..end {
                let offset = row.abs_diff(col);
                // moving away from the last pairing, nothing closer remains
                if last_offset.is_some_and(|last| last < offset) {
                    break;
                }
                if u[col] != ch {
                    continue;
                }
                last_offset = Some(offset);
                let score = 1.0 - self.tr * offset as f64;
                candidates.push(Candidate::new(row, col, score));
                if offset == 0 {
                    break;
                }
            }
        }

        trace!("{} character candidates", candidates.len());
        candidates
    }

    /// Compare two tokens, keeping the selected pairings
    pub fn compare(&self, a: &str, b: &str) -> TokenComparison {
        let (longer, shorter) = if a.chars().count() < b.chars().count() {
            (b, a)
        } else {
            (a, b)
        };

        if a == b {
            let len = a.chars().count();
            return TokenComparison {
                score: 1.0,
                matched: len,
                largest_index: len.checked_sub(1),
                pairs: (0..len).map(|i| Candidate::new(i, i, 1.0)).collect(),
                longer: longer.to_string(),
                shorter: shorter.to_string(),
            };
        }

        let t: Vec<char> = longer.chars().collect();
        let u: Vec<char> = shorter.chars().collect();
        if u.is_empty() {
            return TokenComparison {
                score: 0.0,
                matched: 0,
                largest_index: None,
                pairs: Vec::new(),
                longer: longer.to_string(),
                shorter: shorter.to_string(),
            };
        }

        let pairs = assign(self.candidates(&t, &u));
        let total: f64 = pairs.iter().map(|pair| pair.score).sum();
        let score = (total / t.len() as f64 + total / u.len() as f64) / 2.0;
        let prefix = common_prefix_len(&t, &u, PREFIX_LIMIT);

        TokenComparison {
            score: score + prefix as f64 * PREFIX_SCALE * (1.0 - score),
            matched: pairs.len(),
            largest_index: pairs.iter().map(|pair| pair.row).max(),
            pairs,
            longer: longer.to_string(),
            shorter: shorter.to_string(),
        }
    }
}

impl StringMetric for TagLinkToken {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.compare(a, b).score
    }

    fn explain(&self, a: &str, b: &str) -> String {
        let comparison = self.compare(a, b);
        let t: Vec<char> = comparison.longer.chars().collect();
        let u: Vec<char> = comparison.shorter.chars().collect();

        let mut out = String::new();
        let _ = writeln!(out, "{self}");
        let _ = writeln!(out, "T={:?} U={:?}", comparison.longer, comparison.shorter);
        let _ = writeln!(out, "Ti\tUj\tSij");
        for pair in &comparison.pairs {
            let _ = writeln!(out, "{}\t{}\t{:.3}", t[pair.row], u[pair.col], pair.score);
        }
        let _ = writeln!(out, "S(T,U)={:.3}", comparison.score);
        let _ = write!(out, "matched={}", comparison.matched);
        out
    }
}

impl TokenMetric for TagLinkToken {
    fn compare_tokens(&self, a: &str, b: &str) -> TokenScore {
        let comparison = self.compare(a, b);
        TokenScore {
            score: comparison.score,
            matched: comparison.matched,
        }
    }
}

impl Display for TagLinkToken {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "TagLinkToken(tr={})", self.tr)
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_invalid_tolerance() {
        assert!(TagLinkToken::new(0.0).is_err());
        assert!(TagLinkToken::new(-0.5).is_err());
        assert!(TagLinkToken::new(1.5).is_err());
        assert!(TagLinkToken::new(f64::NAN).is_err());
        assert!(TagLinkToken::new(1.0).is_ok());
    }

    #[test]
    fn test_equal_tokens() {
        let comparison = TagLinkToken::default().compare("abc", "abc");
        assert_eq!(comparison.score, 1.0);
        assert_eq!(comparison.matched, 3);
        assert_eq!(comparison.largest_index, Some(2));
    }

    #[test]
    fn test_empty_token() {
        let tlt = TagLinkToken::default();
        assert_eq!(tlt.similarity("", "abc"), 0.0);
        assert_eq!(tlt.similarity("abc", ""), 0.0);
        assert_eq!(tlt.similarity("", ""), 1.0);
    }

    #[test]
    fn test_one_to_one_pairing() {
        let comparison = TagLinkToken::default().compare("abcabc", "abc");
        let rows: HashSet<usize> = comparison.pairs.iter().map(|p| p.row).collect();
        let cols: HashSet<usize> = comparison.pairs.iter().map(|p| p.col).collect();
        assert_eq!(rows.len(), comparison.pairs.len());
        assert_eq!(cols.len(), comparison.pairs.len());
        assert!(comparison.matched <= 3);
        assert_eq!(comparison.matched, 3);
        // a, b and c pair at offset zero; prefix bonus of 3
        let base = (3.0 / 6.0 + 3.0 / 3.0) / 2.0;
        let expected = base + 3.0 * 0.1 * (1.0 - base);
        assert!((comparison.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_transposition() {
        let comparison = TagLinkToken::default().compare("abcd", "abdc");
        assert_eq!(comparison.matched, 4);
        // c and d pair one position apart
        let total = 1.0 + 1.0 + 0.7 + 0.7;
        let base = (total / 4.0 + total / 4.0) / 2.0;
        let expected = base + 2.0 * 0.1 * (1.0 - base);
        assert!((comparison.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_roles() {
        let tlt = TagLinkToken::default();
        assert_eq!(tlt.similarity("abc", "abcabc"), tlt.similarity("abcabc", "abc"));
    }

    #[test]
    fn test_split() {
        let tlt = TagLinkToken::default();
        let comparison = tlt.compare("johnsmith", "johns");
        assert_eq!(
            comparison.split(),
            Some(("johns".to_string(), "mith".to_string()))
        );
        assert_eq!(tlt.compare("johns", "johns").split(), None);
        assert_eq!(tlt.compare("abcdef", "xyz").split(), None);
    }

    #[test]
    fn test_explain_lists_pairs() {
        let explained = TagLinkToken::default().explain("abdc", "abcd");
        assert!(explained.starts_with("TagLinkToken(tr=0.3)"));
        assert!(explained.contains("a\ta\t1.000"));
        assert!(explained.ends_with("matched=4"));
    }
}
