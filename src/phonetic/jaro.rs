//! Jaro and Jaro-Winkler similarity
//!
//! Characters match when equal and at most `max(|a|, |b|) / 2 - 1` positions
//! apart. With `m` matches and `t` half the number of matches out of order:
//!
//! `jaro = (m / |a| + m / |b| + (m - t) / m) / 3`
//!
//! Jaro-Winkler adds `prefix · 0.1 · (1 - jaro)` for a common prefix of up to
//! six characters.

use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::util::common_prefix_len;

const PREFIX_LIMIT: usize = 6;
const PREFIX_SCALE: f64 = 0.1;

/// Jaro similarity
#[derive(Debug, Default, Clone, Copy)]
pub struct Jaro;

impl StringMetric for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            _ => {}
        }

        let window = (a.len().max(b.len()) / 2).saturating_sub(1);
        let mut a_matched = vec![false; a.len()];
        let mut b_matched = vec![false; b.len()];
        let mut matches = 0usize;

        for (i, &ch) in a.iter().enumerate() {
            let end = (i + window + 1).min(b.len());
            for j in i.saturating_sub(window)..end {
                if !b_matched[j] && b[j] == ch {
                    a_matched[i] = true;
                    b_matched[j] = true;
                    matches += 1;
                    break;
                }
            }
        }

        if matches == 0 {
            return 0.0;
        }

        let in_a = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
        let in_b = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
        let out_of_order = in_a.zip(in_b).filter(|(x, y)| x != y).count();

        let m = matches as f64;
        let t = (out_of_order / 2) as f64;
        (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
    }
}

impl Display for Jaro {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Jaro")
    }
}

//------------------------------------------------------------------------------
/// Jaro-Winkler: an inner metric lifted by a common-prefix bonus
#[derive(Debug, Clone)]
pub struct JaroWinkler {
    inner: Arc<dyn StringMetric>,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self { inner: Arc::new(Jaro) }
    }
}

impl JaroWinkler {
    /// Use `inner` in place of [`Jaro`] as the base similarity
    pub fn inner(mut self, inner: impl StringMetric + 'static) -> Self {
        self.inner = Arc::new(inner);
        self
    }
}

impl StringMetric for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let base = self.inner.similarity(a, b);
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let prefix = common_prefix_len(&a, &b, PREFIX_LIMIT);
        base + prefix as f64 * PREFIX_SCALE * (1.0 - base)
    }
}

impl Display for JaroWinkler {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "JaroWinkler({})", self.inner)
    }
}
