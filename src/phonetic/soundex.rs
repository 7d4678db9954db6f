//! Soundex phonetic encoding and similarity.

use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::StringMetric;
use crate::phonetic::JaroWinkler;

const DEFAULT_LENGTH: usize = 6;
const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 10;

/// Digit class of an uppercase ASCII letter
#[inline]
fn digit(letter: char) -> char {
    match letter {
        'B' | 'P' | 'F' | 'V' => '1',
        'C' | 'S' | 'K' | 'G' | 'J' | 'Q' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0',
    }
}

fn clamp_length(length: usize) -> usize {
    let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH);
    if clamped != length {
        warn!("soundex length {length} out of range, using {clamped}");
    }
    clamped
}

/// Encode `word` into a Soundex code of `length` characters, clamped to
/// `4..=10`.
///
/// Only ASCII letters are considered. The first letter is kept, the letters
/// after it become digits, adjacent equal digits collapse, zeros are dropped
/// and the code is right-padded with zeros. A word without letters encodes to
/// an empty string.
///
/// # Example:
/// ```
/// use simmetrics::phonetic::soundex;
///
/// assert_eq!(soundex("Robert", 4), "R163");
/// assert_eq!(soundex("Rupert", 4), "R163");
/// assert_eq!(soundex("Robert", 6), "R16300");
/// ```
pub fn soundex(word: &str, length: usize) -> String {
    let length = clamp_length(length);
    let mut letters = word
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase);

    let Some(first) = letters.next() else {
        return String::new();
    };

    let mut code = String::with_capacity(length);
    code.push(first);

    let mut last = None;
    for d in letters.take(length * 4).map(digit) {
        if last != Some(d) && d != '0' {
            code.push(d);
        }
        last = Some(d);
    }

    code.extend(std::iter::repeat('0').take(length.saturating_sub(code.len())));
    code.truncate(length);
    code
}

/// Compares the Soundex codes of two strings with an inner metric
#[derive(Debug, Clone)]
pub struct Soundex {
    length: usize,
    inner: Arc<dyn StringMetric>,
}

impl Default for Soundex {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            inner: Arc::new(JaroWinkler::default()),
        }
    }
}

impl Soundex {
    /// Code length, clamped to `4..=10`
    pub fn length(mut self, length: usize) -> Self {
        self.length = clamp_length(length);
        self
    }

    /// Compare codes with `inner`
    pub fn inner(mut self, inner: impl StringMetric + 'static) -> Self {
        self.inner = Arc::new(inner);
        self
    }

    /// Soundex code of `word` at the configured length
    pub fn encode(&self, word: &str) -> String {
        soundex(word, self.length)
    }

    /// Score two codes. A word without letters has no code, so it only
    /// matches an identical input.
    fn score_codes(&self, a: &str, b: &str, code_a: &str, code_b: &str) -> f64 {
        if code_a.is_empty() || code_b.is_empty() {
            return if a == b { 1.0 } else { 0.0 };
        }
        self.inner.similarity(code_a, code_b)
    }
}

impl StringMetric for Soundex {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.score_codes(a, b, &self.encode(a), &self.encode(b))
    }

    fn explain(&self, a: &str, b: &str) -> String {
        let (code_a, code_b) = (self.encode(a), self.encode(b));
        format!(
            "{self}({a:?} -> {code_a}, {b:?} -> {code_b}) = {:.3}",
            self.score_codes(a, b, &code_a, &code_b)
        )
    }
}

impl Display for Soundex {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Soundex({}, {})", self.length, self.inner)
    }
}
