//! Fixed-length character n-gram tokenizer.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::tokenizer::{SharedStopWords, StopWords, Tokenizer, default_stop_words, is_blank};

/// Emits every contiguous substring of `q` characters, sliding one character
/// at a time, after optionally wrapping the input in padding.
///
/// # Example:
/// ```
/// use simmetrics::tokenizer::{QGramTokenizer, Tokenizer};
///
/// let tokenizer = QGramTokenizer::new(3).unwrap();
/// assert_eq!(tokenizer.tokenize("abcd"), ["abc", "bcd"]);
///
/// let padded = QGramTokenizer::new(3).unwrap().padding("#");
/// assert_eq!(padded.tokenize("ab"), ["#ab", "ab#"]);
/// ```
#[derive(Debug, Clone)]
pub struct QGramTokenizer {
    q: usize,
    head_padding: String,
    tail_padding: String,
    stop_words: SharedStopWords,
}

/// Trigrams without padding
impl Default for QGramTokenizer {
    fn default() -> Self {
        Self {
            q: 3,
            head_padding: String::new(),
            tail_padding: String::new(),
            stop_words: default_stop_words(),
        }
    }
}

impl QGramTokenizer {
    /// Creates a tokenizer for q-grams of length `q`, failing when `q < 1`
    pub fn new(q: usize) -> Result<Self, ConfigError> {
        if q < 1 {
            return Err(ConfigError::InvalidQGramLength(q));
        }
        Ok(Self { q, ..Default::default() })
    }

    /// Pads both ends of the input with `padding`. Blank padding is ignored.
    pub fn padding(self, padding: &str) -> Self {
        self.head_padding(padding).tail_padding(padding)
    }

    /// Pads the start of the input. Blank padding is ignored.
    pub fn head_padding(mut self, padding: &str) -> Self {
        if !is_blank(padding) {
            self.head_padding = padding.to_string();
        }
        self
    }

    /// Pads the end of the input. Blank padding is ignored.
    pub fn tail_padding(mut self, padding: &str) -> Self {
        if !is_blank(padding) {
            self.tail_padding = padding.to_string();
        }
        self
    }

    /// Drop q-grams matched by `stop_words`
    pub fn stop_words(mut self, stop_words: impl StopWords + 'static) -> Self {
        self.stop_words = Arc::new(stop_words);
        self
    }

    /// The q-gram length
    pub fn q(&self) -> usize {
        self.q
    }
}

impl Tokenizer for QGramTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        if is_blank(input) {
            return Vec::new();
        }

        let padded: Vec<char> = self
            .head_padding
            .chars()
            .chain(input.chars())
            .chain(self.tail_padding.chars())
            .collect();

        if padded.len() < self.q {
            return Vec::new();
        }

        padded
            .windows(self.q)
            .map(|window| window.iter().collect::<String>())
            .filter(|term| !self.stop_words.is_stop_word(term))
            .collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_trigrams() {
        let tokenizer = QGramTokenizer::new(3).unwrap();
        assert_eq!(tokenizer.tokenize("abcd"), ["abc", "bcd"]);
        assert_eq!(tokenizer.tokenize("abc"), ["abc"]);
    }

    #[test]
    fn test_shorter_than_q() {
        let tokenizer = QGramTokenizer::new(3).unwrap();
        assert!(tokenizer.tokenize("ab").is_empty());
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(QGramTokenizer::new(0), Err(ConfigError::InvalidQGramLength(0))));
    }

    #[test]
    fn test_padding() {
        let tokenizer = QGramTokenizer::new(2).unwrap().head_padding("^").tail_padding("$");
        assert_eq!(tokenizer.tokenize("ab"), ["^a", "ab", "b$"]);
        // padding counts towards the minimum length
        let tokenizer = QGramTokenizer::new(3).unwrap().padding("#");
        assert_eq!(tokenizer.tokenize("a"), ["#a#"]);
        // blank padding is ignored
        let tokenizer = QGramTokenizer::new(2).unwrap().padding(" ");
        assert_eq!(tokenizer.tokenize("ab"), ["ab"]);
    }

    #[test]
    fn test_unicode() {
        let tokenizer = QGramTokenizer::new(2).unwrap();
        assert_eq!(tokenizer.tokenize("café"), ["ca", "af", "fé"]);
    }

    #[test]
    fn test_unigrams_keep_duplicates() {
        let tokenizer = QGramTokenizer::new(1).unwrap();
        assert_eq!(tokenizer.tokenize("aba"), ["a", "b", "a"]);
    }
}
