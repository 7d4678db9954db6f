//! Tokenizer splitting on user supplied delimiter patterns.

use std::sync::Arc;

use regex::Regex;

use crate::error::ConfigError;
use crate::tokenizer::{SharedStopWords, StopWords, Tokenizer, default_stop_words, is_blank};

/// Splits on any of a list of regular expressions
///
/// # Example:
/// ```
/// use simmetrics::tokenizer::{RegexTokenizer, Tokenizer};
///
/// let tokenizer = RegexTokenizer::new(&[";", r"\s*-\s*"]).unwrap();
/// assert_eq!(tokenizer.tokenize("a;b - c"), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    delimiter: Regex,
    stop_words: SharedStopWords,
}

impl RegexTokenizer {
    /// Builds the alternation `(d1)|(d2)|...` of the given delimiters.
    ///
    /// Fails when `delimiters` is empty or a pattern does not compile.
    pub fn new<S: AsRef<str>>(delimiters: &[S]) -> Result<Self, ConfigError> {
        if delimiters.is_empty() {
            return Err(ConfigError::MissingOption("delimiters"));
        }
        let pattern = delimiters
            .iter()
            .map(|d| format!("({})", d.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let delimiter = Regex::new(&pattern)?;
        Ok(Self {
            delimiter,
            stop_words: default_stop_words(),
        })
    }

    /// Drop tokens matched by `stop_words`
    pub fn stop_words(mut self, stop_words: impl StopWords + 'static) -> Self {
        self.stop_words = Arc::new(stop_words);
        self
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        self.delimiter
            .split(input)
            .filter(|term| !is_blank(term) && !self.stop_words.is_stop_word(term))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_alternation() {
        let tokenizer = RegexTokenizer::new(&[r"\|", "::"]).unwrap();
        assert_eq!(tokenizer.tokenize("a|b::c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_blank_tokens_dropped() {
        let tokenizer = RegexTokenizer::new(&[","]).unwrap();
        assert_eq!(tokenizer.tokenize(",, x ,"), [" x "]);
    }

    #[test]
    fn test_no_delimiters() {
        let none: [&str; 0] = [];
        assert!(matches!(
            RegexTokenizer::new(&none),
            Err(ConfigError::MissingOption("delimiters"))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(RegexTokenizer::new(&["("]), Err(ConfigError::InvalidPattern(_))));
    }
}
