//! Whitespace-delimited tokenizer.

use std::sync::Arc;

use crate::tokenizer::{SharedStopWords, StopWords, Tokenizer, default_stop_words};

/// Returns true for characters that separate whitespace tokens: Unicode
/// White_Space (space, tab, CR, LF, NBSP, figure space...) plus the ASCII
/// information separators.
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1C}'..='\u{1F}')
}

/// Splits on whitespace, dropping blank tokens
#[derive(Debug, Clone)]
pub struct WhitespaceTokenizer {
    stop_words: SharedStopWords,
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
        }
    }
}

impl WhitespaceTokenizer {
    /// Drop tokens matched by `stop_words`
    pub fn stop_words(mut self, stop_words: impl StopWords + 'static) -> Self {
        self.stop_words = Arc::new(stop_words);
        self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input
            .split(is_delimiter)
            .filter(|term| !term.is_empty() && !self.stop_words.is_stop_word(term))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::tokenizer::StopWordSet;

    #[test]
    fn test_split() {
        let tokenizer = WhitespaceTokenizer::default();
        assert_eq!(tokenizer.tokenize("hello world"), ["hello", "world"]);
        assert_eq!(tokenizer.tokenize("  a\t\tb\r\nc\u{00A0}d "), ["a", "b", "c", "d"]);
        assert_eq!(tokenizer.tokenize("x\u{1F}y"), ["x", "y"]);
    }

    #[test]
    fn test_blank_input() {
        let tokenizer = WhitespaceTokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \t \n").is_empty());
    }

    #[test]
    fn test_keeps_duplicates_and_order() {
        let tokenizer = WhitespaceTokenizer::default();
        assert_eq!(tokenizer.tokenize("b a b"), ["b", "a", "b"]);
    }

    #[test]
    fn test_stop_words() {
        let tokenizer = WhitespaceTokenizer::default().stop_words(StopWordSet::new(["of", "the"]));
        assert_eq!(tokenizer.tokenize("the bank of england"), ["bank", "england"]);
    }
}
