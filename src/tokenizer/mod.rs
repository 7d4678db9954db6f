//! Tokenizers split a string into an ordered sequence of tokens.
//!
//! Every tokenizer runs its output through a [`StopWords`] filter before
//! returning it. The default filter accepts everything.

use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;

pub mod csv;
pub mod qgram;
pub mod pattern;
pub mod whitespace;

pub use self::csv::CsvTokenizer;
pub use self::qgram::QGramTokenizer;
pub use self::pattern::RegexTokenizer;
pub use self::whitespace::WhitespaceTokenizer;

/// A token and its position within the sequence it came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token text
    pub text: String,
    /// Index of the token in its source sequence
    pub position: usize,
}

/// Decides whether a token is dropped from tokenizer output
pub trait StopWords: Send + Sync + Debug {
    /// Returns true if `word` must be dropped
    fn is_stop_word(&self, word: &str) -> bool;
}

/// Stop-word filter that keeps every token
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStopWords;

impl StopWords for NoStopWords {
    fn is_stop_word(&self, _word: &str) -> bool {
        false
    }
}

/// Stop-word filter backed by an explicit word list
#[derive(Debug, Default, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Creates a filter dropping exactly the given words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl StopWords for StopWordSet {
    fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Trait for splitting text into tokens
pub trait Tokenizer: Send + Sync + Debug {
    /// Split `input` into an ordered list of tokens. Empty or blank input
    /// gives an empty list.
    fn tokenize(&self, input: &str) -> Vec<String>;

    /// Distinct tokens of `input`
    fn tokenize_to_set(&self, input: &str) -> HashSet<String> {
        self.tokenize(input).into_iter().collect()
    }

    /// Tokens of `input` along with their positions
    fn tokens(&self, input: &str) -> Vec<Token> {
        self.tokenize(input)
            .into_iter()
            .enumerate()
            .map(|(position, text)| Token { text, position })
            .collect()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, input: &str) -> Vec<String> {
        (**self).tokenize(input)
    }
}

pub(crate) type SharedStopWords = Arc<dyn StopWords>;

pub(crate) fn default_stop_words() -> SharedStopWords {
    Arc::new(NoStopWords)
}

/// Returns true when `s` has no characters other than whitespace
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_stop_word_set() {
        let stop = StopWordSet::new(["the", "of"]);
        assert!(stop.is_stop_word("the"));
        assert!(!stop.is_stop_word("The"));
        assert!(!NoStopWords.is_stop_word("the"));
    }

    #[test]
    fn test_tokens_carry_positions() {
        let tokens = WhitespaceTokenizer::default().tokens("a b  c");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert_eq!(tokens[2].text, "c");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\u{00A0}"));
        assert!(!is_blank(" a "));
    }
}
