//! Comma-delimited tokenizer.

use std::sync::Arc;

use crate::tokenizer::{SharedStopWords, StopWords, Tokenizer, default_stop_words, is_blank};

const DELIMITER: char = ',';

/// Splits on commas. Surrounding whitespace is trimmed from each field and
/// blank fields are dropped.
#[derive(Debug, Clone)]
pub struct CsvTokenizer {
    stop_words: SharedStopWords,
}

impl Default for CsvTokenizer {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
        }
    }
}

impl CsvTokenizer {
    /// Drop tokens matched by `stop_words`
    pub fn stop_words(mut self, stop_words: impl StopWords + 'static) -> Self {
        self.stop_words = Arc::new(stop_words);
        self
    }
}

impl Tokenizer for CsvTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input
            .split(DELIMITER)
            .filter(|term| !is_blank(term))
            .map(str::trim)
            .filter(|term| !self.stop_words.is_stop_word(term))
            .map(str::to_string)
            .collect()
    }
}
