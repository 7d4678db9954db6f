//! Inverse document frequency weights.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::tokenizer::Tokenizer;

/// Token weights `ln(N / df + 1)`, where `N` is the number of documents in a
/// reference corpus and `df` the number of documents containing the token.
///
/// Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfTable {
    documents: usize,
    weights: HashMap<String, f64>,
}

impl IdfTable {
    /// Tokenize every document of `corpus` and weight its tokens
    pub fn from_corpus<I, S>(corpus: I, tokenizer: &dyn Tokenizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut documents = 0;
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for document in corpus {
            documents += 1;
            let distinct: HashSet<String> = tokenizer.tokenize_to_set(document.as_ref());
            for token in distinct {
                *frequencies.entry(token).or_default() += 1;
            }
        }

        let n = documents as f64;
        let weights = frequencies
            .into_iter()
            .map(|(token, df)| (token, (n / df as f64 + 1.0).ln()))
            .collect::<HashMap<_, _>>();
        debug!("idf table: {} documents, {} tokens", documents, weights.len());

        Self { documents, weights }
    }

    /// Number of documents the table was built from
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Number of distinct tokens in the table
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the corpus held no tokens
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of `token`, 0 when the corpus never saw it
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// Weights of `tokens`, scaled to unit euclidean length. All zero when
    /// none of the tokens are known.
    pub fn unit_weights(&self, tokens: &[String]) -> Vec<f64> {
        let weights: Vec<f64> = tokens.iter().map(|token| self.weight(token)).collect();
        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return vec![0.0; tokens.len()];
        }
        weights.into_iter().map(|w| w / norm).collect()
    }
}
