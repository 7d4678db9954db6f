//! Distances between token frequency vectors.
//!
//! Unlike the set metrics, repeated tokens count. The distance is summed over
//! the union of tokens and divided by the largest distance the two token
//! counts allow.

use std::fmt::{Debug, Display, Error, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::StringMetric;
use crate::tokenizer::{QGramTokenizer, Tokenizer, WhitespaceTokenizer};

/// How per-token count differences combine into a distance
pub trait VectorNorm: Send + Sync + Debug + Display {
    /// Contribution of one token seen `count_a` and `count_b` times
    fn token_distance(&self, count_a: usize, count_b: usize) -> f64;

    /// Turns the summed contributions into the final distance
    fn total(&self, sum: f64) -> f64 {
        sum
    }

    /// Largest distance between vectors holding `len_a` and `len_b` tokens
    fn max_distance(&self, len_a: usize, len_b: usize) -> f64;
}

/// Manhattan (L1) distance
#[derive(Debug, Default, Clone, Copy)]
pub struct Block;

impl VectorNorm for Block {
    fn token_distance(&self, count_a: usize, count_b: usize) -> f64 {
        count_a.abs_diff(count_b) as f64
    }

    fn max_distance(&self, len_a: usize, len_b: usize) -> f64 {
        (len_a + len_b) as f64
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Block")
    }
}

/// Euclidean (L2) distance
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl VectorNorm for Euclidean {
    fn token_distance(&self, count_a: usize, count_b: usize) -> f64 {
        let diff = count_a.abs_diff(count_b) as f64;
        diff * diff
    }

    fn total(&self, sum: f64) -> f64 {
        sum.sqrt()
    }

    fn max_distance(&self, len_a: usize, len_b: usize) -> f64 {
        let (a, b) = (len_a as f64, len_b as f64);
        (a * a + b * b).sqrt()
    }
}

impl Display for Euclidean {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Euclidean")
    }
}

//------------------------------------------------------------------------------
/// Similarity `1 - distance / max_distance` between token count vectors
#[derive(Debug, Clone)]
pub struct VectorDistance<N> {
    tokenizer: Arc<dyn Tokenizer>,
    norm: N,
}

/// Block distance over whitespace tokens
pub type BlockDistance = VectorDistance<Block>;
/// Euclidean distance over whitespace tokens
pub type EuclideanDistance = VectorDistance<Euclidean>;

impl<N: VectorNorm + Default> Default for VectorDistance<N> {
    fn default() -> Self {
        Self::new(WhitespaceTokenizer::default(), N::default())
    }
}

impl<N: VectorNorm> VectorDistance<N> {
    /// Compare the token counts produced by `tokenizer` under `norm`
    pub fn new(tokenizer: impl Tokenizer + 'static, norm: N) -> Self {
        Self {
            tokenizer: Arc::new(tokenizer),
            norm,
        }
    }

    /// Distance between the token count vectors of `a` and `b`
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.distance_and_bound(a, b).0
    }

    fn distance_and_bound(&self, a: &str, b: &str) -> (f64, f64) {
        let tokens_a = self.tokenizer.tokenize(a);
        let tokens_b = self.tokenizer.tokenize(b);

        // insertion order keeps the float summation deterministic
        let mut counts: IndexMap<&str, (usize, usize)> = IndexMap::new();
        for token in &tokens_a {
            counts.entry(token.as_str()).or_default().0 += 1;
        }
        for token in &tokens_b {
            counts.entry(token.as_str()).or_default().1 += 1;
        }

        let sum: f64 = counts
            .values()
            .map(|&(count_a, count_b)| self.norm.token_distance(count_a, count_b))
            .sum();
        (
            self.norm.total(sum),
            self.norm.max_distance(tokens_a.len(), tokens_b.len()),
        )
    }
}

impl<N: VectorNorm> StringMetric for VectorDistance<N> {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let (distance, max_distance) = self.distance_and_bound(a, b);
        if max_distance == 0.0 {
            return 0.0;
        }
        (1.0 - distance / max_distance).clamp(0.0, 1.0)
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        self.distance(a, b)
    }
}

impl<N: VectorNorm> Display for VectorDistance<N> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}Distance", self.norm)
    }
}

//------------------------------------------------------------------------------
/// Block distance over unpadded trigrams
#[derive(Debug, Clone)]
pub struct QGramsDistance(BlockDistance);

impl Default for QGramsDistance {
    fn default() -> Self {
        Self(VectorDistance::new(QGramTokenizer::default(), Block))
    }
}

impl QGramsDistance {
    /// Block distance over the q-grams of `tokenizer`
    pub fn new(tokenizer: QGramTokenizer) -> Self {
        Self(VectorDistance::new(tokenizer, Block))
    }
}

impl StringMetric for QGramsDistance {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.0.similarity(a, b)
    }

    fn absolute_similarity(&self, a: &str, b: &str) -> f64 {
        self.0.absolute_similarity(a, b)
    }
}

impl Display for QGramsDistance {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "QGramsDistance")
    }
}
