//! TagLink: token-level greedy matching.
//!
//! Token pairs are scored by an inner [`TokenMetric`] and weighted by
//! `(idf_t·idf_u + matched / min_chars) / 2`, where `min_chars` is the smaller
//! of the two strings' total token lengths. Without a corpus every token of a
//! string weighs `1 / sqrt(token_count)`.

use std::fmt::{Display, Error, Formatter, Write};
use std::sync::Arc;

use crate::greedy::{Candidate, IdfTable, TagLinkToken, assign};
use crate::metric::{StringMetric, TokenMetric};
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// TagLink similarity, optionally IDF weighted
#[derive(Debug, Clone)]
pub struct TagLink {
    inner: Arc<dyn TokenMetric>,
    tokenizer: Arc<dyn Tokenizer>,
    idf: Option<Arc<IdfTable>>,
    corpus: Option<Arc<[String]>>,
}

impl Default for TagLink {
    fn default() -> Self {
        Self {
            inner: Arc::new(TagLinkToken::default()),
            tokenizer: Arc::new(WhitespaceTokenizer::default()),
            idf: None,
            corpus: None,
        }
    }
}

struct Scoring {
    t_tokens: Vec<String>,
    u_tokens: Vec<String>,
    t_weights: Vec<f64>,
    u_weights: Vec<f64>,
    rows: Vec<CandidateRow>,
}

struct CandidateRow {
    candidate: Candidate,
    inner: f64,
    idf: f64,
    matched_rate: f64,
}

impl TagLink {
    /// Score token pairs with `inner`
    pub fn inner(mut self, inner: impl TokenMetric + 'static) -> Self {
        self.inner = Arc::new(inner);
        self
    }

    /// Split strings into tokens with `tokenizer`. An IDF table built from a
    /// corpus is rebuilt with the new tokenizer.
    pub fn tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        if let Some(corpus) = &self.corpus {
            let idf = IdfTable::from_corpus(corpus.iter(), self.tokenizer.as_ref());
            self.idf = Some(Arc::new(idf));
        }
        self
    }

    /// Weight tokens with a precomputed IDF table. The table is kept as is
    /// whatever tokenizer is set afterwards.
    pub fn idf(mut self, idf: IdfTable) -> Self {
        self.idf = Some(Arc::new(idf));
        self.corpus = None;
        self
    }

    /// Weight tokens with an IDF table built from `corpus`, tokenized the same
    /// way as the compared strings
    pub fn corpus<I, S>(mut self, corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let corpus: Arc<[String]> = corpus.into_iter().map(|d| d.as_ref().to_string()).collect();
        let idf = IdfTable::from_corpus(corpus.iter(), self.tokenizer.as_ref());
        self.idf = Some(Arc::new(idf));
        self.corpus = Some(corpus);
        self
    }

    fn token_weights(&self, tokens: &[String]) -> Vec<f64> {
        match &self.idf {
            Some(idf) => idf.unit_weights(tokens),
            None => {
                let weight = 1.0 / (tokens.len() as f64).sqrt();
                vec![weight; tokens.len()]
            }
        }
    }

    fn score(&self, a: &str, b: &str) -> Scoring {
        let t_tokens = self.tokenizer.tokenize(a);
        let u_tokens = self.tokenizer.tokenize(b);
        let t_weights = self.token_weights(&t_tokens);
        let u_weights = self.token_weights(&u_tokens);

        let total_chars = |tokens: &[String]| tokens.iter().map(|t| t.chars().count()).sum::<usize>();
        let min_chars = total_chars(&t_tokens).min(total_chars(&u_tokens)) as f64;

        let mut rows = Vec::new();
        for (t, t_token) in t_tokens.iter().enumerate() {
            let mut last_offset: Option<usize> = None;
            for (u, u_token) in u_tokens.iter().enumerate() {
                let offset = t.abs_diff(u);
                // past an exact pairing, further tokens only drift away
                if last_offset.is_some_and(|last| last < offset) {
                    break;
                }
                let inner = self.inner.compare_tokens(t_token, u_token);
                let matched = if inner.score == 1.0 {
                    last_offset = Some(offset);
                    t_token.chars().count()
                } else {
                    inner.matched
                };
                let matched_rate = if min_chars == 0.0 { 0.0 } else { matched as f64 / min_chars };
                let idf = t_weights[t] * u_weights[u];
                let weight = (idf + matched_rate) / 2.0;
                rows.push(CandidateRow {
                    candidate: Candidate::new(t, u, inner.score * weight),
                    inner: inner.score,
                    idf,
                    matched_rate,
                });
            }
        }
        trace!("{} token candidates", rows.len());

        Scoring {
            t_tokens,
            u_tokens,
            t_weights,
            u_weights,
            rows,
        }
    }
}

impl StringMetric for TagLink {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let scoring = self.score(a, b);
        let picked = assign(scoring.rows.iter().map(|row| row.candidate).collect());
        picked.iter().map(|c| c.score).sum::<f64>().clamp(0.0, 1.0)
    }

    fn explain(&self, a: &str, b: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{self}");
        if a == b {
            let _ = write!(out, "S(T,U)=1.000");
            return out;
        }

        let scoring = self.score(a, b);
        let _ = writeln!(out, "T={:?}", scoring.t_tokens);
        let _ = writeln!(out, "U={:?}", scoring.u_tokens);
        let _ = writeln!(out, "\nTi\tai(Ti)");
        for (token, weight) in scoring.t_tokens.iter().zip(&scoring.t_weights) {
            let _ = writeln!(out, "{token}\t{weight:.3}");
        }
        let _ = writeln!(out, "\nUj\taj(Uj)");
        for (token, weight) in scoring.u_tokens.iter().zip(&scoring.u_weights) {
            let _ = writeln!(out, "{token}\t{weight:.3}");
        }

        let _ = writeln!(out, "\nTi\tUj\tSij\tIDFij\tMRij\tSij*Wij");
        for row in &scoring.rows {
            let c = row.candidate;
            let _ = writeln!(
                out,
                "{}\t{}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
                scoring.t_tokens[c.row], scoring.u_tokens[c.col], row.inner, row.idf, row.matched_rate, c.score
            );
        }

        let picked = assign(scoring.rows.iter().map(|row| row.candidate).collect());
        let _ = writeln!(out, "\nTi\tUj\tSij*Wij");
        for c in &picked {
            let _ = writeln!(out, "{}\t{}\t{:.3}", scoring.t_tokens[c.row], scoring.u_tokens[c.col], c.score);
        }
        let total = picked.iter().map(|c| c.score).sum::<f64>().clamp(0.0, 1.0);
        let _ = write!(out, "S(T,U)={total:.3}");
        out
    }
}

impl Display for TagLink {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self.idf {
            Some(_) => write!(f, "TagLinkIdf({})", self.inner),
            None => write!(f, "TagLink({})", self.inner),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::tokenizer::CsvTokenizer;

    #[test]
    fn test_identical() {
        assert_eq!(TagLink::default().similarity("john smith", "john smith"), 1.0);
    }

    #[test]
    fn test_reordered_tokens() {
        let tag_link = TagLink::default();
        let sim = tag_link.similarity("john smith", "smith john");
        // weights: idf = 1/sqrt(2)^2 = 0.5, matched rate = len / 9
        let expected = (0.5 + 4.0 / 9.0) / 2.0 + (0.5 + 5.0 / 9.0) / 2.0;
        assert!((sim - expected).abs() < 1e-9, "{sim}");
        assert!(sim > 0.99);
    }

    #[test]
    fn test_no_tokens() {
        let tag_link = TagLink::default();
        assert_eq!(tag_link.similarity("", "abc"), 0.0);
        assert_eq!(tag_link.similarity("   ", ""), 0.0);
    }

    #[test]
    fn test_range() {
        let tag_link = TagLink::default();
        for (a, b) in [("abc def", "abd"), ("a b c d", "d c b a"), ("x", "xyz xyz xyz")] {
            let sim = tag_link.similarity(a, b);
            assert!((0.0..=1.0).contains(&sim), "{a} / {b}: {sim}");
        }
    }

    #[test]
    fn test_idf_weighting() {
        let corpus = ["acme corp", "acme inc", "acme llc", "globex corp", "globex inc"];
        let plain = TagLink::default();
        let weighted = TagLink::default().corpus(corpus);
        // the common token "acme" counts less once weighted by idf
        let a = "acme corp";
        let b = "acme inc";
        assert!(weighted.similarity(a, b) < plain.similarity(a, b));
        assert_eq!(weighted.to_string(), "TagLinkIdf(TagLinkToken(tr=0.3))");
    }

    #[test]
    fn test_corpus_follows_tokenizer() {
        let corpus = ["acme,corp", "acme,inc", "globex,corp"];
        let before = TagLink::default().corpus(corpus).tokenizer(CsvTokenizer::default());
        let after = TagLink::default().tokenizer(CsvTokenizer::default()).corpus(corpus);
        let (a, b) = ("acme,corp", "globex,corp");
        assert_eq!(before.similarity(a, b), after.similarity(a, b));
        // "acme" is a known token only when the corpus is split on commas
        let weights = before.token_weights(&["acme".to_string()]);
        assert!((weights[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_explain() {
        let explained = TagLink::default().explain("john smith", "jon smith");
        assert!(explained.starts_with("TagLink(TagLinkToken(tr=0.3))"));
        assert!(explained.contains("smith\tsmith\t1.000"));
        assert!(explained.contains("S(T,U)="));
    }
}
