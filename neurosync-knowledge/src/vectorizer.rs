//! TF-IDF vectorizer fit once over the activity corpus.
//!
//! Queries are projected into the fixed space; they never refit it.
//! Unknown query terms are ignored.

use std::collections::{BTreeSet, HashMap};

use crate::tokenizer::tokenize;

/// A fitted term-frequency/inverse-document-frequency space.
///
/// Immutable after `fit`. Vectors are dense over the corpus vocabulary
/// and L2-normalized, so cosine similarity reduces to a dot product.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocab: HashMap<String, usize>,
    idf: Vec<f64>,
    min_term_len: usize,
}

impl TfIdfVectorizer {
    /// Fit the space over a document corpus.
    ///
    /// IDF uses the smoothed form `ln(n_docs / df) + 1`, so terms present
    /// in every document still carry weight.
    pub fn fit(corpus: &[String], min_term_len: usize) -> Self {
        let tokenized: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| tokenize(doc, min_term_len))
            .collect();

        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut df: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            // Ordered iteration keeps term->index assignment identical
            // across fits over the same corpus.
            let unique: BTreeSet<&String> = tokens.iter().collect();
            for term in unique {
                match vocab.get(term) {
                    Some(&idx) => df[idx] += 1,
                    None => {
                        vocab.insert(term.clone(), df.len());
                        df.push(1);
                    }
                }
            }
        }

        let n_docs = corpus.len() as f64;
        let idf = df
            .iter()
            .map(|&doc_freq| (n_docs / doc_freq as f64).ln() + 1.0)
            .collect();

        Self {
            vocab,
            idf,
            min_term_len,
        }
    }

    /// Project a text into the fitted space.
    ///
    /// Returns a dense L2-normalized vector over the corpus vocabulary.
    /// Texts with no known terms map to the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let tokens = tokenize(text, self.min_term_len);
        let mut vec = vec![0.0f64; self.vocab.len()];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, usize> = HashMap::new();
        for token in &tokens {
            *tf.entry(token.as_str()).or_insert(0) += 1;
        }

        let total = tokens.len() as f64;
        for (term, count) in tf {
            if let Some(&idx) = self.vocab.get(term) {
                vec[idx] = (count as f64 / total) * self.idf[idx];
            }
        }

        // L2 normalize.
        let norm: f64 = vec.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }
}
