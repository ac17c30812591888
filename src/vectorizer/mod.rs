pub mod compare;
pub mod index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Split text into index terms.
///
/// Lowercases, treats every non-word character as whitespace, and drops
/// tokens of length 2 or shorter. Word characters are alphanumerics plus
/// underscore.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// Sparse term-weight vector.
///
/// Holds an entry per term actually present in the document, in first-seen
/// order. Zero weights are never stored; `get` reports 0.0 for any absent
/// term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        Self {
            weights: IndexMap::new(),
        }
    }

    /// Set a term weight. Zero weights are dropped rather than stored.
    pub fn insert(&mut self, term: impl Into<String>, weight: f64) -> &mut Self {
        if weight != 0.0 {
            self.weights.insert(term.into(), weight);
        }
        self
    }

    /// Weight of a term, 0.0 when absent.
    #[inline]
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(String, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut vec = SparseVector::new();
        for (term, weight) in iter {
            vec.insert(term, weight);
        }
        vec
    }
}

/// TF-IDF vectorizer over a document snapshot.
///
/// Pure: the whole corpus is handed in per call and vectors for every
/// document come back index-aligned. There is no incremental update; a
/// changed collection is re-vectorized wholesale.
#[derive(Debug, Default)]
pub struct TfIdfVectorizer;

impl TfIdfVectorizer {
    /// Vectorize a document collection.
    ///
    /// TF is raw count over document token count (an empty document yields
    /// an empty vector, not an error). IDF is `ln(total_docs / (1 + df))`
    /// with no floor: a term present in every document goes negative, and
    /// that is kept as-is.
    pub fn vectorize<S: AsRef<str>>(documents: &[S]) -> Vec<SparseVector> {
        let token_docs: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        // Document frequency per term, over the union vocabulary.
        let mut doc_freq: IndexMap<&str, u32> = IndexMap::new();
        for tokens in &token_docs {
            let mut seen: IndexMap<&str, ()> = IndexMap::new();
            for token in tokens {
                seen.entry(token.as_str()).or_insert(());
            }
            for (token, ()) in seen {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        let total_docs = documents.len() as f64;
        token_docs
            .iter()
            .map(|tokens| {
                let total_tokens = tokens.len() as f64;
                let mut counts: IndexMap<&str, u32> = IndexMap::new();
                for token in tokens {
                    *counts.entry(token.as_str()).or_insert(0) += 1;
                }
                counts
                    .into_iter()
                    .map(|(term, count)| {
                        let tf = count as f64 / total_tokens;
                        let df = doc_freq.get(term).copied().unwrap_or(0);
                        let idf = (total_docs / (1.0 + df as f64)).ln();
                        (term.to_string(), tf * idf)
                    })
                    .collect()
            })
            .collect()
    }
}
