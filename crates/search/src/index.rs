//! Ephemeral TF-IDF index
//!
//! Built fresh for every search call and discarded on return. The index
//! stores term statistics only, never the source records: per-document term
//! counts plus corpus-wide document frequencies. Documents are identified
//! by insertion order, matching the caller's record positions.

use std::cmp::Ordering;
use std::collections::HashMap;

// ============================================================================
// TermWeight
// ============================================================================

/// A term and its TF-IDF weight within one document
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    /// Normalized term
    pub term: String,
    /// TF-IDF weight of the term in the document
    pub weight: f64,
}

// ============================================================================
// TfIdfIndex
// ============================================================================

/// TF-IDF statistics over one corpus
#[derive(Debug, Default)]
pub struct TfIdfIndex {
    /// Per-document term counts, in insertion order
    docs: Vec<HashMap<String, usize>>,
    /// Number of documents containing each term
    doc_freqs: HashMap<String, usize>,
}

impl TfIdfIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's normalized tokens to the index
    ///
    /// Document frequency counts each document once per term, however many
    /// times the term repeats within it.
    pub fn add_document(&mut self, tokens: impl IntoIterator<Item = String>) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        for term in counts.keys() {
            *self.doc_freqs.entry(term.clone()).or_insert(0) += 1;
        }
        self.docs.push(counts);
    }

    /// Number of documents in the corpus
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check whether the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Inverse document frequency of a term
    ///
    /// `ln(N / (1 + df)) + 1`. Strictly positive whenever the corpus is
    /// non-empty and `df <= N`, so a document's score is zero exactly when
    /// it contains no query term.
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.doc_freqs.get(term).copied().unwrap_or(0) as f64;
        (self.docs.len() as f64 / (1.0 + df)).ln() + 1.0
    }

    /// TF-IDF weight of a term within one document
    ///
    /// Zero when the document does not contain the term; a term absent from
    /// the whole corpus therefore contributes zero everywhere. `doc` must be
    /// below [`len`](Self::len).
    pub fn weight(&self, doc: usize, term: &str) -> f64 {
        let tf = self.docs[doc].get(term).copied().unwrap_or(0) as f64;
        if tf == 0.0 {
            return 0.0;
        }
        tf * self.idf(term)
    }

    /// All distinct terms of one document with their weights, heaviest first
    ///
    /// Ties are broken by term so the order is deterministic. `doc` must be
    /// below [`len`](Self::len).
    pub fn term_weights(&self, doc: usize) -> Vec<TermWeight> {
        let mut weights: Vec<TermWeight> = self.docs[doc]
            .keys()
            .map(|term| TermWeight {
                term: term.clone(),
                weight: self.weight(doc, term),
            })
            .collect();
        weights.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        weights
    }
}
