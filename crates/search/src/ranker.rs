//! Relevance ranking over question records
//!
//! The ranker is stateless: every call builds a fresh [`TfIdfIndex`] over
//! the full record collection, scores the normalized query against every
//! document, and discards the index on return. Callers supply the complete
//! corpus; IDF statistics are only correct over the full set.

use std::cmp::Ordering;

use qatrack_core::error::{Error, Result};
use qatrack_core::question::Question;
use tracing::debug;

use crate::index::{TermWeight, TfIdfIndex};
use crate::tokenizer::normalize;

// ============================================================================
// Searchable
// ============================================================================

/// Capability the ranker needs from a record: three text-bearing fields
///
/// Keeps the ranking logic decoupled from the full record schema; the
/// identity, assignment, and audit fields are never inspected.
pub trait Searchable {
    /// Primary question text
    fn question(&self) -> &str;
    /// Optional longer description
    fn description(&self) -> Option<&str>;
    /// Optional answer text
    fn answer(&self) -> Option<&str>;
}

impl Searchable for Question {
    fn question(&self) -> &str {
        &self.question
    }

    fn description(&self) -> Option<&str> {
        self.question_description.as_deref()
    }

    fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }
}

// ============================================================================
// Index construction
// ============================================================================

/// One record's searchable fields, normalized independently and flattened
fn searchable_tokens<T: Searchable>(record: &T) -> Vec<String> {
    let texts = [
        record.question(),
        record.description().unwrap_or(""),
        record.answer().unwrap_or(""),
    ];
    texts.iter().flat_map(|text| normalize(text)).collect()
}

/// Build a fresh index over the full record collection
///
/// One document per record, at the record's position.
fn build_index<T: Searchable>(records: &[T]) -> TfIdfIndex {
    let mut index = TfIdfIndex::new();
    for record in records {
        index.add_document(searchable_tokens(record));
    }
    index
}

// ============================================================================
// Public operations
// ============================================================================

/// Rank records against a free-text query
///
/// Returns the records that match at least one query term, ordered by
/// descending relevance (sum of each query term's TF-IDF weight in the
/// record's document). Zero-score records are excluded; equal scores keep
/// their input order. An empty or whitespace-only query matches nothing —
/// it does not return the unfiltered corpus.
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let index = build_index(records);
    let query_terms = normalize(query);

    debug!(
        corpus = records.len(),
        query_terms = query_terms.len(),
        "scoring records against query"
    );

    let mut scored: Vec<(usize, f64)> = (0..records.len())
        .map(|doc| {
            let score: f64 = query_terms.iter().map(|term| index.weight(doc, term)).sum();
            (doc, score)
        })
        .filter(|(_, score)| *score > 0.0)
        .collect();

    // Stable sort: equal scores keep their input order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored.into_iter().map(|(doc, _)| &records[doc]).collect()
}

/// Terms of one record with their corpus-relative importance, heaviest first
///
/// Rebuilds the same index as [`search`] and returns the document's distinct
/// terms with their TF-IDF weights. Diagnostics/explainability, not end-user
/// search.
///
/// # Errors
///
/// [`Error::RecordOutOfRange`] when `index` is not a position within
/// `records`; never silently clamped or returned as an empty success.
pub fn term_importance<T: Searchable>(records: &[T], index: usize) -> Result<Vec<TermWeight>> {
    if index >= records.len() {
        return Err(Error::RecordOutOfRange {
            index,
            len: records.len(),
        });
    }
    Ok(build_index(records).term_weights(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qatrack_core::question::CreateQuestionRequest;

    fn record(question: &str, description: Option<&str>, answer: Option<&str>) -> Question {
        Question::create(
            CreateQuestionRequest {
                question: question.to_string(),
                question_description: description.map(String::from),
                answer: answer.map(String::from),
                ..Default::default()
            },
            "tester@example.com",
        )
    }

    #[test]
    fn test_search_concrete_scenario() {
        let records = vec![
            record("What is data retention policy", None, None),
            record(
                "How to request account deletion",
                None,
                Some("Send email to support"),
            ),
        ];

        let hits = search(&records, "deletion");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record_id, records[1].record_id);

        let hits = search(&records, "data");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record_id, records[0].record_id);
    }

    #[test]
    fn test_search_matches_description_and_answer() {
        let records = vec![
            record("Vendor review", Some("Covers subprocessor audits"), None),
            record("Access requests", None, Some("Handled by the privacy team")),
        ];

        let by_description = search(&records, "subprocessor");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].record_id, records[0].record_id);

        let by_answer = search(&records, "privacy team");
        assert_eq!(by_answer.len(), 1);
        assert_eq!(by_answer[0].record_id, records[1].record_id);
    }

    #[test]
    fn test_search_ranks_by_term_frequency() {
        // Same document length; tf 1 vs tf 3 for "encrypt"
        let records = vec![
            record("encrypt backups nightly always", None, None),
            record("encrypt encrypt encrypt backups", None, None),
            record("unrelated vendor onboarding checklist", None, None),
        ];

        let hits = search(&records, "encrypt");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].record_id, records[1].record_id);
        assert_eq!(hits[1].record_id, records[0].record_id);
    }

    #[test]
    fn test_search_ties_keep_input_order() {
        let records = vec![
            record("consent banner wording", None, None),
            record("consent banner wording", None, None),
            record("something else entirely", None, None),
        ];

        let hits = search(&records, "consent");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].record_id, records[0].record_id);
        assert_eq!(hits[1].record_id, records[1].record_id);
    }

    #[test]
    fn test_search_stem_folds_query_and_document() {
        let records = vec![record("Personal data processed monthly", None, None)];
        assert_eq!(search(&records, "Processing").len(), 1);
        assert_eq!(search(&records, "process").len(), 1);
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        let records = vec![record("What is data retention policy", None, None)];
        assert!(search(&records, "").is_empty());
        assert!(search(&records, "   \t  ").is_empty());
    }

    #[test]
    fn test_search_empty_corpus() {
        let records: Vec<Question> = Vec::new();
        assert!(search(&records, "anything").is_empty());
    }

    #[test]
    fn test_search_no_overlap_excluded() {
        let records = vec![
            record("data retention policy", None, None),
            record("breach notification window", None, None),
        ];
        assert!(search(&records, "zebra").is_empty());
    }

    #[test]
    fn test_term_importance_out_of_range() {
        let records = vec![record("data retention policy", None, None)];
        let err = term_importance(&records, records.len()).unwrap_err();
        assert!(matches!(err, Error::RecordOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_term_importance_ordered() {
        let records = vec![
            record("breach breach notification", None, None),
            record("notification window", None, None),
        ];
        let weights = term_importance(&records, 0).unwrap();
        assert_eq!(weights[0].term, "breach");
        assert!(weights[0].weight > weights[1].weight);
    }

    #[test]
    fn test_term_importance_empty_record_is_ok() {
        // In range but with no searchable tokens: empty success, not an error
        let records = vec![record("...", None, None)];
        assert!(term_importance(&records, 0).unwrap().is_empty());
    }
}
