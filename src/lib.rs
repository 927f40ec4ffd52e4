//! qatrack - question/answer tracking core for GDPR-compliance workflows
//!
//! qatrack provides the domain model for question/answer records and a
//! TF-IDF relevance search engine over an in-memory record collection.
//! The surrounding system (HTTP layer, external record store, UI) fetches
//! the full record set and hands it to this crate per call; nothing here
//! performs I/O or keeps state between calls.
//!
//! # Quick Start
//!
//! ```
//! use qatrack::{search, CreateQuestionRequest, Question};
//!
//! let user = "dpo@example.com";
//! let records = vec![
//!     Question::create(
//!         CreateQuestionRequest {
//!             question: "What is the data retention policy".into(),
//!             ..Default::default()
//!         },
//!         user,
//!     ),
//!     Question::create(
//!         CreateQuestionRequest {
//!             question: "How do we handle deletion requests".into(),
//!             ..Default::default()
//!         },
//!         user,
//!     ),
//! ];
//!
//! let hits = search(&records, "retention");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].question, "What is the data retention policy");
//! ```
//!
//! # Architecture
//!
//! - [`qatrack_core`]: the `Question` record, record operations, the
//!   properties codec, and error types.
//! - [`qatrack_search`]: text normalizer, per-call TF-IDF index, and the
//!   relevance ranker.
//!
//! This crate is a facade that re-exports the public API of both.

pub use qatrack_core::error::{Error, Result};
pub use qatrack_core::properties::{format_properties, parse_properties};
pub use qatrack_core::question::{
    filter_by_assignee, filter_by_property, CreateQuestionRequest, Question,
};
pub use qatrack_search::index::{TermWeight, TfIdfIndex};
pub use qatrack_search::ranker::{search, term_importance, Searchable};
pub use qatrack_search::tokenizer::normalize;
