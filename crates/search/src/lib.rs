//! Relevance search for question records
//!
//! This crate provides:
//! - A text normalizer (lowercase, word-boundary tokenization, stemming)
//! - An ephemeral per-call TF-IDF index
//! - A relevance ranker over anything exposing the three searchable fields
//!
//! # Statelessness
//!
//! Every call to [`search`] or [`term_importance`] builds its own index from
//! the full record collection and discards it on return. Nothing is shared
//! between calls, so concurrent invocations need no locking; inputs are
//! treated as read-only.
//!
//! # Usage
//!
//! ```ignore
//! use qatrack_search::search;
//!
//! let ranked = search(&records, "data retention");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod ranker;
pub mod tokenizer;

pub use index::{TermWeight, TfIdfIndex};
pub use ranker::{search, term_importance, Searchable};
pub use tokenizer::normalize;
