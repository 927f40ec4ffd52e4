//! Core types for the qatrack question/answer tracker
//!
//! This crate provides:
//! - The `Question` record model and its operations
//! - The properties codec used by the external tabular store
//! - Error types shared across the workspace
//!
//! Everything here is pure and synchronous. Fetching and persisting records
//! belongs to the external store, not this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod properties;
pub mod question;

pub use error::{Error, Result};
pub use properties::{format_properties, parse_properties};
pub use question::{filter_by_assignee, filter_by_property, CreateQuestionRequest, Question};
