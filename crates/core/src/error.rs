//! Error types for qatrack
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. The taxonomy is deliberately small: the search and
//! record layers perform no I/O, so degenerate inputs (empty strings,
//! empty collections) produce well-defined empty results instead of
//! errors.

use thiserror::Error;

/// Result type alias for qatrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the question/answer core
#[derive(Debug, Error)]
pub enum Error {
    /// Record index outside the supplied collection
    ///
    /// Raised by term importance so callers can distinguish "no importance
    /// data" from "bad index". Never silently clamped.
    #[error("record index {index} out of range for collection of length {len}")]
    RecordOutOfRange {
        /// Index that was requested
        index: usize,
        /// Length of the collection that was supplied
        len: usize,
    },
}
