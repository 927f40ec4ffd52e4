//! Text normalizer for relevance search
//!
//! Converts arbitrary text into a sequence of lowercase word stems, so that
//! morphological variants match ("deleting" and "deleted" normalize to the
//! same stem). Index and query text must go through the same normalizer or
//! scores are meaningless.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};

/// Process-wide stemmer. Immutable after construction, safe to share
/// across concurrent searches.
static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Normalize text into a sequence of lowercase word stems
///
/// - Lowercase the whole string
/// - Split on non-alphanumeric characters (punctuation and whitespace are
///   delimiters and are discarded)
/// - Stem each token (Snowball English)
///
/// Pure and deterministic. Empty input, or input with no word characters,
/// yields an empty sequence.
///
/// # Example
///
/// ```
/// use qatrack_search::tokenizer::normalize;
///
/// let tokens = normalize("Hello, World!");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| STEMMER.stem(token).into_owned())
        .collect()
}
