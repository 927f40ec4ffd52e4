//! Properties codec for the external tabular store
//!
//! The store persists the properties map as a single delimited string:
//! `key:value,key:value`. Parsing is lenient: malformed pairs are skipped
//! with a warning rather than failing the whole record.
//!
//! Known limitation: values containing `,` or `:` do not round-trip. The
//! format is owned by the store; this codec only mirrors it. It is not part
//! of the search contract.

use std::collections::BTreeMap;

use tracing::warn;

/// Parse a `key:value,key:value` string into a properties map
///
/// Pairs without a colon, or with an empty key or value after trimming,
/// are skipped. An empty or all-malformed input yields an empty map.
pub fn parse_properties(raw: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();

    for pair in raw.split(',') {
        if pair.trim().is_empty() {
            continue;
        }
        match pair.split_once(':') {
            Some((key, value)) => {
                let key = key.trim();
                let value = value.trim();
                if key.is_empty() || value.is_empty() {
                    warn!(pair, "skipping property pair with empty key or value");
                    continue;
                }
                properties.insert(key.to_string(), value.to_string());
            }
            None => {
                warn!(pair, "skipping property pair without a colon");
            }
        }
    }

    properties
}

/// Format a properties map back into the store's `key:value,key:value` form
///
/// `BTreeMap` iteration order makes the output deterministic.
pub fn format_properties(properties: &BTreeMap<String, String>) -> String {
    properties
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let props = parse_properties("section:vendors,priority:high");
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("section").map(String::as_str), Some("vendors"));
        assert_eq!(props.get("priority").map(String::as_str), Some("high"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let props = parse_properties(" section : vendors , priority : high ");
        assert_eq!(props.get("section").map(String::as_str), Some("vendors"));
        assert_eq!(props.get("priority").map(String::as_str), Some("high"));
    }

    #[test]
    fn test_parse_skips_malformed_pairs() {
        let props = parse_properties("nocolon,section:vendors,:novalue,nokey:");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("section").map(String::as_str), Some("vendors"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_properties("").is_empty());
        assert!(parse_properties(" , ,").is_empty());
    }

    #[test]
    fn test_format_deterministic() {
        let mut props = BTreeMap::new();
        props.insert("priority".to_string(), "high".to_string());
        props.insert("section".to_string(), "vendors".to_string());
        assert_eq!(format_properties(&props), "priority:high,section:vendors");
    }

    #[test]
    fn test_round_trip_well_formed() {
        let raw = "priority:high,section:vendors";
        assert_eq!(format_properties(&parse_properties(raw)), raw);
    }
}
