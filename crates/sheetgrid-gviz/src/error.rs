//! Gviz parse error types

use thiserror::Error;

/// Result type for gviz parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while decoding a gviz query response
///
/// All variants carry a truncated fragment of the offending payload so that
/// a schema mismatch (wrong tab name, renamed sheet) can be told apart from
/// connectivity problems in logs.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No JSON body could be located inside the provider wrapper
    #[error("gviz wrapper not found, no JSON body delimiters in payload: {fragment}")]
    MissingWrapper {
        /// Truncated offending payload
        fragment: String,
    },

    /// The unwrapped body is not valid JSON
    #[error("gviz body is not valid JSON: {source}; payload: {fragment}")]
    InvalidJson {
        /// Truncated offending payload
        fragment: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The body is JSON but not the expected table/rows/cells shape
    #[error("gviz response missing expected table shape: {source}; payload: {fragment}")]
    UnexpectedShape {
        /// Truncated offending payload
        fragment: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

/// Truncate a payload for inclusion in an error
pub(crate) fn fragment(payload: &str) -> String {
    const MAX: usize = 120;
    if payload.len() <= MAX {
        return payload.to_string();
    }
    let mut end = MAX;
    while !payload.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &payload[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_truncates() {
        let long = "x".repeat(500);
        let frag = fragment(&long);
        assert_eq!(frag.len(), 123);
        assert!(frag.ends_with("..."));
    }

    #[test]
    fn test_fragment_keeps_short_payloads() {
        assert_eq!(fragment("short"), "short");
    }

    #[test]
    fn test_fragment_respects_char_boundaries() {
        let s = "é".repeat(100);
        let frag = fragment(&s);
        assert!(frag.ends_with("..."));
    }
}
