//! Error type for model path parsing.

use std::fmt;

/// A model reference that could not be parsed.
///
/// Every violation (bad scheme, excess segments, empty segments, illegal
/// characters, oversized components, misplaced `:` or `+`) is reported the
/// same way; the parser does not say which rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
}

impl ParseError {
    /// Creates an error for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed model reference '{}'; expected [[domain/]namespace/]name[:tag][+build]",
            self.input.escape_debug()
        )
    }
}

impl std::error::Error for ParseError {}
