use std::num::ParseIntError;
use thiserror::Error;

/// Error returned when text cannot be read as a page ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid page id `{input}`: {source}")]
pub struct ParsePageIdError {
    /// The rejected input, untrimmed.
    pub input: String,
    /// The underlying integer parse failure
    pub source: ParseIntError,
}
