//! Error types for mockup link extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding a percent-encoded field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` escape ran past the end of the input.
    #[error("incomplete trailing escape (%) pattern at offset {offset}")]
    IncompleteEscape { offset: usize },

    /// A `%` escape was followed by something other than two hex digits.
    #[error("illegal hex characters in escape (%) pattern at offset {offset}")]
    IllegalHex { offset: usize },
}

/// Errors that abort extraction of a single mockup file.
///
/// None of these stop a run; the analyzer reports them and moves on to the
/// next input.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed mockup document: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document parsed but an element had an unexpected shape.
    #[error("unexpected element <{found}> inside <{parent}>")]
    Structure { parent: String, found: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
