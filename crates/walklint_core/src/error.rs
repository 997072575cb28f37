//! Model builder error types.

use thiserror::Error;

use walklint_parser::ParseError;

/// Fatal structural errors raised during model construction.
///
/// Everything recoverable (missing titles, zero time, empty lists) is
/// reported through the message sink instead; this enum covers the one
/// condition under which no model exists to validate.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The document has no top-level blocks at all.
    #[error("Invalid walkthrough {title:?}: document has no content")]
    EmptyDocument {
        /// The document title, possibly empty.
        title: String,
    },
}

/// Errors returned by the [`check`](crate::check) entry point.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The source could not be parsed at all.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed document could not be built into a walkthrough.
    #[error(transparent)]
    Build(#[from] BuildError),
}
