//! # walklint_parser
//!
//! Markdown adapter for Walklint.
//!
//! The walkthrough model is built against the abstract
//! [`walklint_ast::Block`] capability; this crate provides the one real
//! implementation of it, on top of the `markdown` crate (mdast output).
//! The adapter turns flat CommonMark block sequences into the nested
//! section tree the model expects:
//!
//! - the first `#` heading becomes the document title
//! - `##` headings open task-level sections (level 1), `###` headings
//!   step-level sections (level 2), and so on
//! - content before the first `##` is gathered into a preamble block
//! - headings may carry a trailing `{key=value ...}` attribute list, and
//!   a paragraph consisting solely of such a list annotates the block
//!   that follows it
//!
//! Structural oddities (extra top-level titles, skipped heading levels,
//! unused annotations) are reported through the parser's own diagnostics
//! channel rather than failing the parse; callers concatenate these in
//! front of the model validation messages.

mod attrs;
mod document;
mod error;
mod markdown_adapter;

pub use document::DocBlock;
pub use error::ParseError;
pub use markdown_adapter::{ParsedDocument, parse};
