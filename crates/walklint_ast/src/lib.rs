//! # walklint_ast
//!
//! Block capability layer for Walklint.
//!
//! This crate defines the contract between the walkthrough model builder
//! and whatever parser produced the document tree:
//! - The [`Block`] trait: the minimal set of accessors the model needs
//!   from a document node (context, nesting level, attributes, title,
//!   children, and an opaque subtree render)
//! - [`Severity`] and [`Message`]: the validation finding types shared by
//!   the parser diagnostics channel and the model validation engine
//! - [`fixture`]: an owned in-memory tree implementing [`Block`], so the
//!   model can be exercised in tests without a real parser
//!
//! The model never reinterprets rendered output; whatever `render()`
//! returns is stored verbatim on the entities.

mod block;
mod message;

pub mod fixture;

pub use block::{Block, BlockContext};
pub use message::{Message, Severity};
