//! # walklint_core
//!
//! Walkthrough model builder and validation engine.
//!
//! A walkthrough tutorial is an ordered sequence of timed tasks, each
//! made of procedures (paragraphs and verification checks) plus
//! auxiliary resources. This crate classifies the blocks of a parsed
//! document tree into those entities, pairs verification blocks with
//! their success/fail continuations, harvests resource blocks from the
//! tree, and validates the finished model into severity-tagged
//! messages.
//!
//! Construction is a single synchronous pass over the input tree; the
//! only mutation is the removal of walkthrough-resource blocks from the
//! preamble before it is rendered. Every completeness problem becomes a
//! [`Message`](walklint_ast::Message) rather than a failure — the one
//! fatal case is a document with no content at all
//! ([`BuildError::EmptyDocument`]).
//!
//! ## Example
//!
//! ```rust
//! use walklint_core::{CheckOptions, check};
//!
//! let source = "# Demo\n\nIntro.\n\n## Task {time=5}\n\n### Step\n\nDo it.\n";
//! let report = check(source, &CheckOptions::default()).unwrap();
//! for message in &report.messages {
//!     eprintln!("{message}");
//! }
//! ```

mod check;
mod error;
mod paragraph;
mod procedure;
mod resource;
mod task;
mod verification;
mod walkthrough;

pub use check::{CheckOptions, CheckReport, build, check};
pub use error::{BuildError, CheckError};
pub use paragraph::Paragraph;
pub use procedure::{Procedure, ProcedureBlock};
pub use resource::{TaskResource, WalkthroughResource};
pub use task::{Task, TaskBlock};
pub use verification::{Verification, VerificationFail, VerificationSuccess};
pub use walkthrough::Walkthrough;

pub use walklint_ast::{Message, Severity};

/// Block attribute carrying the shape tag.
pub(crate) const ATTR_TYPE: &str = "type";
/// Block attribute carrying a task's time budget in minutes.
pub(crate) const ATTR_TIME: &str = "time";
/// Block attribute naming the service a resource belongs to.
pub(crate) const ATTR_SERVICE_NAME: &str = "serviceName";

pub(crate) const TYPE_VERIFICATION: &str = "verification";
pub(crate) const TYPE_VERIFICATION_SUCCESS: &str = "verificationSuccess";
pub(crate) const TYPE_VERIFICATION_FAIL: &str = "verificationFail";
pub(crate) const TYPE_TASK_RESOURCE: &str = "taskResource";
pub(crate) const TYPE_WALKTHROUGH_RESOURCE: &str = "walkthroughResource";

/// Nesting level of task sections.
pub(crate) const LEVEL_TASK: u8 = 1;
/// Nesting level of step sections (procedures and resources).
pub(crate) const LEVEL_STEP: u8 = 2;
