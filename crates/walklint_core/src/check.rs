//! The validation entry point: parse, build, verify, report.

use serde::Serialize;
use tracing::debug;
use walklint_ast::{Message, Severity};
use walklint_parser::ParsedDocument;

use crate::{CheckError, Walkthrough};

/// Options for [`check`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Treat warnings as errors.
    pub pedantic_warnings: bool,
}

/// Outcome of checking one document.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// False if any ERROR was found, or any WARN in pedantic mode.
    /// OPTIONAL findings never affect success.
    pub success: bool,
    /// Parser diagnostics first, model validation messages second, each
    /// list in its own emission order.
    pub messages: Vec<Message>,
}

/// Parses raw markdown and builds the walkthrough model, without
/// validating it.
pub fn build(source: &str) -> Result<Walkthrough, CheckError> {
    let ParsedDocument { mut document, .. } = walklint_parser::parse(source)?;
    Ok(Walkthrough::from_document(&mut document)?)
}

/// Checks that raw markdown parses into a valid walkthrough.
///
/// Construction aborts only when the document has no content at all;
/// every other finding lands in the report's message list and the
/// success flag reflects the severity policy.
pub fn check(source: &str, options: &CheckOptions) -> Result<CheckReport, CheckError> {
    let ParsedDocument {
        mut document,
        mut messages,
    } = walklint_parser::parse(source)?;

    let walkthrough = Walkthrough::from_document(&mut document)?;
    walkthrough.verify(&mut messages);

    let success = is_success(&messages, options);
    debug!(
        success,
        findings = messages.len(),
        pedantic = options.pedantic_warnings,
        "check finished"
    );

    Ok(CheckReport { success, messages })
}

fn is_success(messages: &[Message], options: &CheckOptions) -> bool {
    messages.iter().all(|message| match message.severity {
        Severity::Error => false,
        Severity::Warn => !options.pedantic_warnings,
        Severity::Optional => true,
    })
}
