//! Validation finding types.
//!
//! Both the parser diagnostics channel and the model validation engine
//! emit [`Message`]s into a shared, insertion-ordered sink
//! (`Vec<Message>`). The emission order is part of the reporting
//! contract: parser messages first, then model messages in
//! parent-before-children traversal order.

use std::fmt;

use serde::Serialize;

/// Severity of a validation finding.
///
/// `Error` always fails a check, `Warn` fails only in pedantic mode, and
/// `Optional` never affects the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warn,
    Optional,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Optional => "OPTIONAL",
        };
        f.write_str(label)
    }
}

/// A single severity-tagged validation finding.
///
/// `location` is the enclosing entity's title when one is available, or a
/// fixed placeholder such as `<walkthrough>` when no title exists at that
/// scope. For parser diagnostics it is a source position label like
/// `line 12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
    pub location: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(severity: Severity, text: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            location: location.into(),
        }
    }

    /// Creates an ERROR message.
    pub fn error(text: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(Severity::Error, text, location)
    }

    /// Creates a WARN message.
    pub fn warn(text: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(Severity::Warn, text, location)
    }

    /// Creates an OPTIONAL message.
    pub fn optional(text: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(Severity::Optional, text, location)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.severity, self.text, self.location)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(Severity::Optional.to_string(), "OPTIONAL");
    }

    #[test]
    fn message_report_format() {
        let message = Message::error("Title missing", "<walkthrough>");
        assert_eq!(message.to_string(), "ERROR Title missing at <walkthrough>");
    }

    #[test]
    fn message_constructors_tag_severity() {
        assert_eq!(Message::error("a", "b").severity, Severity::Error);
        assert_eq!(Message::warn("a", "b").severity, Severity::Warn);
        assert_eq!(Message::optional("a", "b").severity, Severity::Optional);
    }

    #[test]
    fn message_serializes_uppercase_severity() {
        let message = Message::warn("Empty paragraph", "<paragraph>");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["severity"], "WARN");
        assert_eq!(json["text"], "Empty paragraph");
        assert_eq!(json["location"], "<paragraph>");
    }
}
