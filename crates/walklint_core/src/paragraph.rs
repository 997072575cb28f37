//! The catch-all paragraph entity.

use serde::Serialize;
use walklint_ast::{Block, Message};

use crate::{Verification, VerificationFail, VerificationSuccess};

/// Any block that is not shape-tagged as a verification, success, or
/// fail block. This is the classification fallback and must be tried
/// last.
#[derive(Debug, Clone, Serialize)]
pub struct Paragraph {
    html: String,
}

impl Paragraph {
    /// True for every block the three verification shapes reject.
    pub fn matches<B: Block>(block: &B) -> bool {
        !Verification::matches(block)
            && !VerificationFail::matches(block)
            && !VerificationSuccess::matches(block)
    }

    pub fn from_block<B: Block>(block: &B) -> Self {
        Self {
            html: block.render(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Paragraphs carry no title, so the location is always the
    /// `<paragraph>` placeholder.
    pub fn verify(&self, messages: &mut Vec<Message>) {
        if self.html.is_empty() {
            messages.push(Message::warn("Empty paragraph", "<paragraph>"));
        }
    }
}
