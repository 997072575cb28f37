//! Procedure entity: a titled step within a task.

use serde::Serialize;
use walklint_ast::{Block, BlockContext, Message};

use crate::{LEVEL_STEP, Paragraph, Verification};

/// One ordered entry in a procedure's block list.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProcedureBlock {
    Paragraph(Paragraph),
    Verification(Verification),
}

/// A titled step-level section composed of paragraphs and verification
/// checks.
#[derive(Debug, Clone, Serialize)]
pub struct Procedure {
    title: String,
    blocks: Vec<ProcedureBlock>,
}

impl Procedure {
    /// Procedures are sections at step level.
    pub fn matches<B: Block>(block: &B) -> bool {
        block.context() == BlockContext::Section && block.level() == LEVEL_STEP
    }

    /// Classifies the section's children in priority order: verification
    /// first (with its pairing window over the remaining siblings), then
    /// the paragraph fallback. Success and fail blocks are only ever
    /// attached through a verification's window; outside one they are
    /// dropped from the model.
    pub fn from_block<B: Block>(block: &B) -> Self {
        let children = block.children();
        let mut blocks = Vec::new();
        for (index, child) in children.iter().enumerate() {
            if Verification::matches(child) {
                let following = &children[index + 1..];
                blocks.push(ProcedureBlock::Verification(Verification::from_block(
                    child, following,
                )));
            } else if Paragraph::matches(child) {
                blocks.push(ProcedureBlock::Paragraph(Paragraph::from_block(child)));
            }
        }
        Self {
            title: block.title().to_string(),
            blocks,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[ProcedureBlock] {
        &self.blocks
    }

    pub fn verify(&self, messages: &mut Vec<Message>) {
        if self.title.is_empty() {
            messages.push(Message::error("Title missing", "<procedure>"));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use walklint_ast::fixture::FixtureBlock;

    use super::*;

    fn tagged(html: &str, shape: &str) -> FixtureBlock {
        FixtureBlock::paragraph(html).with_attribute("type", shape)
    }

    #[test]
    fn matches_step_level_sections_only() {
        assert!(Procedure::matches(&FixtureBlock::section(2, "Step")));
        assert!(!Procedure::matches(&FixtureBlock::section(1, "Task")));
        assert!(!Procedure::matches(&FixtureBlock::paragraph("<p>x</p>")));
    }

    #[test]
    fn classifies_paragraphs_and_verifications_in_order() {
        let step = FixtureBlock::section(2, "Step")
            .with_child(FixtureBlock::paragraph("<p>intro</p>"))
            .with_child(tagged("<p>check</p>", "verification"))
            .with_child(tagged("<p>yes</p>", "verificationSuccess"))
            .with_child(FixtureBlock::paragraph("<p>outro</p>"));

        let procedure = Procedure::from_block(&step);
        let blocks = procedure.blocks();

        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], ProcedureBlock::Paragraph(_)));
        match &blocks[1] {
            ProcedureBlock::Verification(v) => {
                assert!(v.has_success_block());
                assert!(!v.has_fail_block());
            }
            other => panic!("expected verification, got {other:?}"),
        }
        assert!(matches!(blocks[2], ProcedureBlock::Paragraph(_)));
    }

    #[test]
    fn unpaired_success_and_fail_blocks_are_dropped() {
        // No preceding open verification: intentional content loss,
        // preserved behavior.
        let step = FixtureBlock::section(2, "Step")
            .with_child(tagged("<p>orphan yes</p>", "verificationSuccess"))
            .with_child(tagged("<p>orphan no</p>", "verificationFail"))
            .with_child(FixtureBlock::paragraph("<p>body</p>"));

        let procedure = Procedure::from_block(&step);

        assert_eq!(procedure.blocks().len(), 1);
        assert!(matches!(procedure.blocks()[0], ProcedureBlock::Paragraph(_)));
    }

    #[test]
    fn second_verification_reopens_pairing() {
        let step = FixtureBlock::section(2, "Step")
            .with_child(tagged("<p>first</p>", "verification"))
            .with_child(tagged("<p>second</p>", "verification"))
            .with_child(tagged("<p>yes</p>", "verificationSuccess"));

        let procedure = Procedure::from_block(&step);
        let verifications: Vec<_> = procedure
            .blocks()
            .iter()
            .filter_map(|b| match b {
                ProcedureBlock::Verification(v) => Some(v),
                _ => None,
            })
            .collect();

        assert_eq!(verifications.len(), 2);
        assert!(!verifications[0].has_success_block());
        assert!(verifications[1].has_success_block());
    }

    #[test]
    fn missing_title_is_an_error() {
        let procedure = Procedure::from_block(&FixtureBlock::section(2, ""));
        let mut messages = Vec::new();
        procedure.verify(&mut messages);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].to_string(), "ERROR Title missing at <procedure>");
    }

    #[test]
    fn titled_procedure_is_silent() {
        let procedure = Procedure::from_block(&FixtureBlock::section(2, "Step"));
        let mut messages = Vec::new();
        procedure.verify(&mut messages);

        assert!(messages.is_empty());
    }
}
