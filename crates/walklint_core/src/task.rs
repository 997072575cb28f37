//! Task entity: a major timed unit of the walkthrough.

use serde::Serialize;
use walklint_ast::{Block, BlockContext, Message};

use crate::resource::collect_task_resources;
use crate::{ATTR_TIME, LEVEL_TASK, Paragraph, Procedure, TaskResource};

/// One ordered entry in a task's procedure list. Resources never appear
/// here; they are harvested separately.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TaskBlock {
    Procedure(Procedure),
    Paragraph(Paragraph),
}

impl TaskBlock {
    fn verify(&self, messages: &mut Vec<Message>) {
        match self {
            TaskBlock::Procedure(procedure) => procedure.verify(messages),
            TaskBlock::Paragraph(paragraph) => paragraph.verify(messages),
        }
    }
}

/// A task-level section with a time budget, procedures, and harvested
/// resources.
///
/// `html` is the whole-task render taken before anything is classified,
/// so embedded task-resource markup stays in it: the task harvest is
/// read-only, unlike the walkthrough-resource strip at preamble level.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    title: String,
    time: u32,
    html: String,
    procedures: Vec<TaskBlock>,
    resources: Vec<TaskResource>,
}

impl Task {
    /// Tasks are sections at the outermost section level.
    pub fn matches<B: Block>(block: &B) -> bool {
        block.context() == BlockContext::Section && block.level() == LEVEL_TASK
    }

    pub fn from_block<B: Block>(block: &B) -> Self {
        let time = block
            .attribute(ATTR_TIME)
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(0);

        let mut resources = Vec::new();
        collect_task_resources(block, &mut resources);

        let procedures = block
            .children()
            .iter()
            .filter_map(|child| {
                if Procedure::matches(child) {
                    Some(TaskBlock::Procedure(Procedure::from_block(child)))
                } else if Paragraph::matches(child) {
                    Some(TaskBlock::Paragraph(Paragraph::from_block(child)))
                } else {
                    None
                }
            })
            .collect();

        Self {
            title: block.title().to_string(),
            time,
            html: block.render(),
            procedures,
            resources,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Time budget in minutes, 0 when the attribute is absent or does
    /// not parse.
    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn procedures(&self) -> &[TaskBlock] {
        &self.procedures
    }

    pub fn resources(&self) -> &[TaskResource] {
        &self.resources
    }

    pub fn verify(&self, messages: &mut Vec<Message>) {
        if self.title.is_empty() {
            messages.push(Message::error("Title missing", "<task>"));
        }
        if self.time == 0 {
            messages.push(Message::error("No time defined", self.title.as_str()));
        }
        if self.procedures.is_empty() {
            messages.push(Message::error("No procedures defined", self.title.as_str()));
        }
        if self.resources.is_empty() {
            messages.push(Message::optional("No task resources defined", self.title.as_str()));
        }

        for procedure in &self.procedures {
            procedure.verify(messages);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use walklint_ast::Severity;
    use walklint_ast::fixture::FixtureBlock;

    use super::*;

    fn task_resource(title: &str, html: &str) -> FixtureBlock {
        FixtureBlock::section(2, title)
            .with_attribute("type", "taskResource")
            .with_child(FixtureBlock::paragraph(html))
    }

    #[test]
    fn matches_task_level_sections_only() {
        assert!(Task::matches(&FixtureBlock::section(1, "Task")));
        assert!(!Task::matches(&FixtureBlock::section(2, "Step")));
        assert!(!Task::matches(&FixtureBlock::preamble()));
    }

    #[rstest]
    #[case(Some("15"), 15)]
    #[case(Some("0"), 0)]
    #[case(Some("15min"), 0)]
    #[case(Some("-5"), 0)]
    #[case(Some(""), 0)]
    #[case(None, 0)]
    fn time_parses_with_zero_fallback(#[case] attr: Option<&str>, #[case] expected: u32) {
        let mut block = FixtureBlock::section(1, "Task");
        if let Some(value) = attr {
            block = block.with_attribute("time", value);
        }
        assert_eq!(Task::from_block(&block).time(), expected);
    }

    #[test]
    fn children_classify_into_procedures_and_paragraphs() {
        let block = FixtureBlock::section(1, "Task")
            .with_child(FixtureBlock::paragraph("<p>lead-in</p>"))
            .with_child(FixtureBlock::section(2, "Step one"))
            .with_child(FixtureBlock::section(2, "Step two"));

        let task = Task::from_block(&block);

        assert_eq!(task.procedures().len(), 3);
        assert!(matches!(task.procedures()[0], TaskBlock::Paragraph(_)));
        assert!(matches!(task.procedures()[1], TaskBlock::Procedure(_)));
        assert!(matches!(task.procedures()[2], TaskBlock::Procedure(_)));
    }

    #[test]
    fn verification_shaped_children_are_dropped() {
        let block = FixtureBlock::section(1, "Task").with_child(
            FixtureBlock::paragraph("<p>stray</p>").with_attribute("type", "verification"),
        );

        let task = Task::from_block(&block);
        assert!(task.procedures().is_empty());
    }

    #[test]
    fn resources_are_harvested_from_nested_levels() {
        let block = FixtureBlock::section(1, "Task")
            .with_html("<h2>Task</h2>")
            .with_child(
                FixtureBlock::section(2, "Step")
                    .with_child(FixtureBlock::section(3, "Sub").with_child(task_resource(
                        "Nested resource",
                        "<p>r</p>",
                    ))),
            );

        let task = Task::from_block(&block);

        assert_eq!(task.resources().len(), 1);
        assert_eq!(task.resources()[0].title(), "Nested resource");
        // Harvest is read-only: the whole-task render keeps the markup.
        assert!(task.html().contains("<p>r</p>"));
    }

    #[test]
    fn empty_task_reports_all_findings_in_order() {
        let task = Task::from_block(&FixtureBlock::section(1, "Lonely"));
        let mut messages = Vec::new();
        task.verify(&mut messages);

        let rendered: Vec<String> = messages.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "ERROR No time defined at Lonely",
                "ERROR No procedures defined at Lonely",
                "OPTIONAL No task resources defined at Lonely",
            ]
        );
    }

    #[test]
    fn untitled_task_uses_placeholder_location() {
        let task = Task::from_block(&FixtureBlock::section(1, ""));
        let mut messages = Vec::new();
        task.verify(&mut messages);

        assert_eq!(messages[0].to_string(), "ERROR Title missing at <task>");
        // The remaining findings keep the raw (empty) title as location.
        assert_eq!(messages[1].to_string(), "ERROR No time defined at ");
    }

    #[test]
    fn verify_recurses_into_procedures() {
        let block = FixtureBlock::section(1, "Task")
            .with_attribute("time", "5")
            .with_child(FixtureBlock::section(2, ""))
            .with_child(task_resource("R", "<p>r</p>"));

        let task = Task::from_block(&block);
        let mut messages = Vec::new();
        task.verify(&mut messages);

        assert!(
            messages
                .iter()
                .any(|m| m.severity == Severity::Error && m.text == "Title missing")
        );
    }
}
