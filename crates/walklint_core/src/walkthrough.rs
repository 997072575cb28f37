//! The top-level walkthrough entity.

use serde::Serialize;
use tracing::debug;
use walklint_ast::{Block, Message};

use crate::resource::collect_walkthrough_resources;
use crate::{BuildError, Task, WalkthroughResource};

/// The whole tutorial document: title, preamble, total time, ordered
/// tasks, and walkthrough-scope resources.
///
/// `time` is the sum of the task times, computed once at construction
/// and never recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct Walkthrough {
    title: String,
    preamble: String,
    time: u32,
    tasks: Vec<Task>,
    resources: Vec<WalkthroughResource>,
}

impl Walkthrough {
    /// Builds the walkthrough from a document root.
    ///
    /// The first child is treated as the preamble: walkthrough resources
    /// are harvested from it and stripped out of its child list before
    /// it is rendered, which is the one mutation this pass performs.
    /// A document with no children at all is the fatal case; there is no
    /// partial model to validate.
    pub fn from_document<B: Block>(document: &mut B) -> Result<Self, BuildError> {
        let title = document.title().to_string();
        if document.children().is_empty() {
            return Err(BuildError::EmptyDocument { title });
        }

        let resources = collect_walkthrough_resources(&mut document.children_mut()[0]);
        let preamble = document.children()[0].render();

        let tasks: Vec<Task> = document
            .children()
            .iter()
            .filter(|block| Task::matches(*block))
            .map(Task::from_block)
            .collect();
        let time = tasks
            .iter()
            .map(Task::time)
            .fold(0u32, u32::saturating_add);

        debug!(
            title = %title,
            tasks = tasks.len(),
            resources = resources.len(),
            time,
            "walkthrough built"
        );

        Ok(Self {
            title,
            preamble,
            time,
            tasks,
            resources,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendered preamble, with resource markup already stripped.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Total time in minutes, the sum of the task times, saturating at
    /// `u32::MAX`.
    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn resources(&self) -> &[WalkthroughResource] {
        &self.resources
    }

    /// Appends completeness findings for the walkthrough and recurses
    /// into each task. Never fails and never stops early: the full
    /// message list is the contract.
    pub fn verify(&self, messages: &mut Vec<Message>) {
        if self.title.is_empty() {
            messages.push(Message::error("Title missing", "<walkthrough>"));
        }
        if self.preamble.is_empty() {
            messages.push(Message::error("Preamble missing", self.title.as_str()));
        }
        if self.time == 0 {
            messages.push(Message::error("No time defined", self.title.as_str()));
        }
        if self.tasks.is_empty() {
            messages.push(Message::error("No tasks defined", self.title.as_str()));
        }
        if self.resources.is_empty() {
            messages.push(Message::optional(
                "No walkthrough resources defined",
                self.title.as_str(),
            ));
        }

        for task in &self.tasks {
            task.verify(messages);
        }
    }
}
