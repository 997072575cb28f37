//! Resource entities and the two harvesters.
//!
//! Task resources are collected by a read-only recursive scan over the
//! whole task subtree; walkthrough resources are collected by a shallow
//! harvest-and-strip over the preamble's direct children. The strip side
//! effect is policy (the preamble is rendered without resource markup),
//! so the two harvesters stay separate functions.

use serde::Serialize;
use walklint_ast::{Block, BlockContext};

use crate::{ATTR_SERVICE_NAME, ATTR_TYPE, LEVEL_STEP, TYPE_TASK_RESOURCE, TYPE_WALKTHROUGH_RESOURCE};

/// Supplementary reference material attached at task scope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResource {
    html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_name: Option<String>,
    title: String,
}

impl TaskResource {
    /// Task resources are step-level sections tagged `taskResource`.
    pub fn matches<B: Block>(block: &B) -> bool {
        block.context() == BlockContext::Section
            && block.level() == LEVEL_STEP
            && block.attribute(ATTR_TYPE) == Some(TYPE_TASK_RESOURCE)
    }

    pub fn from_block<B: Block>(block: &B) -> Self {
        Self {
            html: first_child_html(block),
            service_name: block.attribute(ATTR_SERVICE_NAME).map(str::to_string),
            title: block.title().to_string(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Supplementary reference material attached at walkthrough scope,
/// defined only at preamble level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkthroughResource {
    html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_name: Option<String>,
    title: String,
}

impl WalkthroughResource {
    pub fn matches<B: Block>(block: &B) -> bool {
        block.context() == BlockContext::Section
            && block.level() == LEVEL_STEP
            && block.attribute(ATTR_TYPE) == Some(TYPE_WALKTHROUGH_RESOURCE)
    }

    pub fn from_block<B: Block>(block: &B) -> Self {
        Self {
            html: first_child_html(block),
            service_name: block.attribute(ATTR_SERVICE_NAME).map(str::to_string),
            title: block.title().to_string(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Resource content is the render of the block's first child only.
fn first_child_html<B: Block>(block: &B) -> String {
    block
        .children()
        .first()
        .map(Block::render)
        .unwrap_or_default()
}

/// Recursively collects every task-resource block in the subtree,
/// read-only and regardless of depth. A matched block's own subtree is
/// not searched further.
pub(crate) fn collect_task_resources<B: Block>(block: &B, collected: &mut Vec<TaskResource>) {
    for child in block.children() {
        if TaskResource::matches(child) {
            collected.push(TaskResource::from_block(child));
        } else if child.has_children() {
            collect_task_resources(child, collected);
        }
    }
}

/// Collects walkthrough-resource blocks among the preamble's direct
/// children and strips them from the child list, so a later render of
/// the preamble no longer contains their markup. Shallow by design.
pub(crate) fn collect_walkthrough_resources<B: Block>(preamble: &mut B) -> Vec<WalkthroughResource> {
    let mut resources = Vec::new();
    let children = preamble.children_mut();
    let mut kept = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        if WalkthroughResource::matches(&child) {
            resources.push(WalkthroughResource::from_block(&child));
        } else {
            kept.push(child);
        }
    }
    *children = kept;
    resources
}
