//! Owned block tree produced by the markdown adapter.

use std::collections::HashMap;

use walklint_ast::{Block, BlockContext};

/// A document block backed by the markdown adapter.
///
/// Leaf blocks carry their own pre-rendered HTML; container blocks
/// (document, preamble, sections) render as their own markup followed by
/// their current children, so removing a child also removes its markup
/// from any later render.
#[derive(Debug, Clone)]
pub struct DocBlock {
    context: BlockContext,
    level: u8,
    title: String,
    attributes: HashMap<String, String>,
    html: String,
    children: Vec<DocBlock>,
}

impl DocBlock {
    pub(crate) fn new(context: BlockContext, level: u8, title: String) -> Self {
        Self {
            context,
            level,
            title,
            attributes: HashMap::new(),
            html: String::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn leaf(context: BlockContext, html: String) -> Self {
        let mut block = Self::new(context, 0, String::new());
        block.html = html;
        block
    }

    pub(crate) fn set_html(&mut self, html: String) {
        self.html = html;
    }

    pub(crate) fn set_attributes(&mut self, attributes: impl IntoIterator<Item = (String, String)>) {
        self.attributes.extend(attributes);
    }

    pub(crate) fn push_child(&mut self, child: DocBlock) {
        self.children.push(child);
    }
}

impl Block for DocBlock {
    fn context(&self) -> BlockContext {
        self.context
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    fn render(&self) -> String {
        let mut parts = Vec::new();
        if !self.html.is_empty() {
            parts.push(self.html.clone());
        }
        for child in &self.children {
            let rendered = child.render();
            if !rendered.is_empty() {
                parts.push(rendered);
            }
        }
        parts.join("\n")
    }
}
