//! Owned block tree for tests.
//!
//! [`FixtureBlock`] implements [`Block`] over a plain owned tree so the
//! model builder and validation engine can be exercised without running
//! the markdown adapter. Construction is builder-style:
//!
//! ```
//! use walklint_ast::fixture::FixtureBlock;
//!
//! let doc = FixtureBlock::document("Install the tool")
//!     .with_child(
//!         FixtureBlock::preamble().with_child(FixtureBlock::paragraph("<p>intro</p>")),
//!     )
//!     .with_child(
//!         FixtureBlock::section(1, "First task")
//!             .with_attribute("time", "10")
//!             .with_child(FixtureBlock::section(2, "Step one")),
//!     );
//! ```

use std::collections::HashMap;

use crate::{Block, BlockContext};

/// An owned document block used as a lightweight stand-in for a parsed
/// tree.
#[derive(Debug, Clone)]
pub struct FixtureBlock {
    context: BlockContext,
    level: u8,
    title: String,
    attributes: HashMap<String, String>,
    html: String,
    children: Vec<FixtureBlock>,
}

impl FixtureBlock {
    fn new(context: BlockContext, level: u8, title: impl Into<String>) -> Self {
        Self {
            context,
            level,
            title: title.into(),
            attributes: HashMap::new(),
            html: String::new(),
            children: Vec::new(),
        }
    }

    /// A document root carrying the document title.
    pub fn document(title: impl Into<String>) -> Self {
        Self::new(BlockContext::Document, 0, title)
    }

    /// A preamble container (content before the first task section).
    pub fn preamble() -> Self {
        Self::new(BlockContext::Preamble, 0, "")
    }

    /// A titled section at the given nesting level.
    pub fn section(level: u8, title: impl Into<String>) -> Self {
        Self::new(BlockContext::Section, level, title)
    }

    /// A leaf paragraph with pre-rendered content.
    pub fn paragraph(html: impl Into<String>) -> Self {
        let mut block = Self::new(BlockContext::Paragraph, 0, "");
        block.html = html.into();
        block
    }

    /// Sets an attribute on the block.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the block's own rendered content (excluding children).
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    /// Appends a child block.
    pub fn with_child(mut self, child: FixtureBlock) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child blocks.
    pub fn with_children(mut self, children: impl IntoIterator<Item = FixtureBlock>) -> Self {
        self.children.extend(children);
        self
    }
}

impl Block for FixtureBlock {
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
