//! Markdown to walkthrough tree adapter, using markdown-rs
//! (wooorm/markdown-rs).
//!
//! mdast output is a flat sequence of blocks; walkthrough structure is
//! nested sections. The adapter sectionizes with a heading stack: a
//! heading of depth `d` opens a section at level `d - 1`, closing every
//! open section at the same or a deeper level first. Content before the
//! first task-level section is gathered into a preamble block, including
//! any step-level sections found there (the position walkthrough
//! resources are defined in).

use markdown::mdast::Node;
use markdown::{ParseOptions, to_html, to_mdast};
use walklint_ast::{Block, BlockContext, Message};

use crate::attrs::{parse_attribute_list, split_attribute_suffix};
use crate::{DocBlock, ParseError};

/// Result of parsing one walkthrough document.
#[derive(Debug)]
pub struct ParsedDocument {
    /// The document root. Its title is the document title and its
    /// children are the preamble (when present) followed by the
    /// top-level sections in document order.
    pub document: DocBlock,
    /// Parser diagnostics, reported before any model validation
    /// messages.
    pub messages: Vec<Message>,
}

/// Parses raw markdown into a walkthrough block tree.
pub fn parse(source: &str) -> Result<ParsedDocument, ParseError> {
    let tree = to_mdast(source, &ParseOptions::default())
        .map_err(|e| ParseError::invalid_source(e.to_string()))?;

    let Node::Root(root) = tree else {
        return Err(ParseError::internal(
            "markdown parser did not return a root node",
        ));
    };

    let mut builder = TreeBuilder::new(source);
    for node in &root.children {
        builder.handle_node(node);
    }
    let (document, messages) = builder.finish();

    Ok(ParsedDocument { document, messages })
}

/// Attributes waiting for the block that follows their annotation
/// paragraph.
struct PendingAttrs {
    attributes: Vec<(String, String)>,
    line: usize,
}

struct TreeBuilder<'a> {
    source: &'a str,
    title: Option<String>,
    preamble: Option<DocBlock>,
    sections: Vec<DocBlock>,
    stack: Vec<DocBlock>,
    /// True until the first task-level (or shallower) section opens.
    preamble_open: bool,
    pending: Option<PendingAttrs>,
    messages: Vec<Message>,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            title: None,
            preamble: None,
            sections: Vec::new(),
            stack: Vec::new(),
            preamble_open: true,
            pending: None,
            messages: Vec::new(),
        }
    }

    fn handle_node(&mut self, node: &Node) {
        if let Node::Heading(heading) = node {
            self.handle_heading(heading);
            return;
        }

        if let Some(attributes) = annotation_attributes(node) {
            if let Some(unused) = self.pending.take() {
                self.warn_unused_annotation(unused.line);
            }
            self.pending = Some(PendingAttrs {
                attributes,
                line: node_line(node),
            });
            return;
        }

        let mut leaf = DocBlock::leaf(leaf_context(node), self.render_source(node));
        if let Some(pending) = self.pending.take() {
            leaf.set_attributes(pending.attributes);
        }
        self.attach(leaf);
    }

    fn handle_heading(&mut self, heading: &markdown::mdast::Heading) {
        let line = heading
            .position
            .as_ref()
            .map(|p| p.start.line)
            .unwrap_or(0);
        let raw_title = collect_inline_text(&heading.children);
        let (title, heading_attrs) = split_attribute_suffix(&raw_title);

        let level = if heading.depth == 1 {
            if self.title.is_none() && self.document_is_empty() {
                self.title = Some(title);
                return;
            }
            self.messages.push(Message::warn(
                "Unexpected top-level heading",
                format!("line {line}"),
            ));
            0
        } else {
            heading.depth - 1
        };

        while self.stack.last().is_some_and(|s| s.level() >= level) {
            self.close_top();
        }

        let innermost = self.stack.last().map(|s| s.level()).unwrap_or(0);
        if level <= 1 {
            self.preamble_open = false;
        } else if !self.preamble_open && level > innermost + 1 {
            self.messages.push(Message::warn(
                "Section level skipped",
                format!("line {line}"),
            ));
        }

        let mut section = DocBlock::new(BlockContext::Section, level, title);
        let depth = heading.depth;
        section.set_html(format!(
            "<h{depth}>{}</h{depth}>",
            escape_html(section.title())
        ));
        if let Some(pending) = self.pending.take() {
            section.set_attributes(pending.attributes);
        }
        section.set_attributes(heading_attrs);
        self.stack.push(section);
    }

    /// Closes the innermost open section and attaches it to its parent:
    /// the enclosing section, the preamble while no task-level section
    /// has opened yet, or the root otherwise.
    fn close_top(&mut self) {
        let Some(section) = self.stack.pop() else {
            return;
        };
        if let Some(parent) = self.stack.last_mut() {
            parent.push_child(section);
        } else if self.preamble_open {
            self.preamble_mut().push_child(section);
        } else {
            self.sections.push(section);
        }
    }

    fn attach(&mut self, block: DocBlock) {
        if let Some(top) = self.stack.last_mut() {
            top.push_child(block);
        } else if self.preamble_open {
            self.preamble_mut().push_child(block);
        } else {
            self.sections.push(block);
        }
    }

    fn preamble_mut(&mut self) -> &mut DocBlock {
        self.preamble
            .get_or_insert_with(|| DocBlock::new(BlockContext::Preamble, 0, String::new()))
    }

    fn document_is_empty(&self) -> bool {
        self.preamble.is_none() && self.sections.is_empty() && self.stack.is_empty()
    }

    fn render_source(&self, node: &Node) -> String {
        match node.position() {
            Some(pos) => to_html(&self.source[pos.start.offset..pos.end.offset]),
            None => String::new(),
        }
    }

    fn warn_unused_annotation(&mut self, line: usize) {
        self.messages.push(Message::warn(
            "Unused attribute annotation",
            format!("line {line}"),
        ));
    }

    fn finish(mut self) -> (DocBlock, Vec<Message>) {
        if let Some(unused) = self.pending.take() {
            self.warn_unused_annotation(unused.line);
        }
        while !self.stack.is_empty() {
            self.close_top();
        }

        let title = self.title.unwrap_or_default();
        let mut document = DocBlock::new(BlockContext::Document, 0, title);
        if let Some(preamble) = self.preamble {
            document.push_child(preamble);
        }
        for section in self.sections {
            document.push_child(section);
        }
        (document, self.messages)
    }
}

/// Returns the attribute list when the node is an annotation paragraph,
/// a paragraph whose sole content is `{key=value ...}`.
fn annotation_attributes(node: &Node) -> Option<Vec<(String, String)>> {
    let Node::Paragraph(paragraph) = node else {
        return None;
    };
    let [Node::Text(text)] = paragraph.children.as_slice() else {
        return None;
    };
    parse_attribute_list(text.value.trim())
}

fn leaf_context(node: &Node) -> BlockContext {
    match node {
        Node::Paragraph(_) => BlockContext::Paragraph,
        Node::Code(_) => BlockContext::Listing,
        Node::List(_) => BlockContext::List,
        Node::Blockquote(_) => BlockContext::Quote,
        Node::Html(_) => BlockContext::Html,
        Node::ThematicBreak(_) => BlockContext::Break,
        _ => BlockContext::Paragraph,
    }
}

fn node_line(node: &Node) -> usize {
    node.position().map(|p| p.start.line).unwrap_or(0)
}

/// Collects the plain text of inline content, for heading titles.
fn collect_inline_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    push_inline_text(nodes, &mut out);
    out
}

fn push_inline_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(&text.value),
            Node::InlineCode(code) => out.push_str(&code.value),
            other => {
                if let Some(children) = other.children() {
                    push_inline_text(children, out);
                }
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
