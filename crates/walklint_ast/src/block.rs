//! The block capability trait consumed by the model builder.

use serde::Serialize;

/// Structural context of a block within the document tree.
///
/// The model classifiers only ever distinguish [`BlockContext::Section`]
/// from everything else; the remaining variants exist so adapters can
/// tag blocks faithfully and diagnostics can name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockContext {
    /// The document root.
    Document,
    /// The synthesized block holding content before the first section.
    Preamble,
    /// A titled section opened by a heading.
    Section,
    /// A plain paragraph.
    Paragraph,
    /// A code listing.
    Listing,
    /// A bullet or numbered list.
    List,
    /// A block quote.
    Quote,
    /// Raw HTML passed through by the parser.
    Html,
    /// A thematic break.
    Break,
}

/// Capability trait over a parsed document node.
///
/// The walkthrough builder consumes the document tree purely through this
/// trait, so any parser can feed it as long as an adapter exposes these
/// accessors. Two implementations exist in this workspace: the markdown
/// adapter in `walklint_parser` and [`crate::fixture::FixtureBlock`] for
/// tests.
///
/// # Render contract
///
/// `render()` is an opaque operation scoped to the block's subtree. It
/// must reflect the *current* child list: when the walkthrough-resource
/// harvest removes children from the preamble, a subsequent render of the
/// preamble must not contain their markup.
pub trait Block: Sized {
    /// Structural context of this block.
    fn context(&self) -> BlockContext;

    /// Section nesting level. Task sections sit at level 1, step
    /// sections at level 2. Non-section blocks report 0.
    fn level(&self) -> u8;

    /// The block title, or the document title on the root. Empty when
    /// the block carries no title.
    fn title(&self) -> &str;

    /// Looks up a block attribute by name.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Ordered child blocks.
    fn children(&self) -> &[Self];

    /// Mutable access to the child list.
    ///
    /// Only the walkthrough-resource harvest uses this, to strip matched
    /// resource blocks out of the preamble before it is rendered.
    fn children_mut(&mut self) -> &mut Vec<Self>;

    /// Renders this block's subtree to output markup.
    fn render(&self) -> String;

    /// Returns true if this block has children.
    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}
