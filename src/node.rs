//! Owned CommonMark document tree.
//!
//! The renderer only reads this tree. Nodes own their children, so a
//! `Node::document` value is a complete, self-contained document.

/// Whether a list is bulleted or ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

/// The closed set of node kinds together with their payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    BlockQuote,
    /// `start` is only meaningful for ordered lists.
    List { kind: ListKind, start: u64 },
    Item,
    /// ATX heading level, `1..=6`.
    Heading { level: u8 },
    /// `info` is `None` for indented code and fences without an info string.
    CodeBlock { info: Option<String>, literal: String },
    HtmlBlock { literal: String },
    ThematicBreak,
    Paragraph,
    Text(String),
    LineBreak,
    SoftBreak,
    Code(String),
    InlineHtml(String),
    Strong,
    Emph,
    Link { url: String },
    Image { url: String },
}

impl NodeKind {
    /// Container kinds produce paired enter/exit events; leaves produce one.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::BlockQuote
                | Self::List { .. }
                | Self::Item
                | Self::Heading { .. }
                | Self::Paragraph
                | Self::Strong
                | Self::Emph
                | Self::Link { .. }
                | Self::Image { .. }
        )
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self { Self { kind, children } }

    #[must_use]
    pub fn kind(&self) -> &NodeKind { &self.kind }

    #[must_use]
    pub fn children(&self) -> &[Node] { &self.children }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind { &mut self.kind }

    pub(crate) fn last_child_mut(&mut self) -> Option<&mut Node> { self.children.last_mut() }

    pub(crate) fn into_children(self) -> Vec<Node> { self.children }

    /// Append `child` as the last child of this node.
    pub fn push(&mut self, child: Node) { self.children.push(child); }

    #[must_use]
    pub fn document(children: Vec<Node>) -> Self { Self::with_children(NodeKind::Document, children) }

    #[must_use]
    pub fn block_quote(children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::BlockQuote, children)
    }

    #[must_use]
    pub fn bullet_list(items: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::List {
                kind: ListKind::Bullet,
                start: 1,
            },
            items,
        )
    }

    #[must_use]
    pub fn ordered_list(start: u64, items: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::List {
                kind: ListKind::Ordered,
                start,
            },
            items,
        )
    }

    #[must_use]
    pub fn item(children: Vec<Node>) -> Self { Self::with_children(NodeKind::Item, children) }

    #[must_use]
    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Heading { level }, children)
    }

    #[must_use]
    pub fn code_block(info: Option<&str>, literal: impl Into<String>) -> Self {
        Self::new(NodeKind::CodeBlock {
            info: info.map(str::to_string),
            literal: literal.into(),
        })
    }

    #[must_use]
    pub fn html_block(literal: impl Into<String>) -> Self {
        Self::new(NodeKind::HtmlBlock {
            literal: literal.into(),
        })
    }

    #[must_use]
    pub fn thematic_break() -> Self { Self::new(NodeKind::ThematicBreak) }

    #[must_use]
    pub fn paragraph(children: Vec<Node>) -> Self { Self::with_children(NodeKind::Paragraph, children) }

    #[must_use]
    pub fn text(literal: impl Into<String>) -> Self { Self::new(NodeKind::Text(literal.into())) }

    #[must_use]
    pub fn line_break() -> Self { Self::new(NodeKind::LineBreak) }

    #[must_use]
    pub fn soft_break() -> Self { Self::new(NodeKind::SoftBreak) }

    #[must_use]
    pub fn code(literal: impl Into<String>) -> Self { Self::new(NodeKind::Code(literal.into())) }

    #[must_use]
    pub fn inline_html(literal: impl Into<String>) -> Self {
        Self::new(NodeKind::InlineHtml(literal.into()))
    }

    #[must_use]
    pub fn strong(children: Vec<Node>) -> Self { Self::with_children(NodeKind::Strong, children) }

    #[must_use]
    pub fn emph(children: Vec<Node>) -> Self { Self::with_children(NodeKind::Emph, children) }

    #[must_use]
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Link { url: url.into() }, children)
    }

    #[must_use]
    pub fn image(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Image { url: url.into() }, children)
    }
}
