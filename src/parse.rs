//! Build a [`Node`] tree from Markdown source using `pulldown-cmark`.
//!
//! Only CommonMark core syntax is enabled. The builder reshapes the event
//! stream into the tree the renderer expects:
//!
//! - inline content placed directly in a list item (tight lists) is wrapped
//!   in a paragraph;
//! - adjacent text events are merged into one `Text` node, so escaping sees
//!   the characters that follow across event boundaries;
//! - text inside code and HTML blocks becomes the block's literal.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use crate::node::{ListKind, Node, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// Opened by a `Start` event and closed by its `End`.
    Explicit,
    /// Paragraph synthesised around inline content of a list item.
    Implicit,
    /// Extension container with no counterpart; its children are hoisted.
    Transparent,
}

#[derive(Debug)]
struct Frame {
    node: Node,
    role: Role,
}

#[derive(Debug)]
struct TreeBuilder {
    root: Node,
    stack: Vec<Frame>,
}

fn is_block(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::CodeBlock(_)
            | Tag::HtmlBlock
            | Tag::List(_)
            | Tag::Item
    )
}

fn node_for(tag: Tag<'_>) -> Option<Node> {
    let kind = match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading { level: level as u8 },
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::CodeBlock {
            info: None,
            literal: String::new(),
        },
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => NodeKind::CodeBlock {
            info: (!info.is_empty()).then(|| info.to_string()),
            literal: String::new(),
        },
        Tag::HtmlBlock => NodeKind::HtmlBlock {
            literal: String::new(),
        },
        Tag::List(None) => NodeKind::List {
            kind: ListKind::Bullet,
            start: 1,
        },
        Tag::List(Some(start)) => NodeKind::List {
            kind: ListKind::Ordered,
            start,
        },
        Tag::Item => NodeKind::Item,
        Tag::Emphasis => NodeKind::Emph,
        Tag::Strong => NodeKind::Strong,
        Tag::Link { dest_url, .. } => NodeKind::Link {
            url: dest_url.to_string(),
        },
        Tag::Image { dest_url, .. } => NodeKind::Image {
            url: dest_url.to_string(),
        },
        _ => return None,
    };
    Some(Node::new(kind))
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            root: Node::document(Vec::new()),
            stack: Vec::new(),
        }
    }

    fn top_kind(&self) -> &NodeKind {
        self.stack
            .last()
            .map_or_else(|| self.root.kind(), |f| f.node.kind())
    }

    fn top_node(&mut self) -> &mut Node {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.node,
            None => &mut self.root,
        }
    }

    fn append(&mut self, child: Node) { self.top_node().push(child); }

    fn open(&mut self, node: Node, role: Role) { self.stack.push(Frame { node, role }); }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame.role {
            Role::Explicit | Role::Implicit => self.append(frame.node),
            Role::Transparent => {
                for child in frame.node.into_children() {
                    self.append(child);
                }
            }
        }
    }

    fn close_implicit(&mut self) {
        if self.stack.last().is_some_and(|f| f.role == Role::Implicit) {
            self.close();
        }
    }

    fn ensure_inline_context(&mut self) {
        if matches!(self.top_kind(), NodeKind::Item) {
            self.open(Node::paragraph(Vec::new()), Role::Implicit);
        }
    }

    fn literal_sink(&mut self) -> Option<&mut String> {
        match self.top_node().kind_mut() {
            NodeKind::CodeBlock { literal, .. } | NodeKind::HtmlBlock { literal } => Some(literal),
            _ => None,
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(literal) = self.literal_sink() {
            literal.push_str(text);
            return;
        }
        self.ensure_inline_context();
        let top = self.top_node();
        if let Some(NodeKind::Text(existing)) = top.last_child_mut().map(Node::kind_mut) {
            existing.push_str(text);
        } else {
            top.push(Node::text(text));
        }
    }

    fn inline(&mut self, node: Node) {
        self.ensure_inline_context();
        self.append(node);
    }

    fn start(&mut self, tag: Tag<'_>) {
        if is_block(&tag) {
            self.close_implicit();
        } else {
            self.ensure_inline_context();
        }
        match node_for(tag) {
            Some(node) => self.open(node, Role::Explicit),
            None => self.open(Node::paragraph(Vec::new()), Role::Transparent),
        }
    }

    fn end(&mut self) {
        self.close_implicit();
        self.close();
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(&text),
            Event::Html(html) | Event::InlineHtml(html) => {
                if let Some(literal) = self.literal_sink() {
                    literal.push_str(&html);
                } else {
                    self.inline(Node::inline_html(html.to_string()));
                }
            }
            Event::Code(code) => self.inline(Node::code(code.to_string())),
            Event::SoftBreak => self.inline(Node::soft_break()),
            Event::HardBreak => self.inline(Node::line_break()),
            Event::Rule => {
                self.close_implicit();
                self.append(Node::thematic_break());
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Node {
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }
}

/// Parse CommonMark `source` into a document tree.
///
/// # Examples
///
/// ```
/// use mdcanon::{NodeKind, parse_document};
///
/// let doc = parse_document("# Title\n");
/// assert_eq!(doc.children()[0].kind(), &NodeKind::Heading { level: 1 });
/// ```
#[must_use]
pub fn parse_document(source: &str) -> Node {
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(source, Options::empty()) {
        builder.event(event);
    }
    builder.finish()
}
