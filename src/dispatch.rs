//! Per-node-kind rendering rules.

use crate::{
    iter::{EventType, Visit},
    node::{ListKind, Node, NodeKind},
    options::ItemMarkers,
    state::RenderState,
};

const QUOTE_PREFIX: &str = "> ";
const BULLET_MARKER: &str = "- ";
const FIXED_ORDERED_MARKER: &str = "1.  ";
const CODE_INDENT: &str = "    ";

/// Return the list kind and start value of an item's parent list.
///
/// # Panics
/// Panics if the parent is not a list.
fn parent_list(visit: &Visit<'_>) -> (ListKind, u64) {
    match visit.parent.map(Node::kind) {
        Some(NodeKind::List { kind, start }) => (*kind, *start),
        other => panic!("list item must be a child of a list, found parent {other:?}"),
    }
}

/// Marker written before an item's content. The continuation prefix is a run
/// of spaces of the same length.
fn item_marker(visit: &Visit<'_>, markers: ItemMarkers) -> String {
    match (parent_list(visit), markers) {
        ((ListKind::Bullet, _), _) => BULLET_MARKER.to_string(),
        ((ListKind::Ordered, _), ItemMarkers::Fixed) => FIXED_ORDERED_MARKER.to_string(),
        ((ListKind::Ordered, start), ItemMarkers::Ordinal) => {
            let ordinal = start.saturating_add(visit.index as u64);
            let mut marker = format!("{ordinal}.");
            while marker.len() < FIXED_ORDERED_MARKER.len() {
                marker.push(' ');
            }
            if !marker.ends_with(' ') {
                marker.push(' ');
            }
            marker
        }
    }
}

fn render_code_block(state: &mut RenderState, info: Option<&str>, literal: &str) {
    state.request_blank_line();
    match info.filter(|i| !i.is_empty()) {
        None => {
            state.lit(CODE_INDENT, false);
            state.push_prefix(CODE_INDENT);
            state.emit(literal, false, false);
            state.pop_prefix(CODE_INDENT.len());
        }
        Some(info) => {
            state.lit("``` ", false);
            state.emit(info, false, false);
            state.request_single_break();
            state.emit(literal, false, true);
            state.request_single_break();
            state.lit("```", false);
        }
    }
    state.request_blank_line();
}

fn close_link(state: &mut RenderState, url: &str) {
    state.lit("](", false);
    state.emit(url, false, true);
    state.lit(")", false);
}

/// Apply the rendering rule for one traversal event.
pub(crate) fn render_node(visit: &Visit<'_>, state: &mut RenderState, markers: ItemMarkers) {
    let entering = visit.event == EventType::Enter;
    match visit.node.kind() {
        NodeKind::Document => {
            if !entering {
                state.request_single_break();
                state.flush_pending();
                if !state.buffer.ends_with('\n') {
                    state.buffer.push('\n');
                }
            }
        }
        NodeKind::BlockQuote => {
            if entering {
                state.lit(QUOTE_PREFIX, false);
                state.push_prefix(QUOTE_PREFIX);
            } else {
                state.pop_prefix(QUOTE_PREFIX.len());
                state.request_blank_line();
            }
        }
        NodeKind::List { .. } => {}
        NodeKind::Item => {
            let marker = item_marker(visit, markers);
            if entering {
                state.lit(&marker, false);
                let indent = " ".repeat(marker.len());
                state.push_prefix(&indent);
            } else {
                state.pop_prefix(marker.len());
                state.request_single_break();
            }
        }
        NodeKind::Heading { level } => {
            if entering {
                for _ in 0..*level {
                    state.lit("#", false);
                }
                state.lit(" ", false);
                state.suppress_wrap = true;
            } else {
                state.suppress_wrap = false;
                state.request_blank_line();
            }
        }
        NodeKind::CodeBlock { info, literal } => {
            render_code_block(state, info.as_deref(), literal);
        }
        NodeKind::HtmlBlock { literal } => {
            state.request_blank_line();
            state.emit(literal, false, false);
            state.request_blank_line();
        }
        NodeKind::ThematicBreak => {
            state.request_blank_line();
            state.lit("-----", false);
            state.request_blank_line();
        }
        NodeKind::Paragraph => {
            if !entering {
                state.request_blank_line();
            }
        }
        NodeKind::Text(literal) => state.emit(literal, true, true),
        NodeKind::LineBreak => {
            state.lit("\\", false);
            state.request_single_break();
        }
        NodeKind::SoftBreak => state.lit(" ", true),
        NodeKind::Code(literal) => {
            state.lit("`", false);
            state.emit(literal, true, false);
            state.lit("`", false);
        }
        NodeKind::InlineHtml(literal) => state.emit(literal, true, false),
        NodeKind::Strong => state.lit("**", false),
        NodeKind::Emph => state.lit("*", false),
        NodeKind::Link { url } => {
            if entering {
                state.lit("[", false);
            } else {
                close_link(state, url);
            }
        }
        NodeKind::Image { url } => {
            if entering {
                state.lit("![", false);
            } else {
                close_link(state, url);
            }
        }
    }
}
