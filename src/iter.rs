//! Depth-first event iterator over a [`Node`] tree.
//!
//! Containers are visited twice: [`EventType::Enter`] before their children
//! and [`EventType::Exit`] after them. Leaves are visited once, with
//! [`EventType::Enter`].

use crate::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Enter,
    Exit,
}

/// A single traversal event.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub event: EventType,
    pub node: &'a Node,
    /// `None` only for the root.
    pub parent: Option<&'a Node>,
    /// Position of `node` among its parent's children.
    pub index: usize,
}

#[derive(Debug)]
struct Frame<'a> {
    node: &'a Node,
    index: usize,
    next_child: usize,
}

/// Single-pass producer of [`Visit`]s in document order.
#[derive(Debug)]
pub struct Events<'a> {
    root: Option<&'a Node>,
    stack: Vec<Frame<'a>>,
}

impl<'a> Events<'a> {
    #[must_use]
    pub fn new(root: &'a Node) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, node: &'a Node, parent: Option<&'a Node>, index: usize) -> Visit<'a> {
        if node.kind().is_container() {
            self.stack.push(Frame {
                node,
                index,
                next_child: 0,
            });
        }
        Visit {
            event: EventType::Enter,
            node,
            parent,
            index,
        }
    }
}

impl<'a> Iterator for Events<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(self.enter(root, None, 0));
        }

        let top = self.stack.last_mut()?;
        let parent = top.node;
        if let Some(child) = parent.children().get(top.next_child) {
            let index = top.next_child;
            top.next_child += 1;
            return Some(self.enter(child, Some(parent), index));
        }

        let frame = self.stack.pop()?;
        Some(Visit {
            event: EventType::Exit,
            node: frame.node,
            parent: self.stack.last().map(|f| f.node),
            index: frame.index,
        })
    }
}
