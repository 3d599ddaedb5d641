//! Render a document tree back to CommonMark.

use tracing::debug;

use crate::{
    dispatch::render_node,
    iter::Events,
    node::Node,
    options::RenderOptions,
    state::RenderState,
};

/// Renders [`Node`] trees with a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self { Self { options } }

    /// Render `root` and return the CommonMark text.
    ///
    /// # Panics
    /// Panics if the tree is malformed, e.g. a list item outside a list.
    #[must_use]
    pub fn render(&self, root: &Node) -> String {
        debug!(width = self.options.width, "rendering document");
        let mut state = RenderState::new(&self.options);
        for visit in Events::new(root) {
            render_node(&visit, &mut state, self.options.item_markers);
        }
        let out = state.into_output();
        debug!(bytes = out.len(), "rendered document");
        out
    }
}

/// Render `root` with the default options.
///
/// `options` is reserved for future flags and currently has no effect.
///
/// # Examples
///
/// ```
/// use mdcanon::{Node, render_commonmark};
///
/// let doc = Node::document(vec![Node::paragraph(vec![Node::text("hello *world*")])]);
/// assert_eq!(render_commonmark(&doc, 0), "hello \\*world\\*\n\n");
/// ```
#[must_use]
pub fn render_commonmark(root: &Node, options: i32) -> String {
    let _ = options;
    Renderer::default().render(root)
}
