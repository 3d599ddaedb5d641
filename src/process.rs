//! High-level Markdown formatting.

use crate::{options::RenderOptions, parse::parse_document, render::Renderer};

/// Parse `source` and render it back in canonical form.
#[must_use]
pub fn format_markdown(source: &str, options: &RenderOptions) -> String {
    Renderer::new(*options).render(&parse_document(source))
}
