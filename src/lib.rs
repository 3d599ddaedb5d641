//! Library for rendering CommonMark documents in canonical form.
//!
//! A parsed document tree ([`Node`]) is written back to CommonMark text with
//! a fixed soft-wrap width, uniform block prefixes for quotes and list items,
//! and backslash escapes wherever plain text could be read back as syntax.
//!
//! ```
//! use mdcanon::{RenderOptions, format_markdown};
//!
//! let out = format_markdown("*  one\n*  two\n", &RenderOptions::default());
//! assert_eq!(out, "- one\n\n- two\n\n");
//! ```

mod dispatch;
mod emit;
pub mod io;
pub mod iter;
pub mod node;
pub mod options;
pub mod parse;
pub mod process;
pub mod render;
mod state;

pub use io::rewrite;
pub use iter::{EventType, Events, Visit};
pub use node::{ListKind, Node, NodeKind};
pub use options::{DEFAULT_WIDTH, ItemMarkers, RenderOptions};
pub use parse::parse_document;
pub use process::format_markdown;
pub use render::{Renderer, render_commonmark};
