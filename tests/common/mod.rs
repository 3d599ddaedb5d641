//! Utility helpers shared across integration tests.

use mdcanon::Node;

/// Wrap block nodes in a document.
pub fn doc(children: Vec<Node>) -> Node { Node::document(children) }

/// A paragraph holding a single text span.
pub fn para(text: &str) -> Node { Node::paragraph(vec![Node::text(text)]) }

/// Assert that every line of `output` fits in `width` columns unless it has
/// no space to break at.
///
/// Widths count characters, matching the renderer's one-column-per-codepoint
/// accounting.
pub fn assert_fits_width(output: &str, width: usize) {
    for line in output.lines() {
        let len = line.chars().count();
        if len <= width {
            continue;
        }
        let content = line.trim_start_matches(['>', ' ']);
        assert!(
            !content.contains(' '),
            "line exceeds {width} columns despite a break point: {line:?}"
        );
    }
}

/// Assert that `output` never contains more than one consecutive blank line.
pub fn assert_single_blank_lines(output: &str) {
    let mut blank_run = 0;
    for line in output.lines() {
        if line.trim_end_matches([' ', '>']).is_empty() {
            blank_run += 1;
            assert!(blank_run < 2, "more than one blank line in {output:?}");
        } else {
            blank_run = 0;
        }
    }
}
