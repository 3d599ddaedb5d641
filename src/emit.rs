//! Span emission with soft wrapping, prefixing and escaping.
//!
//! Wrapping is lazy: characters are written past the width limit and, once
//! the line overflows, everything after the last collapsible space is moved
//! onto a fresh line carrying the current prefix. Lines without such a space
//! are allowed to overflow.

use crate::state::RenderState;

/// Decide whether `c` must be backslash-escaped.
///
/// `next` is the raw byte following `c` in the input span and `previous` the
/// last byte already written to the output.
fn needs_escaping(c: char, next: Option<u8>, previous: Option<u8>, begin_of_line: bool) -> bool {
    match c {
        '*' | '_' | '[' | ']' | '<' | '>' | '\\' => true,
        '&' => next.is_some_and(|b| b.is_ascii_alphabetic()),
        '!' => next == Some(b'['),
        '-' | '+' | '#' | '=' => begin_of_line,
        '.' | ')' => previous.is_some_and(|b| b.is_ascii_digit()),
        _ => false,
    }
}

impl RenderState {
    /// Append `span` to the output.
    ///
    /// With `wrap`, spaces collapse into break opportunities; headings turn
    /// wrapping off regardless. With `escape`, characters that could be read
    /// back as Markdown syntax are prefixed with a backslash.
    pub(crate) fn emit(&mut self, span: &str, wrap: bool, escape: bool) {
        let wrap = wrap && !self.suppress_wrap;
        self.flush_pending();

        let bytes = span.as_bytes();
        let mut chars = span.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            // Spaces before any content on a line are dropped, including
            // right after a rewind that carried nothing over.
            if c == ' ' && wrap {
                if self.begin_of_line || self.buffer.len() == self.line_start {
                    continue;
                }
                self.buffer.push(' ');
                self.column += 1;
                self.last_breakable = Some(self.buffer.len() - 1);
                while chars.next_if(|&(_, next)| next == ' ').is_some() {}
                self.wrap_if_needed();
                continue;
            }

            if self.begin_of_line {
                self.buffer.push_str(&self.prefix);
                self.column = self.prefix.len();
                self.line_start = self.buffer.len();
            }

            if c == '\n' {
                self.buffer.push('\n');
                self.column = 0;
                self.begin_of_line = true;
                self.last_breakable = None;
                self.line_start = self.buffer.len();
                continue;
            }

            let next = bytes.get(i + c.len_utf8()).copied();
            let previous = self.buffer.as_bytes().last().copied();
            if escape && needs_escaping(c, next, previous, self.begin_of_line) {
                self.buffer.push('\\');
                self.buffer.push(c);
                self.column += 2;
            } else {
                self.buffer.push(c);
                self.column += 1;
            }
            self.begin_of_line = false;
            self.wrap_if_needed();
        }
    }

    /// Emit a fixed string without escaping.
    pub(crate) fn lit(&mut self, s: &str, wrap: bool) { self.emit(s, wrap, false); }

    /// Move the overflow after the last breakable space onto a new line.
    ///
    /// A break point at the very start of the line's content is never used:
    /// splitting there would leave an empty line.
    fn wrap_if_needed(&mut self) {
        if self.width == 0 || self.column <= self.width || self.begin_of_line {
            return;
        }
        let Some(at) = self.last_breakable.filter(|&at| at > self.line_start) else {
            return;
        };
        let remainder = self.buffer.split_off(at + 1);
        self.buffer.truncate(at);
        self.buffer.push('\n');
        self.buffer.push_str(&self.prefix);
        self.line_start = self.buffer.len();
        self.buffer.push_str(&remainder);
        self.column = self.prefix.len() + remainder.chars().count();
        self.last_breakable = None;
        self.begin_of_line = false;
    }
}
