//! Mutable state threaded through a single render.

use crate::options::RenderOptions;

/// Line breaks owed before the next emitted span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Newlines {
    #[default]
    None,
    Single,
    Blank,
}

impl Newlines {
    fn count(self) -> usize {
        match self {
            Self::None => 0,
            Self::Single => 1,
            Self::Blank => 2,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RenderState {
    pub(crate) buffer: String,
    pub(crate) prefix: String,
    pub(crate) column: usize,
    pub(crate) width: usize,
    pub(crate) pending: Newlines,
    /// Byte offset of the last collapsible space on the current line.
    pub(crate) last_breakable: Option<usize>,
    /// Byte offset where content of the current line begins, after any prefix.
    pub(crate) line_start: usize,
    pub(crate) begin_of_line: bool,
    pub(crate) suppress_wrap: bool,
}

impl RenderState {
    pub(crate) fn new(options: &RenderOptions) -> Self {
        Self {
            buffer: String::new(),
            prefix: String::new(),
            column: 0,
            width: options.width,
            pending: Newlines::None,
            last_breakable: None,
            line_start: 0,
            begin_of_line: true,
            suppress_wrap: false,
        }
    }

    pub(crate) fn request_single_break(&mut self) { self.pending = self.pending.max(Newlines::Single); }

    pub(crate) fn request_blank_line(&mut self) { self.pending = self.pending.max(Newlines::Blank); }

    pub(crate) fn push_prefix(&mut self, s: &str) { self.prefix.push_str(s); }

    /// Remove the last `len` bytes of the prefix.
    ///
    /// # Panics
    /// Panics if the prefix is shorter than `len`, which means a container
    /// exited without a matching enter.
    pub(crate) fn pop_prefix(&mut self, len: usize) {
        let keep = self
            .prefix
            .len()
            .checked_sub(len)
            .unwrap_or_else(|| panic!("prefix underflow: popping {len} from {:?}", self.prefix));
        self.prefix.truncate(keep);
    }

    /// Materialise owed line breaks.
    ///
    /// Newlines already at the end of the buffer count towards the debt, so
    /// repeated requests never stack. An empty buffer owes nothing. A blank
    /// line written here carries the current prefix.
    pub(crate) fn flush_pending(&mut self) {
        let owed = self.pending.count();
        if owed == 0 {
            return;
        }
        let satisfied = if self.buffer.is_empty() {
            owed
        } else {
            self.buffer
                .bytes()
                .rev()
                .take_while(|&b| b == b'\n')
                .count()
                .min(owed)
        };
        for step in satisfied..owed {
            self.buffer.push('\n');
            if owed - step > 1 {
                self.buffer.push_str(&self.prefix);
            }
        }
        self.column = 0;
        self.begin_of_line = true;
        self.last_breakable = None;
        self.line_start = self.buffer.len();
        self.pending = Newlines::None;
    }

    pub(crate) fn into_output(self) -> String { self.buffer }
}
