/// A running string builder with spacing/newline discipline, plus the two
/// indentation counters a statement carries (§4.4). Local to one statement;
/// never persists across a statement boundary.
pub struct OutputBuffer {
    buf: String,
    indent_step: String,
    top_level_depth: i32,
    block_level_depth: i32,
    fresh_line: bool,
    last_was_newline: bool,
}

impl OutputBuffer {
    pub fn new(indent_step: String) -> Self {
        Self {
            buf: String::new(),
            indent_step,
            top_level_depth: 0,
            block_level_depth: 0,
            fresh_line: true,
            last_was_newline: false,
        }
    }

    pub fn inc_top_level(&mut self) {
        self.top_level_depth += 1;
    }

    pub fn dec_top_level(&mut self) {
        self.top_level_depth = (self.top_level_depth - 1).max(0);
    }

    pub fn inc_block_level(&mut self) {
        self.block_level_depth += 1;
    }

    pub fn dec_block_level(&mut self) {
        self.block_level_depth = (self.block_level_depth - 1).max(0);
    }

    pub fn current_indent(&self) -> String {
        self.indent()
    }

    fn indent(&self) -> String {
        self.indent_step
            .repeat((self.top_level_depth + self.block_level_depth) as usize)
    }

    fn trim_trailing_spaces(&mut self) {
        while self.buf.ends_with(' ') || self.buf.ends_with('\t') {
            self.buf.pop();
        }
    }

    /// Ensures exactly one space between the previous non-whitespace
    /// character and `s`, unless at the start of a line (where the current
    /// indent was already emitted by [`Self::add_newline`]).
    pub fn add_with_spaces(&mut self, s: &str) {
        if !self.fresh_line && !self.buf.is_empty() && !self.buf.ends_with(' ') {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
        self.fresh_line = false;
        self.last_was_newline = false;
    }

    /// Same spacing as [`Self::add_with_spaces`]; named separately because
    /// callers use it where only the leading edge matters.
    pub fn add_with_space_before(&mut self, s: &str) {
        self.add_with_spaces(s);
    }

    /// Appends `s` glued to what precedes it, then guarantees a trailing
    /// space for whatever comes next.
    pub fn add_with_space_after(&mut self, s: &str) {
        self.trim_trailing_spaces();
        self.buf.push_str(s);
        self.buf.push(' ');
        self.fresh_line = false;
        self.last_was_newline = false;
    }

    /// Trims any pending space and glues `s` directly onto the buffer.
    pub fn add_without_spaces(&mut self, s: &str) {
        self.trim_trailing_spaces();
        self.buf.push_str(s);
        self.fresh_line = false;
        self.last_was_newline = false;
    }

    /// Strips trailing newline(s) and indent back to the previous non-blank
    /// position, then appends `s` with a single preceding space. Used when
    /// a later decision (e.g. an inline block) retroactively cancels a
    /// newline that was already emitted.
    pub fn add_without_newlines_before(&mut self, s: &str) {
        self.trim_trailing_spaces();
        while self.buf.ends_with('\n') {
            self.buf.pop();
        }
        self.trim_trailing_spaces();
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
        self.fresh_line = false;
        self.last_was_newline = false;
    }

    /// Appends `\n` followed by the current indent. Collapses runs of
    /// consecutive calls into a single newline.
    pub fn add_newline(&mut self) {
        if self.last_was_newline {
            return;
        }
        if self.buf.is_empty() {
            self.fresh_line = true;
            self.last_was_newline = true;
            return;
        }
        self.trim_trailing_spaces();
        self.buf.push('\n');
        self.buf.push_str(&self.indent());
        self.fresh_line = true;
        self.last_was_newline = true;
    }

    pub fn finish(mut self) -> String {
        self.trim_trailing_spaces();
        while self.buf.ends_with('\n') {
            self.buf.pop();
        }
        self.buf
    }
}
