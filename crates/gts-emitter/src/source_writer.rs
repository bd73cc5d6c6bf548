//! Line-oriented output buffer with indentation tracking.

use gts_common::limits::OUTPUT_BUFFER_CAPACITY;

const INDENT: &str = "    ";

/// Accumulates emitted lines.
///
/// Every line is written as `depth × 4 spaces + text + "\n"`. Blank lines carry
/// no indentation.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_level: u32,
    line_count: usize,
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(OUTPUT_BUFFER_CAPACITY),
            indent_level: 0,
            line_count: 0,
        }
    }

    /// A writer with no preallocated buffer, for rendering short fragments.
    #[must_use]
    pub const fn fragment() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            line_count: 0,
        }
    }

    pub fn write_line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
        self.line_count += 1;
    }

    pub fn blank_line(&mut self) {
        self.output.push('\n');
        self.line_count += 1;
    }

    pub const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    #[must_use]
    pub const fn indent_level(&self) -> u32 {
        self.indent_level
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    #[must_use]
    pub fn get_output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}
