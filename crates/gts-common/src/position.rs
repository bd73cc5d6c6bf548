//! Line/column positions for byte offsets.

use serde::Serialize;

/// A 1-based line and column (columns count bytes, like `go/token`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Precomputed line start offsets for a source text.
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    #[must_use]
    pub fn build(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        Self { line_starts }
    }

    /// Number of lines in the text (a trailing newline opens a new, empty line).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a 1-based position.
    #[must_use]
    pub fn position(&self, offset: u32) -> Position {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line_idx).copied().unwrap_or(0);
        Position {
            line: u32::try_from(line_idx + 1).unwrap_or(u32::MAX),
            column: offset.saturating_sub(line_start) + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LineMap, Position};

    #[test]
    fn positions_are_one_based() {
        let map = LineMap::build("package main\n\nfunc main() {}\n");
        assert_eq!(map.position(0), Position { line: 1, column: 1 });
        assert_eq!(map.position(8), Position { line: 1, column: 9 });
        assert_eq!(map.position(13), Position { line: 2, column: 1 });
        assert_eq!(map.position(14), Position { line: 3, column: 1 });
        assert_eq!(map.position(19), Position { line: 3, column: 6 });
        assert_eq!(map.line_count(), 4);
    }
}
