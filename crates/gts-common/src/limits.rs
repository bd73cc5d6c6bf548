//! Centralized limits and thresholds for the translator.

/// Maximum nesting depth the parser accepts for expressions, types and blocks.
///
/// Every nested construct adds frames to the recursive-descent parser and later
/// to the printer; past this depth the parser reports an error instead of
/// risking a stack overflow.
pub const MAX_PARSER_RECURSION_DEPTH: u32 = 256;

/// Initial capacity of the printer's output buffer.
pub const OUTPUT_BUFFER_CAPACITY: usize = 4 * 1024;
