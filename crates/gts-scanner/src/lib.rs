//! Go scanner/tokenizer for the gts translator.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine with automatic semicolon insertion
//! - Character classification utilities

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod scanner;
pub use scanner::{ScannerDiagnostic, ScannerSnapshot, ScannerState};

pub mod char_codes;
