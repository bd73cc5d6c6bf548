//! Common types and utilities for the gts translator.
//!
//! This crate provides foundational types used across all gts crates:
//! - Source spans (`Span`)
//! - Line/column lookup for byte offsets (`LineMap`, `Position`)
//! - Diagnostics and their codes (`Diagnostic`, `diagnostic_codes`)
//! - Recursion and capacity limits

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostics shared by the parser, the printer and the CLI reporter
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes, format_message};

// Centralized limits
pub mod limits;
