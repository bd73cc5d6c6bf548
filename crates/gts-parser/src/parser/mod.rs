//! Recursive-descent parser for the supported Go subset.
//!
//! `ParserState` is split across files by grammar area:
//! - `state` - token cursor, diagnostics, look-ahead and recovery
//! - `state_types` - types, signatures, struct and interface bodies
//! - `state_expressions` - expressions and composite literals
//! - `state_statements` - statements and control flow
//! - `state_declarations` - source file, imports and top-level declarations

mod state;
mod state_declarations;
mod state_expressions;
mod state_statements;
mod state_types;

pub use state::{ParseDiagnostic, ParserState};
