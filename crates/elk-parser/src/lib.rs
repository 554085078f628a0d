//! Elk Parser
//!
//! Parses `.elk` source text into a [`Document`] tree. The grammar is a small
//! ordered-choice (PEG) grammar driven directly over the `elk-lexer` scanner:
//!
//! ```text
//! statements := statement* EOF
//! statement  := tag | string
//! tag        := tag_identifier ('.' identifier | '#' identifier)* attributes? block?
//! attributes := '[' attribute (',' attribute)* ']'
//! attribute  := tag_identifier ':' string
//! block      := ':' statement | '{' statement* '}'
//! ```
//!
//! A failed parse reports the furthest position reached together with what the
//! grammar expected there. Blocks may nest at most [`MAX_NESTING`] levels deep.

pub mod ast;
pub mod parser;

pub use ast::{Attribute, Body, Document, Statement, Tag};
pub use parser::{Parser, MAX_NESTING};

/// Syntax error with position information and the expected tokens at that position.
///
/// Displays as `Syntax error@<line>:<column>: expected <e1>, <e2>, ...`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Syntax error@{line}:{column}: expected {}", .expected.join(", "))]
pub struct ParseError {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub expected: Vec<String>,
}
