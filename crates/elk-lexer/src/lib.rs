//! Elk Lexer
//!
//! Token layer for `.elk` sources. There is no separate token stream: the parser
//! drives a [`Scanner`] directly, asking it for the token it expects next. Every
//! recognizer skips the whitespace around its match, so whitespace (newlines
//! included) only matters inside string literals.
//!
//! # Example
//!
//! ```
//! use elk_lexer::Scanner;
//!
//! let mut scanner = Scanner::new("  div.note ");
//! assert_eq!(scanner.tag_identifier(), Some("div"));
//! assert!(scanner.punct('.'));
//! assert_eq!(scanner.identifier(), Some("note"));
//! assert!(scanner.is_at_end());
//! ```

pub mod escape;
pub mod position;
pub mod scanner;

pub use escape::interpret_escapes;
pub use position::Position;
pub use scanner::Scanner;
