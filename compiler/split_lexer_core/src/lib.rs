//! Comment-splitting lexical scanner.
//!
//! Partitions source text into runs of plain content and comments: line
//! comments, block comments, and documentation comments. Block comments
//! nest, and the scanner tracks the nesting depth so that
//! `/* a /* b */ c */` is one comment, not a comment followed by `c */`.
//!
//! The crate has no knowledge of the language inside plain content beyond
//! what it takes to keep comment markers inside string, character, and
//! backquoted literals inert. It is meant to sit in front of a full
//! tokenizer, a highlighter, or an incremental re-lexer.
//!
//! # Architecture
//!
//! - [`classify()`] maps characters to a small set of [`CharClass`]es
//! - the automaton (private `dfa` module) finds the longest lexeme at a
//!   position, falling back to the last accepting boundary
//! - the action dispatcher turns the accepting state into a [`TokenKind`]
//!   and updates the [`ScanState`] (nesting depth, comment kind)
//! - [`Scanner`] ties them together behind a pull API
//!
//! # Example
//!
//! ```
//! use split_lexer_core::{split, TokenKind};
//!
//! let pieces = split("x /* a /* b */ */ y // z");
//! assert_eq!(pieces[0], (TokenKind::PlainContent, "x "));
//! assert_eq!(pieces.last(), Some(&(TokenKind::LineComment, "// z")));
//! ```

mod action;
mod classify;
mod cursor;
mod dfa;
mod error;
mod options;
mod scan_state;
mod scanner;
mod tag;

pub use classify::{classify, CharClass, CLASS_COUNT};
pub use error::ScanError;
pub use options::{Granularity, ScanOptions};
pub use scan_state::ScanState;
pub use scanner::{split, tokenize, Scanner};
pub use tag::{CommentKind, LexicalMode, Span, Token, TokenKind};
