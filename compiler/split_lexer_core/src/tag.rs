//! Token kinds, spans, and the small enums that make up the scan state.
//!
//! Tokens never own text. A [`Token`] is a `(kind, span)` pair whose span
//! indexes into the caller's buffer; use
//! [`Scanner::token_text()`](crate::Scanner::token_text) or
//! [`Span::slice()`] to view the text.

use std::fmt;

/// Semantic category of a token produced by the splitting scanner.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Code outside of any comment, including string, character, and
    /// backquoted literals (comment markers inside them are inert).
    PlainContent = 0,
    /// `// ...` up to, but not including, the line terminator.
    LineComment = 1,
    /// Any piece of an ordinary block comment: opener, body, nested
    /// opener, closer. Also the empty comment `/**/`.
    BlockComment = 2,
    /// Any piece of a documentation comment opened with `/**`.
    DocComment = 3,
}

impl TokenKind {
    /// Human-readable name, used by the CLI and in trace output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlainContent => "plain content",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::DocComment => "doc comment",
        }
    }

    /// Returns `true` for every comment kind.
    #[inline]
    pub const fn is_comment(self) -> bool {
        !matches!(self, Self::PlainContent)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad phase of the scanner, selecting the automaton's start state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexicalMode {
    /// Outside of any block comment. Nesting depth is zero.
    #[default]
    Initial,
    /// Inside at least one open block comment. Nesting depth is positive.
    InBlockComment,
}

/// Flavor of the outermost open block comment.
///
/// Chosen when the depth goes from 0 to 1 and kept until the next 0 to 1
/// transition, so it is still readable right after the comment closes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// Opened with `/*`.
    #[default]
    Block,
    /// Opened with `/**` (but not the empty comment `/**/`).
    Doc,
}

impl CommentKind {
    /// Token kind emitted for every piece of a comment of this flavor.
    #[inline]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Block => TokenKind::BlockComment,
            Self::Doc => TokenKind::DocComment,
        }
    }
}

/// Half-open byte range `[start, end)` into the scanned buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// View of this span in `source`.
    ///
    /// Returns `None` if the span is out of bounds or does not fall on
    /// character boundaries of `source`.
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start as usize..self.end as usize)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token: kind plus span into the caller's buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Size assertion: a token is three words of 4 bytes at most.
const _: () = assert!(std::mem::size_of::<Token>() <= 12);

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }

    #[inline]
    pub const fn start(self) -> u32 {
        self.span.start
    }

    #[inline]
    pub const fn end(self) -> u32 {
        self.span.end
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.span.is_empty()
    }
}
