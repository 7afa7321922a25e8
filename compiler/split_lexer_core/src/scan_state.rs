//! Resumable scanner state.

use crate::tag::{CommentKind, LexicalMode};

/// Everything the scanner needs to continue from a position.
///
/// Snapshot it with [`Scanner::state()`](crate::Scanner::state) and hand it
/// back to [`Scanner::resume()`](crate::Scanner::resume). Restoring only the
/// position is not enough inside a block comment: nesting depth and comment
/// kind decide how the rest of the comment is tagged and where it ends.
///
/// The lexical mode is derived from the nesting depth, so the invariant
/// `depth == 0 <=> mode == Initial` holds by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanState {
    position: u32,
    depth: u32,
    kind: CommentKind,
}

impl ScanState {
    /// State at `position` outside of any comment.
    pub const fn initial(position: u32) -> Self {
        Self {
            position,
            depth: 0,
            kind: CommentKind::Block,
        }
    }

    /// State at `position` inside `depth` nested block comments whose
    /// outermost opener had flavor `kind`.
    ///
    /// A depth of zero is raised to one: this constructor always describes
    /// the inside of a comment.
    pub const fn in_comment(position: u32, depth: u32, kind: CommentKind) -> Self {
        Self {
            position,
            depth: if depth == 0 { 1 } else { depth },
            kind,
        }
    }

    /// State for a fresh scan at `position` in lexical mode `mode`.
    ///
    /// Starting in [`LexicalMode::InBlockComment`] means the window begins
    /// inside one open ordinary block comment.
    pub const fn with_mode(position: u32, mode: LexicalMode) -> Self {
        match mode {
            LexicalMode::Initial => Self::initial(position),
            LexicalMode::InBlockComment => Self::in_comment(position, 1, CommentKind::Block),
        }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub const fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    pub const fn mode(&self) -> LexicalMode {
        if self.depth == 0 {
            LexicalMode::Initial
        } else {
            LexicalMode::InBlockComment
        }
    }

    /// Number of open, unmatched block comment openers.
    #[inline]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Flavor of the outermost comment. Only meaningful inside a comment or
    /// right after one closes.
    #[inline]
    pub const fn kind(&self) -> CommentKind {
        self.kind
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    /// Enter a comment from the initial mode.
    pub(crate) fn open(&mut self, kind: CommentKind) {
        debug_assert_eq!(self.depth, 0, "top-level opener inside a comment");
        self.kind = kind;
        self.depth = 1;
    }

    pub(crate) fn nest(&mut self) {
        debug_assert!(self.depth > 0, "nested opener outside a comment");
        self.depth += 1;
    }

    /// Close the innermost comment. Returns to the initial mode when the
    /// depth reaches zero; the comment kind is kept.
    pub(crate) fn close(&mut self) {
        debug_assert!(self.depth > 0, "closer outside a comment");
        self.depth = self.depth.saturating_sub(1);
    }
}
