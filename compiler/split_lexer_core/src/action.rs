//! Action dispatch: turns an accepted lexeme into a token kind and applies
//! its effect on the nesting state.

use crate::scan_state::ScanState;
use crate::tag::{CommentKind, TokenKind};

/// What the automaton recognized, independent of the state it ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Action {
    /// Plain content: one character, a literal, or a script header.
    Plain,
    /// `//...` up to the line terminator.
    LineComment,
    /// `/*` outside of a comment.
    OpenBlock,
    /// `/**` outside of a comment.
    OpenDoc,
    /// `/**/` outside of a comment: a complete comment on its own.
    EmptyComment,
    /// `/*` inside a comment.
    NestedOpen,
    /// `*/` inside a comment.
    Close,
    /// One character of comment body.
    CommentBody,
}

impl Action {
    /// Returns `true` if consecutive lexemes with this action may be merged
    /// into one token.
    ///
    /// Only actions without side effects qualify, so merging never changes
    /// the nesting state a token sequence produces.
    #[inline]
    pub(crate) const fn is_mergeable(self) -> bool {
        matches!(self, Action::Plain | Action::CommentBody)
    }

    /// Apply the action's side effects to `state` and return the kind of the
    /// token it produces.
    pub(crate) fn dispatch(self, state: &mut ScanState) -> TokenKind {
        match self {
            Action::Plain => TokenKind::PlainContent,
            Action::LineComment => TokenKind::LineComment,
            // No body between the stars, so never a doc comment.
            Action::EmptyComment => TokenKind::BlockComment,
            Action::OpenBlock => {
                state.open(CommentKind::Block);
                TokenKind::BlockComment
            }
            Action::OpenDoc => {
                state.open(CommentKind::Doc);
                TokenKind::DocComment
            }
            Action::NestedOpen => {
                state.nest();
                state.kind().token_kind()
            }
            Action::Close => {
                state.close();
                state.kind().token_kind()
            }
            Action::CommentBody => state.kind().token_kind(),
        }
    }
}

#[cfg(test)]
mod tests;
