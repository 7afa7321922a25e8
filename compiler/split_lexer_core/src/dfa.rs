//! The splitting automaton and its maximal-munch driver.
//!
//! # Grammar
//!
//! In [`LexicalMode::Initial`] the automaton recognizes, besides single
//! characters of plain content:
//!
//! - `/` alone, `//...` line comments, `/*` and `/**` openers, and the empty
//!   comment `/**/`;
//! - character literals: `'x'`, `'\n'`, `'\12'`, `'A'`, `'\u000A'`;
//! - string literals `"..."` (possibly unterminated, never crossing a line
//!   terminator) and triple-quoted strings `"""..."""`;
//! - backquoted identifiers `` `...` ``;
//! - script headers `#!...!#` and `::#!...::!#`.
//!
//! Literals are recognized only so that comment markers inside them stay
//! plain content. In [`LexicalMode::InBlockComment`] it recognizes nested
//! `/*`, the closer `*/`, and single characters of comment body.
//!
//! # Maximal munch
//!
//! [`longest_match`] keeps transitioning while a transition exists and
//! remembers the last accepting state it passed through. When it can go no
//! further it rewinds to that boundary. An unterminated literal therefore
//! falls back to its longest accepted prefix, e.g. a lone `` ` `` or `'`.

use crate::action::Action;
use crate::classify::{classify, CharClass};
use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::tag::LexicalMode;

/// Automaton state.
///
/// States named `*End` have no outgoing transitions. States without an
/// accepting action are interior: a lexeme may pass through them but never
/// end in them.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum State {
    // ─── Start states ────────────────────────────────────────────
    Initial,
    InComment,

    // ─── Initial mode ────────────────────────────────────────────
    PlainEnd,
    Slash,
    LineComment,
    BlockOpen,
    DocOpen,
    EmptyCommentEnd,

    CharOpen,
    CharBody,
    CharEscape,
    CharOctal1,
    CharOctal2,
    CharUnicode,
    CharUnicodeHex1,
    CharUnicodeHex2,
    CharUnicodeHex3,
    CharUnicodeZero1,
    CharUnicodeZero2,
    CharUnicodeZero3,
    CharLineFeed,

    StringOpen,
    StringBody,
    StringEscape,
    EmptyString,
    TripleBody,
    TripleQuote1,
    TripleQuote2,
    TripleClosed,

    BacktickOpen,
    BacktickBody,

    Hash,
    HeaderBody,
    HeaderBang,
    HeaderClosed,
    Colon,
    ColonColon,
    ColonColonHash,
    ColonHeaderBody,
    ColonHeaderColon,
    ColonHeaderColonColon,
    ColonHeaderBang,
    ColonHeaderClosed,

    // ─── InBlockComment mode ─────────────────────────────────────
    CommentCharEnd,
    CommentSlash,
    CommentStar,
    NestedOpenEnd,
    CloseEnd,
}

impl State {
    /// Start state for a lexical mode.
    #[inline]
    pub(crate) const fn start(mode: LexicalMode) -> State {
        match mode {
            LexicalMode::Initial => State::Initial,
            LexicalMode::InBlockComment => State::InComment,
        }
    }

    /// Transition on `class`, or `None` if the automaton rejects it.
    #[allow(
        clippy::match_same_arms,
        reason = "one arm per (state, class group) mirrors the transition table"
    )]
    pub(crate) const fn next(self, class: CharClass) -> Option<State> {
        use CharClass as C;
        use State as S;

        let next = match (self, class) {
            // Initial mode: one lexeme of plain content or a comment opener.
            (S::Initial, C::Slash) => S::Slash,
            (S::Initial, C::Quote) => S::CharOpen,
            (S::Initial, C::DoubleQuote) => S::StringOpen,
            (S::Initial, C::Hash) => S::Hash,
            (S::Initial, C::Colon) => S::Colon,
            (S::Initial, C::Backtick) => S::BacktickOpen,
            (S::Initial, _) => S::PlainEnd,

            // Comments.
            (S::Slash, C::Slash) => S::LineComment,
            (S::Slash, C::Star) => S::BlockOpen,
            (S::LineComment, C::LineTerminator) => return None,
            (S::LineComment, _) => S::LineComment,
            (S::BlockOpen, C::Star) => S::DocOpen,
            (S::DocOpen, C::Slash) => S::EmptyCommentEnd,

            // Character literals.
            (S::CharOpen, C::Backslash) => S::CharEscape,
            (S::CharOpen, C::Quote | C::LineTerminator) => return None,
            (S::CharOpen, _) => S::CharBody,
            (S::CharBody, C::Backslash | C::Quote) => S::PlainEnd,
            (S::CharEscape, C::OctalDigit | C::Zero) => S::CharOctal1,
            (S::CharEscape, C::LowerU) => S::CharUnicode,
            (S::CharEscape, C::LineTerminator) => return None,
            (S::CharEscape, _) => S::CharBody,
            (S::CharOctal1, C::OctalDigit | C::Zero) => S::CharOctal2,
            (S::CharOctal1, C::Backslash | C::Quote) => S::PlainEnd,
            (S::CharOctal2, C::OctalDigit | C::Zero) => S::CharBody,
            (S::CharOctal2, C::Backslash | C::Quote) => S::PlainEnd,
            (S::CharUnicode, C::OctalDigit | C::HexDigit | C::UpperA) => S::CharUnicodeHex1,
            (S::CharUnicode, C::Zero) => S::CharUnicodeZero1,
            (S::CharUnicode, C::Backslash | C::Quote) => S::PlainEnd,
            (S::CharUnicodeHex1, C::OctalDigit | C::HexDigit | C::Zero | C::UpperA) => {
                S::CharUnicodeHex2
            }
            (S::CharUnicodeHex2, C::OctalDigit | C::HexDigit | C::Zero | C::UpperA) => {
                S::CharUnicodeHex3
            }
            (S::CharUnicodeHex3, C::OctalDigit | C::HexDigit | C::Zero | C::UpperA) => S::CharBody,
            (S::CharUnicodeZero1, C::OctalDigit | C::HexDigit | C::UpperA) => S::CharUnicodeHex2,
            (S::CharUnicodeZero1, C::Zero) => S::CharUnicodeZero2,
            (S::CharUnicodeZero2, C::OctalDigit | C::HexDigit | C::UpperA) => S::CharUnicodeHex3,
            (S::CharUnicodeZero2, C::Zero) => S::CharUnicodeZero3,
            (S::CharUnicodeZero3, C::OctalDigit | C::HexDigit | C::Zero) => S::CharBody,
            (S::CharUnicodeZero3, C::UpperA) => S::CharLineFeed,
            (S::CharLineFeed, C::Quote) => S::PlainEnd,

            // String literals.
            (S::StringOpen, C::Backslash) => S::StringEscape,
            (S::StringOpen, C::DoubleQuote) => S::EmptyString,
            (S::StringOpen, C::LineTerminator) => return None,
            (S::StringOpen, _) => S::StringBody,
            (S::StringBody, C::Backslash) => S::StringEscape,
            (S::StringBody, C::DoubleQuote) => S::PlainEnd,
            (S::StringBody, C::LineTerminator) => return None,
            (S::StringBody, _) => S::StringBody,
            (S::StringEscape, C::LineTerminator) => return None,
            (S::StringEscape, _) => S::StringBody,
            (S::EmptyString, C::DoubleQuote) => S::TripleBody,
            (S::TripleBody, C::DoubleQuote) => S::TripleQuote1,
            (S::TripleBody, _) => S::TripleBody,
            (S::TripleQuote1, C::DoubleQuote) => S::TripleQuote2,
            (S::TripleQuote1, _) => S::TripleBody,
            (S::TripleQuote2, C::DoubleQuote) => S::TripleClosed,
            (S::TripleQuote2, _) => S::TripleBody,
            (S::TripleClosed, C::DoubleQuote) => S::TripleClosed,

            // Backquoted identifiers.
            (S::BacktickOpen | S::BacktickBody, C::Backtick) => S::PlainEnd,
            (S::BacktickOpen | S::BacktickBody, _) => S::BacktickBody,

            // Script headers: `#!` ... `!#`.
            (S::Hash, C::Bang) => S::HeaderBody,
            (S::HeaderBody, C::Bang) => S::HeaderBang,
            (S::HeaderBody, _) => S::HeaderBody,
            (S::HeaderBang, C::Hash) => S::HeaderClosed,
            (S::HeaderBang, C::Bang) => S::HeaderBang,
            (S::HeaderBang, _) => S::HeaderBody,
            (S::HeaderClosed, C::Bang) => S::HeaderBang,
            (S::HeaderClosed, _) => S::HeaderBody,

            // Script headers: `::#!` ... `::!#`.
            (S::Colon, C::Colon) => S::ColonColon,
            (S::ColonColon, C::Hash) => S::ColonColonHash,
            (S::ColonColonHash, C::Bang) => S::ColonHeaderBody,
            (S::ColonHeaderBody, C::Colon) => S::ColonHeaderColon,
            (S::ColonHeaderBody, _) => S::ColonHeaderBody,
            (S::ColonHeaderColon, C::Colon) => S::ColonHeaderColonColon,
            (S::ColonHeaderColon, _) => S::ColonHeaderBody,
            (S::ColonHeaderColonColon, C::Bang) => S::ColonHeaderBang,
            (S::ColonHeaderColonColon, C::Colon) => S::ColonHeaderColonColon,
            (S::ColonHeaderColonColon, _) => S::ColonHeaderBody,
            (S::ColonHeaderBang, C::Hash) => S::ColonHeaderClosed,
            (S::ColonHeaderBang, C::Colon) => S::ColonHeaderColon,
            (S::ColonHeaderBang, _) => S::ColonHeaderBody,
            (S::ColonHeaderClosed, C::Colon) => S::ColonHeaderColon,
            (S::ColonHeaderClosed, _) => S::ColonHeaderBody,

            // InBlockComment mode.
            (S::InComment, C::Slash) => S::CommentSlash,
            (S::InComment, C::Star) => S::CommentStar,
            (S::InComment, _) => S::CommentCharEnd,
            (S::CommentSlash, C::Star) => S::NestedOpenEnd,
            (S::CommentStar, C::Slash) => S::CloseEnd,

            _ => return None,
        };
        Some(next)
    }

    /// Action for a lexeme ending in this state, or `None` if the state is
    /// not accepting.
    pub(crate) const fn action(self) -> Option<Action> {
        use State as S;

        let action = match self {
            S::PlainEnd
            | S::Slash
            | S::CharOpen
            | S::StringOpen
            | S::StringBody
            | S::StringEscape
            | S::EmptyString
            | S::TripleClosed
            | S::BacktickOpen
            | S::Hash
            | S::HeaderClosed
            | S::Colon
            | S::ColonHeaderClosed => Action::Plain,
            S::LineComment => Action::LineComment,
            S::BlockOpen => Action::OpenBlock,
            S::DocOpen => Action::OpenDoc,
            S::EmptyCommentEnd => Action::EmptyComment,
            S::CommentCharEnd | S::CommentSlash | S::CommentStar => Action::CommentBody,
            S::NestedOpenEnd => Action::NestedOpen,
            S::CloseEnd => Action::Close,
            _ => return None,
        };
        Some(action)
    }

    /// Returns `true` for accepting states with no outgoing transitions.
    ///
    /// The driver stops on these without reading another character.
    #[inline]
    pub(crate) const fn is_terminal(self) -> bool {
        matches!(
            self,
            State::PlainEnd
                | State::EmptyCommentEnd
                | State::CommentCharEnd
                | State::NestedOpenEnd
                | State::CloseEnd
        )
    }
}

/// A lexeme matched by the automaton: the action of the accepting state it
/// ended in, and its byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub action: Action,
    pub start: u32,
    pub end: u32,
}

/// Match the longest lexeme at the cursor.
///
/// On success the cursor sits at the end of the returned lexeme. Returns
/// `Ok(None)` when the cursor is already at the window end (end of stream;
/// a zero-length match is never produced).
///
/// # Errors
///
/// [`ScanError::NoMatch`] if the first transition is rejected and the start
/// state is not accepting. The grammar has a catch-all rule in every mode, so
/// this indicates a broken transition function, not bad input.
pub(crate) fn longest_match(
    cursor: &mut Cursor<'_>,
    mode: LexicalMode,
) -> Result<Option<Lexeme>, ScanError> {
    let origin = *cursor;
    let start = origin.pos();
    let mut state = State::start(mode);
    // Last accepting boundary: (action, end offset, cursor at that offset).
    let mut accepted = state.action().map(|action| (action, *cursor));
    let mut consumed = false;

    while let Some(c) = cursor.current() {
        let Some(next) = state.next(classify(c)) else {
            break;
        };
        cursor.bump(c);
        consumed = true;
        state = next;

        if state == State::LineComment {
            // Every character except a line terminator loops back here and
            // the state accepts, so the lexeme runs to the next terminator.
            cursor.eat_until_line_end();
        }

        if let Some(action) = state.action() {
            accepted = Some((action, *cursor));
            if state.is_terminal() {
                break;
            }
        }
    }

    if !consumed && cursor.is_eof() {
        return Ok(None);
    }

    match accepted {
        Some((action, at)) => {
            *cursor = at;
            Ok(Some(Lexeme {
                action,
                start,
                end: at.pos(),
            }))
        }
        None => {
            *cursor = origin;
            Err(ScanError::NoMatch { offset: start })
        }
    }
}
