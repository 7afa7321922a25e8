//! Pull-based comment-splitting scanner.
//!
//! [`Scanner`] partitions a window of a borrowed buffer into plain content
//! and comments. Each call to [`Scanner::advance()`] produces one [`Token`]
//! until the window is exhausted; the window end is reported as `None`, not
//! as a token.
//!
//! # Resumable scanning
//!
//! The scanner keeps its whole position in a [`ScanState`]. Snapshot it at
//! any token boundary with [`Scanner::state()`] and continue later with
//! [`Scanner::resume()`]: the rest of the stream is the same as if the
//! scan had never stopped.
//!
//! # Token granularity
//!
//! By default, adjacent lexemes of plain content (and of comment body) are
//! merged, so `"a /* b */"` yields `"a "`, `"/*"`, `" b "`, `"*/"`. See
//! [`Granularity`] for the raw lexeme stream.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::action::Action;
use crate::cursor::Cursor;
use crate::dfa::longest_match;
use crate::error::ScanError;
use crate::options::{Granularity, ScanOptions};
use crate::scan_state::ScanState;
use crate::tag::{CommentKind, LexicalMode, Span, Token, TokenKind};

/// Scanner over a window of a borrowed buffer.
///
/// The buffer is never copied or mutated; tokens are spans into it.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
    options: ScanOptions,
    /// Span of the most recent token (empty before the first one).
    token: Span,
    /// Set once end of stream has been reported for the current window.
    at_eof: bool,
}

impl<'a> Scanner<'a> {
    /// Scanner over the whole of `buffer`, starting outside of any comment.
    pub fn new(buffer: &'a str) -> Self {
        Self::with_options(buffer, ScanOptions::default())
    }

    /// Like [`Scanner::new()`], with explicit options.
    pub fn with_options(buffer: &'a str, options: ScanOptions) -> Self {
        let end = buffer_len(buffer);
        Self {
            cursor: Cursor::new(buffer, 0, end),
            state: ScanState::initial(0),
            options,
            token: Span::new(0, 0),
            at_eof: false,
        }
    }

    /// Rebind the scanner to `buffer[start..end]` in lexical mode `mode`.
    ///
    /// Nesting depth and comment kind are reset. Starting in
    /// [`LexicalMode::InBlockComment`] treats the window as the inside of one
    /// open ordinary block comment (depth 1). To continue a previous scan
    /// with its nesting intact, use [`Scanner::resume()`].
    ///
    /// `end` is clamped to the buffer length and `start` to `end`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` does not fall on a character boundary.
    pub fn reset(&mut self, buffer: &'a str, start: u32, end: u32, mode: LexicalMode) {
        let (start, end) = window(buffer, start, end);
        debug!(start, end, ?mode, "reset");
        self.rebind(buffer, end, ScanState::with_mode(start, mode));
    }

    /// Rebind the scanner to `buffer[state.position()..end]` and restore a
    /// snapshot taken with [`Scanner::state()`].
    ///
    /// # Panics
    ///
    /// Panics if the window does not fall on character boundaries.
    pub fn resume(&mut self, buffer: &'a str, end: u32, state: ScanState) {
        let (start, end) = window(buffer, state.position(), end);
        debug!(
            start,
            end,
            depth = state.depth(),
            kind = ?state.kind(),
            "resume"
        );
        let mut state = state;
        state.set_position(start);
        self.rebind(buffer, end, state);
    }

    fn rebind(&mut self, buffer: &'a str, end: u32, state: ScanState) {
        let start = state.position();
        self.cursor = Cursor::new(buffer, start, end);
        self.state = state;
        self.token = Span::new(start, start);
        self.at_eof = false;
    }

    /// Next token, or `None` at the end of the window.
    ///
    /// # Panics
    ///
    /// Panics if the automaton cannot match the input. Every lexical mode has
    /// a catch-all rule, so this only happens if the transition function is
    /// broken. Use [`Scanner::try_advance()`] to get the error as a value.
    pub fn advance(&mut self) -> Option<Token> {
        match self.try_advance() {
            Ok(token) => token,
            Err(err) => scan_failure(err),
        }
    }

    /// Next token, or `Ok(None)` at the end of the window.
    ///
    /// On error the scanner is left at the offset that failed to match.
    pub fn try_advance(&mut self) -> Result<Option<Token>, ScanError> {
        let Some(lexeme) = longest_match(&mut self.cursor, self.state.mode())? else {
            self.finish();
            return Ok(None);
        };

        let kind = lexeme.action.dispatch(&mut self.state);
        let end = if self.options.granularity == Granularity::Merged
            && lexeme.action.is_mergeable()
        {
            self.extend_run(lexeme.action)?
        } else {
            lexeme.end
        };

        let token = Token::new(kind, lexeme.start, end);
        self.token = token.span;
        self.state.set_position(end);
        trace!(
            kind = %token.kind,
            start = token.start(),
            end = token.end(),
            depth = self.state.depth(),
            "token"
        );
        Ok(Some(token))
    }

    /// Consume following lexemes with the same side-effect-free `action`.
    /// Returns the end of the run; the cursor is left there.
    fn extend_run(&mut self, action: Action) -> Result<u32, ScanError> {
        let mode = self.state.mode();
        loop {
            let snapshot = self.cursor;
            match longest_match(&mut self.cursor, mode)? {
                Some(next) if next.action == action => {}
                _ => {
                    self.cursor = snapshot;
                    return Ok(self.cursor.pos());
                }
            }
        }
    }

    fn finish(&mut self) {
        self.state.set_position(self.cursor.pos());
        if self.at_eof {
            return;
        }
        self.at_eof = true;
        if self.state.depth() > 0 {
            debug!(
                depth = self.state.depth(),
                kind = ?self.state.kind(),
                end = self.cursor.pos(),
                "end of input inside an unterminated comment"
            );
        }
    }

    /// Un-read the last `count` characters of the current token.
    ///
    /// The next [`advance()`](Scanner::advance) starts scanning at the new
    /// token end. Side effects of the token on the nesting state are kept.
    pub fn push_back(&mut self, count: usize) -> Result<(), ScanError> {
        let text = self.token_text();
        let available = text.chars().count();
        if count > available {
            return Err(ScanError::PushbackTooLarge {
                requested: count,
                available,
            });
        }

        let cut = text
            .char_indices()
            .nth(available - count)
            .map_or(text.len(), |(offset, _)| offset);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "cut <= token length, which fits in u32"
        )]
        let end = self.token.start + cut as u32;

        self.token = Span::new(self.token.start, end);
        self.cursor = Cursor::new(self.cursor.text(), end, self.cursor.end());
        self.state.set_position(end);
        self.at_eof = false;
        Ok(())
    }

    // ─── Current token ───────────────────────────────────────────

    /// Start offset of the most recent token.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token.start
    }

    /// End offset (exclusive) of the most recent token.
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.token.end
    }

    /// Length in bytes of the most recent token.
    #[inline]
    pub fn token_len(&self) -> u32 {
        self.token.len()
    }

    /// Text of the most recent token, borrowed from the buffer.
    #[inline]
    pub fn token_text(&self) -> &'a str {
        self.cursor.slice(self.token.start, self.token.end)
    }

    /// The `index`-th character of the most recent token.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.token_text().chars().nth(index)
    }

    // ─── Scan state ──────────────────────────────────────────────

    #[inline]
    pub fn current_mode(&self) -> LexicalMode {
        self.state.mode()
    }

    #[inline]
    pub fn nesting_depth(&self) -> u32 {
        self.state.depth()
    }

    #[inline]
    pub fn comment_kind(&self) -> CommentKind {
        self.state.kind()
    }

    /// Snapshot for [`Scanner::resume()`].
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// Exclusive end of the scanned window.
    #[inline]
    pub fn window_end(&self) -> u32 {
        self.cursor.end()
    }

    #[inline]
    pub fn options(&self) -> ScanOptions {
        self.options
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.advance()
    }
}

impl FusedIterator for Scanner<'_> {}

#[cold]
#[inline(never)]
fn scan_failure(err: ScanError) -> ! {
    panic!("comment scanner failed: {err}")
}

/// Offsets are `u32`; longer buffers are scanned up to `u32::MAX`.
fn buffer_len(buffer: &str) -> u32 {
    u32::try_from(buffer.len()).unwrap_or(u32::MAX)
}

/// Clamp `[start, end)` into `buffer` and check character boundaries.
fn window(buffer: &str, start: u32, end: u32) -> (u32, u32) {
    let end = end.min(buffer_len(buffer));
    let start = start.min(end);
    assert!(
        buffer.is_char_boundary(start as usize) && buffer.is_char_boundary(end as usize),
        "scan window {start}..{end} does not fall on character boundaries"
    );
    (start, end)
}

/// Tokenize the whole of `source` with default options.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

/// Tokenize the whole of `source`, pairing each token kind with its text.
pub fn split(source: &str) -> Vec<(TokenKind, &str)> {
    let mut scanner = Scanner::new(source);
    let mut pieces = Vec::new();
    while let Some(token) = scanner.advance() {
        pieces.push((token.kind, scanner.token_text()));
    }
    pieces
}
