//! Character cursor over a bounded window of a borrowed buffer.
//!
//! The cursor never reads outside `[pos, end)`: the window end plays the
//! role of EOF. Positions are byte offsets into the whole buffer (not into
//! the window), so spans stay valid when the caller scans a sub-range.
//!
//! Characters are decoded as whole `char`s, so supplementary-plane code
//! points are stepped over in one move and token boundaries always fall on
//! character boundaries.

/// Cursor over `text[start..end]`.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
///
/// # Invariant
///
/// `pos <= end <= text.len()`, and both `pos` and `end` lie on UTF-8
/// character boundaries of `text`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Current read position (byte offset into `text`).
    pos: u32,
    /// Exclusive end of the readable window.
    end: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at `start` over `text[start..end]`.
    ///
    /// # Contract
    ///
    /// `start <= end <= text.len()` and both offsets are character
    /// boundaries. The scanner checks this before constructing a cursor.
    pub(crate) fn new(text: &'a str, start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "window start {start} exceeds end {end}");
        debug_assert!(
            end as usize <= text.len(),
            "window end {end} exceeds buffer length {}",
            text.len()
        );
        debug_assert!(text.is_char_boundary(start as usize));
        debug_assert!(text.is_char_boundary(end as usize));
        Self {
            text,
            pos: start,
            end,
        }
    }

    /// Returns the character at the current position, or `None` at the
    /// window end.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Move past `c`, which must be the current character.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn bump(&mut self, c: char) {
        debug_assert_eq!(self.current(), Some(c));
        self.pos += c.len_utf8() as u32;
    }

    /// Returns `true` once the cursor has reached the window end.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Current byte offset in the buffer.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Exclusive end of the window.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// The whole buffer the window was cut from.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Unread part of the window.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos as usize..self.end as usize]
    }

    /// Extract `text[start..end]`.
    ///
    /// # Contract
    ///
    /// `start..end` lies within the buffer on character boundaries. This
    /// holds for offsets produced by the scanner.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start as usize..end as usize]
    }

    /// Advance to the next line terminator (`\n` or `\r`) or the window end
    /// using SIMD-accelerated search.
    ///
    /// Used by the automaton to skip line comment bodies in one step.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= end, which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        let remaining = self.remaining().as_bytes();
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.end;
        }
    }
}
