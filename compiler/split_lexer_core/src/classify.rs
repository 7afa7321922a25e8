//! Character classification for the splitting automaton.
//!
//! Every character maps to one of [`CLASS_COUNT`] equivalence classes. Two
//! characters share a class exactly when no automaton transition tells them
//! apart, which keeps the transition function small. Only ASCII characters
//! are ever distinguished; every other code point (including supplementary
//! plane characters, which arrive here as whole `char`s) is [`CharClass::Other`].

/// Equivalence class of an input character.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Anything not listed below.
    Other = 0,
    /// `/`
    Slash = 1,
    /// `*`
    Star = 2,
    /// `1`..=`7`
    OctalDigit = 3,
    /// `8`, `9`, `B`..=`F`, `a`..=`f`
    HexDigit = 4,
    /// `\`
    Backslash = 5,
    /// `\n` or `\r`
    LineTerminator = 6,
    /// `u`, introduces a unicode escape in character literals.
    LowerU = 7,
    /// `0`
    Zero = 8,
    /// `A`, kept apart from the hex digits for the `'\u000A'` literal.
    UpperA = 9,
    /// `'`
    Quote = 10,
    /// `"`
    DoubleQuote = 11,
    /// `#`
    Hash = 12,
    /// `!`
    Bang = 13,
    /// `:`
    Colon = 14,
    /// `` ` ``
    Backtick = 15,
}

/// Number of character classes.
pub const CLASS_COUNT: usize = 16;

impl CharClass {
    /// Every class, in discriminant order.
    pub const ALL: [CharClass; CLASS_COUNT] = [
        CharClass::Other,
        CharClass::Slash,
        CharClass::Star,
        CharClass::OctalDigit,
        CharClass::HexDigit,
        CharClass::Backslash,
        CharClass::LineTerminator,
        CharClass::LowerU,
        CharClass::Zero,
        CharClass::UpperA,
        CharClass::Quote,
        CharClass::DoubleQuote,
        CharClass::Hash,
        CharClass::Bang,
        CharClass::Colon,
        CharClass::Backtick,
    ];

    const fn of_ascii(b: u8) -> CharClass {
        match b {
            b'/' => CharClass::Slash,
            b'*' => CharClass::Star,
            b'1'..=b'7' => CharClass::OctalDigit,
            b'8' | b'9' | b'B'..=b'F' | b'a'..=b'f' => CharClass::HexDigit,
            b'\\' => CharClass::Backslash,
            b'\n' | b'\r' => CharClass::LineTerminator,
            b'u' => CharClass::LowerU,
            b'0' => CharClass::Zero,
            b'A' => CharClass::UpperA,
            b'\'' => CharClass::Quote,
            b'"' => CharClass::DoubleQuote,
            b'#' => CharClass::Hash,
            b'!' => CharClass::Bang,
            b':' => CharClass::Colon,
            b'`' => CharClass::Backtick,
            _ => CharClass::Other,
        }
    }
}

/// 128-entry lookup table for the ASCII range.
/// Table lookup replaces the multi-arm `match` with a single indexed read.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static ASCII_CLASS_TABLE: [CharClass; 128] = {
    let mut table = [CharClass::Other; 128];
    let mut i = 0u16;
    while i < 128 {
        table[i as usize] = CharClass::of_ascii(i as u8);
        i += 1;
    }
    table
};

/// Classify a character.
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        ASCII_CLASS_TABLE[c as usize]
    } else {
        CharClass::Other
    }
}
