//! Scanner configuration.

/// How finely the scanner cuts its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Adjacent lexemes of plain content, and adjacent lexemes of comment
    /// body, are merged into one token. Comment openers and closers are
    /// always tokens of their own.
    #[default]
    Merged,
    /// Every automaton lexeme is its own token. Plain content then comes out
    /// one character (or one literal) at a time.
    Lexeme,
}

/// Options accepted by [`Scanner::with_options()`](crate::Scanner::with_options).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    pub granularity: Granularity,
}

impl ScanOptions {
    /// Options that emit raw automaton lexemes.
    pub const fn lexemes() -> Self {
        Self {
            granularity: Granularity::Lexeme,
        }
    }

    #[must_use]
    pub const fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}
