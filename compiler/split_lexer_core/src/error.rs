//! Scanner errors.
//!
//! Reaching the end of the window is not an error; it is reported as
//! `None` by [`Scanner::advance()`](crate::Scanner::advance). The two
//! variants here are contract violations.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The automaton rejected the first character of a lexeme and had no
    /// accepting state to fall back to. The grammar has a catch-all rule in
    /// every lexical mode, so this means the transition function is broken.
    #[error("could not match input at byte {offset}")]
    NoMatch { offset: u32 },

    /// A pushback asked to un-read more characters than the current token
    /// contains.
    #[error("pushback of {requested} characters exceeds the {available} in the current token")]
    PushbackTooLarge { requested: usize, available: usize },
}
