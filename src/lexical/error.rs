use std::fmt::Display;

use getset::{CopyGetters, Getters};

/// Represents an error that occurred during the lexical analysis of the source code.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidToken(#[from] InvalidToken),
}

/// A lexeme the automaton could not turn into a token.
///
/// The lexeme always ends with the character that caused the automaton to halt in a
/// non-final state, or with the last character of the input if the input ended first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, thiserror::Error)]
pub struct InvalidToken {
    /// Get the rejected characters.
    #[get = "pub"]
    lexeme: String,

    /// Get the byte offset of the first rejected character.
    #[get_copy = "pub"]
    start: usize,
}

impl InvalidToken {
    pub(crate) fn new(lexeme: String, start: usize) -> Self {
        Self { lexeme, start }
    }

    /// Get the byte offset just past the last rejected character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.lexeme.len()
    }
}

impl Display for InvalidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : Lexical Error, invalid token", self.lexeme)
    }
}
