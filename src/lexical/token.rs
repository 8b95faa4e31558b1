//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Is an enumeration representing the reserved words of the language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    If,
    Then,
    Else,
    Or,
    And,
    Not,
    Pair,
    First,
    Second,
    Nil,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, KeywordKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for keyword in Self::iter() {
                map.insert(keyword.as_str(), keyword);
            }

            map
        });

        map.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Or => "or",
            Self::And => "and",
            Self::Not => "not",
            Self::Pair => "pair",
            Self::First => "first",
            Self::Second => "second",
            Self::Nil => "nil",
        }
    }
}

/// Classifies the text of a finished identifier.
///
/// Returns the matching [`TokenKind::Keyword`] when `text` is exactly one of the reserved
/// words (case-sensitive), otherwise [`TokenKind::Identifier`].
#[must_use]
pub fn resolve_keyword(text: &str) -> TokenKind {
    KeywordKind::from_str(text).map_or(TokenKind::Identifier, TokenKind::Keyword)
}

/// Is an enumeration of every kind of token the automaton can accept.
///
/// Each variant corresponds to exactly one final state of the automaton.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum TokenKind {
    /// A letter followed by letters or digits.
    Identifier,
    /// An optionally signed run of digits.
    Integer,
    /// A number with a fractional part.
    Float,
    /// A number with an exponent part.
    FloatWithExponent,
    /// A number ending with an `f`/`F` suffix.
    FloatWithSuffix,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `<`
    LessThan,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqual,
    /// `=`
    Equal,
    /// A reserved word.
    Keyword(KeywordKind),
}

impl From<KeywordKind> for TokenKind {
    fn from(keyword: KeywordKind) -> Self {
        Self::Keyword(keyword)
    }
}

impl TokenKind {
    /// Gets the name printed for the kind in token listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "Id",
            Self::Integer => "Int",
            Self::Float => "Float",
            Self::FloatWithExponent => "FloatE",
            Self::FloatWithSuffix => "FloatF",
            Self::Plus => "Add",
            Self::Minus => "Sub",
            Self::Star => "Mul",
            Self::Slash => "Div",
            Self::LeftParen => "LParen",
            Self::RightParen => "RParen",
            Self::LeftBrace => "LBrace",
            Self::RightBrace => "RBrace",
            Self::LessThan => "Lt",
            Self::LessEqual => "Le",
            Self::GreaterThan => "Gt",
            Self::GreaterEqual => "Ge",
            Self::Equal => "Eq",
            Self::Keyword(KeywordKind::If) => "Keyword_if",
            Self::Keyword(KeywordKind::Then) => "Keyword_then",
            Self::Keyword(KeywordKind::Else) => "Keyword_else",
            Self::Keyword(KeywordKind::Or) => "Keyword_or",
            Self::Keyword(KeywordKind::And) => "Keyword_and",
            Self::Keyword(KeywordKind::Not) => "Keyword_not",
            Self::Keyword(KeywordKind::Pair) => "Keyword_pair",
            Self::Keyword(KeywordKind::First) => "Keyword_first",
            Self::Keyword(KeywordKind::Second) => "Keyword_second",
            Self::Keyword(KeywordKind::Nil) => "Keyword_nil",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexeme recognized by the automaton together with its classification.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct Token {
    /// Get the characters that make up the token.
    #[get = "pub"]
    text: String,

    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Get the byte offset of the first character of the token.
    #[get_copy = "pub"]
    start: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(text: String, kind: TokenKind, start: usize) -> Self {
        Self { text, kind, start }
    }

    /// Get the byte offset just past the last character of the token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Dissolves this struct into a tuple of its text and kind.
    #[must_use]
    pub fn dissolve(self) -> (String, TokenKind) {
        (self.text, self.kind)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}   : {}", self.text, self.kind)
    }
}
