//! Contains the [`Lexer`], which runs the automaton over a [`CharacterSource`].

use getset::CopyGetters;

use super::{
    automaton::{transition, State},
    source::CharacterSource,
    token::{resolve_keyword, Token, TokenKind},
    InvalidToken,
};

/// Switches between the classic scanning behavior and its corrected variant.
///
/// Both switches are off by default. In that configuration an identifier that ends exactly
/// at the end of the input is never upgraded to a keyword, and only a single whitespace
/// character is skipped before each token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, CopyGetters)]
pub struct LexerOptions {
    /// Whether keywords are also resolved for an identifier that runs into the end of the
    /// input.
    #[get_copy = "pub"]
    resolve_keywords_at_end_of_stream: bool,

    /// Whether a whole run of whitespace is skipped before each token.
    #[get_copy = "pub"]
    skip_whitespace_runs: bool,
}

impl LexerOptions {
    /// Options with every correction enabled.
    #[must_use]
    pub fn corrected() -> Self {
        Self {
            resolve_keywords_at_end_of_stream: true,
            skip_whitespace_runs: true,
        }
    }

    /// Sets whether keywords are resolved for identifiers ending at the end of the input.
    #[must_use]
    pub fn with_keywords_at_end_of_stream(mut self, resolve: bool) -> Self {
        self.resolve_keywords_at_end_of_stream = resolve;
        self
    }

    /// Sets whether whole runs of whitespace are skipped before each token.
    #[must_use]
    pub fn with_whitespace_runs_skipped(mut self, skip: bool) -> Self {
        self.skip_whitespace_runs = skip;
        self
    }
}

/// Is an error that can occur when invoking the [`Lexer::tokenize`] method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(missing_docs)]
pub enum TokenizeError {
    #[error("the character source is exhausted.")]
    EndOfStream,

    #[error(transparent)]
    InvalidToken(#[from] InvalidToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    Unread,
    Char(char),
    EndOfStream,
}

/// Extracts tokens from a [`CharacterSource`] one at a time.
///
/// The lexer owns its source and the single character of lookahead that sits between two
/// tokens, so independent lexers never interfere with each other.
#[derive(Debug, CopyGetters)]
pub struct Lexer<S> {
    source: S,
    lookahead: Lookahead,

    /// Get the byte offset of the lookahead character.
    #[get_copy = "pub"]
    position: usize,

    /// Get the options the lexer runs with.
    #[get_copy = "pub"]
    options: LexerOptions,
}

impl<S: CharacterSource> Lexer<S> {
    /// Creates a lexer with the default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    /// Creates a lexer with the given options.
    pub fn with_options(source: S, options: LexerOptions) -> Self {
        Self {
            source,
            lookahead: Lookahead::Unread,
            position: 0,
            options,
        }
    }

    /// Returns the lookahead character, reading it from the source on first use.
    fn peek(&mut self) -> Option<char> {
        if self.lookahead == Lookahead::Unread {
            self.lookahead = self
                .source
                .next_char()
                .map_or(Lookahead::EndOfStream, Lookahead::Char);
        }

        match self.lookahead {
            Lookahead::Char(character) => Some(character),
            Lookahead::Unread | Lookahead::EndOfStream => None,
        }
    }

    /// Consumes the lookahead character.
    fn advance(&mut self) {
        if let Lookahead::Char(character) = self.lookahead {
            self.position += character.len_utf8();
            self.lookahead = Lookahead::Unread;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();

            if !self.options.skip_whitespace_runs {
                break;
            }
        }
    }

    /// Extracts the next token.
    ///
    /// The automaton consumes characters for as long as a transition exists. The character
    /// that has no transition stays unconsumed if the automaton rests in a final state;
    /// otherwise it is consumed and becomes the last character of the invalid lexeme.
    ///
    /// # Errors
    /// - [`TokenizeError::EndOfStream`] - The source has no characters left.
    /// - [`TokenizeError::InvalidToken`] - The consumed characters do not form a token.
    pub fn tokenize(&mut self) -> Result<Token, TokenizeError> {
        self.skip_whitespace();

        if self.peek().is_none() {
            return Err(TokenizeError::EndOfStream);
        }

        let start = self.position;
        let mut text = String::new();
        let mut state = State::Start;

        while let Some(character) = self.peek() {
            if let Some(next) = transition(state, character) {
                text.push(character);
                self.advance();
                state = next;
                continue;
            }

            return match state {
                State::Final(kind) => {
                    let kind = Self::resolve(kind, &text);
                    tracing::trace!(%kind, %text, "recognized token");
                    Ok(Token::new(text, kind, start))
                }
                _ => {
                    text.push(character);
                    self.advance();
                    tracing::trace!(%text, "rejected lexeme");
                    Err(InvalidToken::new(text, start).into())
                }
            };
        }

        match state {
            State::Final(kind) => {
                let kind = if self.options.resolve_keywords_at_end_of_stream {
                    Self::resolve(kind, &text)
                } else {
                    kind
                };
                tracing::trace!(%kind, %text, "recognized token at end of stream");
                Ok(Token::new(text, kind, start))
            }
            _ => {
                tracing::trace!(%text, "rejected lexeme at end of stream");
                Err(InvalidToken::new(text, start).into())
            }
        }
    }

    fn resolve(kind: TokenKind, text: &str) -> TokenKind {
        if kind == TokenKind::Identifier {
            resolve_keyword(text)
        } else {
            kind
        }
    }
}

impl<S: CharacterSource> Iterator for Lexer<S> {
    type Item = Result<Token, InvalidToken>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.tokenize() {
            Ok(token) => Some(Ok(token)),
            Err(TokenizeError::InvalidToken(err)) => Some(Err(err)),
            Err(TokenizeError::EndOfStream) => None,
        }
    }
}
