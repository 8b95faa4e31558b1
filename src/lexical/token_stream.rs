//! Contains the [`TokenStream`] struct.

use std::{fmt::Debug, sync::Arc};

use derive_more::Deref;

use crate::base::{self, source_file::SourceFile, Handler};

use super::{
    lexer::{Lexer, LexerOptions},
    source::CharacterSource,
    token::Token,
    Error, InvalidToken,
};

/// Is the list of tokens recognized in a source, in source order.
///
/// Invalid lexemes are not part of the stream; they are reported to a [`Handler`] while the
/// stream is built.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl TokenStream {
    /// Tokenizes the given source file.
    ///
    /// Every invalid lexeme is reported to `handler` and scanning resumes right after it.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(source_file = %source_file.path().display()))]
    pub fn tokenize(
        source_file: &Arc<SourceFile>,
        handler: &impl Handler<base::Error>,
        options: LexerOptions,
    ) -> Self {
        let mut tokens = Vec::new();

        Self::scan(
            Lexer::with_options(source_file.iter(), options),
            |token| tokens.push(token),
            |err| {
                if let Some(location) = source_file.get_location(err.start()) {
                    tracing::debug!(
                        line = location.line,
                        column = location.column,
                        lexeme = %err.lexeme(),
                        "invalid token"
                    );
                }
                handler.receive(Error::from(err).into());
            },
        );

        Self { tokens }
    }

    /// Tokenizes the characters of an arbitrary [`CharacterSource`].
    ///
    /// Every invalid lexeme is reported to `handler` and scanning resumes right after it.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn from_source(
        source: impl CharacterSource,
        handler: &impl Handler<base::Error>,
        options: LexerOptions,
    ) -> Self {
        let mut tokens = Vec::new();

        Self::scan(
            Lexer::with_options(source, options),
            |token| tokens.push(token),
            |err| handler.receive(Error::from(err).into()),
        );

        Self { tokens }
    }

    /// Runs `lexer` until the end of its source, passing every token to `on_token` and every
    /// invalid lexeme to `on_invalid`, in source order.
    ///
    /// Returns the number of invalid lexemes encountered.
    pub fn scan<S: CharacterSource>(
        lexer: Lexer<S>,
        mut on_token: impl FnMut(Token),
        mut on_invalid: impl FnMut(InvalidToken),
    ) -> usize {
        let mut invalid = 0;

        for result in lexer {
            match result {
                Ok(token) => on_token(token),
                Err(err) => {
                    invalid += 1;
                    on_invalid(err);
                }
            }
        }

        tracing::debug!(invalid, "finished scanning");

        invalid
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}
