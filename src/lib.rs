//! Lexical analyzer for a small expression-oriented language.
//!
//! The input is classified into identifiers, numeric literals with optional exponent and
//! suffix, arithmetic and relational operators, brackets and the reserved words
//! `if then else or and not pair first second nil` by a deterministic finite automaton run
//! with maximal munch.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use std::{io::BufRead, path::Path};

use base::{source_file::SourceFile, FileProvider, Handler, Result};
use lexical::source::ReaderSource;

pub use lexical::{
    lexer::{Lexer, LexerOptions},
    token::{Token, TokenKind},
    token_stream::TokenStream,
};

/// Converts the source file at `path` to tokens.
///
/// Invalid lexemes are reported to `handler`; they never stop the tokenization.
///
/// # Errors
/// - If an error occurs while reading the file.
pub fn tokenize(
    handler: &impl Handler<base::Error>,
    file_provider: &impl FileProvider,
    path: &Path,
    options: LexerOptions,
) -> Result<TokenStream> {
    tracing::info!("Tokenizing the source code at path: {}", path.display());

    let source_file = SourceFile::load(path, file_provider)?;

    Ok(TokenStream::tokenize(&source_file, handler, options))
}

/// Converts the given text to tokens.
///
/// Invalid lexemes are reported to `handler`; they never stop the tokenization.
#[must_use]
pub fn tokenize_str(
    handler: &impl Handler<base::Error>,
    input: &str,
    options: LexerOptions,
) -> TokenStream {
    TokenStream::from_source(input.chars(), handler, options)
}

/// Converts the text read from `reader` to tokens, decoding it as UTF-8 on the fly.
///
/// Invalid lexemes are reported to `handler`. A read error or malformed UTF-8 ends the input
/// early and is logged.
pub fn tokenize_reader(
    handler: &impl Handler<base::Error>,
    reader: impl BufRead,
    options: LexerOptions,
) -> TokenStream {
    TokenStream::from_source(ReaderSource::new(reader), handler, options)
}
