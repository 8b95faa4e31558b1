//! The lexical module is responsible for converting raw text into a stream of tokens.
//!
//! Tokenization is driven by a deterministic finite automaton: [`automaton::transition`]
//! is consulted once per character, [`lexer::Lexer`] runs it with one character of
//! lookahead and maximal munch, and finished identifiers are upgraded to keywords through
//! [`token::resolve_keyword`].

pub mod automaton;

pub mod lexer;

pub mod source;

pub mod token;

pub mod token_stream;

mod error;
pub use error::{Error, InvalidToken};
