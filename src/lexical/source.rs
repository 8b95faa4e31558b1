//! Sources of characters for the [`Lexer`](super::lexer::Lexer).

use std::{
    io::{BufRead, ErrorKind},
    str::Chars,
};

use crate::base::source_file::SourceIterator;

/// Supplies characters one at a time.
///
/// Every call returns the next character that has not been returned yet, or `None` once
/// the end of the stream has been reached.
pub trait CharacterSource {
    /// Returns the next character, or `None` at the end of the stream.
    fn next_char(&mut self) -> Option<char>;
}

impl<S: CharacterSource + ?Sized> CharacterSource for &mut S {
    fn next_char(&mut self) -> Option<char> {
        (**self).next_char()
    }
}

impl CharacterSource for Chars<'_> {
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

impl CharacterSource for SourceIterator<'_> {
    fn next_char(&mut self) -> Option<char> {
        self.next().map(|(_, character)| character)
    }
}

/// Decodes UTF-8 characters from a buffered reader as they are requested.
///
/// Read errors and malformed UTF-8 end the stream; they are reported through `tracing`.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> ReaderSource<R> {
    /// Creates a new source reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            finished: false,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buffer) => break *buffer.first()?,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    tracing::error!("failed to read input: {err}");
                    return None;
                }
            }
        };
        self.reader.consume(1);
        Some(byte)
    }

    fn decode(&mut self) -> Option<char> {
        let first = self.next_byte()?;
        let width = match first.leading_ones() {
            0 => 1,
            2 => 2,
            3 => 3,
            4 => 4,
            _ => {
                tracing::error!("input is not valid UTF-8: unexpected byte {first:#04x}");
                return None;
            }
        };

        let mut buffer = [first, 0, 0, 0];
        for slot in &mut buffer[1..width] {
            let Some(byte) = self.next_byte() else {
                tracing::error!("input is not valid UTF-8: truncated character");
                return None;
            };
            *slot = byte;
        }

        match std::str::from_utf8(&buffer[..width]) {
            Ok(decoded) => decoded.chars().next(),
            Err(err) => {
                tracing::error!("input is not valid UTF-8: {err}");
                None
            }
        }
    }
}

impl<R: BufRead> CharacterSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        if self.finished {
            return None;
        }

        let character = self.decode();
        self.finished = character.is_none();
        character
    }
}
