//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] for parsing text-based input with support
//! for peeking, consuming, case-insensitive word matching, and quote-aware field
//! parsing. Used as the foundation for both the literal parser and the test
//! table reader.

use crate::parser::byte_source::{ByteSource, InMemoryByteSource};
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser for ASCII text with support for peeking, consuming, and pattern matching.
///
/// Operates on any [ByteSource] and assumes ASCII structure; non-ASCII bytes are
/// only ever copied through into tokens and fields.
///
/// # Example
/// ```
/// use katacheck::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  root=[1,null,2]");
/// parser.skip_whitespace();
/// assert!(parser.consume_if_word("ROOT="));
/// assert!(parser.consume_if(b'['));
/// assert_eq!(parser.parse_unquoted_token(b",]"), "1");
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a string by copying it into a Vec.
    ///
    /// # Arguments
    /// * `input` - The string to parse
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` over the full contents of a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn for_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    ///
    /// # Arguments
    /// * `source` - The byte source to parse
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive whitespace characters.
    ///
    /// Whitespace includes: space (' '), tab ('\t'), newline ('\n'), and carriage return ('\r').
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Consumes a single line break (`\n` or `\r\n`) if present.
    ///
    /// # Returns
    /// `true` if a line break was consumed, `false` otherwise
    pub fn skip_line_break(&mut self) -> bool {
        if self.consume_if_sequence(b"\r\n") {
            return true;
        }
        self.consume_if(b'\n')
    }

    /// Checks if the current byte matches the target byte (case-insensitive for ASCII).
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek().is_some_and(|b| b.eq_ignore_ascii_case(&ch))
    }

    /// Checks if the following bytes match the given byte sequence (case-insensitive).
    #[inline]
    pub fn peek_is_sequence(&self, sequence: &[u8]) -> bool {
        let context = self.source.peek_slice(sequence.len());
        context.len() == sequence.len() && context.eq_ignore_ascii_case(sequence)
    }

    /// Consumes the current byte if it matches the target byte (case-insensitive).
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Consumes the next bytes if they match the given word/token (case-insensitive).
    ///
    /// # Returns
    /// `true` if the word was matched and consumed, `false` otherwise
    pub fn consume_if_word(&mut self, word: &str) -> bool {
        self.consume_if_sequence(word.as_bytes())
    }

    /// Consumes the next bytes if they match the given byte sequence (case-insensitive).
    ///
    /// # Returns
    /// `true` if the sequence was matched and consumed, `false` otherwise
    pub fn consume_if_sequence(&mut self, sequence: &[u8]) -> bool {
        if !self.peek_is_sequence(sequence) {
            return false;
        }

        for _ in 0..sequence.len() {
            self.next_byte();
        }

        true
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current parser position in the input.
    ///
    /// Useful for error messages and tracking parser state.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        self.get_context_at_as_string(self.position(), k)
    }

    /// Returns a string from up to `k` bytes starting at `start`, which may lie
    /// behind the current position (already consumed input).
    pub fn get_context_at_as_string(&self, start: usize, k: usize) -> String {
        String::from_utf8_lossy(self.source.slice_at(start, k)).into_owned()
    }

    /// Parses an unquoted token until any of the given delimiters (or EOF) is
    /// encountered. The delimiter itself is not consumed.
    ///
    /// # Arguments
    /// * `delimiters` - Byte array of characters that end the token
    ///
    /// # Returns
    /// The parsed token, possibly empty
    pub fn parse_unquoted_token(&mut self, delimiters: &[u8]) -> String {
        let mut bytes = Vec::new();

        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            bytes.push(b);
            self.next_byte();
        }

        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Parses a field enclosed in `quote` bytes with escape support.
    ///
    /// Assumes the parser is positioned at the opening quote. A quote within
    /// the field is escaped by doubling it (e.g. `"say ""hi"""` becomes `say "hi"`).
    ///
    /// # Returns
    /// The parsed field without the enclosing quotes
    ///
    /// # Errors
    /// Returns an error if the closing quote is missing
    pub fn parse_quoted_field(&mut self, quote: u8) -> Result<String, ParsingError> {
        let start = self.position();
        self.next_byte(); // consume opening quote

        let mut bytes = Vec::new();
        loop {
            match self.next_byte() {
                Some(b) if b == quote => {
                    if self.peek() == Some(quote) {
                        bytes.push(quote);
                        self.next_byte();
                    } else {
                        break;
                    }
                }
                Some(b) => bytes.push(b),
                None => {
                    return Err(ParsingError::unclosed_quote(self, start));
                }
            }
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Consumes all remaining input and returns it as a string.
    pub fn consume_rest(&mut self) -> String {
        let mut bytes = Vec::new();
        while let Some(b) = self.next_byte() {
            bytes.push(b);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parsing_error::ParsingErrorType;

    #[test]
    fn test_unclosed_quote_reports_opening_position() {
        let mut parser = ByteParser::for_str("ab,\"never closed");
        parser.parse_unquoted_token(b",");
        parser.consume_if(b',');
        let err = parser.parse_quoted_field(b'"').unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::UnclosedQuote);
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_non_ascii_bytes_pass_through_tokens() {
        let mut parser = ByteParser::for_str("héllo,x");
        assert_eq!(parser.parse_unquoted_token(b","), "héllo");
        assert!(parser.consume_if(b','));
        assert_eq!(parser.consume_rest(), "x");
        assert!(parser.is_eof());
    }
}
