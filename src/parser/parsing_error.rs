//! Error types for literal and test table parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while parsing bracketed literals or CSV test tables.

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use std::fmt;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur during literal and table parsing.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    #[error("Invalid integer token '{0}'")]
    InvalidInteger(String),
    #[error("Token 'null' is not allowed in an integer list")]
    NullNotAllowed,
    #[error("Empty element in list")]
    EmptyElement,
    #[error("Missing closing ']'")]
    MissingClosingBracket,
    #[error("Unexpected trailing characters '{0}'")]
    TrailingCharacters(String),
    #[error("Expected {expected} fields but found {found}")]
    InvalidFieldCount { expected: usize, found: usize },
    #[error("Unclosed quoted field")]
    UnclosedQuote,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (position and following bytes).
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self::from_parser_at(kind, parser, parser.position())
    }

    /// Create a ParsingError reported at an earlier `position` of the parser's input,
    /// e.g. the start of the offending token; the context starts there as well.
    pub fn from_parser_at<S: ByteSource>(
        kind: ParsingErrorType,
        parser: &ByteParser<S>,
        position: usize,
    ) -> Self {
        Self {
            kind,
            position,
            context: parser.get_context_at_as_string(position, DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for InvalidInteger, naming the token starting at `start`
    pub fn invalid_integer<S: ByteSource>(
        parser: &ByteParser<S>,
        start: usize,
        token: String,
    ) -> Self {
        Self::from_parser_at(ParsingErrorType::InvalidInteger(token), parser, start)
    }

    /// Convenience constructor for EmptyElement at the element's `start`
    pub fn empty_element<S: ByteSource>(parser: &ByteParser<S>, start: usize) -> Self {
        Self::from_parser_at(ParsingErrorType::EmptyElement, parser, start)
    }

    /// Convenience constructor for MissingClosingBracket
    pub fn missing_closing_bracket<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::MissingClosingBracket, parser)
    }

    /// Convenience constructor for TrailingCharacters starting at `start`
    pub fn trailing_characters<S: ByteSource>(
        parser: &ByteParser<S>,
        start: usize,
        rest: String,
    ) -> Self {
        Self::from_parser_at(ParsingErrorType::TrailingCharacters(rest), parser, start)
    }

    /// Convenience constructor for InvalidFieldCount of the record starting at `start`
    pub fn invalid_field_count<S: ByteSource>(
        parser: &ByteParser<S>,
        start: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::from_parser_at(
            ParsingErrorType::InvalidFieldCount { expected, found },
            parser,
            start,
        )
    }

    /// Convenience constructor for UnclosedQuote of the field opened at `start`
    pub fn unclosed_quote<S: ByteSource>(parser: &ByteParser<S>, start: usize) -> Self {
        Self::from_parser_at(ParsingErrorType::UnclosedQuote, parser, start)
    }

    /// Create a ParsingError without parser context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)?;

        if !self.context.is_empty() {
            write!(f, " (next {} bytes: {:?})", self.context.len(), self.context)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParsingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
