//! Parsers for test tables and the literals inside them.
//!
//! This module provides the low-level [ByteParser] with its byte source,
//! the bracketed [literal] parser, the CSV [table] reader, and the shared
//! [ParsingError].

pub mod byte_parser;
pub mod byte_source;
pub mod literal;
pub mod parsing_error;
pub mod table;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
