//! Parsing and formatting of bracketed list literals.
//!
//! Test tables describe inputs and expected outputs with LeetCode-style literals:
//! * `[1,2,3]` - integer list
//! * `root=[1,null,2]` - labelled optional-integer list (level-order tree)
//! * `nums=[2,7,11,15];target=9` - two labelled fields separated by `;`
//!
//! # Grammar
//! * `literal ::= [label] list`
//! * `list ::= '[' [element (',' element)*] ']' | element (',' element)*`
//! * `element ::= integer | 'null'`
//!
//! Whitespace may surround any element, label, or bracket. Labels and `null`
//! are matched case-insensitively. An empty list (`[]` or blank text) is valid.

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};

/// Separator between the fields of a multi-field input literal.
pub const FIELD_SEPARATOR: char = ';';

/// Token standing for an absent slot in optional-integer lists.
pub const NULL_TOKEN: &str = "null";

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses an integer list such as `[1, 2, 3]`.
///
/// # Examples
/// ```
/// use katacheck::parser::literal::parse_int_list;
///
/// assert_eq!(parse_int_list("[3,2,1]").unwrap(), vec![3, 2, 1]);
/// assert_eq!(parse_int_list("  [] ").unwrap(), Vec::<i64>::new());
/// assert!(parse_int_list("[1,x,3]").is_err());
/// ```
pub fn parse_int_list(literal: &str) -> Result<Vec<i64>, ParsingError> {
    parse_labeled_int_list(literal, None)
}

/// Parses an integer list optionally prefixed with `label`, e.g. `head=[1,2,3]`.
///
/// The label is stripped if present; an unlabelled list is accepted as well.
pub fn parse_labeled_int_list(
    literal: &str,
    label: Option<&str>,
) -> Result<Vec<i64>, ParsingError> {
    let mut parser = ByteParser::for_str(literal);
    parse_list(&mut parser, label, parse_integer_element)
}

/// Parses an optional-integer list optionally prefixed with `label`,
/// e.g. `root=[1,null,2]`, mapping `null` to [None].
///
/// # Examples
/// ```
/// use katacheck::parser::literal::parse_labeled_optional_int_list;
///
/// let values = parse_labeled_optional_int_list("root=[1,NULL,2]", Some("root=")).unwrap();
/// assert_eq!(values, vec![Some(1), None, Some(2)]);
/// ```
pub fn parse_labeled_optional_int_list(
    literal: &str,
    label: Option<&str>,
) -> Result<Vec<Option<i64>>, ParsingError> {
    let mut parser = ByteParser::for_str(literal);
    parse_list(&mut parser, label, parse_optional_element)
}

/// Parses a single integer optionally prefixed with `label`, e.g. `target=9`.
pub fn parse_labeled_int(literal: &str, label: Option<&str>) -> Result<i64, ParsingError> {
    let mut parser = ByteParser::for_str(literal);
    parser.skip_whitespace();
    if let Some(label) = label {
        parser.consume_if_word(label);
        parser.skip_whitespace();
    }

    let start = parser.position();
    let token = parser.consume_rest();
    let token = token.trim_end();
    token
        .parse()
        .map_err(|_| ParsingError::invalid_integer(&parser, start, token.to_string()))
}

/// Splits a multi-field literal on `;` and checks the number of fields.
///
/// # Errors
/// [ParsingErrorType::InvalidFieldCount] if there are not exactly `expected` fields.
pub fn split_fields(literal: &str, expected: usize) -> Result<Vec<&str>, ParsingError> {
    let fields: Vec<&str> = literal.split(FIELD_SEPARATOR).collect();
    if fields.len() != expected {
        return Err(ParsingError::without_context(ParsingErrorType::InvalidFieldCount {
            expected,
            found: fields.len(),
        }));
    }
    Ok(fields)
}

// ============================================================================
// QUICK WRITING API (pub)
// ============================================================================
/// Formats an integer list in bracketed literal form, e.g. `[3,2,1]`.
///
/// Inverse of [parse_int_list].
pub fn format_int_list(values: &[i64]) -> String {
    let elements: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", elements.join(","))
}

/// Formats an optional-integer list in bracketed literal form, e.g. `[1,null,2]`.
///
/// Inverse of [parse_labeled_optional_int_list] without label.
pub fn format_optional_list(values: &[Option<i64>]) -> String {
    let elements: Vec<String> = values
        .iter()
        .map(|value| match value {
            Some(v) => v.to_string(),
            None => NULL_TOKEN.to_string(),
        })
        .collect();
    format!("[{}]", elements.join(","))
}

// ============================================================================
// Parsing
// ============================================================================
/// Parses `[label] list` and requires the input to end afterwards.
///
/// `element` converts each trimmed, non-empty token; its error is reported
/// at the start position of the token.
fn parse_list<S: ByteSource, T>(
    parser: &mut ByteParser<S>,
    label: Option<&str>,
    element: fn(&str) -> Result<T, ParsingErrorType>,
) -> Result<Vec<T>, ParsingError> {
    parser.skip_whitespace();
    if let Some(label) = label {
        parser.consume_if_word(label);
        parser.skip_whitespace();
    }

    let bracketed = parser.consume_if(b'[');
    let delimiters: &[u8] = if bracketed { b",]" } else { b"," };

    let mut values = Vec::new();
    parser.skip_whitespace();
    let empty = if bracketed {
        parser.consume_if(b']')
    } else {
        parser.is_eof()
    };

    if !empty {
        loop {
            parser.skip_whitespace();
            let start = parser.position();
            let token = parser.parse_unquoted_token(delimiters);
            let token = token.trim_end();
            if token.is_empty() {
                return Err(ParsingError::empty_element(parser, start));
            }
            let value =
                element(token).map_err(|kind| ParsingError::from_parser_at(kind, parser, start))?;
            values.push(value);

            if parser.consume_if(b',') {
                continue;
            }
            if bracketed && !parser.consume_if(b']') {
                return Err(ParsingError::missing_closing_bracket(parser));
            }
            break;
        }
    }

    parser.skip_whitespace();
    if !parser.is_eof() {
        let start = parser.position();
        let rest = parser.consume_rest();
        return Err(ParsingError::trailing_characters(parser, start, rest));
    }

    Ok(values)
}

fn parse_integer_element(token: &str) -> Result<i64, ParsingErrorType> {
    if token.eq_ignore_ascii_case(NULL_TOKEN) {
        return Err(ParsingErrorType::NullNotAllowed);
    }
    token
        .parse()
        .map_err(|_| ParsingErrorType::InvalidInteger(token.to_string()))
}

fn parse_optional_element(token: &str) -> Result<Option<i64>, ParsingErrorType> {
    if token.eq_ignore_ascii_case(NULL_TOKEN) {
        return Ok(None);
    }
    parse_integer_element(token).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_position_points_at_bad_token() {
        let err = parse_int_list("[1, x ,3]").unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::InvalidInteger("x".to_string()));
        assert_eq!(err.position(), 4);
        assert!(err.to_string().ends_with("at position 4 (next 5 bytes: \"x ,3]\")"));
    }

    #[test]
    fn test_error_context_starts_at_reported_position() {
        let err = parse_labeled_int("target=9x", Some("target=")).unwrap_err();
        assert_eq!(err.position(), 7);
        assert!(err.to_string().ends_with("(next 2 bytes: \"9x\")"));

        let err = parse_int_list("[1,,2]").unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::EmptyElement);
        assert!(err.to_string().ends_with("at position 3 (next 3 bytes: \",2]\")"));

        let err = parse_int_list("[1] tail").unwrap_err();
        assert!(err.to_string().ends_with("at position 4 (next 4 bytes: \"tail\")"));
    }

    #[test]
    fn test_unbracketed_list_stops_at_stray_bracket() {
        let err = parse_int_list("1,2]").unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::InvalidInteger("2]".to_string()));
    }
}
