//! Reader for CSV test tables.
//!
//! A test table is a comma-separated file with a header row followed by data
//! rows of exactly three fields: case id, input literal, expected literal.
//! Since literals contain commas themselves, such fields must be quoted:
//!
//! ```text
//! id,input,expected
//! 1,"nums=[2,7,11,15];target=9","[0,1]"
//! ```
//!
//! # Format
//! * Fields are separated by `,` and records by `\n` or `\r\n`
//! * A field starting with `"` is quoted; `""` inside it is an escaped quote,
//!   and commas and line breaks inside it are part of the field
//! * Blank lines are skipped
//! * Unquoted fields are kept verbatim (no trimming)

use crate::model::TestCase;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::ParsingError;

/// Number of fields in every record of a test table.
pub const FIELDS_PER_RECORD: usize = 3;

const FIELD_DELIMITER: u8 = b',';
const QUOTE: u8 = b'"';
const UNQUOTED_FIELD_DELIMITERS: &[u8] = b",\r\n";

/// Parses all records of a test table, skipping the header row.
///
/// Returns an empty vector if the table has a header but no data rows;
/// it is up to the caller to decide whether that is an error.
///
/// # Errors
/// * [InvalidFieldCount](crate::parser::parsing_error::ParsingErrorType::InvalidFieldCount)
///   if any record (including the header) does not have exactly [FIELDS_PER_RECORD] fields
/// * [UnclosedQuote](crate::parser::parsing_error::ParsingErrorType::UnclosedQuote)
///   if a quoted field is never closed
/// * [TrailingCharacters](crate::parser::parsing_error::ParsingErrorType::TrailingCharacters)
///   if a closing quote is followed by anything but a delimiter
pub fn parse_test_table<S: ByteSource>(
    parser: &mut ByteParser<S>,
) -> Result<Vec<TestCase>, ParsingError> {
    let mut cases = Vec::new();
    let mut seen_header = false;

    while let Some([id, input, expected]) = parse_record(parser)? {
        if !seen_header {
            seen_header = true;
            continue;
        }
        cases.push(TestCase::new(cases.len() + 1, id, input, expected));
    }

    Ok(cases)
}

/// Parses the next non-blank record, or returns `None` at EOF.
fn parse_record<S: ByteSource>(
    parser: &mut ByteParser<S>,
) -> Result<Option<[String; FIELDS_PER_RECORD]>, ParsingError> {
    while parser.skip_line_break() {}
    if parser.is_eof() {
        return Ok(None);
    }

    let start = parser.position();
    let mut fields = Vec::with_capacity(FIELDS_PER_RECORD);
    loop {
        let field = if parser.peek() == Some(QUOTE) {
            parser.parse_quoted_field(QUOTE)?
        } else {
            parser.parse_unquoted_token(UNQUOTED_FIELD_DELIMITERS)
        };
        fields.push(field);

        if parser.consume_if(FIELD_DELIMITER) {
            continue;
        }
        if parser.skip_line_break() || parser.is_eof() {
            break;
        }

        // Only reachable after a quoted field or a lone '\r'
        let junk_start = parser.position();
        let rest = parser.parse_unquoted_token(b"\n");
        return Err(ParsingError::trailing_characters(parser, junk_start, rest));
    }

    match <[String; FIELDS_PER_RECORD]>::try_from(fields) {
        Ok(record) => Ok(Some(record)),
        Err(fields) => Err(ParsingError::invalid_field_count(
            parser,
            start,
            FIELDS_PER_RECORD,
            fields.len(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parsing_error::ParsingErrorType;

    #[test]
    fn test_field_count_error_points_at_record_start() {
        let mut parser = ByteParser::for_str("id,input,expected\n1,[1],[1],extra\n");
        let err = parse_test_table(&mut parser).unwrap_err();
        assert_eq!(
            err.kind(),
            &ParsingErrorType::InvalidFieldCount { expected: 3, found: 4 }
        );
        assert_eq!(err.position(), 18);
        assert!(err.to_string().ends_with("(next 16 bytes: \"1,[1],[1],extra\\n\")"));
    }

    #[test]
    fn test_junk_after_closing_quote() {
        let mut parser = ByteParser::for_str("id,input,expected\n1,\"[1]\"x,[1]\n");
        let err = parse_test_table(&mut parser).unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::TrailingCharacters("x,[1]".to_string()));
        assert_eq!(err.position(), 25);
        assert!(err.to_string().ends_with("(next 6 bytes: \"x,[1]\\n\")"));
    }
}
