use katacheck::parser::ByteParser;
use katacheck::parser::ParsingErrorType;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_cursor_and_matching() {
    let mut parser = ByteParser::for_str("  Root=[1]\r\nnext");
    parser.skip_whitespace();
    assert_eq!(parser.position(), 2);
    assert!(parser.consume_if_word("ROOT="));
    assert!(parser.consume_if(b'['));
    assert_eq!(parser.parse_unquoted_token(b"]"), "1");
    assert!(parser.consume_if(b']'));
    assert!(parser.skip_line_break());
    assert_eq!(parser.get_context_as_string(2), "ne");
    assert_eq!(parser.consume_rest(), "next");
    assert!(parser.is_eof());
    assert_eq!(parser.peek(), None);
    assert!(!parser.skip_line_break());
}

#[test]
fn test_whitespace_includes_line_breaks() {
    let mut parser = ByteParser::for_str(" \t\r\nx");
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'x'));
    assert_eq!(parser.position(), 4);
}

#[test]
fn test_quoted_field_with_escapes() {
    let mut parser = ByteParser::for_str("\"say \"\"hi\"\", [1,2]\",rest");
    assert_eq!(parser.parse_quoted_field(b'"').unwrap(), "say \"hi\", [1,2]");
    assert!(parser.consume_if(b','));
    assert_eq!(parser.consume_rest(), "rest");
}

#[test]
fn test_unclosed_quote() {
    let mut parser = ByteParser::for_str("\"[1,2]");
    let err = parser.parse_quoted_field(b'"').unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnclosedQuote);
    assert_eq!(err.position(), 0);
}

#[test]
fn test_for_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "id,input,expected").unwrap();
    let mut parser = ByteParser::for_file(file.path()).unwrap();
    assert_eq!(parser.parse_unquoted_token(b","), "id");
}

#[test]
fn test_for_missing_file() {
    assert!(ByteParser::for_file("does/not/exist.csv").is_err());
}
