use katacheck::parser::ParsingErrorType;
use katacheck::parser::literal::{
    format_int_list, format_optional_list, parse_int_list, parse_labeled_int,
    parse_labeled_int_list, parse_labeled_optional_int_list, split_fields,
};

// --- INTEGER LISTS ---
#[test]
fn test_plain_int_lists() {
    assert_eq!(parse_int_list("[2,7,11,15]").unwrap(), vec![2, 7, 11, 15]);
    assert_eq!(parse_int_list(" [ -3 , 0,4 ] ").unwrap(), vec![-3, 0, 4]);
    assert_eq!(parse_int_list("1,2,3").unwrap(), vec![1, 2, 3]);
    assert_eq!(parse_int_list("[42]").unwrap(), vec![42]);
}

#[test]
fn test_empty_lists() {
    assert!(parse_int_list("[]").unwrap().is_empty());
    assert!(parse_int_list("[ ]").unwrap().is_empty());
    assert!(parse_int_list("").unwrap().is_empty());
    assert!(parse_int_list("   ").unwrap().is_empty());
}

#[test]
fn test_labels_are_stripped_and_optional() {
    assert_eq!(
        parse_labeled_int_list("head=[1,2,3]", Some("head=")).unwrap(),
        vec![1, 2, 3]
    );
    assert_eq!(
        parse_labeled_int_list("HEAD=[1]", Some("head=")).unwrap(),
        vec![1]
    );
    assert_eq!(
        parse_labeled_int_list("[1,2]", Some("head=")).unwrap(),
        vec![1, 2]
    );
    assert_eq!(parse_labeled_int("target=9", Some("target=")).unwrap(), 9);
    assert_eq!(parse_labeled_int(" -12 ", Some("target=")).unwrap(), -12);
}

#[test]
fn test_null_tokens() {
    assert_eq!(
        parse_labeled_optional_int_list("root=[1,null,2,NuLl,3]", Some("root=")).unwrap(),
        vec![Some(1), None, Some(2), None, Some(3)]
    );
    let err = parse_int_list("[1,null]").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::NullNotAllowed);
    assert_eq!(err.position(), 3);
}

// --- ERRORS ---
#[test]
fn test_invalid_token_is_named() {
    let err = parse_int_list("[1,x,3]").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidInteger("x".to_string()));
    assert!(err.to_string().contains("'x'"));
    assert!(err.to_string().contains("at position 3"));
}

#[test]
fn test_integer_overflow_is_invalid() {
    let err = parse_int_list("[99999999999999999999]").unwrap_err();
    assert_eq!(
        err.kind(),
        &ParsingErrorType::InvalidInteger("99999999999999999999".to_string())
    );
}

#[test]
fn test_empty_element() {
    assert_eq!(
        parse_int_list("[1,,2]").unwrap_err().kind(),
        &ParsingErrorType::EmptyElement
    );
    assert_eq!(
        parse_int_list("[1,]").unwrap_err().kind(),
        &ParsingErrorType::EmptyElement
    );
}

#[test]
fn test_bracket_errors() {
    assert_eq!(
        parse_int_list("[1,2").unwrap_err().kind(),
        &ParsingErrorType::MissingClosingBracket
    );
    assert_eq!(
        parse_int_list("[1,2] extra").unwrap_err().kind(),
        &ParsingErrorType::TrailingCharacters("extra".to_string())
    );
    let err = parse_int_list("[] x").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::TrailingCharacters("x".to_string()));
    assert_eq!(err.position(), 3);
}

// --- FIELDS ---
#[test]
fn test_split_fields() {
    assert_eq!(
        split_fields("nums=[2,7];target=9", 2).unwrap(),
        vec!["nums=[2,7]", "target=9"]
    );
    assert_eq!(
        split_fields("nums=[2,7]", 2).unwrap_err().kind(),
        &ParsingErrorType::InvalidFieldCount { expected: 2, found: 1 }
    );
    assert_eq!(
        split_fields("a;b;c", 2).unwrap_err().kind(),
        &ParsingErrorType::InvalidFieldCount { expected: 2, found: 3 }
    );
}

// --- FORMATTING ---
#[test]
fn test_formatting() {
    assert_eq!(format_int_list(&[]), "[]");
    assert_eq!(format_int_list(&[3, -2, 1]), "[3,-2,1]");
    assert_eq!(format_optional_list(&[Some(1), None, Some(2)]), "[1,null,2]");
}
