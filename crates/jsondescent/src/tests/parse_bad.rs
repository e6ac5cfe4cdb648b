use crate::{ErrorKind, Expectation, parse};

/// Asserts that parsing fails, that the rendered message contains
/// `expected_sub`, and that the failure position is `line`:`column`.
fn assert_err_contains(text: &str, expected_sub: &str, line: usize, column: usize) {
    let err = parse(text).unwrap_err();
    let s = err.to_string();
    assert!(
        s.contains(expected_sub),
        "expected substring {expected_sub:?} in {s:?}"
    );
    assert_eq!((err.line, err.column), (line, column), "position in {s:?}");
}

#[test]
fn error_empty_document() {
    assert_err_contains("", "unexpected end of input, expected '{'", 1, 1);
}

#[test]
fn error_whitespace_only_document() {
    assert_err_contains("  \n ", "unexpected end of input, expected '{'", 2, 2);
}

#[test]
fn error_scalar_root() {
    assert_err_contains("1", "syntax error: expected '{'", 1, 1);
}

#[test]
fn error_array_root() {
    assert_err_contains("[1,2]", "syntax error: expected '{'", 1, 1);
}

#[test]
fn error_unterminated_empty_object() {
    assert_err_contains("{", "unexpected end of input, expected a string or '}'", 1, 2);
}

#[test]
fn error_unterminated_object_after_member() {
    assert_err_contains(
        "{\"a\":1",
        "unexpected end of input, expected ',' or '}'",
        1,
        7,
    );
}

#[test]
fn error_trailing_comma_in_object() {
    assert_err_contains("{\"a\":1,}", "syntax error: expected a string", 1, 8);
}

#[test]
fn error_trailing_comma_in_array() {
    assert_err_contains("{\"a\":[1,]}", "syntax error: expected a value", 1, 9);
}

#[test]
fn error_missing_value_after_colon() {
    assert_err_contains("{\"a\":}", "syntax error: expected a value", 1, 6);
}

#[test]
fn error_missing_colon() {
    assert_err_contains("{\"a\" 1}", "syntax error: expected ':'", 1, 6);
}

#[test]
fn error_unterminated_array() {
    assert_err_contains("{\"a\":[1}", "syntax error: expected ',' or ']'", 1, 8);
}

#[test]
fn error_missing_value_in_empty_array_with_comma() {
    assert_err_contains("{\"a\":[,1]}", "syntax error: expected a value or ']'", 1, 7);
}

#[test]
fn error_unterminated_string() {
    assert_err_contains("{\"a", "unexpected end of input, expected '\"'", 1, 4);
}

#[test]
fn error_dangling_escape_at_end_of_input() {
    assert_err_contains("{\"a\\", "unexpected end of input, expected '\"'", 1, 5);
}

#[test]
fn error_raw_newline_in_string() {
    assert_err_contains("{\"a\nb\":1}", "syntax error: expected '\"'", 1, 4);
}

#[test]
fn error_keyword_prefix_of_identifier() {
    // `nullable` must not match `null` with trailing garbage.
    assert_err_contains("{\"a\":nullable}", "syntax error: expected a value", 1, 6);
}

#[test]
fn error_misspelled_keyword() {
    assert_err_contains("{\"a\":tru}", "expected a value", 1, 6);
}

#[test]
fn error_signed_number_is_rejected() {
    assert_err_contains("{\"a\":-1}", "expected a value", 1, 6);
}

#[test]
fn error_fractional_number_is_rejected() {
    assert_err_contains("{\"a\":1.5}", "syntax error: expected ',' or '}'", 1, 7);
}

#[test]
fn error_exponent_is_rejected() {
    assert_err_contains("{\"a\":1e3}", "syntax error: expected ',' or '}'", 1, 7);
}

#[test]
fn error_trailing_content() {
    let err = parse("{} garbage").unwrap_err();
    assert_eq!(err.kind, ErrorKind::TrailingContent);
    assert_eq!((err.line, err.column), (1, 4));
    assert_eq!(
        err.to_string(),
        "trailing characters after the root object at 1:4"
    );
}

#[test]
fn error_second_document() {
    let err = parse("{}{}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::TrailingContent);
    assert_eq!((err.line, err.column), (1, 3));
}

#[test]
fn error_kind_carries_expectations() {
    let err = parse("{\"a\":1,}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax(vec![Expectation::String]));
}

#[test]
fn error_positions_count_characters_not_bytes() {
    // Multi-byte content before the failure must not skew the column.
    assert_err_contains("{\"héllo\":}", "expected a value", 1, 10);
}

#[test]
fn error_position_spans_lines() {
    assert_err_contains("{\n  \"a\": 1,\n  \"b\": tru\n}", "expected a value", 3, 8);
}
