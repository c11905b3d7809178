use super::*;

#[test]
fn phase_ranges() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(!ErrorCode::E0001.is_parser_error());
    assert!(ErrorCode::E1015.is_parser_error());
    assert!(!ErrorCode::E9002.is_parser_error());
    assert!(!ErrorCode::E9002.is_lexer_error());
    assert!(!ErrorCode::E9001.is_parser_error());
}

#[test]
fn display_matches_as_str() {
    assert_eq!(ErrorCode::E1006.to_string(), "E1006");
    assert_eq!(format!("{}", ErrorCode::E0004), ErrorCode::E0004.as_str());
}

#[test]
fn descriptions_are_lowercase_phrases() {
    for code in [ErrorCode::E0002, ErrorCode::E1003, ErrorCode::E1010, ErrorCode::E9001] {
        let desc = code.description();
        assert!(!desc.is_empty());
        assert!(desc.chars().next().is_some_and(char::is_lowercase), "{code}: {desc}");
    }
}
