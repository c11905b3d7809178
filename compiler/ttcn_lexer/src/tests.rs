use super::*;
use pretty_assertions::assert_eq;
use TokenKind::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src, 0).tokens.kinds()
}

fn texts(src: &str) -> Vec<std::string::String> {
    lex(src, 0)
        .tokens
        .iter()
        .map(|t| t.text.to_string())
        .collect()
}

#[test]
fn empty_source_is_just_eof() {
    let out = lex("", 7);
    assert_eq!(out.tokens.kinds(), vec![Eof]);
    assert_eq!(out.tokens[0].span, Span::point(7));
    assert!(out.errors.is_empty());
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("module M { type record R {} }"),
        vec![Module, Ident, LBrace, Type, Record, Ident, LBrace, RBrace, RBrace, Eof]
    );
    assert_eq!(kinds("self mtc system"), vec![SelfKw, Mtc, System, Eof]);
    assert_eq!(kinds("integer charstring"), vec![Ident, Ident, Eof]);
}

#[test]
fn numbers_and_ranges() {
    assert_eq!(kinds("1..5"), vec![Int, DotDot, Int, Eof]);
    assert_eq!(kinds("1.5 2e10 3.0E-2"), vec![Float, Float, Float, Eof]);
    assert_eq!(kinds("a.b"), vec![Ident, Dot, Ident, Eof]);
}

#[test]
fn multi_char_operators() {
    assert_eq!(
        kinds(":= -> == != <= >= << >> <@ @> .."),
        vec![Assign, Arrow, EqEq, NotEq, LtEq, GtEq, Shl, Shr, Rotl, Rotr, DotDot, Eof]
    );
    assert_eq!(kinds("a<b"), vec![Ident, Lt, Ident, Eof]);
    assert_eq!(kinds("x:y"), vec![Ident, Colon, Ident, Eof]);
}

#[test]
fn word_operators_are_keywords() {
    assert_eq!(
        kinds("not a and4b b mod c rem d xor4b e"),
        vec![Not, Ident, And4b, Ident, Mod, Ident, Rem, Ident, Xor4b, Ident, Eof]
    );
}

#[test]
fn modifiers() {
    assert_eq!(kinds("@lazy @index @decoded"), vec![Modifier, Modifier, Modifier, Eof]);
    assert_eq!(texts("@nocase"), vec!["@nocase", ""]);
}

#[test]
fn strings_keep_their_quotes() {
    let out = lex(r#""a""b" "" "line
break""#, 0);
    assert!(out.errors.is_empty());
    assert_eq!(out.tokens.kinds(), vec![String, String, String, Eof]);
    assert_eq!(&*out.tokens[0].text, r#""a""b""#);
    assert_eq!(string_value(&out.tokens[0].text), "a\"b");
    assert_eq!(string_value(&out.tokens[1].text), "");
}

#[test]
fn bitstrings() {
    assert_eq!(kinds("'0101'B 'FF'H '00ff'O"), vec![Bitstring, Bitstring, Bitstring, Eof]);
    let out = lex("'0101'", 0);
    assert_eq!(out.errors.first().map(|e| e.kind), Some(LexErrorKind::MalformedBitstring));
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("a // line comment\n/* block\n * comment */ b"),
        vec![Ident, Ident, Eof]
    );
}

#[test]
fn unterminated_constructs_are_reported() {
    let out = lex("x := \"abc", 0);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(out.tokens.kinds().last(), Some(&Eof));

    let out = lex("a /* never closed", 0);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnterminatedComment);
    assert_eq!(out.errors[0].to_diagnostic().code, ttcn_diagnostic::ErrorCode::E0003);
}

#[test]
fn invalid_character_becomes_illegal_token() {
    let out = lex("a $ b", 0);
    assert_eq!(out.tokens.kinds(), vec![Ident, Illegal, Ident, Eof]);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidCharacter('$'));
    assert_eq!(out.errors[0].span, Span::new(2, 3));
}

#[test]
fn spans_are_offset_by_base() {
    let out = lex("ab cd", 100);
    assert_eq!(out.tokens[0].span, Span::new(100, 102));
    assert_eq!(out.tokens[1].span, Span::new(103, 105));
    assert_eq!(out.tokens[2].span, Span::point(105));
}
