//! Property-based tests for the lexer.

use proptest::prelude::*;
use ttcn_ir::TokenKind;
use ttcn_lexer::lex;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Lexing never panics, always terminates with EOF, and produces
    /// ordered, non-overlapping spans inside the source range.
    #[test]
    fn arbitrary_input_is_covered(src in "\\PC{0,200}", base in 1u32..10_000) {
        let out = lex(&src, base);
        let tokens = out.tokens.as_slice();
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

        let end = base + u32::try_from(src.len()).unwrap_or(u32::MAX);
        let mut prev = base;
        for tok in tokens {
            prop_assert!(tok.span.start >= prev);
            prop_assert!(tok.span.end <= end);
            prev = tok.span.end;
        }
        let illegal = tokens.iter().filter(|t| t.kind == TokenKind::Illegal).count();
        prop_assert_eq!(illegal, out.errors.len());
    }

    /// Identifier-shaped words lex to a single token whose text is the word.
    #[test]
    fn words_are_single_tokens(word in "[a-zA-Z][a-zA-Z0-9_]{0,15}") {
        let out = lex(&word, 0);
        prop_assert_eq!(out.tokens.len(), 2);
        prop_assert_eq!(&*out.tokens[0].text, word.as_str());
        let kind = out.tokens[0].kind;
        prop_assert!(kind == TokenKind::Ident || kind.is_keyword());
    }
}
