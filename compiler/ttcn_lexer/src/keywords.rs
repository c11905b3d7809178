//! Reserved word lookup.
//!
//! Built once from [`TokenKind::ALL`], so adding a keyword kind to the IR is
//! all it takes to make the lexer recognize it.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use ttcn_ir::TokenKind;

fn table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TokenKind::ALL
            .iter()
            .filter(|k| k.is_keyword())
            .map(|&k| (k.display_name(), k))
            .collect()
    })
}

/// Look up a reserved word. Keywords are case sensitive.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // Shortest keyword is `do`, longest `permutation`.
    if !(2..=11).contains(&text.len()) {
        return None;
    }
    table().get(text).copied()
}
