//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after
//! errors. Uses bitset-based O(1) membership testing inspired by Go's
//! parser.

use ttcn_ir::TokenKind;

use crate::cursor::Cursor;

// TokenSet is two u128 words wide.
const _: () = assert!(
    TokenKind::COUNT <= 256,
    "TokenSet uses a 256-bit bitset; all token kinds must have index < 256"
);

/// A set of token kinds using bitset representation for O(1) membership
/// testing.
///
/// ```text
/// const BLOCK_END: TokenSet = TokenSet::new()
///     .with(TokenKind::RBrace)
///     .with(TokenKind::Eof);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TokenSet {
    low: u128,
    high: u128,
}

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        TokenSet { low: 0, high: 0 }
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let i = kind.index();
        if i < 128 {
            TokenSet {
                low: self.low | (1u128 << i),
                high: self.high,
            }
        } else {
            TokenSet {
                low: self.low,
                high: self.high | (1u128 << (i - 128)),
            }
        }
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        TokenSet {
            low: self.low | other.low,
            high: self.high | other.high,
        }
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let i = kind.index();
        if i < 128 {
            self.low & (1u128 << i) != 0
        } else {
            self.high & (1u128 << (i - 128)) != 0
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.low == 0 && self.high == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.low.count_ones() + self.high.count_ones()
    }
}

/// Keywords that start a statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Var)
    .with(TokenKind::Const)
    .with(TokenKind::Template)
    .with(TokenKind::Timer)
    .with(TokenKind::Port)
    .with(TokenKind::If)
    .with(TokenKind::For)
    .with(TokenKind::While)
    .with(TokenKind::Do)
    .with(TokenKind::Alt)
    .with(TokenKind::Interleave)
    .with(TokenKind::Select)
    .with(TokenKind::Return)
    .with(TokenKind::Break)
    .with(TokenKind::Continue)
    .with(TokenKind::Repeat)
    .with(TokenKind::Label)
    .with(TokenKind::Goto);

/// Keywords that start a module definition.
pub const DEF_START: TokenSet = TokenSet::new()
    .with(TokenKind::Import)
    .with(TokenKind::Type)
    .with(TokenKind::Const)
    .with(TokenKind::Template)
    .with(TokenKind::Modulepar)
    .with(TokenKind::Function)
    .with(TokenKind::Testcase)
    .with(TokenKind::Altstep)
    .with(TokenKind::Signature)
    .with(TokenKind::Group)
    .with(TokenKind::Control)
    .with(TokenKind::External)
    .with(TokenKind::Friend)
    .with(TokenKind::Public)
    .with(TokenKind::Private);

/// Recovery set inside statement blocks.
pub const STMT_BOUNDARY: TokenSet = STMT_START
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Recovery set inside module and group bodies.
pub const DEF_BOUNDARY: TokenSet = DEF_START
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Recovery set between guarded alternatives.
pub const ALT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::LBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Recovery set between `case` branches of a select statement.
pub const CASE_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Case)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Recovery set between top-level nodes of a unit.
pub const TOP_BOUNDARY: TokenSet = DEF_BOUNDARY
    .union(STMT_BOUNDARY)
    .with(TokenKind::Module);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// A `{ ... }` group is skipped as a whole, so the `}` closing a body that
/// failed to parse is not mistaken for the end of the enclosing list.
///
/// Returns the number of skipped tokens.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> usize {
    let mut skipped = 0;
    while !cursor.is_at_end() && !recovery.contains(cursor.current_kind()) {
        if cursor.check(TokenKind::LBrace) {
            skipped += skip_group(cursor);
        } else {
            cursor.advance();
            skipped += 1;
        }
    }
    skipped
}

/// Skip from `{` past its matching `}`, or to EOF if it is unclosed.
fn skip_group(cursor: &mut Cursor<'_>) -> usize {
    let mut depth = 0usize;
    let mut skipped = 0;
    while !cursor.is_at_end() {
        match cursor.current_kind() {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth = depth.saturating_sub(1),
            _ => {}
        }
        cursor.advance();
        skipped += 1;
        if depth == 0 {
            break;
        }
    }
    skipped
}
