//! Parser snapshots for bounded backtracking.
//!
//! A few spots in the grammar cannot be decided by looking at the current
//! token. `decmatch (x) ...` is one: the parenthesized part is either the
//! encoding or the whole matcher. The parser takes a snapshot, tries one
//! reading and restores the snapshot if it does not fit.
//!
//! Snapshots only capture the cursor position and context flags.
//! Diagnostics are not rolled back, so speculative productions must not
//! report; they return `Err` and let the caller decide.

use crate::context::ParseContext;

/// A lightweight snapshot of parser state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    /// Position in the token stream.
    pub(crate) cursor_pos: usize,
    pub(crate) context: ParseContext,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(cursor_pos: usize, context: ParseContext) -> Self {
        ParserSnapshot {
            cursor_pos,
            context,
        }
    }
}
