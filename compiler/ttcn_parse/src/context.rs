//! Parse context flags for context-sensitive parsing.
//!
//! A few rules depend on where a production is used rather than on the
//! tokens alone: guarded alternatives are statements only directly inside
//! an altstep body, and `all from` may not appear inside `complement(...)`.

/// Context flags for parsing.
///
/// Multiple flags can be combined with [`with`](Self::with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseContext(u8);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Directly inside an altstep body, where `[guard] action` is a
    /// statement.
    pub const IN_ALTSTEP: Self = Self(1 << 0);

    /// Inside the list of a `complement(...)` template.
    pub const IN_COMPLEMENT: Self = Self(1 << 1);

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_combine_and_clear() {
        let ctx = ParseContext::NONE.with(ParseContext::IN_ALTSTEP);
        assert!(ctx.has(ParseContext::IN_ALTSTEP));
        assert!(!ctx.has(ParseContext::IN_COMPLEMENT));

        let ctx = ctx.with(ParseContext::IN_COMPLEMENT);
        assert!(ctx.has(ParseContext::IN_COMPLEMENT));

        let ctx = ctx.without(ParseContext::IN_ALTSTEP);
        assert!(!ctx.has(ParseContext::IN_ALTSTEP));
        assert!(ctx.has(ParseContext::IN_COMPLEMENT));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(ParseContext::default(), ParseContext::NONE);
    }
}
