//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E9xxx: Internal errors and limits
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Unterminated block comment
    E0003,
    /// Malformed bitstring, hexstring or octetstring literal
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Redirect not allowed for this operation
    E1006,
    /// Redirect target is not a reference
    E1007,
    /// Malformed communication or configuration operation
    E1008,
    /// Conflicting qualifiers
    E1009,
    /// Unsupported construct
    E1010,
    /// Modifier not allowed here
    E1011,
    /// Invalid template form
    E1012,
    /// Expected definition or statement
    E1013,
    /// Missing semicolon
    E1014,
    /// Unexpected input after fragment
    E1015,

    // Internal Errors (E9xxx)
    /// Source does not fit in the file set
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line description, used for `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "unterminated block comment",
            ErrorCode::E0004 => "malformed bitstring literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1006 => "redirect not allowed for this operation",
            ErrorCode::E1007 => "redirect target is not a reference",
            ErrorCode::E1008 => "malformed communication operation",
            ErrorCode::E1009 => "conflicting qualifiers",
            ErrorCode::E1010 => "unsupported construct",
            ErrorCode::E1011 => "modifier not allowed here",
            ErrorCode::E1012 => "invalid template form",
            ErrorCode::E1013 => "expected definition or statement",
            ErrorCode::E1014 => "missing semicolon",
            ErrorCode::E1015 => "unexpected input after fragment",
            ErrorCode::E9001 => "source does not fit in the file set",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser/syntax error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
