//! Token kinds for TTCN-3.

/// Declares [`TokenKind`] together with its display table, so the two can
/// never drift apart.
macro_rules! token_kinds {
    ($($variant:ident => $name:literal,)*) => {
        /// Terminal classes produced by the lexer.
        ///
        /// Fieldless so it is `Copy` and fits a bitset: literal text lives
        /// on the [`Token`](super::Token), not here.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TokenKind {
            $($variant,)*
        }

        impl TokenKind {
            /// Every token kind, in discriminant order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Human-readable name used in diagnostics. For keywords and
            /// punctuation this is the exact source spelling.
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                }
            }
        }
    };
}

token_kinds! {
    // Special
    Eof => "end of file",
    Illegal => "illegal token",

    // Literals
    Ident => "identifier",
    Int => "integer",
    Float => "float",
    String => "string",
    Bitstring => "bitstring",
    Modifier => "modifier",

    // Punctuation
    LParen => "(",
    RParen => ")",
    LBracket => "[",
    RBracket => "]",
    LBrace => "{",
    RBrace => "}",
    Comma => ",",
    Semicolon => ";",
    Colon => ":",
    Dot => ".",
    DotDot => "..",
    Assign => ":=",
    Arrow => "->",
    Question => "?",

    // Operators
    Plus => "+",
    Minus => "-",
    Star => "*",
    Slash => "/",
    Amp => "&",
    EqEq => "==",
    NotEq => "!=",
    Lt => "<",
    Gt => ">",
    LtEq => "<=",
    GtEq => ">=",
    Shl => "<<",
    Shr => ">>",
    Rotl => "<@",
    Rotr => "@>",

    // Keywords (keep `Address` first and `Xor4b` last, see `is_keyword`)
    Address => "address",
    Alive => "alive",
    All => "all",
    Alt => "alt",
    Altstep => "altstep",
    And => "and",
    And4b => "and4b",
    Any => "any",
    Break => "break",
    Call => "call",
    Case => "case",
    Catch => "catch",
    Check => "check",
    Clear => "clear",
    Complement => "complement",
    Component => "component",
    Connect => "connect",
    Const => "const",
    Continue => "continue",
    Control => "control",
    Create => "create",
    Decmatch => "decmatch",
    Default => "default",
    Disconnect => "disconnect",
    Display => "display",
    Do => "do",
    Done => "done",
    Else => "else",
    Encode => "encode",
    Enumerated => "enumerated",
    Except => "except",
    Exception => "exception",
    Extends => "extends",
    Extension => "extension",
    External => "external",
    False => "false",
    For => "for",
    Friend => "friend",
    From => "from",
    Function => "function",
    Getcall => "getcall",
    Getreply => "getreply",
    Goto => "goto",
    Group => "group",
    Halt => "halt",
    If => "if",
    Ifpresent => "ifpresent",
    Import => "import",
    In => "in",
    Inout => "inout",
    Interleave => "interleave",
    Kill => "kill",
    Killed => "killed",
    Label => "label",
    Language => "language",
    Length => "length",
    Map => "map",
    Message => "message",
    Mixed => "mixed",
    Mod => "mod",
    Modifies => "modifies",
    Module => "module",
    Modulepar => "modulepar",
    Mtc => "mtc",
    Noblock => "noblock",
    Not => "not",
    Not4b => "not4b",
    Null => "null",
    Of => "of",
    Omit => "omit",
    On => "on",
    Optional => "optional",
    Or => "or",
    Or4b => "or4b",
    Out => "out",
    Override => "override",
    Param => "param",
    Pattern => "pattern",
    Permutation => "permutation",
    Port => "port",
    Present => "present",
    Private => "private",
    Procedure => "procedure",
    Public => "public",
    Raise => "raise",
    Read => "read",
    Receive => "receive",
    Record => "record",
    Recursive => "recursive",
    Rem => "rem",
    Repeat => "repeat",
    Reply => "reply",
    Return => "return",
    Running => "running",
    Runs => "runs",
    Select => "select",
    SelfKw => "self",
    Send => "send",
    Sender => "sender",
    Set => "set",
    Signature => "signature",
    Start => "start",
    Stepsize => "stepsize",
    Stop => "stop",
    Subset => "subset",
    Superset => "superset",
    System => "system",
    Template => "template",
    Testcase => "testcase",
    Timeout => "timeout",
    Timer => "timer",
    Timestamp => "timestamp",
    To => "to",
    Trigger => "trigger",
    True => "true",
    Type => "type",
    Union => "union",
    Universal => "universal",
    Unmap => "unmap",
    Value => "value",
    Var => "var",
    Variant => "variant",
    While => "while",
    With => "with",
    Xor => "xor",
    Xor4b => "xor4b",
}

impl TokenKind {
    /// Number of token kinds; bitsets over kinds must cover this many bits.
    pub const COUNT: usize = TokenKind::ALL.len();

    /// Discriminant index, usable as a bit position.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Check whether this kind is a reserved word.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        let i = self as u8;
        i >= TokenKind::Address as u8 && i <= TokenKind::Xor4b as u8
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
