//! Binary operator table.
//!
//! Each operator maps to a binding power pair. A left power lower than the
//! right one makes the operator left-associative.

use ttcn_ir::ast::BinaryOp;
use ttcn_ir::TokenKind;

/// Binding power of an infix operator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    const fn left_assoc(precedence: u8) -> Self {
        BindingPower {
            left: precedence,
            right: precedence + 1,
        }
    }
}

const RANGE: BindingPower = BindingPower::left_assoc(2);
const OR: BindingPower = BindingPower::left_assoc(4);
const XOR: BindingPower = BindingPower::left_assoc(6);
const AND: BindingPower = BindingPower::left_assoc(8);
const EQUALITY: BindingPower = BindingPower::left_assoc(10);
const RELATIONAL: BindingPower = BindingPower::left_assoc(12);
const SHIFT: BindingPower = BindingPower::left_assoc(14);
const OR4B: BindingPower = BindingPower::left_assoc(16);
const XOR4B: BindingPower = BindingPower::left_assoc(18);
const AND4B: BindingPower = BindingPower::left_assoc(20);
const ADDITIVE: BindingPower = BindingPower::left_assoc(22);
const MULTIPLICATIVE: BindingPower = BindingPower::left_assoc(24);

/// Look up the binary operator for a token.
pub(crate) fn binary_op(kind: TokenKind) -> Option<(BinaryOp, BindingPower)> {
    let entry = match kind {
        TokenKind::DotDot => (BinaryOp::Range, RANGE),
        TokenKind::Or => (BinaryOp::Or, OR),
        TokenKind::Xor => (BinaryOp::Xor, XOR),
        TokenKind::And => (BinaryOp::And, AND),
        TokenKind::EqEq => (BinaryOp::Eq, EQUALITY),
        TokenKind::NotEq => (BinaryOp::NotEq, EQUALITY),
        TokenKind::Lt => (BinaryOp::Lt, RELATIONAL),
        TokenKind::Gt => (BinaryOp::Gt, RELATIONAL),
        TokenKind::LtEq => (BinaryOp::LtEq, RELATIONAL),
        TokenKind::GtEq => (BinaryOp::GtEq, RELATIONAL),
        TokenKind::Shl => (BinaryOp::Shl, SHIFT),
        TokenKind::Shr => (BinaryOp::Shr, SHIFT),
        TokenKind::Rotl => (BinaryOp::Rotl, SHIFT),
        TokenKind::Rotr => (BinaryOp::Rotr, SHIFT),
        TokenKind::Or4b => (BinaryOp::Or4b, OR4B),
        TokenKind::Xor4b => (BinaryOp::Xor4b, XOR4B),
        TokenKind::And4b => (BinaryOp::And4b, AND4B),
        TokenKind::Plus => (BinaryOp::Add, ADDITIVE),
        TokenKind::Minus => (BinaryOp::Sub, ADDITIVE),
        TokenKind::Amp => (BinaryOp::Concat, ADDITIVE),
        TokenKind::Star => (BinaryOp::Mul, MULTIPLICATIVE),
        TokenKind::Slash => (BinaryOp::Div, MULTIPLICATIVE),
        TokenKind::Mod => (BinaryOp::Mod, MULTIPLICATIVE),
        TokenKind::Rem => (BinaryOp::Rem, MULTIPLICATIVE),
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(kind: TokenKind) -> u8 {
        binary_op(kind).map_or(0, |(_, bp)| bp.left)
    }

    #[test]
    fn levels_increase_from_range_to_multiplicative() {
        let order = [
            TokenKind::DotDot,
            TokenKind::Or,
            TokenKind::Xor,
            TokenKind::And,
            TokenKind::EqEq,
            TokenKind::Lt,
            TokenKind::Shl,
            TokenKind::Or4b,
            TokenKind::Xor4b,
            TokenKind::And4b,
            TokenKind::Plus,
            TokenKind::Star,
        ];
        for pair in order.windows(2) {
            assert!(power(pair[0]) < power(pair[1]), "{:?} < {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn operators_are_left_associative() {
        for &kind in TokenKind::ALL {
            if let Some((_, bp)) = binary_op(kind) {
                assert!(bp.left < bp.right, "{kind:?}");
            }
        }
    }

    #[test]
    fn same_level_operators_share_power() {
        assert_eq!(power(TokenKind::Plus), power(TokenKind::Amp));
        assert_eq!(power(TokenKind::Star), power(TokenKind::Rem));
        assert_eq!(power(TokenKind::Rotl), power(TokenKind::Shr));
        assert_eq!(binary_op(TokenKind::Not), None);
    }
}
