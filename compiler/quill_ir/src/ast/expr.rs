//! Expression nodes.

use super::operators::{BinaryOp, UnaryOp};
use super::types::TypeName;
use crate::{ExprId, ExprRange, Name};

/// Expression node.
///
/// All children are indices, not boxes; `line` is the 1-based source line
/// the node originated from, used for error attribution.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }
}

/// Expression variants.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Integer constant: 42
    Int(i32),

    /// Float constant: 3.14
    Float(f32),

    /// String constant (interned, delimiting quotes already dropped)
    Str(Name),

    /// Boolean constant: true, false
    Bool(bool),

    /// Null constant
    Null,

    /// Variable reference. With `global` set, resolution is forced to the
    /// outermost general scope only.
    Ident { name: Name, global: bool },

    /// Typecast: (type) operand
    Cast { ty: TypeName, operand: ExprId },

    /// Unary operation: op operand
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Parenthesized expression: (inner)
    Enclosed(ExprId),

    /// Function call: callee(args...)
    Call { callee: Name, args: ExprRange },
}
