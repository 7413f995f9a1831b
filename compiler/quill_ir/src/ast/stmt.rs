//! Statement nodes.

use super::types::TypeName;
use crate::{ExprId, Name, ParamRange, StmtId, StmtRange};

/// Statement node.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

/// Statement variants.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// Typed variable declaration: `const? name: type (= init)?;`
    ///
    /// A missing initializer defaults to the type's zero value and is
    /// rejected for constants.
    Declare {
        name: Name,
        ty: TypeName,
        init: Option<ExprId>,
        constant: bool,
    },

    /// Assignment to an existing variable: `target op value;`
    ///
    /// With `global` set, the target resolves against the outermost general
    /// scope only.
    Assign {
        target: Name,
        global: bool,
        op: AssignOp,
        value: ExprId,
    },

    /// Expression statement (e.g. a call evaluated for its effect).
    Expr(ExprId),

    /// Bare block: `{ ... }`
    Block(StmtRange),

    /// Conditional. `else_branch` links to another `If` (else-if) or a
    /// `Block` (plain else) statement.
    If {
        cond: ExprId,
        then_block: StmtRange,
        else_branch: Option<StmtId>,
    },

    /// Loop: `while cond { ... }`
    While { cond: ExprId, body: StmtRange },

    /// Native function definition. `ret` of `None` means "no value".
    FunctionDef {
        name: Name,
        params: ParamRange,
        ret: Option<TypeName>,
        body: StmtRange,
    },

    /// Return statement with optional result expression.
    Return { value: Option<ExprId> },
}

/// Assignment operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    /// `=`
    Set,
    /// `+=`
    Add,
    /// `-=`
    Sub,
}

impl AssignOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Set => "=",
            Self::Add => "+=",
            Self::Sub => "-=",
        }
    }
}

/// A function parameter: name and declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: TypeName,
}
