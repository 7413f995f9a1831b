//! Flat AST types using arena allocation.
//!
//! Node kinds mirror the source grammar the parsing collaborator produces:
//! program, block, declaration, assignment, the expression forms, if/while
//! blocks, function definitions, and return statements.
//!
//! # Module Structure
//!
//! - `expr`: Expression nodes (`Expr`, `ExprKind`)
//! - `stmt`: Statement nodes (`Stmt`, `StmtKind`, `AssignOp`, `Param`)
//! - `operators`: Binary and unary operators
//! - `types`: The declared-type enum (`TypeName`)

mod expr;
mod operators;
mod stmt;
mod types;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{AssignOp, Param, Stmt, StmtKind};
pub use types::TypeName;
