//! Quill IR - parse-tree types for the Quill interpreter.
//!
//! This crate defines the contract between the parsing collaborator and the
//! evaluator: interned identifiers, arena-allocated expression/statement
//! nodes, and the operator/type enums the evaluator dispatches on.
//!
//! # Architecture
//!
//! - `StringInterner` / `Name`: O(1) identifier interning and lookup
//! - `Ast`: flat arena storage for all nodes (`u32` index ids, no `Box`)
//! - `Expr` / `Stmt`: node kinds mirroring the source grammar
//! - `Program`: the root handed to the evaluator
//!
//! Every node carries its 1-based source line so the evaluator can attach
//! locations to fatal errors.

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;

pub use arena::{Ast, Program};
pub use ast::{AssignOp, BinaryOp, Expr, ExprKind, Param, Stmt, StmtKind, TypeName, UnaryOp};
pub use ids::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};
pub use interner::{InternError, StringInterner};
pub use name::Name;
