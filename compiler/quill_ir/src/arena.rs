//! Arena allocation for the flat AST.
//!
//! All nodes live in contiguous vectors owned by [`Ast`]; cross-node
//! references are `u32` indices and (start, len) ranges, so a whole parse
//! tree deallocates in bulk and walking it stays cache-friendly.

use std::fmt;

use crate::ast::{Expr, Param, Stmt};
use crate::{ExprId, ExprRange, ParamRange, StmtId, StmtRange};

/// Contiguous storage for all nodes of one parsed program.
#[derive(Clone, Default)]
pub struct Ast {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// All statements (indexed by `StmtId`).
    stmts: Vec<Stmt>,

    /// Flattened expression lists (for call arguments).
    expr_lists: Vec<ExprId>,

    /// Flattened statement lists (for program/block/function bodies).
    stmt_lists: Vec<StmtId>,

    /// All function parameters.
    params: Vec<Param>,
}

impl Ast {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its id.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// Get an expression by id.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Allocate a statement, returning its id.
    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    /// Get a statement by id.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Allocate an expression list, returning its range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len() as u32;
        self.expr_lists.extend(exprs);
        let len = (self.expr_lists.len() as u32 - start) as u16;
        ExprRange::new(start, len)
    }

    /// Get an expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Allocate a statement list, returning its range.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len() as u32;
        self.stmt_lists.extend(stmts);
        let len = (self.stmt_lists.len() as u32 - start) as u16;
        StmtRange::new(start, len)
    }

    /// Get a statement list by range.
    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }

    /// Allocate a parameter list, returning its range.
    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let start = self.params.len() as u32;
        self.params.extend(params);
        let len = (self.params.len() as u32 - start) as u16;
        ParamRange::new(start, len)
    }

    /// Get parameters by range.
    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }

    /// Number of expressions in the arena.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty() && self.stmts.is_empty()
    }
}

impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ast {{ {} exprs, {} stmts, {} params }}",
            self.exprs.len(),
            self.stmts.len(),
            self.params.len()
        )
    }
}

/// A parsed program: the root statement list of one script.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Program {
    pub body: StmtRange,
}

impl Program {
    /// Create a program from its root statement list.
    pub fn new(body: StmtRange) -> Self {
        Program { body }
    }
}
