//! Behavioral test suites for the evaluator.
//!
//! Programs are built through the `quill_ir` arena API and executed with a
//! buffering print handler, so effects are asserted on captured output and
//! on the typed error the run produced.

mod operators_tests;

use quill_ir::{
    AssignOp, Ast, BinaryOp, Expr, ExprId, ExprKind, Param, Program, Stmt, StmtId, StmtKind,
    StringInterner, TypeName, UnaryOp,
};

use crate::print_handler::buffer_handler;
use crate::{InterpError, InterpreterBuilder};

/// Incremental program builder.
///
/// Every statement is stamped with an increasing source line, so tests can
/// assert error locations without hand-managing line numbers.
pub(crate) struct ProgramBuilder {
    ast: Ast,
    interner: StringInterner,
    stmts: Vec<StmtId>,
    line: u32,
}

impl ProgramBuilder {
    pub(crate) fn new() -> Self {
        ProgramBuilder {
            ast: Ast::new(),
            interner: StringInterner::new(),
            stmts: Vec::new(),
            line: 1,
        }
    }

    // Expressions. All land on the current line.

    pub(crate) fn int(&mut self, n: i32) -> ExprId {
        self.expr(ExprKind::Int(n))
    }

    pub(crate) fn float(&mut self, x: f32) -> ExprId {
        self.expr(ExprKind::Float(x))
    }

    pub(crate) fn string(&mut self, s: &str) -> ExprId {
        let name = self.interner.intern(s);
        self.expr(ExprKind::Str(name))
    }

    pub(crate) fn boolean(&mut self, b: bool) -> ExprId {
        self.expr(ExprKind::Bool(b))
    }

    pub(crate) fn null(&mut self) -> ExprId {
        self.expr(ExprKind::Null)
    }

    pub(crate) fn ident(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::Ident {
            name,
            global: false,
        })
    }

    pub(crate) fn global(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::Ident { name, global: true })
    }

    pub(crate) fn bin(&mut self, left: ExprId, op: BinaryOp, right: ExprId) -> ExprId {
        self.expr(ExprKind::Binary { op, left, right })
    }

    pub(crate) fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Unary { op, operand })
    }

    pub(crate) fn cast(&mut self, ty: TypeName, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Cast { ty, operand })
    }

    pub(crate) fn enclosed(&mut self, inner: ExprId) -> ExprId {
        self.expr(ExprKind::Enclosed(inner))
    }

    pub(crate) fn call(&mut self, callee: &str, args: Vec<ExprId>) -> ExprId {
        let callee = self.interner.intern(callee);
        let args = self.ast.alloc_expr_list(args);
        self.expr(ExprKind::Call { callee, args })
    }

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        self.ast.alloc_expr(Expr::new(kind, self.line))
    }

    // Statements. `stmt` builds without pushing to the program root, for
    // nesting into blocks; the statement consumes the current line.

    pub(crate) fn stmt(&mut self, kind: StmtKind) -> StmtId {
        let id = self.ast.alloc_stmt(Stmt::new(kind, self.line));
        self.line += 1;
        id
    }

    /// Append an already-built statement to the program root.
    pub(crate) fn push(&mut self, id: StmtId) {
        self.stmts.push(id);
    }

    pub(crate) fn declare(&mut self, name: &str, ty: TypeName, init: Option<ExprId>) -> StmtId {
        let name = self.interner.intern(name);
        self.stmt(StmtKind::Declare {
            name,
            ty,
            init,
            constant: false,
        })
    }

    pub(crate) fn declare_const(&mut self, name: &str, ty: TypeName, init: Option<ExprId>) -> StmtId {
        let name = self.interner.intern(name);
        self.stmt(StmtKind::Declare {
            name,
            ty,
            init,
            constant: true,
        })
    }

    pub(crate) fn assign(&mut self, target: &str, op: AssignOp, value: ExprId) -> StmtId {
        let target = self.interner.intern(target);
        self.stmt(StmtKind::Assign {
            target,
            global: false,
            op,
            value,
        })
    }

    pub(crate) fn assign_global(&mut self, target: &str, op: AssignOp, value: ExprId) -> StmtId {
        let target = self.interner.intern(target);
        self.stmt(StmtKind::Assign {
            target,
            global: true,
            op,
            value,
        })
    }

    pub(crate) fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.stmt(StmtKind::Expr(expr))
    }

    pub(crate) fn block_stmt(&mut self, body: Vec<StmtId>) -> StmtId {
        let body = self.ast.alloc_stmt_list(body);
        self.stmt(StmtKind::Block(body))
    }

    pub(crate) fn if_stmt(
        &mut self,
        cond: ExprId,
        then_block: Vec<StmtId>,
        else_branch: Option<StmtId>,
    ) -> StmtId {
        let then_block = self.ast.alloc_stmt_list(then_block);
        self.stmt(StmtKind::If {
            cond,
            then_block,
            else_branch,
        })
    }

    pub(crate) fn while_stmt(&mut self, cond: ExprId, body: Vec<StmtId>) -> StmtId {
        let body = self.ast.alloc_stmt_list(body);
        self.stmt(StmtKind::While { cond, body })
    }

    pub(crate) fn func(
        &mut self,
        name: &str,
        params: Vec<(&str, TypeName)>,
        ret: Option<TypeName>,
        body: Vec<StmtId>,
    ) -> StmtId {
        let name = self.interner.intern(name);
        let params: Vec<Param> = params
            .into_iter()
            .map(|(pname, ty)| Param {
                name: self.interner.intern(pname),
                ty,
            })
            .collect();
        let params = self.ast.alloc_params(params);
        let body = self.ast.alloc_stmt_list(body);
        self.stmt(StmtKind::FunctionDef {
            name,
            params,
            ret,
            body,
        })
    }

    pub(crate) fn ret(&mut self, value: Option<ExprId>) -> StmtId {
        self.stmt(StmtKind::Return { value })
    }

    /// A `print(expr);` statement.
    pub(crate) fn print(&mut self, expr: ExprId) -> StmtId {
        let call = self.call("print", vec![expr]);
        self.expr_stmt(call)
    }

    pub(crate) fn finish(self) -> (Ast, StringInterner, Program) {
        let ProgramBuilder {
            mut ast,
            interner,
            stmts,
            ..
        } = self;
        let body = ast.alloc_stmt_list(stmts);
        (ast, interner, Program::new(body))
    }
}

/// Run a program, returning the evaluation result and captured output.
pub(crate) fn run(builder: ProgramBuilder) -> (Result<(), InterpError>, String) {
    let (ast, interner, program) = builder.finish();
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&ast, &interner)
        .print_handler(handler.clone())
        .build();
    let result = interpreter.evaluate(&program);
    (result, handler.get_output())
}

/// Run a program that must succeed, returning captured output.
#[track_caller]
pub(crate) fn run_ok(builder: ProgramBuilder) -> String {
    let (result, output) = run(builder);
    match result {
        Ok(()) => output,
        Err(err) => panic!("evaluation failed: {err} (output so far: {output:?})"),
    }
}

/// Run a program that must fail, returning the error and captured output.
#[track_caller]
pub(crate) fn run_err(builder: ProgramBuilder) -> (InterpError, String) {
    let (result, output) = run(builder);
    match result {
        Ok(()) => panic!("evaluation unexpectedly succeeded (output: {output:?})"),
        Err(err) => (err, output),
    }
}
