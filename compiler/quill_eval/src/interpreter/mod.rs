//! Tree-walking interpreter for Quill programs.
//!
//! # Architecture
//!
//! One `Interpreter` owns the mutable evaluation state (environment,
//! native-function registry, call stack) for a single AST walk; the
//! external-function registry is the only state shared across `evaluate`
//! calls and is immutable after construction.
//!
//! Statement execution returns a [`Flow`]: either `Normal` or
//! `Returning(value)`. Blocks and loops inspect it after each statement
//! and stop early, so a `return` unwinds through arbitrarily many nested
//! blocks within the same function body; only the call operation in
//! `call.rs` consumes it. Errors use `Result` and `?`, never panics.
//!
//! Helper modules:
//! - `expr` - Expression dispatch (constants, identifiers, operators)
//! - `call` - External and native function calls
//! - `scope_guard` - Paired scope push/pop for the environment and the
//!   native-function registry
//! - `builder` - Interpreter assembly with the standard externals

mod builder;
mod call;
mod expr;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use std::rc::Rc;

use quill_ir::{
    AssignOp, Ast, BinaryOp, ExprId, Name, ParamRange, Program, StmtId, StmtKind, StmtRange,
    StringInterner, TypeName,
};

use crate::environment::{Environment, Variable, WriteError};
use crate::errors::{
    assign_to_const, compound_assign_unsupported, const_without_init, declared_type_mismatch,
    duplicate_function, duplicate_variable, external_collision, global_not_found,
    missing_return_value, not_truthy, return_outside_function, return_type_mismatch,
    undefined_variable, unexpected_return_value,
};
use crate::externals::ExternalRegistry;
use crate::functions::{CallStack, NativeFunction, NativeRegistry};
use crate::operators::evaluate_binary;
use crate::{InterpError, Value};

/// Result of executing one statement.
///
/// `Returning` carries the pending return value upward until the owning
/// call consumes it; while it propagates, no further sibling statement
/// executes at any nesting level.
#[derive(Clone, Debug)]
pub(crate) enum Flow {
    Normal,
    Returning(Value),
}

/// Tree-walking evaluator for one parsed program.
pub struct Interpreter<'a> {
    pub(crate) ast: &'a Ast,
    pub(crate) interner: &'a StringInterner,
    pub(crate) externals: Rc<ExternalRegistry>,
    pub(crate) env: Environment,
    pub(crate) natives: NativeRegistry,
    pub(crate) calls: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter over a parse tree and an external registry.
    pub fn new(
        ast: &'a Ast,
        interner: &'a StringInterner,
        externals: Rc<ExternalRegistry>,
    ) -> Self {
        Interpreter {
            ast,
            interner,
            externals,
            env: Environment::new(),
            natives: NativeRegistry::new(),
            calls: CallStack::new(),
        }
    }

    /// Evaluate a whole program.
    ///
    /// Invoked once per parsed program; aborts on the first violation.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, program: &Program) -> Result<(), InterpError> {
        let ast = self.ast;
        for &id in ast.get_stmt_list(program.body) {
            // `return` at top level already failed in exec_return, so a
            // Returning flow cannot escape here; stop defensively anyway.
            if let Flow::Returning(_) = self.exec_stmt(id)? {
                break;
            }
        }
        Ok(())
    }

    /// Textual form of an interned name.
    pub(crate) fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Execute the statements of a list in the current scope, stopping at
    /// the first `Returning` flow.
    pub(crate) fn exec_stmt_list(&mut self, range: StmtRange) -> Result<Flow, InterpError> {
        let ast = self.ast;
        for &id in ast.get_stmt_list(range) {
            if let Flow::Returning(value) = self.exec_stmt(id)? {
                return Ok(Flow::Returning(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Execute one statement.
    fn exec_stmt(&mut self, id: StmtId) -> Result<Flow, InterpError> {
        let stmt = *self.ast.get_stmt(id);
        let line = stmt.line;
        match stmt.kind {
            StmtKind::Declare {
                name,
                ty,
                init,
                constant,
            } => {
                self.exec_declare(name, ty, init, constant, line)?;
                Ok(Flow::Normal)
            }
            StmtKind::Assign {
                target,
                global,
                op,
                value,
            } => {
                self.exec_assign(target, global, op, value, line)?;
                Ok(Flow::Normal)
            }
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            }
            StmtKind::Block(body) => {
                let mut scoped = self.scoped();
                scoped.exec_stmt_list(body)
            }
            StmtKind::If {
                cond,
                then_block,
                else_branch,
            } => self.exec_if(cond, then_block, else_branch, line),
            StmtKind::While { cond, body } => self.exec_while(cond, body, line),
            StmtKind::FunctionDef {
                name,
                params,
                ret,
                body,
            } => {
                self.exec_function_def(name, params, ret, body, line)?;
                Ok(Flow::Normal)
            }
            StmtKind::Return { value } => self.exec_return(value, line),
        }
    }

    /// Declaration: unused name, optional initializer (type's zero value
    /// when omitted), Integer→Float promotion, constants need an
    /// initializer.
    fn exec_declare(
        &mut self,
        name: Name,
        ty: TypeName,
        init: Option<ExprId>,
        constant: bool,
        line: u32,
    ) -> Result<(), InterpError> {
        if self.env.is_declared(name) {
            return Err(duplicate_variable(self.name(name)).at(line));
        }
        let value = match init {
            Some(expr) => self.eval_expr(expr)?,
            None => {
                if constant {
                    return Err(const_without_init(self.name(name)).at(line));
                }
                Value::zero(ty)
            }
        };
        let found = value.type_name();
        let value = value
            .coerce_to(ty)
            .ok_or_else(|| declared_type_mismatch(self.name(name), ty, found).at(line))?;
        self.env.declare(
            name,
            Variable {
                ty,
                value,
                constant,
            },
        );
        Ok(())
    }

    /// Assignment to an existing variable, including `+=`/`-=`.
    fn exec_assign(
        &mut self,
        target: Name,
        global: bool,
        op: AssignOp,
        value: ExprId,
        line: u32,
    ) -> Result<(), InterpError> {
        let rhs = self.eval_expr(value)?;
        let new_value = match op {
            AssignOp::Set => rhs,
            AssignOp::Add | AssignOp::Sub => {
                let var = if global {
                    self.env.lookup_global(target)
                } else {
                    self.env.lookup(target)
                };
                let Some(var) = var else {
                    return Err(self.missing_target(target, global).at(line));
                };
                // Strings support `+=` only; numerics both; booleans neither.
                match (var.ty, op) {
                    (TypeName::Str, AssignOp::Add) | (TypeName::Int | TypeName::Float, _) => {}
                    (ty, _) => {
                        return Err(
                            compound_assign_unsupported(op.as_symbol(), ty.as_str()).at(line)
                        );
                    }
                }
                let current = var.value.clone();
                let binary = match op {
                    AssignOp::Add => BinaryOp::Add,
                    _ => BinaryOp::Sub,
                };
                evaluate_binary(current, rhs, binary).map_err(|e| e.at(line))?
            }
        };
        let found = new_value.type_name();
        let result = if global {
            self.env.write_global(target, new_value)
        } else {
            self.env.write(target, new_value)
        };
        result.map_err(|err| {
            match err {
                WriteError::Undefined => self.missing_target(target, global),
                WriteError::Constant => assign_to_const(self.name(target)),
                WriteError::TypeMismatch { expected } => {
                    declared_type_mismatch(self.name(target), expected, found)
                }
            }
            .at(line)
        })
    }

    /// The NameError an unresolvable assignment target produces.
    fn missing_target(&self, target: Name, global: bool) -> InterpError {
        if global {
            global_not_found(self.name(target))
        } else {
            undefined_variable(self.name(target))
        }
    }

    /// Conditional: one scope around condition and taken branch; the
    /// else/else-if chain runs after that scope closes.
    fn exec_if(
        &mut self,
        cond: ExprId,
        then_block: StmtRange,
        else_branch: Option<StmtId>,
        line: u32,
    ) -> Result<Flow, InterpError> {
        {
            let mut scoped = self.scoped();
            let cond_val = scoped.eval_expr(cond)?;
            let truthy = cond_val
                .truthiness()
                .ok_or_else(|| not_truthy(cond_val.type_name()).at(line))?;
            if truthy {
                return scoped.exec_stmt_list(then_block);
            }
        }
        match else_branch {
            Some(stmt) => self.exec_stmt(stmt),
            None => Ok(Flow::Normal),
        }
    }

    /// Loop: a single scope stays alive across all iterations.
    fn exec_while(
        &mut self,
        cond: ExprId,
        body: StmtRange,
        line: u32,
    ) -> Result<Flow, InterpError> {
        let mut scoped = self.scoped();
        loop {
            let cond_val = scoped.eval_expr(cond)?;
            let truthy = cond_val
                .truthiness()
                .ok_or_else(|| not_truthy(cond_val.type_name()).at(line))?;
            if !truthy {
                break;
            }
            if let Flow::Returning(value) = scoped.exec_stmt_list(body)? {
                return Ok(Flow::Returning(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Native function definition at the current scope.
    fn exec_function_def(
        &mut self,
        name: Name,
        params: ParamRange,
        ret: Option<TypeName>,
        body: StmtRange,
        line: u32,
    ) -> Result<(), InterpError> {
        if self.externals.contains(name) {
            return Err(external_collision(self.name(name)).at(line));
        }
        if self.natives.defined_in_current(name) {
            return Err(duplicate_function(self.name(name)).at(line));
        }
        self.natives.define(NativeFunction {
            name,
            params,
            ret,
            body,
        });
        Ok(())
    }

    /// `return`: validate against the innermost call frame and start
    /// unwinding.
    fn exec_return(&mut self, value: Option<ExprId>, line: u32) -> Result<Flow, InterpError> {
        let Some(frame) = self.calls.current().copied() else {
            return Err(return_outside_function().at(line));
        };
        let result = match value {
            Some(expr) => {
                let v = self.eval_expr(expr)?;
                match frame.ret {
                    Some(ty) => {
                        let found = v.type_name();
                        v.coerce_to(ty).ok_or_else(|| {
                            return_type_mismatch(self.name(frame.name), ty, found).at(line)
                        })?
                    }
                    // A "no value" function may only return the null a
                    // valueless expression (e.g. a print call) produced.
                    None => {
                        if !v.is_null() {
                            return Err(
                                unexpected_return_value(self.name(frame.name)).at(line)
                            );
                        }
                        Value::Null
                    }
                }
            }
            None => {
                if let Some(ty) = frame.ret {
                    return Err(missing_return_value(self.name(frame.name), ty).at(line));
                }
                Value::Null
            }
        };
        Ok(Flow::Returning(result))
    }
}
