//! Function call evaluation methods for the Interpreter.
//!
//! External functions resolve first and keep fixed identity; native
//! functions resolve innermost-scope-first. Arguments are evaluated
//! left-to-right in the caller's scope and a null argument is an error in
//! both protocols.

use quill_ir::{ExprId, ExprRange, Name};

use crate::environment::Variable;
use crate::errors::{
    arity_mismatch, declared_type_mismatch, missing_return_value, null_argument, recursion_limit,
    undefined_function, EvalResult,
};
use crate::functions::{CallFrame, MAX_CALL_DEPTH};
use crate::{InterpError, Value};

use super::{Flow, Interpreter};

impl Interpreter<'_> {
    /// Evaluate a function call expression.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(crate) fn eval_call(&mut self, callee: Name, args: ExprRange, line: u32) -> EvalResult {
        let ast = self.ast;
        let arg_ids = ast.get_expr_list(args);

        // External functions win resolution unconditionally.
        let externals = std::rc::Rc::clone(&self.externals);
        if let Some(external) = externals.get(callee) {
            if external.arity() != arg_ids.len() {
                return Err(
                    arity_mismatch(self.name(callee), external.arity(), arg_ids.len()).at(line),
                );
            }
            let values = self.eval_arguments(callee, arg_ids, line)?;
            return external.call(&values).map_err(|e| e.at(line));
        }

        let Some(func) = self.natives.resolve(callee) else {
            return Err(undefined_function(self.name(callee)).at(line));
        };
        let params = ast.get_params(func.params);
        if params.len() != arg_ids.len() {
            return Err(arity_mismatch(self.name(callee), params.len(), arg_ids.len()).at(line));
        }

        let values = self.eval_arguments(callee, arg_ids, line)?;

        if self.calls.depth() >= MAX_CALL_DEPTH {
            return Err(recursion_limit(MAX_CALL_DEPTH).at(line));
        }

        let mut scoped = self.call_scoped();
        for (param, value) in params.iter().zip(values) {
            let found = value.type_name();
            let coerced = value.coerce_to(param.ty).ok_or_else(|| {
                declared_type_mismatch(scoped.name(param.name), param.ty, found).at(line)
            })?;
            scoped.env.declare_param(
                param.name,
                Variable {
                    ty: param.ty,
                    value: coerced,
                    constant: false,
                },
            );
        }

        scoped.calls.push(CallFrame {
            name: func.name,
            ret: func.ret,
        });
        let flow = scoped.exec_stmt_list(func.body);
        scoped.calls.pop();
        drop(scoped);

        match flow? {
            // The return statement already validated the value; a "no
            // value" function's pending null is discarded to null anyway.
            Flow::Returning(value) => match func.ret {
                Some(_) => Ok(value),
                None => Ok(Value::Null),
            },
            // Falling off the end produces an implicit null, which must
            // match a "no value" signature.
            Flow::Normal => match func.ret {
                Some(ty) => Err(missing_return_value(self.name(func.name), ty).at(line)),
                None => Ok(Value::Null),
            },
        }
    }

    /// Evaluate call arguments left-to-right in the caller's scope,
    /// rejecting nulls.
    fn eval_arguments(
        &mut self,
        callee: Name,
        arg_ids: &[ExprId],
        line: u32,
    ) -> Result<Vec<Value>, InterpError> {
        let mut values = Vec::with_capacity(arg_ids.len());
        for &arg in arg_ids {
            let value = self.eval_expr(arg)?;
            if value.is_null() {
                return Err(null_argument(self.name(callee)).at(line));
            }
            values.push(value);
        }
        Ok(values)
    }
}
