//! Expression evaluation methods for the Interpreter.

use quill_ir::{BinaryOp, ExprId, ExprKind};

use crate::cast::evaluate_cast;
use crate::errors::{global_not_found, undefined_variable, unexpected_null, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::Value;

use super::Interpreter;

impl Interpreter<'_> {
    /// Evaluate one expression node.
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.ast.get_expr(id);
        let line = expr.line;
        match expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Float(x) => Ok(Value::Float(x)),
            ExprKind::Str(s) => Ok(Value::str(self.interner.lookup(s))),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Null => Ok(Value::Null),

            ExprKind::Ident { name, global } => {
                let var = if global {
                    self.env
                        .lookup_global(name)
                        .ok_or_else(|| global_not_found(self.name(name)).at(line))?
                } else {
                    self.env
                        .lookup(name)
                        .ok_or_else(|| undefined_variable(self.name(name)).at(line))?
                };
                Ok(var.value.clone())
            }

            ExprKind::Cast { ty, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_cast(value, ty).map_err(|e| e.at(line))
            }

            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(value, op).map_err(|e| e.at(line))
            }

            // `??` is the only operator with a conditionally-evaluated
            // right operand; everything else evaluates eagerly.
            ExprKind::Binary {
                op: BinaryOp::Coalesce,
                left,
                right,
            } => {
                let left_val = self.eval_expr(left)?;
                if left_val.is_null() {
                    self.eval_expr(right)
                } else {
                    Ok(left_val)
                }
            }

            ExprKind::Binary { op, left, right } => {
                let left_val = self.eval_expr(left)?;
                let right_val = self.eval_expr(right)?;
                evaluate_binary(left_val, right_val, op).map_err(|e| e.at(line))
            }

            // A parenthesized expression must not produce null.
            ExprKind::Enclosed(inner) => {
                let value = self.eval_expr(inner)?;
                if value.is_null() {
                    return Err(unexpected_null().at(line));
                }
                Ok(value)
            }

            ExprKind::Call { callee, args } => self.eval_call(callee, args, line),
        }
    }
}
