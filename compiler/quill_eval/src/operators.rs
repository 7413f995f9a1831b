//! Binary and unary operator implementations.
//!
//! Direct enum-based dispatch: the type set is fixed, so pattern matching
//! is preferred over trait objects and stays exhaustiveness-checked.
//!
//! Coercion rules:
//! - `+` concatenates textual forms when either operand is a string.
//! - Arithmetic on two integers stays integer (truncating `/` and `%`);
//!   any float operand widens both sides to float.
//! - `==`/`!=` compare strings with strings, anything boolean-involving
//!   via truthiness, and numerics with Integer→Float widening.
//! - Ordering operators are defined for numerics only.
//! - `and`/`or` require boolean operands on both sides. Both sides are
//!   already evaluated when this module is reached — the language has no
//!   short-circuiting.

use quill_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_operands, invalid_unary_operand, not_truthy,
    remainder_by_zero, EvalResult,
};
use crate::Value;

/// Both operands of a numeric operation after widening.
enum NumPair {
    Ints(i32, i32),
    Floats(f32, f32),
}

/// Widen a pair of operands to a common numeric representation.
///
/// Returns `None` when either operand is non-numeric.
fn numeric_pair(left: &Value, right: &Value) -> Option<NumPair> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(NumPair::Ints(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Some(NumPair::Floats(*a as f32, *b)),
        (Value::Float(a), Value::Int(b)) => Some(NumPair::Floats(*a, *b as f32)),
        (Value::Float(a), Value::Float(b)) => Some(NumPair::Floats(*a, *b)),
        _ => None,
    }
}

/// Evaluate a binary operation on two already-evaluated operands.
///
/// `??` never reaches this function on the success path: its right operand
/// is conditionally evaluated, so the executor handles it before operand
/// evaluation.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            eval_arith(left, right, op)
        }
        BinaryOp::Eq | BinaryOp::NotEq => eval_equality(left, right, op),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            eval_ordering(left, right, op)
        }
        BinaryOp::And | BinaryOp::Or => eval_logical(left, right, op),
        BinaryOp::Coalesce => {
            if left.is_null() {
                Ok(right)
            } else {
                Ok(left)
            }
        }
    }
}

/// `+`: string concatenation when either operand is a string, numeric
/// addition otherwise.
fn eval_add(left: Value, right: Value) -> EvalResult {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Ok(Value::str(format!("{left}{right}")));
    }
    match numeric_pair(&left, &right) {
        Some(NumPair::Ints(a, b)) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("addition")),
        Some(NumPair::Floats(a, b)) => Ok(Value::Float(a + b)),
        None => Err(invalid_binary_operands(
            BinaryOp::Add.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// `- * / %` on numeric operands.
fn eval_arith(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let Some(pair) = numeric_pair(&left, &right) else {
        return Err(invalid_binary_operands(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        ));
    };
    match pair {
        NumPair::Ints(a, b) => match op {
            BinaryOp::Sub => a
                .checked_sub(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("subtraction")),
            BinaryOp::Mul => a
                .checked_mul(b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("multiplication")),
            // Truncating division toward zero; `i32::MIN / -1` overflows.
            BinaryOp::Div => {
                if b == 0 {
                    Err(division_by_zero())
                } else {
                    a.checked_div(b)
                        .map(Value::Int)
                        .ok_or_else(|| integer_overflow("division"))
                }
            }
            BinaryOp::Mod => {
                if b == 0 {
                    Err(remainder_by_zero())
                } else {
                    a.checked_rem(b)
                        .map(Value::Int)
                        .ok_or_else(|| integer_overflow("remainder"))
                }
            }
            _ => unreachable!("eval_arith called with non-arithmetic operator"),
        },
        NumPair::Floats(a, b) => {
            let result = match op {
                BinaryOp::Sub => a - b,
                BinaryOp::Mul => a * b,
                BinaryOp::Div => a / b,
                BinaryOp::Mod => a % b,
                _ => unreachable!("eval_arith called with non-arithmetic operator"),
            };
            Ok(Value::Float(result))
        }
    }
}

/// `==`/`!=` across the coercion rules.
fn eval_equality(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let equal = match (&left, &right) {
        (Value::Str(a), Value::Str(b)) => a == b,
        // A string never equals a non-string; mixed comparison is an error.
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            return Err(invalid_binary_operands(
                op.as_symbol(),
                left.type_name(),
                right.type_name(),
            ));
        }
        // Boolean-involving comparison goes through truthiness.
        (Value::Bool(_), _) | (_, Value::Bool(_)) => {
            let a = left
                .truthiness()
                .ok_or_else(|| not_truthy(left.type_name()))?;
            let b = right
                .truthiness()
                .ok_or_else(|| not_truthy(right.type_name()))?;
            a == b
        }
        _ => match numeric_pair(&left, &right) {
            Some(NumPair::Ints(a, b)) => a == b,
            Some(NumPair::Floats(a, b)) => a == b,
            None => {
                return Err(invalid_binary_operands(
                    op.as_symbol(),
                    left.type_name(),
                    right.type_name(),
                ));
            }
        },
    };
    Ok(Value::Bool(match op {
        BinaryOp::Eq => equal,
        BinaryOp::NotEq => !equal,
        _ => unreachable!("eval_equality called with non-equality operator"),
    }))
}

/// `< <= > >=`: numerics only.
fn eval_ordering(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let Some(pair) = numeric_pair(&left, &right) else {
        return Err(invalid_binary_operands(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        ));
    };
    let holds = match pair {
        NumPair::Ints(a, b) => match op {
            BinaryOp::Lt => a < b,
            BinaryOp::LtEq => a <= b,
            BinaryOp::Gt => a > b,
            BinaryOp::GtEq => a >= b,
            _ => unreachable!("eval_ordering called with non-ordering operator"),
        },
        NumPair::Floats(a, b) => match op {
            BinaryOp::Lt => a < b,
            BinaryOp::LtEq => a <= b,
            BinaryOp::Gt => a > b,
            BinaryOp::GtEq => a >= b,
            _ => unreachable!("eval_ordering called with non-ordering operator"),
        },
    };
    Ok(Value::Bool(holds))
}

/// `and`/`or`: both operands must already be booleans.
fn eval_logical(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(match op {
            BinaryOp::And => *a && *b,
            BinaryOp::Or => *a || *b,
            _ => unreachable!("eval_logical called with non-logical operator"),
        })),
        _ => Err(invalid_binary_operands(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Evaluate a unary operation.
pub fn evaluate_unary(operand: Value, op: UnaryOp) -> EvalResult {
    match op {
        // Numeric negation, type-preserving.
        UnaryOp::Neg => match operand {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("negation")),
            Value::Float(x) => Ok(Value::Float(-x)),
            _ => Err(invalid_unary_operand(
                UnaryOp::Neg.as_symbol(),
                operand.type_name(),
            )),
        },
        // `not` converts through truthiness, then negates.
        UnaryOp::Not => operand
            .truthiness()
            .map(|b| Value::Bool(!b))
            .ok_or_else(|| not_truthy(operand.type_name())),
    }
}
