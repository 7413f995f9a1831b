//! Typecast evaluation.

use quill_ir::TypeName;

use crate::errors::{invalid_cast, EvalResult};
use crate::Value;

/// Evaluate a cast of `value` to `ty`.
///
/// Supported conversions: anything to string (textual form), numerics and
/// booleans to boolean (truthiness), and Integer↔Float including numeric
/// identity. All other pairs fail.
pub fn evaluate_cast(value: Value, ty: TypeName) -> EvalResult {
    match ty {
        TypeName::Str => Ok(Value::str(value.to_string())),
        // Truthiness is defined for exactly the castable operands
        // (booleans and numerics), so it doubles as the support check.
        TypeName::Bool => match value.truthiness() {
            Some(b) => Ok(Value::Bool(b)),
            None => Err(invalid_cast(value.type_name(), ty)),
        },
        TypeName::Int => match value {
            Value::Int(_) => Ok(value),
            // Truncation toward zero, saturating at the i32 range.
            Value::Float(x) => Ok(Value::Int(x as i32)),
            _ => Err(invalid_cast(value.type_name(), ty)),
        },
        TypeName::Float => match value {
            Value::Float(_) => Ok(value),
            Value::Int(n) => Ok(Value::Float(n as f32)),
            _ => Err(invalid_cast(value.type_name(), ty)),
        },
    }
}
