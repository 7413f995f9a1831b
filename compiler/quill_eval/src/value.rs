//! Runtime value representation.

use std::fmt;
use std::rc::Rc;

use quill_ir::TypeName;

/// A runtime value.
///
/// The type set is closed: every type check in the evaluator is an
/// exhaustive pattern match over these variants. `Null` is a valid
/// transient expression result but never persists in a variable.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit float.
    Float(f32),
    /// String (cheaply cloneable).
    Str(Rc<str>),
    /// Boolean.
    Bool(bool),
    /// The null result.
    Null,
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn str(s: impl Into<Rc<str>>) -> Value {
        Value::Str(s.into())
    }

    /// The zero value a declaration without an initializer gets.
    pub fn zero(ty: TypeName) -> Value {
        match ty {
            TypeName::Int => Value::Int(0),
            TypeName::Float => Value::Float(0.0),
            TypeName::Str => Value::str(""),
            TypeName::Bool => Value::Bool(false),
        }
    }

    /// Runtime type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }

    /// Check if this is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Coerce this value to a declared type.
    ///
    /// Returns the (possibly promoted) value when it may be stored in a
    /// slot of type `ty`: exact matches pass through and an `Int` promotes
    /// to a `Float` slot. Everything else, `Null` included, is `None`.
    pub fn coerce_to(self, ty: TypeName) -> Option<Value> {
        match (self, ty) {
            (v @ Value::Int(_), TypeName::Int)
            | (v @ Value::Float(_), TypeName::Float)
            | (v @ Value::Str(_), TypeName::Str)
            | (v @ Value::Bool(_), TypeName::Bool) => Some(v),
            (Value::Int(n), TypeName::Float) => Some(Value::Float(n as f32)),
            _ => None,
        }
    }

    /// Truthiness for control-flow decisions (if/while/`not`).
    ///
    /// Booleans pass through, numerics are truthy iff strictly greater
    /// than zero, everything else (including `Null`) has no truth value.
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(n) => Some(*n > 0),
            Value::Float(x) => Some(*x > 0.0),
            Value::Str(_) | Value::Null => None,
        }
    }
}

impl fmt::Display for Value {
    /// Textual form, as produced by `print`, string concatenation, and
    /// casts to string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_values() {
        assert_eq!(Value::zero(TypeName::Int), Value::Int(0));
        assert_eq!(Value::zero(TypeName::Float), Value::Float(0.0));
        assert_eq!(Value::zero(TypeName::Str), Value::str(""));
        assert_eq!(Value::zero(TypeName::Bool), Value::Bool(false));
    }

    #[test]
    fn coerce_exact_match_passes_through() {
        assert_eq!(Value::Int(3).coerce_to(TypeName::Int), Some(Value::Int(3)));
        assert_eq!(
            Value::str("a").coerce_to(TypeName::Str),
            Some(Value::str("a"))
        );
    }

    #[test]
    fn coerce_promotes_int_to_float() {
        assert_eq!(
            Value::Int(3).coerce_to(TypeName::Float),
            Some(Value::Float(3.0))
        );
    }

    #[test]
    fn coerce_rejects_narrowing_and_null() {
        assert_eq!(Value::Float(3.0).coerce_to(TypeName::Int), None);
        assert_eq!(Value::Bool(true).coerce_to(TypeName::Int), None);
        assert_eq!(Value::Null.coerce_to(TypeName::Str), None);
    }

    #[test]
    fn truthiness_of_numerics_is_strictly_positive() {
        assert_eq!(Value::Int(0).truthiness(), Some(false));
        assert_eq!(Value::Int(-1).truthiness(), Some(false));
        assert_eq!(Value::Int(1).truthiness(), Some(true));
        assert_eq!(Value::Float(0.0).truthiness(), Some(false));
        assert_eq!(Value::Float(0.5).truthiness(), Some(true));
    }

    #[test]
    fn truthiness_undefined_for_strings_and_null() {
        assert_eq!(Value::str("yes").truthiness(), None);
        assert_eq!(Value::Null.truthiness(), None);
    }

    #[test]
    fn textual_forms() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::str("hi").to_string(), "hi");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
