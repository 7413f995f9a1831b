//! Tests for binary/unary operator dispatch and coercion.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use quill_ir::{BinaryOp, UnaryOp};

use crate::operators::{evaluate_binary, evaluate_unary};
use crate::Value;

#[test]
fn int_arithmetic() {
    assert_eq!(
        evaluate_binary(Value::Int(2), Value::Int(3), BinaryOp::Add).unwrap(),
        Value::Int(5)
    );
    assert_eq!(
        evaluate_binary(Value::Int(5), Value::Int(3), BinaryOp::Sub).unwrap(),
        Value::Int(2)
    );
    assert_eq!(
        evaluate_binary(Value::Int(4), Value::Int(3), BinaryOp::Mul).unwrap(),
        Value::Int(12)
    );
}

#[test]
fn int_division_truncates_toward_zero() {
    assert_eq!(
        evaluate_binary(Value::Int(7), Value::Int(2), BinaryOp::Div).unwrap(),
        Value::Int(3)
    );
    assert_eq!(
        evaluate_binary(Value::Int(-7), Value::Int(2), BinaryOp::Div).unwrap(),
        Value::Int(-3)
    );
    assert_eq!(
        evaluate_binary(Value::Int(7), Value::Int(2), BinaryOp::Mod).unwrap(),
        Value::Int(1)
    );
    // Remainder keeps the dividend's sign, matching truncating division.
    assert_eq!(
        evaluate_binary(Value::Int(-7), Value::Int(2), BinaryOp::Mod).unwrap(),
        Value::Int(-1)
    );
}

#[test]
fn division_by_zero_is_fatal() {
    let div = evaluate_binary(Value::Int(1), Value::Int(0), BinaryOp::Div).unwrap_err();
    assert_eq!(div.category(), "ValueError");
    let rem = evaluate_binary(Value::Int(1), Value::Int(0), BinaryOp::Mod).unwrap_err();
    assert_eq!(rem.category(), "ValueError");
}

#[test]
fn int_overflow_is_fatal() {
    let err = evaluate_binary(Value::Int(i32::MAX), Value::Int(1), BinaryOp::Add).unwrap_err();
    assert_eq!(err.category(), "ValueError");
    assert!(evaluate_binary(Value::Int(i32::MIN), Value::Int(-1), BinaryOp::Div).is_err());
}

#[test]
fn float_operand_widens_both_sides() {
    assert_eq!(
        evaluate_binary(Value::Int(1), Value::Float(0.5), BinaryOp::Add).unwrap(),
        Value::Float(1.5)
    );
    assert_eq!(
        evaluate_binary(Value::Float(1.0), Value::Int(4), BinaryOp::Div).unwrap(),
        Value::Float(0.25)
    );
    assert_eq!(
        evaluate_binary(Value::Float(2.5), Value::Float(2.0), BinaryOp::Mul).unwrap(),
        Value::Float(5.0)
    );
}

#[test]
fn add_concatenates_when_either_side_is_string() {
    assert_eq!(
        evaluate_binary(Value::str("x"), Value::Int(1), BinaryOp::Add).unwrap(),
        Value::str("x1")
    );
    assert_eq!(
        evaluate_binary(Value::Int(1), Value::str("x"), BinaryOp::Add).unwrap(),
        Value::str("1x")
    );
    assert_eq!(
        evaluate_binary(Value::str("a"), Value::str("b"), BinaryOp::Add).unwrap(),
        Value::str("ab")
    );
    assert_eq!(
        evaluate_binary(Value::str("v="), Value::Bool(true), BinaryOp::Add).unwrap(),
        Value::str("v=true")
    );
}

#[test]
fn string_equality_requires_both_strings() {
    assert_eq!(
        evaluate_binary(Value::str("a"), Value::str("a"), BinaryOp::Eq).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(Value::str("a"), Value::str("b"), BinaryOp::NotEq).unwrap(),
        Value::Bool(true)
    );
    let err = evaluate_binary(Value::str("1"), Value::Int(1), BinaryOp::Eq).unwrap_err();
    assert_eq!(err.category(), "TypeError");
}

#[test]
fn strings_have_no_ordering() {
    let err = evaluate_binary(Value::str("a"), Value::str("b"), BinaryOp::Lt).unwrap_err();
    assert_eq!(err.category(), "TypeError");
}

#[test]
fn boolean_equality_goes_through_truthiness() {
    assert_eq!(
        evaluate_binary(Value::Bool(true), Value::Int(1), BinaryOp::Eq).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(Value::Int(0), Value::Bool(false), BinaryOp::Eq).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(Value::Bool(true), Value::Float(0.0), BinaryOp::NotEq).unwrap(),
        Value::Bool(true)
    );
    // Orderings are undefined once a boolean is involved.
    let err = evaluate_binary(Value::Bool(true), Value::Int(1), BinaryOp::Lt).unwrap_err();
    assert_eq!(err.category(), "TypeError");
}

#[test]
fn numeric_equality_is_true_equality() {
    assert_eq!(
        evaluate_binary(Value::Int(2), Value::Int(2), BinaryOp::Eq).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(Value::Int(2), Value::Int(3), BinaryOp::Eq).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(Value::Int(2), Value::Float(2.0), BinaryOp::Eq).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(Value::Int(2), Value::Int(3), BinaryOp::NotEq).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn numeric_ordering_widens() {
    assert_eq!(
        evaluate_binary(Value::Int(1), Value::Float(1.5), BinaryOp::Lt).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(Value::Int(2), Value::Int(2), BinaryOp::GtEq).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn logical_operators_require_booleans() {
    assert_eq!(
        evaluate_binary(Value::Bool(true), Value::Bool(false), BinaryOp::And).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(Value::Bool(false), Value::Bool(true), BinaryOp::Or).unwrap(),
        Value::Bool(true)
    );
    let err = evaluate_binary(Value::Int(1), Value::Bool(true), BinaryOp::And).unwrap_err();
    assert_eq!(err.category(), "TypeError");
}

#[test]
fn null_has_no_operators() {
    assert!(evaluate_binary(Value::Null, Value::Int(1), BinaryOp::Add).is_err());
    assert!(evaluate_binary(Value::Null, Value::Null, BinaryOp::Eq).is_err());
}

#[test]
fn unary_negation_preserves_type() {
    assert_eq!(
        evaluate_unary(Value::Int(5), UnaryOp::Neg).unwrap(),
        Value::Int(-5)
    );
    assert_eq!(
        evaluate_unary(Value::Float(2.5), UnaryOp::Neg).unwrap(),
        Value::Float(-2.5)
    );
    assert!(evaluate_unary(Value::str("x"), UnaryOp::Neg).is_err());
}

#[test]
fn unary_not_uses_truthiness() {
    assert_eq!(
        evaluate_unary(Value::Bool(false), UnaryOp::Not).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_unary(Value::Int(3), UnaryOp::Not).unwrap(),
        Value::Bool(false)
    );
    assert!(evaluate_unary(Value::str("x"), UnaryOp::Not).is_err());
    assert!(evaluate_unary(Value::Null, UnaryOp::Not).is_err());
}
