//! Evaluation errors.
//!
//! Every violation the evaluator detects is one [`InterpError`]: a
//! structured kind plus the originating source line when the triggering
//! node exposes one. There is no internal recovery; the first error aborts
//! the whole evaluation.
//!
//! Construction goes through the `#[cold]` factory functions at the bottom
//! of this module so call sites stay terse and message wording lives in
//! one place.

use std::fmt;

use quill_ir::TypeName;
use thiserror::Error;

use crate::Value;

/// Result alias for expression evaluation.
pub type EvalResult = Result<Value, InterpError>;

/// Structured error kinds.
///
/// Each kind belongs to a user-visible category (`NameError`, `TypeError`,
/// ...); see [`InterpErrorKind::category`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpErrorKind {
    // Syntax-level misuse
    #[error("unexpected input: {0}")]
    Syntax(String),
    #[error("`return` outside of a function body")]
    ReturnOutsideFunction,
    #[error("constant `{0}` declared without an initializer")]
    ConstWithoutInit(String),

    // Name resolution
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),
    #[error("`{0}` is already declared in a visible scope")]
    DuplicateVariable(String),
    #[error("undefined function `{0}`")]
    UndefinedFunction(String),
    #[error("function `{0}` is already defined in this scope")]
    DuplicateFunction(String),
    #[error("`{0}` collides with an external function")]
    ExternalCollision(String),
    #[error("no global binding named `{0}`")]
    GlobalNotFound(String),

    // Type violations
    #[error("operator `{op}` is not defined for {left} and {right}")]
    InvalidBinaryOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("operator `{op}` is not defined for {operand}")]
    InvalidUnaryOperand {
        op: &'static str,
        operand: &'static str,
    },
    #[error("cannot cast {from} to {to}")]
    InvalidCast { from: &'static str, to: TypeName },
    #[error("{0} has no truth value")]
    NotTruthy(&'static str),
    #[error("expression evaluated to null")]
    UnexpectedNull,
    #[error("null passed as argument to `{0}`")]
    NullArgument(String),
    #[error("cannot store {found} in `{name}` declared as {expected}")]
    DeclaredTypeMismatch {
        name: String,
        expected: TypeName,
        found: &'static str,
    },
    #[error("operator `{op}` is not allowed on a {ty} variable")]
    CompoundAssignUnsupported { op: &'static str, ty: &'static str },

    // Arithmetic faults
    #[error("division by zero")]
    DivisionByZero,
    #[error("remainder by zero")]
    RemainderByZero,
    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),

    // Calls
    #[error("function `{name}` expects {expected} argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("call depth limit of {0} exceeded")]
    RecursionLimit(usize),

    // Constants
    #[error("cannot assign to constant `{0}`")]
    AssignToConst(String),

    // Return signatures
    #[error("function `{name}` must return {expected}, got {found}")]
    ReturnTypeMismatch {
        name: String,
        expected: TypeName,
        found: &'static str,
    },
    #[error("function `{0}` declares no return value")]
    UnexpectedReturnValue(String),
    #[error("function `{name}` must return {expected}")]
    MissingReturnValue { name: String, expected: TypeName },
}

impl InterpErrorKind {
    /// The user-visible error category this kind reports under.
    pub fn category(&self) -> &'static str {
        use InterpErrorKind::{
            ArityMismatch, AssignToConst, CompoundAssignUnsupported, ConstWithoutInit,
            DeclaredTypeMismatch, DivisionByZero, DuplicateFunction, DuplicateVariable,
            ExternalCollision, GlobalNotFound, IntegerOverflow, InvalidBinaryOperands, InvalidCast,
            InvalidUnaryOperand, MissingReturnValue, NotTruthy, NullArgument, RecursionLimit,
            RemainderByZero, ReturnOutsideFunction, ReturnTypeMismatch, Syntax, UndefinedFunction,
            UndefinedVariable, UnexpectedNull, UnexpectedReturnValue,
        };
        match self {
            Syntax(_) | ReturnOutsideFunction | ConstWithoutInit(_) => "SyntaxError",
            UndefinedVariable(_)
            | DuplicateVariable(_)
            | UndefinedFunction(_)
            | DuplicateFunction(_)
            | ExternalCollision(_)
            | GlobalNotFound(_) => "NameError",
            InvalidBinaryOperands { .. }
            | InvalidUnaryOperand { .. }
            | InvalidCast { .. }
            | NotTruthy(_)
            | UnexpectedNull
            | NullArgument(_)
            | DeclaredTypeMismatch { .. }
            | CompoundAssignUnsupported { .. } => "TypeError",
            DivisionByZero | RemainderByZero | IntegerOverflow(_) => "ValueError",
            ArityMismatch { .. } => "ArityError",
            RecursionLimit(_) => "RecursionError",
            AssignToConst(_) => "ConstError",
            ReturnTypeMismatch { .. } | UnexpectedReturnValue(_) | MissingReturnValue { .. } => {
                "ReturnTypeError"
            }
        }
    }
}

/// A fatal evaluation error with an optional source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpError {
    pub kind: InterpErrorKind,
    /// 1-based source line of the triggering node, when known.
    pub line: Option<u32>,
}

impl InterpError {
    /// Wrap a kind with no location attached yet.
    pub fn new(kind: InterpErrorKind) -> Self {
        InterpError { kind, line: None }
    }

    /// Attach the originating source line.
    ///
    /// Keeps an already-recorded line: the innermost node that noticed the
    /// violation wins over enclosing nodes re-attaching theirs.
    #[must_use]
    pub fn at(mut self, line: u32) -> Self {
        self.line.get_or_insert(line);
        self
    }

    /// The user-visible error category.
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind)?;
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

impl std::error::Error for InterpError {}

// Error factories.
//
// Cold: none of these sit on a success path.

#[cold]
pub fn syntax_error(message: impl Into<String>) -> InterpError {
    InterpError::new(InterpErrorKind::Syntax(message.into()))
}

#[cold]
pub fn return_outside_function() -> InterpError {
    InterpError::new(InterpErrorKind::ReturnOutsideFunction)
}

#[cold]
pub fn const_without_init(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::ConstWithoutInit(name.to_string()))
}

#[cold]
pub fn undefined_variable(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::UndefinedVariable(name.to_string()))
}

#[cold]
pub fn duplicate_variable(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::DuplicateVariable(name.to_string()))
}

#[cold]
pub fn undefined_function(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::UndefinedFunction(name.to_string()))
}

#[cold]
pub fn duplicate_function(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::DuplicateFunction(name.to_string()))
}

#[cold]
pub fn external_collision(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::ExternalCollision(name.to_string()))
}

#[cold]
pub fn global_not_found(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::GlobalNotFound(name.to_string()))
}

#[cold]
pub fn invalid_binary_operands(
    op: &'static str,
    left: &'static str,
    right: &'static str,
) -> InterpError {
    InterpError::new(InterpErrorKind::InvalidBinaryOperands { op, left, right })
}

#[cold]
pub fn invalid_unary_operand(op: &'static str, operand: &'static str) -> InterpError {
    InterpError::new(InterpErrorKind::InvalidUnaryOperand { op, operand })
}

#[cold]
pub fn invalid_cast(from: &'static str, to: TypeName) -> InterpError {
    InterpError::new(InterpErrorKind::InvalidCast { from, to })
}

#[cold]
pub fn not_truthy(type_name: &'static str) -> InterpError {
    InterpError::new(InterpErrorKind::NotTruthy(type_name))
}

#[cold]
pub fn unexpected_null() -> InterpError {
    InterpError::new(InterpErrorKind::UnexpectedNull)
}

#[cold]
pub fn null_argument(func: &str) -> InterpError {
    InterpError::new(InterpErrorKind::NullArgument(func.to_string()))
}

#[cold]
pub fn declared_type_mismatch(name: &str, expected: TypeName, found: &'static str) -> InterpError {
    InterpError::new(InterpErrorKind::DeclaredTypeMismatch {
        name: name.to_string(),
        expected,
        found,
    })
}

#[cold]
pub fn compound_assign_unsupported(op: &'static str, ty: &'static str) -> InterpError {
    InterpError::new(InterpErrorKind::CompoundAssignUnsupported { op, ty })
}

#[cold]
pub fn division_by_zero() -> InterpError {
    InterpError::new(InterpErrorKind::DivisionByZero)
}

#[cold]
pub fn remainder_by_zero() -> InterpError {
    InterpError::new(InterpErrorKind::RemainderByZero)
}

#[cold]
pub fn integer_overflow(op_name: &'static str) -> InterpError {
    InterpError::new(InterpErrorKind::IntegerOverflow(op_name))
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, found: usize) -> InterpError {
    InterpError::new(InterpErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        found,
    })
}

#[cold]
pub fn recursion_limit(limit: usize) -> InterpError {
    InterpError::new(InterpErrorKind::RecursionLimit(limit))
}

#[cold]
pub fn assign_to_const(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::AssignToConst(name.to_string()))
}

#[cold]
pub fn return_type_mismatch(name: &str, expected: TypeName, found: &'static str) -> InterpError {
    InterpError::new(InterpErrorKind::ReturnTypeMismatch {
        name: name.to_string(),
        expected,
        found,
    })
}

#[cold]
pub fn unexpected_return_value(name: &str) -> InterpError {
    InterpError::new(InterpErrorKind::UnexpectedReturnValue(name.to_string()))
}

#[cold]
pub fn missing_return_value(name: &str, expected: TypeName) -> InterpError {
    InterpError::new(InterpErrorKind::MissingReturnValue {
        name: name.to_string(),
        expected,
    })
}
