//! Quill Eval - tree-walking interpreter for Quill scripts.
//!
//! This crate evaluates an externally-built parse tree (`quill_ir::Ast`)
//! under the language's type-coercion and call semantics.
//!
//! # Architecture
//!
//! - `Environment`: variable scoping with innermost-first scope stacks,
//!   one general and one for call parameters
//! - `NativeRegistry` / `ExternalRegistry`: script-defined functions
//!   (scoped, shadowable) and host builtins (fixed, never shadowable)
//! - `evaluate_binary` / `evaluate_unary` / `evaluate_cast`: enum-based
//!   operator dispatch with the Integer→Float widening rules
//! - `Interpreter`: the statement executor and call protocol; `return`
//!   propagates as an explicit control-flow result, not an exception
//!
//! # Entry point
//!
//! Build an [`Interpreter`] (directly or through [`InterpreterBuilder`])
//! and call [`Interpreter::evaluate`] once per parsed program. All script
//! effects flow through the external functions; every violation aborts
//! evaluation with one typed [`InterpError`].

pub mod cast;
pub mod environment;
pub mod errors;
pub mod externals;
pub mod functions;
pub mod interpreter;
pub mod operators;
pub mod print_handler;
mod value;

#[cfg(test)]
mod tests;

pub use cast::evaluate_cast;
pub use environment::{Environment, ScopeStack, Variable, WriteError};
pub use errors::{EvalResult, InterpError, InterpErrorKind};
pub use externals::{ExternalFunction, ExternalRegistry, HostFn};
pub use functions::{CallFrame, CallStack, NativeFunction, NativeRegistry, MAX_CALL_DEPTH};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::Value;
