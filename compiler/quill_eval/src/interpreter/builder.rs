//! Interpreter assembly.

use std::rc::Rc;

use quill_ir::{Ast, Name, StringInterner};

use crate::errors::EvalResult;
use crate::externals::{ExternalRegistry, HostFn};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Value;

use super::Interpreter;

/// Builder for an [`Interpreter`] with the standard external functions.
///
/// The default configuration prints to stdout; embedders swap in a
/// buffering handler and register extra host primitives before `build`.
///
/// ```text
/// let mut interpreter = InterpreterBuilder::new(&ast, &interner)
///     .print_handler(buffer_handler())
///     .build();
/// interpreter.evaluate(&program)?;
/// ```
pub struct InterpreterBuilder<'a> {
    ast: &'a Ast,
    interner: &'a StringInterner,
    print: SharedPrintHandler,
    extra: Vec<(Name, usize, HostFn)>,
}

impl<'a> InterpreterBuilder<'a> {
    /// Start building over a parse tree.
    pub fn new(ast: &'a Ast, interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            ast,
            interner,
            print: stdout_handler(),
            extra: Vec::new(),
        }
    }

    /// Direct `print` output to the given handler.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print = handler;
        self
    }

    /// Register an additional host primitive.
    #[must_use]
    pub fn external(
        mut self,
        name: &str,
        arity: usize,
        handler: impl Fn(&[Value]) -> EvalResult + 'static,
    ) -> Self {
        self.extra
            .push((self.interner.intern(name), arity, Box::new(handler)));
        self
    }

    /// Assemble the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        let mut externals = ExternalRegistry::standard(self.interner, self.print);
        for (name, arity, handler) in self.extra {
            externals.register_boxed(name, arity, handler);
        }
        Interpreter::new(self.ast, self.interner, Rc::new(externals))
    }
}
