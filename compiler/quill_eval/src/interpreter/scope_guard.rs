//! RAII scope guards for the interpreter.
//!
//! Block entry touches two structures that must stay in lockstep: the
//! variable environment and the native-function registry. The guard pushes
//! both on creation and pops both on drop, so every exit path of a block,
//! loop, or call (the `?` operator included) leaves the stacks balanced.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Which scopes the guard opened.
enum ScopeKind {
    /// Block/if/while entry: one variable scope, one function scope.
    Block,
    /// Native call entry: variable, parameter, and function scopes.
    Call,
}

/// Guard that pops the scopes it opened when dropped.
///
/// Access the interpreter through the guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedInterpreter<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
    kind: ScopeKind,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        match self.kind {
            ScopeKind::Block => self.interpreter.env.exit_scope(),
            ScopeKind::Call => self.interpreter.env.exit_call(),
        }
        self.interpreter.natives.exit_scope();
    }
}

impl<'a> Deref for ScopedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Open a block scope, returning a guard that closes it on drop.
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.enter_scope();
        self.natives.enter_scope();
        ScopedInterpreter {
            interpreter: self,
            kind: ScopeKind::Block,
        }
    }

    /// Open the scopes a native call needs (variables, parameters,
    /// functions), returning a guard that closes them on drop.
    pub(crate) fn call_scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.enter_call();
        self.natives.enter_scope();
        ScopedInterpreter {
            interpreter: self,
            kind: ScopeKind::Call,
        }
    }
}
