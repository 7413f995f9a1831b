//! Variable scoping for the interpreter.
//!
//! Uses plain scope stacks searched innermost-first. Two independent stacks
//! exist during a native call: general variables and parameters. Plain
//! identifiers resolve against parameters first, falling back to general;
//! the explicit `global` qualifier resolves against the outermost general
//! scope only and can never create a binding.

use rustc_hash::FxHashMap;

use quill_ir::{Name, TypeName};

use crate::Value;

/// A typed variable slot.
///
/// The declared type is fixed for the binding's lifetime; only
/// Integer→Float promotion is allowed on write.
#[derive(Clone, Debug)]
pub struct Variable {
    /// Declared type.
    pub ty: TypeName,
    /// Current value; always matches `ty`.
    pub value: Value,
    /// Writes after the first assignment are rejected.
    pub constant: bool,
}

/// Error returned when writing to a variable fails.
///
/// Typed so callers can produce the correct diagnostic; the executor adds
/// the variable name and source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteError {
    /// Variable not found in any searched scope.
    Undefined,
    /// Variable exists but is a constant.
    Constant,
    /// Value's type cannot be stored under the declared type.
    TypeMismatch { expected: TypeName },
}

/// A stack of name→binding scopes searched innermost-first.
///
/// Shared by general variables, call parameters, and the native-function
/// registry. New bindings always land in the innermost scope.
#[derive(Debug)]
pub struct ScopeStack<T> {
    scopes: Vec<FxHashMap<Name, T>>,
}

impl<T> ScopeStack<T> {
    /// Create a stack with one (outermost) scope.
    pub fn new() -> Self {
        ScopeStack {
            scopes: vec![FxHashMap::default()],
        }
    }

    /// Push a new innermost scope.
    #[inline]
    pub fn enter(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Pop the innermost scope. The outermost scope is never popped.
    #[inline]
    pub fn exit(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Look up a binding, innermost scope first.
    pub fn get(&self, name: Name) -> Option<&T> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name))
    }

    /// Look up a binding mutably, innermost scope first.
    pub fn get_mut(&mut self, name: Name) -> Option<&mut T> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(&name))
    }

    /// Check if a binding is visible in any scope.
    pub fn contains(&self, name: Name) -> bool {
        self.get(name).is_some()
    }

    /// Check if a binding exists in the innermost scope only.
    pub fn contains_innermost(&self, name: Name) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| scope.contains_key(&name))
    }

    /// Insert a binding into the innermost scope.
    pub fn insert(&mut self, name: Name, value: T) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, value);
        }
    }

    /// Look up a binding in the outermost scope only.
    pub fn get_outermost(&self, name: Name) -> Option<&T> {
        self.scopes.first().and_then(|scope| scope.get(&name))
    }

    /// Look up a binding mutably in the outermost scope only.
    pub fn get_outermost_mut(&mut self, name: Name) -> Option<&mut T> {
        self.scopes
            .first_mut()
            .and_then(|scope| scope.get_mut(&name))
    }
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Variable environment: the general scope stack plus the parameter stack.
pub struct Environment {
    vars: ScopeStack<Variable>,
    params: ScopeStack<Variable>,
}

impl Environment {
    /// Create an environment with empty global and parameter scopes.
    pub fn new() -> Self {
        Environment {
            vars: ScopeStack::new(),
            params: ScopeStack::new(),
        }
    }

    /// Enter a block scope (general variables only).
    #[inline]
    pub fn enter_scope(&mut self) {
        self.vars.enter();
    }

    /// Exit a block scope.
    #[inline]
    pub fn exit_scope(&mut self) {
        self.vars.exit();
    }

    /// Enter the scopes a native call opens: one general, one parameter.
    #[inline]
    pub fn enter_call(&mut self) {
        self.vars.enter();
        self.params.enter();
    }

    /// Exit a native call's scopes.
    #[inline]
    pub fn exit_call(&mut self) {
        self.params.exit();
        self.vars.exit();
    }

    /// Check if `name` is visible as a parameter or variable anywhere.
    pub fn is_declared(&self, name: Name) -> bool {
        self.params.contains(name) || self.vars.contains(name)
    }

    /// Create a new variable in the innermost general scope.
    ///
    /// The caller has already verified the name is unused and coerced the
    /// value to the declared type.
    pub fn declare(&mut self, name: Name, var: Variable) {
        self.vars.insert(name, var);
    }

    /// Bind a call argument in the innermost parameter scope.
    pub fn declare_param(&mut self, name: Name, var: Variable) {
        self.params.insert(name, var);
    }

    /// Resolve a plain identifier: parameters first, then variables.
    pub fn lookup(&self, name: Name) -> Option<&Variable> {
        self.params.get(name).or_else(|| self.vars.get(name))
    }

    /// Resolve a `global`-qualified identifier (outermost general scope).
    pub fn lookup_global(&self, name: Name) -> Option<&Variable> {
        self.vars.get_outermost(name)
    }

    /// Write a plain identifier, parameters first, then variables.
    pub fn write(&mut self, name: Name, value: Value) -> Result<(), WriteError> {
        if let Some(var) = self.params.get_mut(name) {
            return Self::store(var, value);
        }
        match self.vars.get_mut(name) {
            Some(var) => Self::store(var, value),
            None => Err(WriteError::Undefined),
        }
    }

    /// Write a `global`-qualified identifier (outermost general scope).
    ///
    /// Never creates a binding.
    pub fn write_global(&mut self, name: Name, value: Value) -> Result<(), WriteError> {
        match self.vars.get_outermost_mut(name) {
            Some(var) => Self::store(var, value),
            None => Err(WriteError::Undefined),
        }
    }

    fn store(var: &mut Variable, value: Value) -> Result<(), WriteError> {
        if var.constant {
            return Err(WriteError::Constant);
        }
        match value.coerce_to(var.ty) {
            Some(coerced) => {
                var.value = coerced;
                Ok(())
            }
            None => Err(WriteError::TypeMismatch { expected: var.ty }),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_ir::StringInterner;

    fn int_var(n: i32) -> Variable {
        Variable {
            ty: TypeName::Int,
            value: Value::Int(n),
            constant: false,
        }
    }

    #[test]
    fn scope_stack_shadowing_and_pop() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut stack: ScopeStack<i32> = ScopeStack::new();
        stack.insert(x, 1);
        stack.enter();
        stack.insert(x, 2);
        assert_eq!(stack.get(x), Some(&2));

        stack.exit();
        assert_eq!(stack.get(x), Some(&1));
    }

    #[test]
    fn scope_stack_never_pops_outermost() {
        let mut stack: ScopeStack<i32> = ScopeStack::new();
        stack.exit();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn scope_stack_outermost_lookup_ignores_inner() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut stack: ScopeStack<i32> = ScopeStack::new();
        stack.enter();
        stack.insert(x, 9);
        assert_eq!(stack.get(x), Some(&9));
        assert_eq!(stack.get_outermost(x), None);
    }

    #[test]
    fn params_shadow_variables() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut env = Environment::new();
        env.declare(x, int_var(1));
        env.enter_call();
        env.declare_param(x, int_var(2));

        assert_eq!(env.lookup(x).map(|v| v.value.clone()), Some(Value::Int(2)));

        env.exit_call();
        assert_eq!(env.lookup(x).map(|v| v.value.clone()), Some(Value::Int(1)));
    }

    #[test]
    fn write_promotes_int_to_float_slot() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut env = Environment::new();
        env.declare(
            x,
            Variable {
                ty: TypeName::Float,
                value: Value::Float(0.0),
                constant: false,
            },
        );
        assert_eq!(env.write(x, Value::Int(2)), Ok(()));
        assert_eq!(
            env.lookup(x).map(|v| v.value.clone()),
            Some(Value::Float(2.0))
        );
    }

    #[test]
    fn write_rejects_constants_and_type_changes() {
        let interner = StringInterner::new();
        let k = interner.intern("k");
        let x = interner.intern("x");

        let mut env = Environment::new();
        env.declare(
            k,
            Variable {
                ty: TypeName::Int,
                value: Value::Int(5),
                constant: true,
            },
        );
        env.declare(x, int_var(0));

        assert_eq!(env.write(k, Value::Int(6)), Err(WriteError::Constant));
        assert_eq!(
            env.write(x, Value::str("oops")),
            Err(WriteError::TypeMismatch {
                expected: TypeName::Int
            })
        );
        // The constant kept its value.
        assert_eq!(env.lookup(k).map(|v| v.value.clone()), Some(Value::Int(5)));
    }

    #[test]
    fn global_write_targets_outermost_only() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let y = interner.intern("y");

        let mut env = Environment::new();
        env.declare(x, int_var(1));
        env.enter_scope();
        env.declare(y, int_var(2));

        assert_eq!(env.write_global(x, Value::Int(10)), Ok(()));
        // `y` only exists in the inner scope; `global` cannot reach or create it.
        assert_eq!(
            env.write_global(y, Value::Int(3)),
            Err(WriteError::Undefined)
        );

        env.exit_scope();
        assert_eq!(env.lookup(x).map(|v| v.value.clone()), Some(Value::Int(10)));
    }
}
