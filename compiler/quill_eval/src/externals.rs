//! Host-provided (external) functions.
//!
//! External functions are supplied at interpreter construction, have fixed
//! identity for the life of the process, and can never be shadowed by a
//! script definition. The registry is immutable once evaluation starts —
//! it is the only state shared across `evaluate` calls.

use rand::Rng;
use rustc_hash::FxHashMap;

use quill_ir::{Name, StringInterner};

use crate::errors::EvalResult;
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// A boxed host callable.
///
/// Arguments arrive already evaluated and null-checked; the callable may
/// return `Value::Null` for "no result".
pub type HostFn = Box<dyn Fn(&[Value]) -> EvalResult>;

/// A registered external function: fixed arity plus the host callable.
pub struct ExternalFunction {
    arity: usize,
    handler: HostFn,
}

impl ExternalFunction {
    /// Number of arguments the callable expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke the host callable.
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.handler)(args)
    }
}

/// Registry of external functions, keyed by interned name.
#[derive(Default)]
pub struct ExternalRegistry {
    funcs: FxHashMap<Name, ExternalFunction>,
}

impl ExternalRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard primitives:
    /// `print(value)`, `rand()`, and `length(value)`.
    pub fn standard(interner: &StringInterner, print: SharedPrintHandler) -> Self {
        let mut registry = Self::new();

        registry.register(interner.intern("print"), 1, move |args| {
            print.println(&args[0].to_string());
            Ok(Value::Null)
        });

        registry.register(interner.intern("rand"), 0, |_args| {
            Ok(Value::Float(rand::thread_rng().gen::<f32>()))
        });

        registry.register(interner.intern("length"), 1, |args| {
            let len = match &args[0] {
                Value::Str(s) => i32::try_from(s.chars().count()).unwrap_or(i32::MAX),
                _ => 1,
            };
            Ok(Value::Int(len))
        });

        registry
    }

    /// Register a host callable under `name`.
    ///
    /// A later registration under the same name replaces the earlier one;
    /// scripts can never do this.
    pub fn register(
        &mut self,
        name: Name,
        arity: usize,
        handler: impl Fn(&[Value]) -> EvalResult + 'static,
    ) {
        self.register_boxed(name, arity, Box::new(handler));
    }

    /// Register an already-boxed host callable under `name`.
    pub fn register_boxed(&mut self, name: Name, arity: usize, handler: HostFn) {
        self.funcs.insert(name, ExternalFunction { arity, handler });
    }

    /// Check if `name` is an external function.
    pub fn contains(&self, name: Name) -> bool {
        self.funcs.contains_key(&name)
    }

    /// Look up an external function.
    pub fn get(&self, name: Name) -> Option<&ExternalFunction> {
        self.funcs.get(&name)
    }
}
