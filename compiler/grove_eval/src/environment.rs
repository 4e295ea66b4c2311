//! Variable environment.
//!
//! Grove has one flat namespace per interpreter: no scopes, no mutability
//! markers. Rebinding a name overwrites it regardless of the old value's type.

use rustc_hash::FxHashMap;

use grove_ir::Name;

use crate::value::Value;

/// Name to value bindings owned by one interpreter.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the value it replaced.
    pub fn define(&mut self, name: Name, value: Value) -> Option<Value> {
        tracing::trace!(%name, value = %value.repr(), "define");
        self.bindings.insert(name, value)
    }

    /// Look up a binding. Objects come back as shared handles.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<&Name> {
        let mut names: Vec<_> = self.bindings.keys().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
