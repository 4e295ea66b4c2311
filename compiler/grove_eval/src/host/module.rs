//! Table-driven host modules.

use rustc_hash::FxHashMap;

use super::{Arity, HostClass, HostObject, Member};
use crate::errors::{undefined_method, EvalResult};
use crate::value::Value;

/// Native function backing a module method.
pub type NativeFn = fn(&[Value]) -> EvalResult;

/// One named entry in a module.
#[derive(Clone)]
pub enum ModuleItem {
    Function { arity: Arity, func: NativeFn },
    Constant(Value),
    Class(HostClass),
}

/// A module: a named table of functions, constants and classes.
pub struct HostModule {
    name: &'static str,
    items: FxHashMap<&'static str, ModuleItem>,
}

impl HostModule {
    pub fn new(name: &'static str) -> Self {
        HostModule {
            name,
            items: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn function(mut self, name: &'static str, arity: Arity, func: NativeFn) -> Self {
        self.items.insert(name, ModuleItem::Function { arity, func });
        self
    }

    #[must_use]
    pub fn constant(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.items.insert(name, ModuleItem::Constant(value.into()));
        self
    }

    #[must_use]
    pub fn class(mut self, class: HostClass) -> Self {
        self.items.insert(class.name(), ModuleItem::Class(class));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Item names, sorted.
    pub fn item_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.items.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl HostObject for HostModule {
    fn type_name(&self) -> &str {
        "module"
    }

    fn member(&self, name: &str) -> Option<Member> {
        self.items.get(name).map(|item| match item {
            ModuleItem::Function { arity, .. } => Member::Method(*arity),
            ModuleItem::Constant(value) => Member::Attribute(value.clone()),
            ModuleItem::Class(class) => Member::Class(*class),
        })
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> EvalResult {
        match self.items.get(method) {
            Some(ModuleItem::Function { func, .. }) => {
                tracing::trace!(module = self.name, method, "native call");
                func(&args)
            }
            _ => Err(undefined_method(method, self.type_name())),
        }
    }

    fn describe(&self) -> String {
        format!("<module '{}'>", self.name)
    }
}
