//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use rustc_hash::FxHashMap;

use grove_ir::Name;

use super::Interpreter;
use crate::environment::Environment;
use crate::host::{collections, Member};
use crate::loader::{BuiltinModules, ModuleLoader};
use crate::value::Value;

/// Builder for creating Interpreter instances.
///
/// Defaults: empty environment, [`BuiltinModules`] as the loader, and the
/// `Counter` and `Stack` classes as global roots for `new`.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    loader: Option<Box<dyn ModuleLoader>>,
    globals: FxHashMap<Name, Member>,
    builtin_globals: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            env: None,
            loader: None,
            globals: FxHashMap::default(),
            builtin_globals: true,
        }
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Replace the module loader used by `import`.
    #[must_use]
    pub fn loader(mut self, loader: impl ModuleLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Register a global root for `new <path>`.
    ///
    /// Registered globals take precedence over the builtin ones of the same name.
    #[must_use]
    pub fn global(mut self, name: impl Into<Name>, member: Member) -> Self {
        self.globals.insert(name.into(), member);
        self
    }

    /// Register a global value root.
    #[must_use]
    pub fn global_value(self, name: impl Into<Name>, value: impl Into<Value>) -> Self {
        self.global(name, Member::Attribute(value.into()))
    }

    /// Leave out the builtin `Counter` and `Stack` roots.
    #[must_use]
    pub fn without_builtin_globals(mut self) -> Self {
        self.builtin_globals = false;
        self
    }

    pub fn build(self) -> Interpreter {
        let mut globals = FxHashMap::default();
        if self.builtin_globals {
            for class in [collections::COUNTER, collections::STACK] {
                globals.insert(Name::new(class.name()), Member::Class(class));
            }
        }
        globals.extend(self.globals);

        Interpreter {
            env: self.env.unwrap_or_default(),
            loader: self.loader.unwrap_or_else(|| Box::new(BuiltinModules)),
            globals,
            modules: FxHashMap::default(),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
