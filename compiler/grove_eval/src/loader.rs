//! Module resolution for `import`.

use crate::host::{collections, math, string, sys};
use crate::value::Value;

/// Resolves a module name to a host object.
///
/// The interpreter caches the first successful load per name, so a loader
/// may build a fresh object on every call.
pub trait ModuleLoader {
    fn load(&self, name: &str) -> Option<Value>;
}

/// The modules that ship with Grove: `math`, `string`, `sys`, `collections`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinModules;

impl BuiltinModules {
    pub const NAMES: [&'static str; 4] = ["collections", "math", "string", "sys"];
}

impl ModuleLoader for BuiltinModules {
    fn load(&self, name: &str) -> Option<Value> {
        let module = match name {
            "math" => math::module(),
            "string" => string::module(),
            "sys" => sys::module(),
            "collections" => collections::module(),
            _ => return None,
        };
        Some(Value::object(module))
    }
}

/// Tries each loader in order.
pub struct ChainLoader {
    loaders: Vec<Box<dyn ModuleLoader>>,
}

impl ChainLoader {
    pub fn new(first: impl ModuleLoader + 'static) -> Self {
        ChainLoader {
            loaders: vec![Box::new(first)],
        }
    }

    #[must_use]
    pub fn then(mut self, next: impl ModuleLoader + 'static) -> Self {
        self.loaders.push(Box::new(next));
        self
    }
}

impl ModuleLoader for ChainLoader {
    fn load(&self, name: &str) -> Option<Value> {
        self.loaders.iter().find_map(|loader| loader.load(name))
    }
}
