//! Object references: `new <path>`.

use grove_ir::{Name, ObjectPath};

use super::Interpreter;
use crate::errors::{EvalError, EvalResult};
use crate::host::{HostClass, Member};
use crate::methods::member_of;
use crate::value::Value;

/// A partially resolved path.
enum Target {
    Value(Value),
    Class(HostClass),
}

fn unknown(path: &ObjectPath, segment: &Name) -> EvalError {
    EvalError::UnknownObject {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

impl Interpreter {
    /// Resolve a dotted path.
    ///
    /// The root comes from the environment, falling back to the global
    /// registry. Each later segment must be an attribute or class of the
    /// object before it. A path ending at a class instantiates it; any other
    /// path yields the object itself, shared with whoever else holds it.
    pub(super) fn resolve_object(&self, path: &ObjectPath) -> EvalResult {
        let root = path.root();
        let mut target = match self.env.lookup(root.as_str()) {
            Some(value) => Target::Value(value),
            None => match self.globals.get(root) {
                Some(Member::Attribute(value)) => Target::Value(value.clone()),
                Some(Member::Class(class)) => Target::Class(*class),
                Some(Member::Method(_)) | None => return Err(unknown(path, root)),
            },
        };

        for segment in path.rest() {
            let Target::Value(current) = &target else {
                // Classes expose nothing before they are instantiated.
                return Err(unknown(path, segment));
            };
            target = match member_of(current, segment.as_str()) {
                Some(Member::Attribute(value)) => Target::Value(value),
                Some(Member::Class(class)) => Target::Class(class),
                Some(Member::Method(_)) | None => return Err(unknown(path, segment)),
            };
        }

        Ok(match target {
            Target::Value(value) => value,
            Target::Class(class) => {
                tracing::trace!(class = class.name(), %path, "instantiate");
                class.instantiate()
            }
        })
    }
}
