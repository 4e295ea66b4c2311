//! Runtime values.

use std::fmt;
use std::rc::Rc;

use crate::host::HostObject;

/// A Grove runtime value.
///
/// Cloning an `Object` clones the handle: every clone refers to the same host
/// object, so mutations through one binding are visible through all others.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Str(String),
    Object(HostRef),
}

impl Value {
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn object(object: impl HostObject + 'static) -> Self {
        Value::Object(HostRef::new(object))
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Object(obj) => obj.type_name(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Source-like rendering: strings are quoted.
    ///
    /// `Display` prints strings raw, which is what the REPL shows for a
    /// top-level result; containers use `repr` for their elements.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

/// Identity for objects, contents for scalars.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Object(obj) => f.write_str(&obj.describe()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Shared handle to a host object.
#[derive(Clone)]
pub struct HostRef(Rc<dyn HostObject>);

impl HostRef {
    pub fn new(object: impl HostObject + 'static) -> Self {
        HostRef(Rc::new(object))
    }

    /// Returns `true` if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &HostRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for HostRef {
    type Target = dyn HostObject;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostRef").field(&self.0.describe()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::collections::Counter;

    #[test]
    fn test_display_and_repr() {
        assert_eq!(Value::int(-3).to_string(), "-3");
        assert_eq!(Value::string("hi").to_string(), "hi");
        assert_eq!(Value::string("hi").repr(), "\"hi\"");
    }

    #[test]
    fn test_object_equality_is_identity() {
        let a = Value::object(Counter::default());
        let b = a.clone();
        let c = Value::object(Counter::default());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scalars_compare_by_content() {
        assert_eq!(Value::int(1), Value::from(1_i64));
        assert_ne!(Value::int(1), Value::string("1"));
    }
}
