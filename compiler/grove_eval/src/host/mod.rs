//! Host objects: values supplied from outside the language.
//!
//! Grove reaches host objects through `import`, `new <path>` and `call`.
//! Instead of open reflection, every host object declares its capability set
//! through [`HostObject::member`]: which names exist, which are methods (and
//! with what arity), which are plain attributes, and which are classes that
//! `new` can instantiate. The evaluator checks these declarations before it
//! invokes anything, so an unknown method, a non-callable attribute and a
//! wrong argument count are three distinct errors.
//!
//! # Module Structure
//!
//! - [`module`]: Table-driven host modules
//! - [`math`], [`string`], [`sys`], [`collections`]: the builtin modules
//! - [`args`]: argument extraction for native handlers

pub mod args;
pub mod collections;
pub mod math;
pub mod module;
pub mod string;
pub mod sys;

use std::fmt;

use crate::errors::EvalResult;
use crate::value::Value;

/// A value the host exposes to Grove.
pub trait HostObject {
    /// Type name shown in errors and the default description.
    fn type_name(&self) -> &str;

    /// Look up a member by name.
    fn member(&self, name: &str) -> Option<Member>;

    /// Invoke a method.
    ///
    /// Only called after `member(method)` returned `Member::Method` whose
    /// arity accepts `args.len()`.
    fn invoke(&self, method: &str, args: Vec<Value>) -> EvalResult;

    /// Text shown when the object is printed.
    fn describe(&self) -> String {
        format!("<{}>", self.type_name())
    }
}

/// What a member name refers to.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    Method(Arity),
    Attribute(Value),
    Class(HostClass),
}

/// Accepted argument counts for a method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A host type that `new` can instantiate with no arguments.
#[derive(Clone, Copy)]
pub struct HostClass {
    name: &'static str,
    construct: fn() -> Value,
}

impl HostClass {
    pub const fn new(name: &'static str, construct: fn() -> Value) -> Self {
        HostClass { name, construct }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Create a fresh instance.
    pub fn instantiate(&self) -> Value {
        (self.construct)()
    }
}

impl PartialEq for HostClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for HostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class '{}'>", self.name)
    }
}
