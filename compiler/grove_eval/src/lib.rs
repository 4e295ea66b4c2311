//! Grove Eval - evaluator for Grove parse trees.
//!
//! # Architecture
//!
//! - [`Interpreter`]: evaluates `Command`s against an owned [`Environment`]
//! - [`Value`]: integers, strings and shared host objects
//! - [`host`]: the capability interface host objects implement, plus the
//!   builtin `math`, `string`, `sys` and `collections` modules
//! - [`ModuleLoader`]: how `import` finds modules
//! - `methods`: builtin methods on `int` and `str`
//!
//! Evaluation errors are never recovered here; every [`EvalError`] goes back
//! to the caller.

mod environment;
pub mod errors;
pub mod host;
mod interpreter;
mod loader;
mod methods;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use host::{Arity, HostClass, HostObject, Member};
pub use interpreter::{Completion, Interpreter, InterpreterBuilder};
pub use loader::{BuiltinModules, ChainLoader, ModuleLoader};
pub use value::{HostRef, Value};

#[cfg(test)]
mod tests;
