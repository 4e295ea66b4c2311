//! Tree-walking interpreter for Grove.
//!
//! One `Interpreter` owns one environment, one module cache and one global
//! registry. Nothing is process-wide, so independent interpreters can run side
//! by side (tests rely on this).
//!
//! # Module Structure
//!
//! - `builder`: [`InterpreterBuilder`] configuration
//! - `call`: `call ( <receiver> <method> <args>* )` dispatch
//! - `resolve`: `new <path>` object resolution

mod builder;
mod call;
mod resolve;

pub use builder::InterpreterBuilder;

use rustc_hash::FxHashMap;

use grove_ir::{ensure_sufficient_stack, BinaryOp, Command, Expr, Name, Stmt};

use crate::environment::Environment;
use crate::errors::{integer_overflow, type_mismatch, undefined_name, EvalError, EvalResult};
use crate::host::Member;
use crate::loader::ModuleLoader;
use crate::value::Value;

/// Outcome of evaluating one command.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// An expression produced a value.
    Value(Value),
    /// A statement ran; nothing to show.
    Unit,
    /// `quit` or `exit`: the caller should stop reading input.
    Exit,
}

impl Completion {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Completion::Value(value) => Some(value),
            Completion::Unit | Completion::Exit => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Completion::Exit)
    }
}

/// Evaluates parse trees against a persistent environment.
pub struct Interpreter {
    env: Environment,
    loader: Box<dyn ModuleLoader>,
    /// Roots for `new <path>` that need no import.
    globals: FxHashMap<Name, Member>,
    /// First successful load per module name; later imports rebind the same object.
    modules: FxHashMap<Name, Value>,
}

impl Interpreter {
    /// Interpreter with builtin modules and globals and an empty environment.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Evaluate a statement or expression.
    pub fn eval_command(&mut self, command: &Command) -> EvalResult<Completion> {
        match command {
            Command::Stmt(stmt) => self.eval_stmt(stmt),
            Command::Expr(expr) => self.eval_expr(expr).map(Completion::Value),
        }
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult<Completion> {
        match stmt {
            Stmt::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.env.define(target.clone(), value);
                Ok(Completion::Unit)
            }
            Stmt::Import { module } => {
                let value = self.import(module)?;
                self.env.define(module.clone(), value);
                Ok(Completion::Unit)
            }
            Stmt::Terminate(kind) => {
                tracing::trace!(keyword = %kind.keyword(), "terminate");
                Ok(Completion::Exit)
            }
        }
    }

    pub fn eval_expr(&self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Number(n) => Ok(Value::Int(*n)),
            Expr::Str(s) => Ok(Value::string(s.as_str())),
            Expr::Name(name) => self
                .env
                .lookup(name.as_str())
                .ok_or_else(|| undefined_name(name.as_str())),
            Expr::Binary { op, left, right } => {
                ensure_sufficient_stack(|| self.eval_binary(*op, left, right))
            }
            Expr::ObjectRef(path) => self.resolve_object(path),
            Expr::Call(call) => self.eval_call(call),
        }
    }

    fn eval_binary(&self, op: BinaryOp, left: &Expr, right: &Expr) -> EvalResult {
        let context = op.production();
        let left = self.eval_expr(left)?;
        let a = left.as_int().ok_or_else(|| type_mismatch(context, "int", &left))?;
        let right = self.eval_expr(right)?;
        let b = right.as_int().ok_or_else(|| type_mismatch(context, "int", &right))?;
        let result = match op {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Sub => a.checked_sub(b),
        };
        result.map(Value::Int).ok_or_else(|| integer_overflow(context))
    }

    fn import(&mut self, module: &Name) -> EvalResult {
        if let Some(cached) = self.modules.get(module) {
            tracing::trace!(%module, "import (cached)");
            return Ok(cached.clone());
        }
        let value = self
            .loader
            .load(module.as_str())
            .ok_or_else(|| EvalError::ModuleNotFound {
                name: module.to_string(),
            })?;
        tracing::trace!(%module, "import");
        self.modules.insert(module.clone(), value.clone());
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
