//! Evaluation errors.
//!
//! Every variant is raised for a parse-valid tree that cannot be evaluated.
//! None of them is recovered inside the evaluator; they propagate straight
//! to the caller.

use crate::host::Arity;
use crate::value::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("{name} is undefined")]
    UndefinedName { name: String },

    #[error("{method} is not defined for {type_name}")]
    UndefinedMethod { method: String, type_name: String },

    #[error("{member} is not callable on {type_name}")]
    NotCallable { member: String, type_name: String },

    #[error("incorrect number of arguments for {type_name}.{method}(): expected {expected}, got {got}")]
    ArityMismatch {
        type_name: String,
        method: String,
        expected: Arity,
        got: usize,
    },

    #[error("no module named {name}")]
    ModuleNotFound { name: String },

    #[error("cannot resolve `{segment}` in object path `{path}`")]
    UnknownObject { path: String, segment: String },

    #[error("type mismatch in {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        got: String,
    },

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    /// A host method rejected its arguments or state.
    #[error("{context}: {message}")]
    Host { context: String, message: String },
}

pub fn undefined_name(name: &str) -> EvalError {
    EvalError::UndefinedName {
        name: name.to_owned(),
    }
}

pub fn undefined_method(method: &str, type_name: &str) -> EvalError {
    EvalError::UndefinedMethod {
        method: method.to_owned(),
        type_name: type_name.to_owned(),
    }
}

pub fn not_callable(member: &str, type_name: &str) -> EvalError {
    EvalError::NotCallable {
        member: member.to_owned(),
        type_name: type_name.to_owned(),
    }
}

pub fn arity_mismatch(type_name: &str, method: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        type_name: type_name.to_owned(),
        method: method.to_owned(),
        expected,
        got,
    }
}

pub fn type_mismatch(context: impl Into<String>, expected: &'static str, got: &Value) -> EvalError {
    EvalError::TypeMismatch {
        context: context.into(),
        expected,
        got: got.type_name().to_owned(),
    }
}

pub fn integer_overflow(operation: impl Into<String>) -> EvalError {
    EvalError::IntegerOverflow {
        operation: operation.into(),
    }
}

pub fn host_error(context: impl Into<String>, message: impl Into<String>) -> EvalError {
    EvalError::Host {
        context: context.into(),
        message: message.into(),
    }
}
