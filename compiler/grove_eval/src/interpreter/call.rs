//! Method calls.

use grove_ir::CallExpr;

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable, undefined_method, undefined_name, EvalResult};
use crate::host::Member;
use crate::methods::{invoke_on, member_of};
use crate::value::Value;

impl Interpreter {
    /// Evaluate `call ( <receiver> <method> <args>* )`.
    ///
    /// Checks run in a fixed order: receiver bound, member exists, member is
    /// a method, argument count accepted. Arguments are evaluated left to
    /// right only once all four pass.
    pub(super) fn eval_call(&self, call: &CallExpr) -> EvalResult {
        let receiver = self
            .env
            .lookup(call.receiver.as_str())
            .ok_or_else(|| undefined_name(call.receiver.as_str()))?;
        let method = call.method.as_str();

        let arity = match member_of(&receiver, method) {
            Some(Member::Method(arity)) => arity,
            Some(Member::Attribute(_) | Member::Class(_)) => {
                return Err(not_callable(method, receiver.type_name()));
            }
            None => return Err(undefined_method(method, receiver.type_name())),
        };
        if !arity.accepts(call.args.len()) {
            return Err(arity_mismatch(
                receiver.type_name(),
                method,
                arity,
                call.args.len(),
            ));
        }

        let args = call
            .args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<EvalResult<Vec<Value>>>()?;
        tracing::trace!(
            receiver = %call.receiver,
            type_name = receiver.type_name(),
            method,
            args = args.len(),
            "call"
        );
        invoke_on(&receiver, method, args)
    }
}
