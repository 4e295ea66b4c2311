//! Argument extraction for native method handlers.
//!
//! Arity is checked before a handler runs, so a missing argument here means a
//! handler's declared arity disagrees with its body; it is still reported as
//! an error rather than a panic.

use crate::errors::{host_error, type_mismatch, EvalResult};
use crate::value::Value;

fn arg<'a>(args: &'a [Value], index: usize, context: &str) -> EvalResult<&'a Value> {
    args.get(index)
        .ok_or_else(|| host_error(context, format!("missing argument {}", index + 1)))
}

pub fn int(args: &[Value], index: usize, context: &str) -> EvalResult<i64> {
    let value = arg(args, index, context)?;
    value
        .as_int()
        .ok_or_else(|| type_mismatch(format!("{context} argument {}", index + 1), "int", value))
}

pub fn string<'a>(args: &'a [Value], index: usize, context: &str) -> EvalResult<&'a str> {
    let value = arg(args, index, context)?;
    value
        .as_str()
        .ok_or_else(|| type_mismatch(format!("{context} argument {}", index + 1), "str", value))
}

/// Any value, taken by clone.
pub fn any(args: &[Value], index: usize, context: &str) -> EvalResult<Value> {
    arg(args, index, context).cloned()
}

/// Non-negative integer argument.
pub fn natural(args: &[Value], index: usize, context: &str) -> EvalResult<i64> {
    let n = int(args, index, context)?;
    if n < 0 {
        return Err(host_error(
            context,
            format!("argument {} must be non-negative, got {n}", index + 1),
        ));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalError;

    #[test]
    fn test_extracts_typed_arguments() {
        let args = [Value::int(3), Value::string("x")];
        assert_eq!(int(&args, 0, "f"), Ok(3));
        assert_eq!(string(&args, 1, "f"), Ok("x"));
    }

    #[test]
    fn test_wrong_type() {
        let args = [Value::string("x")];
        assert!(matches!(
            int(&args, 0, "math.gcd"),
            Err(EvalError::TypeMismatch { expected: "int", .. })
        ));
    }

    #[test]
    fn test_missing_and_negative() {
        assert!(matches!(any(&[], 0, "f"), Err(EvalError::Host { .. })));
        assert!(matches!(
            natural(&[Value::int(-1)], 0, "math.factorial"),
            Err(EvalError::Host { .. })
        ));
    }
}
