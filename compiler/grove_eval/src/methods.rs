//! Builtin methods on integers and strings.
//!
//! Scalars are not host objects, but `call` treats them the same way: a
//! method table declares each name and arity, and dispatch is a plain match
//! on the method name. The set is fixed, so there is no registration hook.

use crate::errors::{integer_overflow, type_mismatch, undefined_method, EvalResult};
use crate::host::{args, Arity, Member};
use crate::value::Value;

const INT_METHODS: &[(&str, Arity)] = &[
    ("abs", Arity::Exact(0)),
    ("bit_length", Arity::Exact(0)),
    ("max", Arity::AtLeast(1)),
    ("min", Arity::AtLeast(1)),
    ("pow", Arity::Exact(1)),
];

const STR_METHODS: &[(&str, Arity)] = &[
    ("upper", Arity::Exact(0)),
    ("lower", Arity::Exact(0)),
    ("strip", Arity::Exact(0)),
    ("len", Arity::Exact(0)),
    ("startswith", Arity::Exact(1)),
    ("endswith", Arity::Exact(1)),
    ("find", Arity::Exact(1)),
    ("count", Arity::Exact(1)),
    ("replace", Arity::Exact(2)),
    ("concat", Arity::AtLeast(1)),
];

fn lookup(table: &[(&str, Arity)], name: &str) -> Option<Member> {
    table
        .iter()
        .find(|(method, _)| *method == name)
        .map(|&(_, arity)| Member::Method(arity))
}

/// Member lookup for any value, scalar or object.
pub fn member_of(value: &Value, name: &str) -> Option<Member> {
    match value {
        Value::Int(_) => lookup(INT_METHODS, name),
        Value::Str(_) => lookup(STR_METHODS, name),
        Value::Object(obj) => obj.member(name),
    }
}

/// Invoke a method on any value.
///
/// The caller has already checked the member table and arity.
pub fn invoke_on(receiver: &Value, method: &str, args: Vec<Value>) -> EvalResult {
    match receiver {
        Value::Int(n) => dispatch_int_method(*n, method, &args),
        Value::Str(s) => dispatch_str_method(s, method, &args),
        Value::Object(obj) => obj.invoke(method, args),
    }
}

fn dispatch_int_method(n: i64, method: &str, args: &[Value]) -> EvalResult {
    match method {
        "abs" => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("int.abs")),
        "bit_length" => Ok(Value::Int(i64::from(
            u64::BITS - n.unsigned_abs().leading_zeros(),
        ))),
        "max" => fold_ints(n, args, "int.max", i64::max),
        "min" => fold_ints(n, args, "int.min", i64::min),
        "pow" => {
            let exp = args::natural(args, 0, "int.pow")?;
            // These bases stay bounded for any exponent.
            match n {
                0 => return Ok(Value::Int(i64::from(exp == 0))),
                1 => return Ok(Value::Int(1)),
                -1 => return Ok(Value::Int(if exp % 2 == 0 { 1 } else { -1 })),
                _ => {}
            }
            u32::try_from(exp)
                .ok()
                .and_then(|exp| n.checked_pow(exp))
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("int.pow"))
        }
        _ => Err(undefined_method(method, "int")),
    }
}

fn fold_ints(start: i64, args: &[Value], context: &str, pick: fn(i64, i64) -> i64) -> EvalResult {
    let mut acc = start;
    for index in 0..args.len() {
        acc = pick(acc, args::int(args, index, context)?);
    }
    Ok(Value::Int(acc))
}

fn dispatch_str_method(s: &str, method: &str, args: &[Value]) -> EvalResult {
    match method {
        "upper" => Ok(Value::string(s.to_uppercase())),
        "lower" => Ok(Value::string(s.to_lowercase())),
        "strip" => Ok(Value::string(s.trim())),
        "len" => char_count(s.chars().count()),
        "startswith" => {
            let prefix = args::string(args, 0, "str.startswith")?;
            Ok(Value::Int(i64::from(s.starts_with(prefix))))
        }
        "endswith" => {
            let suffix = args::string(args, 0, "str.endswith")?;
            Ok(Value::Int(i64::from(s.ends_with(suffix))))
        }
        // Index in characters, or -1 when absent.
        "find" => {
            let needle = args::string(args, 0, "str.find")?;
            match s.find(needle) {
                Some(byte_index) => char_count(s[..byte_index].chars().count()),
                None => Ok(Value::Int(-1)),
            }
        }
        "count" => {
            let needle = args::string(args, 0, "str.count")?;
            char_count(s.matches(needle).count())
        }
        "replace" => {
            let from = args::string(args, 0, "str.replace")?;
            let to = args::string(args, 1, "str.replace")?;
            Ok(Value::string(s.replace(from, to)))
        }
        "concat" => {
            let mut out = s.to_owned();
            for arg in args {
                // Integers concatenate by their decimal form; objects do not.
                match arg {
                    Value::Object(_) => {
                        return Err(type_mismatch("str.concat", "int or str", arg))
                    }
                    scalar => out.push_str(&scalar.to_string()),
                }
            }
            Ok(Value::Str(out))
        }
        _ => Err(undefined_method(method, "str")),
    }
}

fn char_count(n: usize) -> EvalResult {
    i64::try_from(n)
        .map(Value::Int)
        .map_err(|_| integer_overflow("str.len"))
}
