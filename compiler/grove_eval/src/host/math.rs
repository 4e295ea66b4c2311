//! The `math` module: integer number theory.

use super::args;
use super::module::HostModule;
use super::Arity;
use crate::errors::{integer_overflow, EvalResult};
use crate::value::Value;

pub fn module() -> HostModule {
    HostModule::new("math")
        .function("gcd", Arity::Exact(2), gcd)
        .function("lcm", Arity::Exact(2), lcm)
        .function("factorial", Arity::Exact(1), factorial)
        .function("isqrt", Arity::Exact(1), isqrt)
        .function("comb", Arity::Exact(2), comb)
        .constant("maxint", i64::MAX)
}

fn gcd_of(a: i64, b: i64) -> EvalResult<i64> {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    i64::try_from(a).map_err(|_| integer_overflow("math.gcd"))
}

fn gcd(values: &[Value]) -> EvalResult {
    let a = args::int(values, 0, "math.gcd")?;
    let b = args::int(values, 1, "math.gcd")?;
    gcd_of(a, b).map(Value::Int)
}

fn lcm(values: &[Value]) -> EvalResult {
    let a = args::int(values, 0, "math.lcm")?;
    let b = args::int(values, 1, "math.lcm")?;
    if a == 0 || b == 0 {
        return Ok(Value::Int(0));
    }
    let g = gcd_of(a, b)?;
    (a / g)
        .checked_mul(b)
        .and_then(i64::checked_abs)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("math.lcm"))
}

fn factorial(values: &[Value]) -> EvalResult {
    let n = args::natural(values, 0, "math.factorial")?;
    (2..=n)
        .try_fold(1_i64, i64::checked_mul)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("math.factorial"))
}

fn isqrt(values: &[Value]) -> EvalResult {
    let n = args::natural(values, 0, "math.isqrt")?;
    // Newton's method on integers; converges from above.
    if n < 2 {
        return Ok(Value::Int(n));
    }
    let mut x = n;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    Ok(Value::Int(x))
}

fn comb(values: &[Value]) -> EvalResult {
    let n = args::natural(values, 0, "math.comb")?;
    let k = args::natural(values, 1, "math.comb")?;
    if k > n {
        return Ok(Value::Int(0));
    }
    let k = k.min(n - k);
    let mut acc: i64 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1)
        acc = acc
            .checked_mul(n - i)
            .ok_or_else(|| integer_overflow("math.comb"))?
            / (i + 1);
    }
    Ok(Value::Int(acc))
}
