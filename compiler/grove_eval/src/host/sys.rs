//! The `sys` module: interpreter and platform facts.

use super::module::HostModule;
use super::Arity;
use crate::errors::EvalResult;
use crate::value::Value;

pub fn module() -> HostModule {
    HostModule::new("sys")
        .constant("version", env!("CARGO_PKG_VERSION"))
        .constant("maxsize", i64::MAX)
        .function("platform", Arity::Exact(0), platform)
}

fn platform(_: &[Value]) -> EvalResult {
    Ok(Value::string(std::env::consts::OS))
}
