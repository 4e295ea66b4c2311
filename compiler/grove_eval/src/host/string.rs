//! The `string` module: character-class constants and `capwords`.

use super::args;
use super::module::HostModule;
use super::Arity;
use crate::errors::EvalResult;
use crate::value::Value;

const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn module() -> HostModule {
    HostModule::new("string")
        .function("capwords", Arity::Exact(1), capwords)
        .constant("digits", "0123456789")
        .constant("ascii_lowercase", ASCII_LOWERCASE)
        .constant("ascii_uppercase", ASCII_UPPERCASE)
        .constant("ascii_letters", format!("{ASCII_LOWERCASE}{ASCII_UPPERCASE}"))
}

/// Capitalize each `_`-separated word; Grove strings cannot hold spaces.
fn capwords(values: &[Value]) -> EvalResult {
    let s = args::string(values, 0, "string.capwords")?;
    let words: Vec<String> = s
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect();
    Ok(Value::Str(words.join("_")))
}
