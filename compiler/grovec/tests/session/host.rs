use super::common::{error, session_with, value};
use grovec::{EvalError, GroveError, Session, Value};
use pretty_assertions::assert_eq;

fn eval_error(session: &mut Session, line: &str) -> EvalError {
    match error(session, line) {
        GroveError::Eval(err) => err,
        GroveError::Parse(err) => panic!("`{line}` should parse, got {err}"),
    }
}

#[test]
fn import_and_call_module_function() {
    let mut session = session_with(&["import math"]);
    assert_eq!(value(&mut session, "call ( math gcd 12 18 )"), Value::int(6));
    assert_eq!(value(&mut session, "call ( math isqrt 99 )"), Value::int(9));
}

#[test]
fn missing_module() {
    let mut session = Session::new();
    assert_eq!(
        eval_error(&mut session, "import turtle"),
        EvalError::ModuleNotFound {
            name: "turtle".into()
        }
    );
    assert_eq!(
        error(&mut session, "import turtle").to_string(),
        "no module named turtle"
    );
}

#[test]
fn undefined_and_uncallable_members() {
    let mut session = session_with(&["import sys"]);
    assert!(matches!(
        eval_error(&mut session, "call ( sys exit )"),
        EvalError::UndefinedMethod { .. }
    ));
    assert_eq!(
        error(&mut session, "call ( sys version )").to_string(),
        "version is not callable on module"
    );
    assert_eq!(
        value(&mut session, "call ( sys platform )"),
        Value::string(std::env::consts::OS)
    );
}

#[test]
fn wrong_argument_count() {
    let mut session = session_with(&["set s = \"abc\""]);
    assert_eq!(
        error(&mut session, "call ( s replace \"a\" )").to_string(),
        "incorrect number of arguments for str.replace(): expected 2, got 1"
    );
    assert_eq!(
        error(&mut session, "call ( s concat )").to_string(),
        "incorrect number of arguments for str.concat(): expected at least 1, got 0"
    );
}

#[test]
fn objects_are_shared_by_reference() {
    let mut session = session_with(&[
        "import collections",
        "set stack = new collections.Stack",
        "set alias = stack",
        "call ( alias push 1 )",
        "call ( stack push \"two\" )",
    ]);
    assert_eq!(value(&mut session, "call ( alias len )"), Value::int(2));
    assert_eq!(value(&mut session, "call ( alias pop )"), Value::string("two"));
    assert_eq!(value(&mut session, "stack").to_string(), "Stack([1])");
}

#[test]
fn stack_can_hold_itself() {
    let mut session = session_with(&["set s = new Stack"]);
    assert_eq!(value(&mut session, "call ( s push s )"), Value::int(1));
    assert_eq!(value(&mut session, "s").to_string(), "Stack([Stack([...])])");
    assert_eq!(value(&mut session, "call ( s peek )"), value(&mut session, "s"));
}

#[test]
fn string_module_helpers() {
    let mut session = session_with(&["import string", "set w = \"grove_lang\""]);
    assert_eq!(
        value(&mut session, "call ( string capwords w )"),
        Value::string("Grove_Lang")
    );
    assert_eq!(
        value(&mut session, "new string.ascii_uppercase").to_string(),
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
    );
}

#[test]
fn calls_compose_with_arithmetic() {
    let mut session = session_with(&["set s = \"hello\"", "set n = 3"]);
    assert_eq!(
        value(&mut session, "+ ( call ( s len ) ) ( call ( n pow 2 ) )"),
        Value::int(14)
    );
    assert_eq!(
        value(&mut session, "call ( s find ( call ( s concat \"\" ) ) )"),
        Value::int(0)
    );
}

#[test]
fn unknown_object_paths() {
    let mut session = session_with(&["import math"]);
    assert_eq!(
        error(&mut session, "new math.pi").to_string(),
        "cannot resolve `pi` in object path `math.pi`"
    );
    assert_eq!(
        eval_error(&mut session, "new Widget"),
        EvalError::UnknownObject {
            path: "Widget".into(),
            segment: "Widget".into()
        }
    );
}
