use super::common::{error, session_with, value};
use grovec::{Completion, EvalError, GroveError, ParseErrorKind, Session, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn assignment_round_trips() {
    let mut session = Session::new();
    assert_eq!(session.evaluate_line("set x = 5"), Ok(Completion::Unit));
    assert_eq!(value(&mut session, "x"), Value::int(5));
}

#[test]
fn reassignment_overwrites() {
    let mut session = session_with(&["set x = 1", "set x = 2"]);
    assert_eq!(value(&mut session, "x"), Value::int(2));
}

#[test]
fn unbound_name() {
    let mut session = Session::new();
    assert_eq!(
        error(&mut session, "x"),
        GroveError::Eval(EvalError::UndefinedName { name: "x".into() })
    );
}

#[test]
fn nested_arithmetic() {
    let mut session = Session::new();
    assert_eq!(value(&mut session, "+ ( 1 ) ( - ( 5 ) ( 2 ) )"), Value::int(4));
}

#[test]
fn unparenthesized_operand_is_a_parse_error() {
    let mut session = Session::new();
    let GroveError::Parse(err) = error(&mut session, "+ ( 1 ) 2") else {
        panic!("expected a parse error");
    };
    assert_eq!(err.kind(), &ParseErrorKind::UnrecognizedCommand);
    assert_eq!(err.tokens(), "+ ( 1 ) 2");
    assert_eq!(err.to_string(), "unrecognized command in `+ ( 1 ) 2`");
}

#[test]
fn only_quit_and_exit_terminate() {
    let mut session = Session::new();
    assert_eq!(session.evaluate_line("quit"), Ok(Completion::Exit));
    assert_eq!(session.evaluate_line("  exit  "), Ok(Completion::Exit));
    for line in ["stop", "Quit", "bye", "leave"] {
        assert!(
            !matches!(session.evaluate_line(line), Ok(Completion::Exit)),
            "`{line}` must not terminate"
        );
    }
}

#[test]
fn call_on_unbound_receiver_is_undefined_name() {
    let mut session = Session::new();
    assert_eq!(
        error(&mut session, "call ( nobody anything )"),
        GroveError::Eval(EvalError::UndefinedName {
            name: "nobody".into()
        })
    );
}

#[test]
fn reserved_words_cannot_be_bound() {
    let mut session = Session::new();
    for word in ["set", "call", "import", "quit", "exit", "new"] {
        assert!(
            matches!(
                session.evaluate_line(&format!("set {word} = 1")),
                Err(GroveError::Parse(_))
            ),
            "`{word}` must not be assignable"
        );
    }
}

#[test]
fn error_messages() {
    let mut session = Session::new();
    assert_eq!(error(&mut session, "ghost").to_string(), "ghost is undefined");
    assert_eq!(error(&mut session, "").to_string(), "empty input");
    assert_eq!(error(&mut session, "ghost").phase(), "evaluating");
    assert_eq!(error(&mut session, "+ 1").phase(), "parsing");
}

#[test]
fn verbose_sessions_agree_with_quiet_ones() {
    let mut quiet = Session::new();
    let mut loud = Session::new().verbose(true);
    assert!(loud.parser().is_verbose());
    for line in ["set a = 3", "+ ( a ) ( 4 )", "+ ( a ) 4", "call ( a pow 2 )", "b"] {
        assert_eq!(quiet.evaluate_line(line), loud.evaluate_line(line), "{line}");
    }
}

proptest! {
    #[test]
    fn arithmetic_laws(a in 0..1_000_000_000_i64, b in 0..1_000_000_000_i64) {
        let mut session = Session::new();
        prop_assert_eq!(
            session.evaluate_line(&format!("+ ( {a} ) ( {b} )")),
            Ok(Completion::Value(Value::int(a + b)))
        );
        prop_assert_eq!(
            session.evaluate_line(&format!("- ( {a} ) ( {b} )")),
            Ok(Completion::Value(Value::int(a - b)))
        );
    }

    #[test]
    fn extra_whitespace_is_insignificant(a in 0..1_000_i64, pad in " {1,4}") {
        let mut session = Session::new();
        let line = format!("+{pad}({pad}{a}{pad}){pad}({pad}1{pad})");
        prop_assert_eq!(
            session.evaluate_line(&line),
            Ok(Completion::Value(Value::int(a + 1)))
        );
    }
}
