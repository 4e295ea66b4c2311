use grovec::commands::{lex_line, parse_line, run_file, run_lines, Mode, Outcome, BANNER, FAREWELL, PROMPT};
use grovec::Session;
use pretty_assertions::assert_eq;

fn run(input: &str, mode: Mode) -> (String, Outcome) {
    let mut session = Session::new();
    let mut out = Vec::new();
    let outcome = run_lines(&mut session, input.as_bytes(), &mut out, mode).unwrap();
    (String::from_utf8(out).unwrap(), outcome)
}

#[test]
fn script_prints_values_and_errors() {
    let script = "set x = 2\n\n+ ( x ) ( 3 )\nghost\n\"done\"\n";
    let (output, outcome) = run(script, Mode::Script);
    assert_eq!(
        output,
        "5\nError evaluating ghost\nghost is undefined\ndone\n"
    );
    assert_eq!(
        outcome,
        Outcome {
            lines: 4,
            errors: 1,
            terminated: false
        }
    );
}

#[test]
fn parse_errors_are_reported_and_the_loop_continues() {
    let (output, outcome) = run("+ ( 1 ) 2\n7\n", Mode::Script);
    assert_eq!(
        output,
        "Error parsing + ( 1 ) 2\nunrecognized command in `+ ( 1 ) 2`\n7\n"
    );
    assert_eq!(outcome.errors, 1);
}

#[test]
fn quit_stops_reading() {
    let (output, outcome) = run("1\nquit\n2\n", Mode::Script);
    assert_eq!(output, "1\n");
    assert!(outcome.terminated);
    assert_eq!(outcome.lines, 2);
}

#[test]
fn interactive_session_frames_output() {
    let (output, outcome) = run("set a = 4\na\nexit\n", Mode::Interactive);
    assert!(output.starts_with(BANNER));
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
    assert_eq!(output.matches(PROMPT).count(), 3);
    assert!(output.contains("> 4\n"));
    assert!(outcome.terminated);
}

#[test]
fn interactive_end_of_input_says_goodbye() {
    let (output, outcome) = run("", Mode::Interactive);
    assert!(output.ends_with(&format!("{PROMPT}\n{FAREWELL}\n")));
    assert!(!outcome.terminated);
}

#[test]
fn lex_command_lists_token_categories() {
    let mut out = Vec::new();
    lex_line("set x = + ( 1 ) ( \"s\" )", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Tokens for `set x = + ( 1 ) ( \"s\" )` (10 tokens):"));
    assert!(text.contains("keyword"));
    assert!(text.contains("operator"));
    assert!(text.contains("string"));
}

#[test]
fn parse_command_shows_canonical_form() {
    let session = Session::new();
    let mut out = Vec::new();
    assert!(parse_line(&session, "set   y =  - ( 9 ) ( 1 )", &mut out).unwrap());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Assign"));
    assert!(text.ends_with("canonical: set y = - ( 9 ) ( 1 )\n"));

    let mut out = Vec::new();
    assert!(!parse_line(&session, "set = 1", &mut out).unwrap());
}

#[test]
fn missing_script_is_reported_not_run() {
    let mut session = Session::new();
    let err = run_file(&mut session, "no/such/script.grove").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("'no/such/script.grove'"));
}

#[test]
fn stack_holding_itself_prints() {
    let script = "set s = new Stack\ncall ( s push s )\ns\n\"still here\"\n";
    let (output, outcome) = run(script, Mode::Script);
    assert_eq!(output, "1\nStack([Stack([...])])\nstill here\n");
    assert_eq!(outcome.errors, 0);
    assert!(!outcome.terminated);
}
