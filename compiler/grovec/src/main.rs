//! Grove CLI
//!
//! Interactive REPL, script runner, and line-level debugging commands.

use grovec::commands::{lex_line, parse_line, run_file, run_repl, Outcome};
use grovec::{init_tracing, Session};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // --verbose may appear anywhere
    let before = args.len();
    args.retain(|arg| arg != "--verbose" && arg != "-v");
    let verbose = args.len() != before;
    init_tracing(verbose);

    let mut session = Session::new().verbose(verbose);

    let Some(command) = args.first().map(String::as_str) else {
        finish(run_repl(&mut session), false);
        return;
    };

    match command {
        "repl" => finish(run_repl(&mut session), false),
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: grove run <file.grove>");
                std::process::exit(1);
            };
            finish(run_file(&mut session, path), true);
        }
        "lex" => {
            if args.len() < 2 {
                eprintln!("Usage: grove lex <line>");
                std::process::exit(1);
            }
            let line = args[1..].join(" ");
            let mut stdout = std::io::stdout();
            if let Err(e) = lex_line(&line, &mut stdout) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "parse" => {
            if args.len() < 2 {
                eprintln!("Usage: grove parse <line>");
                std::process::exit(1);
            }
            let line = args[1..].join(" ");
            let mut stdout = std::io::stdout();
            match parse_line(&session, &line, &mut stdout) {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" => {
            println!("grove {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a script, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("grove"))
            {
                finish(run_file(&mut session, command), true);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Exit non-zero on an I/O error, or, for scripts, if any line failed.
fn finish(result: std::io::Result<Outcome>, strict: bool) {
    match result {
        Ok(outcome) if strict && outcome.errors > 0 => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Grove - a line-oriented toy language");
    println!();
    println!("Usage: grove [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none), repl        Start the interactive interpreter");
    println!("  run <file>          Run a script line by line");
    println!("  <file.grove>        Same as `run <file.grove>`");
    println!("  lex <line>          Show the tokens of a line");
    println!("  parse <line>        Show the parse tree of a line");
    println!("  help                Show this message");
    println!("  version             Show the version");
    println!();
    println!("Options:");
    println!("  -v, --verbose       Log rejected parse attempts to stderr");
    println!("                      (RUST_LOG overrides the default filter)");
}
