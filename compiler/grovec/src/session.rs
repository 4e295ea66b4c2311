//! The line-evaluation facade.

use grove_eval::{Completion, EvalError, Interpreter};
use grove_ir::Command;
use grove_lexer::tokenize;
use grove_parse::{ParseError, Parser};

/// Failure of one line: it either did not parse or did not evaluate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GroveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl GroveError {
    /// `"parsing"` or `"evaluating"`, for `Error <phase> <line>` reports.
    pub fn phase(&self) -> &'static str {
        match self {
            GroveError::Parse(_) => "parsing",
            GroveError::Eval(_) => "evaluating",
        }
    }
}

/// A parser and an interpreter with state that persists across lines.
#[derive(Default)]
pub struct Session {
    parser: Parser,
    interpreter: Interpreter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over a preconfigured parser and interpreter.
    pub fn with_parts(parser: Parser, interpreter: Interpreter) -> Self {
        Session {
            parser,
            interpreter,
        }
    }

    /// Toggle verbose parse diagnostics.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.parser = std::mem::take(&mut self.parser).verbose(verbose);
        self
    }

    /// Tokenize and parse one line without evaluating it.
    pub fn parse_line(&self, text: &str) -> Result<Command, ParseError> {
        self.parser.parse_command(&tokenize(text))
    }

    /// Tokenize, parse and evaluate one line.
    ///
    /// Statements complete with [`Completion::Unit`], expressions with their
    /// value, and `quit`/`exit` with [`Completion::Exit`]. A line that fails
    /// binds nothing.
    pub fn evaluate_line(&mut self, text: &str) -> Result<Completion, GroveError> {
        let command = self.parse_line(text)?;
        tracing::trace!(%command, "evaluate");
        Ok(self.interpreter.eval_command(&command)?)
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }
}
