//! Grove Parse - turns a token slice into a parse tree.
//!
//! # Architecture
//!
//! Parsing is a fallthrough over ordered production lists:
//!
//! - [`Parser::parse_command`] tries statements, then expressions.
//! - [`Parser::parse_statement`] tries each statement production in turn.
//! - [`Parser::parse_expression`] tries each expression production in turn.
//!
//! The first production to accept the whole token slice wins. Productions
//! are pure functions of their tokens, so a failed attempt leaves nothing to
//! roll back. Local failures are discarded; the caller only sees one
//! `Unrecognized*` error once every production has been exhausted.
//!
//! # Verbose Mode
//!
//! With [`Parser::verbose`] enabled, every rejected production is reported
//! through `tracing` at `DEBUG` level, nested under a span per dispatch. This
//! never changes parse results.

mod error;
mod grammar;
mod parens;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use grammar::{Production, ProductionFn, EXPRESSIONS, STATEMENTS};
pub use parens::match_parens;

use grove_ir::{ensure_sufficient_stack, Command, Expr, Stmt};
use grove_lexer::render;

/// Parser configuration and production registry.
#[derive(Clone, Debug)]
pub struct Parser {
    verbose: bool,
    statements: Vec<Production<Stmt>>,
    expressions: Vec<Production<Expr>>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// A parser with the builtin Grove grammar.
    pub fn new() -> Self {
        Parser {
            verbose: false,
            statements: STATEMENTS.to_vec(),
            expressions: EXPRESSIONS.to_vec(),
        }
    }

    /// Log rejected productions.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Register an extra expression production, tried after the builtin ones.
    #[must_use]
    pub fn with_expression(mut self, production: Production<Expr>) -> Self {
        self.expressions.push(production);
        self
    }

    /// Register an extra statement production, tried after the builtin ones.
    #[must_use]
    pub fn with_statement(mut self, production: Production<Stmt>) -> Self {
        self.statements.push(production);
        self
    }

    /// Parse a whole line.
    pub fn parse_command(&self, tokens: &[&str]) -> ParseResult<Command> {
        if tokens.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyInput, tokens));
        }
        let _span = self.span("command", tokens);

        match self.parse_statement(tokens) {
            Ok(stmt) => return Ok(Command::Stmt(stmt)),
            Err(e) => self.rejected("statement", tokens, &e),
        }
        match self.parse_expression(tokens) {
            Ok(expr) => return Ok(Command::Expr(expr)),
            Err(e) => self.rejected("expression", tokens, &e),
        }
        Err(ParseError::new(ParseErrorKind::UnrecognizedCommand, tokens))
    }

    pub fn parse_statement(&self, tokens: &[&str]) -> ParseResult<Stmt> {
        let _span = self.span("statement", tokens);
        self.first_match(&self.statements, tokens)
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognizedStatement, tokens))
    }

    pub fn parse_expression(&self, tokens: &[&str]) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| {
            let _span = self.span("expression", tokens);
            self.first_match(&self.expressions, tokens)
                .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognizedExpression, tokens))
        })
    }

    fn first_match<T>(&self, productions: &[Production<T>], tokens: &[&str]) -> Option<T> {
        for production in productions {
            match (production.parse)(self, tokens) {
                Ok(node) => {
                    if self.verbose {
                        tracing::debug!(production = production.name, "accepted");
                    }
                    return Some(node);
                }
                Err(e) => self.rejected(production.name, tokens, &e),
            }
        }
        None
    }

    fn rejected(&self, production: &str, tokens: &[&str], error: &ParseError) {
        if self.verbose {
            tracing::debug!(
                production,
                tokens = %render(tokens),
                reason = %error,
                "rejected"
            );
        }
    }

    fn span(&self, category: &'static str, tokens: &[&str]) -> Option<tracing::span::EnteredSpan> {
        self.verbose.then(|| {
            tracing::debug_span!("parse", category, tokens = %render(tokens)).entered()
        })
    }
}

/// Tokenize and parse one line with the default parser.
pub fn parse(line: &str) -> ParseResult<Command> {
    Parser::new().parse_command(&grove_lexer::tokenize(line))
}

#[cfg(test)]
mod tests;
