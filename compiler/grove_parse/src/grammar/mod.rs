//! Grammar productions.
//!
//! Each production is a plain function from a token slice to a node. A
//! production checks its own token shape before recursing into the parser
//! for sub-expressions, and never touches shared state, so the dispatcher
//! can try productions blindly and fall through on failure.
//!
//! # Module Structure
//!
//! - [`literal`]: Number, string literal, name
//! - [`binary`]: Addition, subtraction
//! - [`object`]: `new <path>` object references
//! - [`call`]: `call ( ... )` method invocations
//! - [`stmt`]: Assignment, terminate, import

mod binary;
mod call;
mod literal;
mod object;
mod stmt;

use grove_ir::{Expr, Stmt};

use crate::error::ParseResult;
use crate::Parser;

/// Signature shared by every production.
pub type ProductionFn<T> = fn(&Parser, &[&str]) -> ParseResult<T>;

/// A named grammar production.
pub struct Production<T> {
    pub name: &'static str,
    pub parse: ProductionFn<T>,
}

// Manual impls: derive would require `T: Clone`.
impl<T> Clone for Production<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Production<T> {}

impl<T> std::fmt::Debug for Production<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Production").field("name", &self.name).finish()
    }
}

impl<T> Production<T> {
    pub const fn new(name: &'static str, parse: ProductionFn<T>) -> Self {
        Production { name, parse }
    }
}

/// Statement productions, in trial order.
pub const STATEMENTS: &[Production<Stmt>] = &[
    Production::new("assignment", stmt::assignment),
    Production::new("terminate", stmt::terminate),
    Production::new("import", stmt::import),
];

/// Expression productions, in trial order.
///
/// No production's token shape is a prefix of another's, so the order only
/// matters for productions registered later through
/// [`Parser::with_expression`](crate::Parser::with_expression).
pub const EXPRESSIONS: &[Production<Expr>] = &[
    Production::new("number", literal::number),
    Production::new("string", literal::string),
    Production::new("name", literal::name),
    Production::new("addition", binary::addition),
    Production::new("subtraction", binary::subtraction),
    Production::new("object reference", object::object_ref),
    Production::new("call", call::call),
];

pub(crate) use literal::bindable_name;
