//! # Biodivine/LibLogicTree
//!
//! This crate provides a small front end for propositional formulas written using keyword
//! operators (`AND`, `OR`, `XOR`, `NOT`), constants (`TRUE`, `FALSE`), parentheses and
//! variable identifiers. A formula is parsed into an explicit `BooleanExpression` tree, which
//! can then be evaluated in a variable assignment, exported as a `.dot` graph, or converted
//! to and from a JSON document.
//!
//! Every `BooleanExpression` owns its memory and is immutable once built. It is thus trivial to
//! share between threads, and all operations of this crate are pure functions over their inputs.
//!
//! At the moment, we support the following operations:
//!
//!  - Lazy tokenization of formula strings (`Lexer`, `tokenize`).
//!  - Precedence-aware parsing (`parse`) with typed errors (`ParseError`).
//!  - Evaluation in any `VariableContext`, such as a `HashMap` or a `LogicValuation`.
//!  - Export to `.dot` graphs (`to_graph`).
//!  - JSON serialisation of expression trees.
//!
//! More detailed description can be found in the [tutorial module](./tutorial/index.html).
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! let tree = parse("A AND (B XOR TRUE) OR NOT FALSE").unwrap();
//! let valuation = LogicValuation::new().with("A", true).with("B", false);
//!
//! assert_eq!(Ok(true), evaluate(&tree, &valuation));
//! assert_eq!(8, tree.size());
//! assert!(to_graph(&tree).starts_with("digraph LogicTree {"));
//! ```
//!

use fxhash::FxBuildHasher;
use std::collections::HashMap;
use thiserror::Error;

pub mod boolean_expression;
pub mod tutorial;

pub use boolean_expression::BooleanExpression;

/// **(internal)** Implementation of the `Lexer` and keyword resolution.
mod _impl_lexer;

/// **(internal)** Implementation of the `Token` and `TokenKind`.
mod _impl_token;

/// **(internal)** Implementation of the `LogicValuation` and `VariableContext`.
mod _impl_logic_valuation;


/// Several basic utility methods for testing.
#[cfg(test)]
mod _test_util;

pub use _impl_lexer::tokenize;
pub use boolean_expression::evaluate;
pub use boolean_expression::parse;
pub use boolean_expression::to_graph;

/// **(internal)** Reserved words that can never be used as variable names, together with
/// the token they are resolved to.
const KEYWORDS: [(&str, TokenKind); 6] = [
    ("AND", TokenKind::And),
    ("OR", TokenKind::Or),
    ("NOT", TokenKind::Not),
    ("XOR", TokenKind::Xor),
    ("TRUE", TokenKind::True),
    ("FALSE", TokenKind::False),
];

/// Maximal number of nested parenthesis groups accepted by the parser.
///
/// The parser is recursive in parenthesis groups, so this bounds its stack usage.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Maximal depth of a `BooleanExpression` produced by the parser.
///
/// Evaluation, `.dot` export, formatting and dropping of a tree are all recursive in its depth,
/// so trees deeper than this are rejected already during parsing.
pub const MAX_TREE_DEPTH: usize = 2048;

/// Classifies a `Token` of the boolean formula language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    And,
    Or,
    Not,
    Xor,
    True,
    False,
    LParen,
    RParen,
    Var,
}

/// An indivisible lexical unit of a boolean formula.
///
/// For keywords and parentheses, the `lexeme` is always the canonical spelling of the `kind`.
/// For `TokenKind::Var`, it is the identifier text.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

/// A lazy iterator over the tokens of a boolean formula.
///
/// Each item is a token together with the (0-based, in characters) position where it starts.
/// Once an error is returned, the iterator is exhausted.
pub struct Lexer<'a> {
    input: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
    failed: bool,
}

/// Errors that can appear when tokenizing or parsing a boolean formula.
///
/// All positions are 0-based character offsets into the parsed string.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid character {0:?} at position {1}.")]
    InvalidCharacter(char, usize),

    #[error("Unexpected token `{0}` at position {1}.")]
    UnexpectedToken(Token, usize),

    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,

    #[error("Expression nested too deeply at position {0}.")]
    NestingTooDeep(usize),
}

/// Errors that can appear when evaluating a `BooleanExpression`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EvalError {
    #[error("Undefined variable `{0}`.")]
    UndefinedVariable(String),
}

/// A source of variable values used when evaluating a `BooleanExpression`.
///
/// Variables that are not known to the context must yield `None`; they are never defaulted.
pub trait VariableContext {
    fn value_of(&self, name: &str) -> Option<bool>;
}

/// An assignment of boolean values to named variables.
///
/// Unlike a plain map, a valuation can be built fluently (`LogicValuation::new().with("a", true)`)
/// and collected from an iterator of `(name, value)` pairs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LogicValuation(HashMap<String, bool, FxBuildHasher>);
