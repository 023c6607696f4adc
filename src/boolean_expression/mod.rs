//! Boolean expressions are simple structures that represent boolean formulas explicitly.
//!
//! They can be parsed from a string representation (using `parse`, `TryFrom` or `FromStr`),
//! evaluated in a `VariableContext`, exported as a `.dot` graph and (de)serialised as JSON:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//! use std::collections::HashMap;
//!
//! let f = parse("x_0 AND NOT x_1 OR (x_1 XOR x_3)").unwrap();
//! let mut values = HashMap::new();
//! values.insert("x_0", true);
//! values.insert("x_1", false);
//! values.insert("x_3", false);
//! assert_eq!(Ok(true), f.evaluate(&values));
//! ```

use serde::{Deserialize, Serialize};

/// **(internal)** Utility methods, constructors and conversions for boolean expressions.
mod _impl_boolean_expression;

/// **(internal)** Evaluation of boolean expressions in a variable context.
mod _impl_evaluation;

/// **(internal)** Export of boolean expressions as `.dot` graphs.
mod _impl_export_dot;

/// **(internal)** Parsing functions for boolean expressions.
mod _impl_parser;

/// **(internal)** JSON document representation of boolean expressions.
mod _impl_serialisation;

pub use _impl_evaluation::evaluate;
pub use _impl_export_dot::to_graph;
pub use _impl_parser::parse;

/// Recursive type for boolean expression tree.
///
/// Every `Variable` name is a valid identifier (`[A-Za-z_][A-Za-z0-9_]*`) that is not
/// a reserved keyword. The order of operands is preserved exactly as written.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "_impl_serialisation::ExpressionDocument",
    try_from = "_impl_serialisation::ExpressionDocument"
)]
pub enum BooleanExpression {
    Const(bool),
    Variable(String),
    Not(Box<BooleanExpression>),
    And(Box<BooleanExpression>, Box<BooleanExpression>),
    Or(Box<BooleanExpression>, Box<BooleanExpression>),
    Xor(Box<BooleanExpression>, Box<BooleanExpression>),
}
