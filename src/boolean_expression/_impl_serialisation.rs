//! The JSON document of an expression is a tree of objects, each with a `type` field
//! (`CONST`, `VAR`, `NOT`, `AND`, `OR` or `XOR`) followed by the fields of the node:
//! `value` for constants, `name` for variables, `operand` for negation and `left`/`right`
//! for binary operators.

use super::BooleanExpression;
use crate::_impl_lexer::is_valid_variable_name;
use crate::MAX_TREE_DEPTH;
use serde::{Deserialize, Serialize};
use std::cmp::max;

/// **(internal)** Mirror of `BooleanExpression` which defines the shape of the JSON document.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub(super) enum ExpressionDocument {
    Const {
        value: bool,
    },
    Var {
        name: String,
    },
    Not {
        operand: Box<ExpressionDocument>,
    },
    And {
        left: Box<ExpressionDocument>,
        right: Box<ExpressionDocument>,
    },
    Or {
        left: Box<ExpressionDocument>,
        right: Box<ExpressionDocument>,
    },
    Xor {
        left: Box<ExpressionDocument>,
        right: Box<ExpressionDocument>,
    },
}

impl From<BooleanExpression> for ExpressionDocument {
    fn from(expression: BooleanExpression) -> Self {
        let node = |inner: Box<BooleanExpression>| Box::new(ExpressionDocument::from(*inner));
        match expression {
            BooleanExpression::Const(value) => ExpressionDocument::Const { value },
            BooleanExpression::Variable(name) => ExpressionDocument::Var { name },
            BooleanExpression::Not(inner) => ExpressionDocument::Not {
                operand: node(inner),
            },
            BooleanExpression::And(l, r) => ExpressionDocument::And {
                left: node(l),
                right: node(r),
            },
            BooleanExpression::Or(l, r) => ExpressionDocument::Or {
                left: node(l),
                right: node(r),
            },
            BooleanExpression::Xor(l, r) => ExpressionDocument::Xor {
                left: node(l),
                right: node(r),
            },
        }
    }
}

impl TryFrom<ExpressionDocument> for BooleanExpression {
    type Error = String;

    fn try_from(document: ExpressionDocument) -> Result<Self, Self::Error> {
        read_document(document, 1)
    }
}

/// **(internal)** Convert a `document` node at the given `depth` (the root has depth one),
/// rejecting invalid names and trees deeper than `MAX_TREE_DEPTH`.
fn read_document(document: ExpressionDocument, depth: usize) -> Result<BooleanExpression, String> {
    if depth > MAX_TREE_DEPTH {
        return Err(format!(
            "Expression is nested deeper than {} levels.",
            MAX_TREE_DEPTH
        ));
    }
    let depth = depth + 1;
    Ok(match document {
        ExpressionDocument::Const { value } => BooleanExpression::Const(value),
        ExpressionDocument::Var { name } => {
            if !is_valid_variable_name(&name) {
                return Err(format!("Invalid variable name {:?}.", name));
            }
            BooleanExpression::Variable(name)
        }
        ExpressionDocument::Not { operand } => {
            BooleanExpression::Not(Box::new(read_document(*operand, depth)?))
        }
        ExpressionDocument::And { left, right } => BooleanExpression::And(
            Box::new(read_document(*left, depth)?),
            Box::new(read_document(*right, depth)?),
        ),
        ExpressionDocument::Or { left, right } => BooleanExpression::Or(
            Box::new(read_document(*left, depth)?),
            Box::new(read_document(*right, depth)?),
        ),
        ExpressionDocument::Xor { left, right } => BooleanExpression::Xor(
            Box::new(read_document(*left, depth)?),
            Box::new(read_document(*right, depth)?),
        ),
    })
}

/// **(internal)** The deepest nesting of objects and arrays in a JSON text. Brackets inside
/// string literals are skipped.
fn json_nesting_depth(json: &str) -> usize {
    let (mut depth, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = max(deepest, depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Serialisation and deserialisation methods for `BooleanExpression`s.
impl BooleanExpression {
    /// Convert this expression to a compact JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert this expression to an indented JSON document.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read an expression from a JSON document.
    ///
    /// Any tree up to `MAX_TREE_DEPTH` levels is accepted (`serde_json` alone stops at 128
    /// levels); deeper documents are rejected before they are decoded.
    pub fn from_json(json: &str) -> Result<BooleanExpression, serde_json::Error> {
        if json_nesting_depth(json) > MAX_TREE_DEPTH {
            return Err(serde::de::Error::custom(format!(
                "Expression is nested deeper than {} levels.",
                MAX_TREE_DEPTH
            )));
        }
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        // Grows the stack on the heap when decoding deep documents.
        let stacked = serde_stacker::Deserializer::new(&mut deserializer);
        let expression = BooleanExpression::deserialize(stacked)?;
        deserializer.end()?;
        Ok(expression)
    }
}
