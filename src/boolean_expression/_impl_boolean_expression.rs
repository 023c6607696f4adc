use super::BooleanExpression;
use super::BooleanExpression::*;
use super::_impl_parser::{parse, root_precedence};
use crate::{ParseError, TokenKind};
use crate::_impl_lexer::is_valid_variable_name;
use std::cmp::max;
use std::collections::BTreeSet;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

impl TryFrom<&str> for BooleanExpression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl FromStr for BooleanExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Expressions are displayed with only the parentheses that operator priority and left
/// associativity require, so that the text can be parsed back into the same tree.
///
/// Parentheses in the output are never nested deeper than in the text the tree was parsed
/// from, hence the output of `parse` always passes the nesting limit again.
impl Display for BooleanExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Const(true) => write!(f, "TRUE"),
            Const(false) => write!(f, "FALSE"),
            Variable(name) => write!(f, "{}", name),
            Not(inner) => {
                write!(f, "NOT ")?;
                write_operand(f, inner, root_precedence(inner) < root_precedence(self))
            }
            And(l, r) => self.write_binary(f, TokenKind::And, l, r),
            Or(l, r) => self.write_binary(f, TokenKind::Or, l, r),
            Xor(l, r) => self.write_binary(f, TokenKind::Xor, l, r),
        }
    }
}

/// **(internal)** Write `operand`, optionally wrapped in parentheses.
fn write_operand(
    f: &mut Formatter<'_>,
    operand: &BooleanExpression,
    parenthesised: bool,
) -> Result<(), Error> {
    if parenthesised {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl BooleanExpression {
    /// **(internal)** Write a binary node. Operators are left-associative, so the right operand
    /// needs parentheses already when it binds as tight as `self`.
    fn write_binary(
        &self,
        f: &mut Formatter<'_>,
        operator: TokenKind,
        left: &BooleanExpression,
        right: &BooleanExpression,
    ) -> Result<(), Error> {
        let precedence = root_precedence(self);
        write_operand(f, left, root_precedence(left) < precedence)?;
        write!(f, " {} ", operator)?;
        write_operand(f, right, root_precedence(right) <= precedence)
    }
}

/// Constructors and basic queries over the expression tree.
impl BooleanExpression {
    pub fn mk_const(value: bool) -> BooleanExpression {
        Const(value)
    }

    /// Create a variable expression.
    ///
    /// *Panics*: the name must match `[A-Za-z_][A-Za-z0-9_]*` and must not be one
    /// of the reserved keywords (`AND`, `OR`, `NOT`, `XOR`, `TRUE`, `FALSE`).
    pub fn mk_var(name: &str) -> BooleanExpression {
        if !is_valid_variable_name(name) {
            panic!("Variable name {:?} is invalid.", name);
        }
        Variable(name.to_string())
    }

    pub fn mk_not(inner: BooleanExpression) -> BooleanExpression {
        Not(Box::new(inner))
    }

    pub fn mk_and(left: BooleanExpression, right: BooleanExpression) -> BooleanExpression {
        And(Box::new(left), Box::new(right))
    }

    pub fn mk_or(left: BooleanExpression, right: BooleanExpression) -> BooleanExpression {
        Or(Box::new(left), Box::new(right))
    }

    pub fn mk_xor(left: BooleanExpression, right: BooleanExpression) -> BooleanExpression {
        Xor(Box::new(left), Box::new(right))
    }

    /// Total number of nodes in this expression tree (including operator nodes).
    pub fn size(&self) -> usize {
        match self {
            Const(_) | Variable(_) => 1,
            Not(inner) => inner.size() + 1,
            And(l, r) | Or(l, r) | Xor(l, r) => l.size() + r.size() + 1,
        }
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Const(_) | Variable(_) => 1,
            Not(inner) => inner.depth() + 1,
            And(l, r) | Or(l, r) | Xor(l, r) => max(l.depth(), r.depth()) + 1,
        }
    }

    /// Names of all variables that appear in this expression, in lexicographic order.
    pub fn support_set(&self) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        self.collect_support(&mut result);
        result
    }

    /// **(internal)** Add all variables of this expression into the `support` set.
    fn collect_support(&self, support: &mut BTreeSet<String>) {
        match self {
            Const(_) => {}
            Variable(name) => {
                support.insert(name.clone());
            }
            Not(inner) => inner.collect_support(support),
            And(l, r) | Or(l, r) | Xor(l, r) => {
                l.collect_support(support);
                r.collect_support(support);
            }
        }
    }
}
