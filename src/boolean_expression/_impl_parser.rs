//!
//! Expression parsing uses precedence climbing over the table of binary operators:
//! `OR` binds the loosest, followed by `XOR` and `AND`, and all of them are left-associative.
//! A chain of operators with the same or higher precedence is folded into the left operand
//! in a loop, while the right operand is parsed with a strictly higher minimal precedence.
//! Prefix `NOT` binds tighter than any binary operator and parenthesis groups restart the
//! climbing at the lowest precedence.
//!
//! Since every result of this parser is later processed recursively, the parser also tracks
//! the depth of the trees it builds and rejects inputs exceeding `MAX_TREE_DEPTH`
//! or `MAX_NESTING_DEPTH`.

use super::BooleanExpression;
use super::BooleanExpression::*;
use crate::{Lexer, ParseError, Token, TokenKind, MAX_NESTING_DEPTH, MAX_TREE_DEPTH};
use std::cmp::max;

/// **(internal)** Constructor of a binary `BooleanExpression` node.
type BinaryConstructor = fn(Box<BooleanExpression>, Box<BooleanExpression>) -> BooleanExpression;

/// **(internal)** Binary operators ordered from the loosest to the tightest binding.
/// The precedence of an operator is its index in this table plus one.
const BINARY_OPERATORS: [(TokenKind, BinaryConstructor); 3] = [
    (TokenKind::Or, Or),
    (TokenKind::Xor, Xor),
    (TokenKind::And, And),
];

/// **(internal)** A parsed sub-tree together with its depth.
type Parsed = (Box<BooleanExpression>, usize);

/// Takes a `&str` and turns it into a `BooleanExpression`, or `ParseError` if the string
/// is not a valid formula.
///
/// Syntax for the formula is described in the tutorial.
pub fn parse(text: &str) -> Result<BooleanExpression, ParseError> {
    let mut parser = Parser {
        tokens: Lexer::new(text),
        lookahead: None,
        nesting: 0,
    };
    let (expression, depth) = parser.binary(1)?;
    if let Some((position, token)) = parser.advance()? {
        return Err(ParseError::UnexpectedToken(token, position));
    }
    if cfg!(feature = "shields_up") && expression.depth() != depth {
        panic!(
            "Parser depth mismatch: tracked {}, actual {}.",
            depth,
            expression.depth()
        );
    }
    log::debug!(
        "Parsed expression with {} nodes and depth {}.",
        expression.size(),
        depth
    );
    Ok(*expression)
}

/// **(internal)** Precedence of a binary operator token, or `None` if the token is not
/// a binary operator.
fn binary_operator(kind: TokenKind) -> Option<(usize, BinaryConstructor)> {
    BINARY_OPERATORS
        .iter()
        .position(|(operator, _)| *operator == kind)
        .map(|index| (index + 1, BINARY_OPERATORS[index].1))
}

/// **(internal)** Binding strength of the root of `expression`: the precedence of its binary
/// operator, or a value above all binary operators for negations and atoms.
pub(super) fn root_precedence(expression: &BooleanExpression) -> usize {
    let kind = match expression {
        And(_, _) => TokenKind::And,
        Or(_, _) => TokenKind::Or,
        Xor(_, _) => TokenKind::Xor,
        Const(_) | Variable(_) | Not(_) => return BINARY_OPERATORS.len() + 1,
    };
    binary_operator(kind)
        .map(|(precedence, _)| precedence)
        .unwrap_or(BINARY_OPERATORS.len() + 1)
}

/// **(internal)** Recursive descent state: the token source with one token of lookahead and
/// the current number of open parenthesis groups.
struct Parser<'a> {
    tokens: Lexer<'a>,
    lookahead: Option<(usize, Token)>,
    nesting: usize,
}

impl Parser<'_> {
    /// Kind of the next token without consuming it.
    fn peek_kind(&mut self) -> Result<Option<TokenKind>, ParseError> {
        if self.lookahead.is_none() {
            self.lookahead = self.tokens.next().transpose()?;
        }
        Ok(self.lookahead.as_ref().map(|(_, token)| token.kind))
    }

    /// Consume the next token.
    fn advance(&mut self) -> Result<Option<(usize, Token)>, ParseError> {
        match self.lookahead.take() {
            Some(token) => Ok(Some(token)),
            None => self.tokens.next().transpose(),
        }
    }

    /// Parse a chain of binary operators with precedence at least `min_precedence`.
    fn binary(&mut self, min_precedence: usize) -> Result<Parsed, ParseError> {
        let (mut left, mut left_depth) = self.unary()?;
        while let Some(kind) = self.peek_kind()? {
            let (precedence, constructor) = match binary_operator(kind) {
                Some((precedence, constructor)) if precedence >= min_precedence => {
                    (precedence, constructor)
                }
                _ => break,
            };
            let (position, _) = self.advance()?.ok_or(ParseError::UnexpectedEndOfInput)?;
            let (right, right_depth) = self.binary(precedence + 1)?;
            let depth = max(left_depth, right_depth) + 1;
            if depth > MAX_TREE_DEPTH {
                return Err(ParseError::NestingTooDeep(position));
            }
            left = Box::new(constructor(left, right));
            left_depth = depth;
        }
        Ok((left, left_depth))
    }

    /// Parse a primary expression preceded by any number of negations.
    fn unary(&mut self) -> Result<Parsed, ParseError> {
        // Negations are collected iteratively, so long `NOT` chains do not use the stack.
        let mut negations = Vec::new();
        while self.peek_kind()? == Some(TokenKind::Not) {
            let (position, _) = self.advance()?.ok_or(ParseError::UnexpectedEndOfInput)?;
            negations.push(position);
        }
        let (mut inner, mut depth) = self.primary()?;
        for position in negations.into_iter().rev() {
            depth += 1;
            if depth > MAX_TREE_DEPTH {
                return Err(ParseError::NestingTooDeep(position));
            }
            inner = Box::new(Not(inner));
        }
        Ok((inner, depth))
    }

    /// Parse a variable, a constant or a parenthesis group.
    fn primary(&mut self) -> Result<Parsed, ParseError> {
        let (position, token) = self.advance()?.ok_or(ParseError::UnexpectedEndOfInput)?;
        match token.kind {
            TokenKind::Var => Ok((Box::new(Variable(token.lexeme)), 1)),
            TokenKind::True => Ok((Box::new(Const(true)), 1)),
            TokenKind::False => Ok((Box::new(Const(false)), 1)),
            TokenKind::LParen => {
                if self.nesting >= MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep(position));
                }
                self.nesting += 1;
                let inner = self.binary(1)?;
                self.nesting -= 1;
                match self.advance()? {
                    Some((_, token)) if token.kind == TokenKind::RParen => Ok(inner),
                    Some((position, token)) => Err(ParseError::UnexpectedToken(token, position)),
                    None => Err(ParseError::UnexpectedEndOfInput),
                }
            }
            _ => Err(ParseError::UnexpectedToken(token, position)),
        }
    }
}
