//! # Writing and parsing formulas
//!
//! A formula is built from the following tokens, which can be separated by any number of
//! spaces or tabs:
//!
//!  - Constants `TRUE` and `FALSE`.
//!  - Variables: identifiers matching `[A-Za-z_][A-Za-z0-9_]*`, such as `x`, `_tmp` or `gene_12`.
//!  - Operators `NOT`, `AND`, `XOR` and `OR`.
//!  - Parentheses `(` and `)`.
//!
//! Keywords are case-sensitive and reserved, so `and` or `True` are ordinary variables, while
//! `AND` can never be a variable name. Identifiers are always read greedily, hence `ANDY` is
//! also a variable and not the `AND` keyword followed by `Y`.
//!
//! Operators bind in the following order, from the tightest to the loosest: `NOT`, `AND`, `XOR`,
//! `OR`. Binary operators are left-associative and parentheses can be used to override the
//! default grouping:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! let e = parse("a OR b XOR c AND NOT d").unwrap();
//! assert_eq!(e, parse("a OR (b XOR (c AND (NOT d)))").unwrap());
//!
//! let e = parse("(a OR b) OR c").unwrap();
//! assert_eq!("a OR b OR c", e.to_string());
//!
//! let e = parse("a OR (b OR c)").unwrap();
//! assert_eq!("a OR (b OR c)", e.to_string());
//!
//! let e = parse("((a OR b)) AND NOT (c XOR d)").unwrap();
//! assert_eq!("(a OR b) AND NOT (c XOR d)", e.to_string());
//! ```
//!
//! As you can see, the `Display` implementation only keeps the parentheses that change the
//! default grouping, so the printed formula can be always parsed back into the same tree.
//!
//! The result of parsing is a plain `BooleanExpression` enum which you can inspect or build
//! manually:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//! use biodivine_lib_logic_tree::BooleanExpression::*;
//!
//! let e = parse("NOT x AND TRUE").unwrap();
//! assert_eq!(e, BooleanExpression::mk_and(
//!     BooleanExpression::mk_not(BooleanExpression::mk_var("x")),
//!     BooleanExpression::mk_const(true),
//! ));
//! match e {
//!     And(left, _) => assert!(matches!(*left, Not(_))),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Parse errors
//!
//! When the formula is not valid, `parse` returns the first problem it finds as a `ParseError`.
//! Positions are character offsets into the input string:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! assert_eq!(Err(ParseError::InvalidCharacter('&', 2)), parse("a & b"));
//! assert_eq!(Err(ParseError::UnexpectedEndOfInput), parse("a AND (b OR c"));
//! assert!(matches!(parse("a b"), Err(ParseError::UnexpectedToken(_, 2))));
//! ```
//!
//! Finally, to keep the processing of parsed trees safe for the stack, formulas with more than
//! `MAX_NESTING_DEPTH` nested parentheses, or trees deeper than `MAX_TREE_DEPTH`, are rejected
//! with `ParseError::NestingTooDeep`.
//!
//! If you only need the tokens, use `tokenize` or the lazy `Lexer`:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! let tokens: Vec<TokenKind> = tokenize("NOT (x)").unwrap().iter().map(|t| t.kind()).collect();
//! assert_eq!(vec![TokenKind::Not, TokenKind::LParen, TokenKind::Var, TokenKind::RParen], tokens);
//! ```
