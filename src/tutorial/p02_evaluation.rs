//! # Evaluating `BooleanExpression`s
//!
//! An expression is evaluated in a `VariableContext`, which provides values of its variables.
//! The crate implements this trait for standard `HashMap` and `BTreeMap` types, but the easiest
//! option is usually a `LogicValuation`:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! let e = parse("a AND (b XOR TRUE) OR NOT c").unwrap();
//! let valuation = LogicValuation::new()
//!     .with("a", true)
//!     .with("b", false)
//!     .with("c", true);
//!
//! assert_eq!(Ok(true), e.evaluate(&valuation));
//! assert_eq!(Ok(true), evaluate(&e, &valuation));
//! ```
//!
//! Variables missing in the context are never defaulted. Instead, the evaluation fails
//! with an `EvalError`:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//! use std::collections::HashMap;
//!
//! let e = parse("a OR b").unwrap();
//! let mut values = HashMap::new();
//! values.insert("a".to_string(), true);
//!
//! assert_eq!(Err(EvalError::UndefinedVariable("b".to_string())), e.evaluate(&values));
//! ```
//!
//! To check which variables a context has to provide, use `support_set`:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! let e = parse("b AND (a OR b)").unwrap();
//! let support: Vec<String> = e.support_set().into_iter().collect();
//! assert_eq!(vec!["a".to_string(), "b".to_string()], support);
//! ```
//!
//! You can also provide your own context by implementing `VariableContext`:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! /// Every variable whose name starts with `t` is true, everything else is false.
//! struct Prefix;
//!
//! impl VariableContext for Prefix {
//!     fn value_of(&self, name: &str) -> Option<bool> {
//!         Some(name.starts_with('t'))
//!     }
//! }
//!
//! assert_eq!(Ok(true), parse("t1 AND NOT f1").unwrap().evaluate(&Prefix));
//! ```
