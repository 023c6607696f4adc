//! This is a documentation-only module with several sub-modules describing how to use
//! this crate.
//!
//! Table of contents:
//!  - [Writing and parsing formulas](./p01_formula_syntax/index.html)
//!  - [Evaluating `BooleanExpression`s](./p02_evaluation/index.html)
//!  - [Serialising and visualising `BooleanExpression`s](./p03_serialisation/index.html)
//!

pub mod p01_formula_syntax;
pub mod p02_evaluation;
pub mod p03_serialisation;
