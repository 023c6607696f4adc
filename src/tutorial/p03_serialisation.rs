//! # Serialising and visualising `BooleanExpression`s
//!
//! We currently provide two ways to export expression trees. Human-friendly way is to export the
//! tree as a **`.dot` graph** which can be then rendered into an image using tools like
//! [graph-viz](http://www.webgraphviz.com/). For data exchange, every tree can be also converted
//! into a **JSON document**.
//!
//! ## `.dot` visualisation
//!
//! Every node of the tree becomes one graph node labelled with the variable name, the constant
//! value (`True`/`False`) or the operator (`AND`, `OR`, `XOR`, `NOT`). Nodes are numbered
//! in pre-order, starting from `n0` in every export:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! let e = parse("a AND NOT FALSE").unwrap();
//! let dot = to_graph(&e);
//! assert_eq!(
//!     "digraph LogicTree {\n\
//!     n0 [label=\"AND\"];\n\
//!     n1 [label=\"a\"];\n\
//!     n2 [label=\"NOT\"];\n\
//!     n3 [label=\"False\"];\n\
//!     n2 -> n3;\n\
//!     n0 -> n1;\n\
//!     n0 -> n2;\n\
//!     }",
//!     dot
//! );
//! ```
//!
//! There is also a "streaming" variant, `BooleanExpression::write_as_dot`, which writes the graph
//! into any `std::io::Write` object, such as a file.
//!
//! ## JSON serialisation
//!
//! `BooleanExpression` implements `serde::Serialize` and `serde::Deserialize`. Each node is
//! an object with a `type` field, followed by the node data:
//!
//! ```rust
//! use biodivine_lib_logic_tree::*;
//!
//! let e = parse("NOT x XOR TRUE").unwrap();
//! let json = e.to_json().unwrap();
//! assert_eq!(
//!     r#"{"type":"XOR","left":{"type":"NOT","operand":{"type":"VAR","name":"x"}},"right":{"type":"CONST","value":true}}"#,
//!     json
//! );
//! assert_eq!(e, BooleanExpression::from_json(&json).unwrap());
//! ```
//!
//! Documents with unknown node types or invalid variable names (such as `AND` or `1x`)
//! are rejected.
