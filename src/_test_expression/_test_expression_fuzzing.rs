//!
//! Here, we have a small toolbox for fuzzing the expression pipeline.
//! It allows us to create an evaluable binary tree of operations, where
//! each leaf is a random variable and each tree node represents one
//! binary boolean operation, possibly negated.
//!
//! Hence, each tree is just a Boolean formula. We can print this formula
//! as a string, parse it back, and exhaustively check whether all valuations
//! of the parsed expression actually match the result expected by the op tree.
//! To get predictable test cases, we use a predefined set of randomness seeds.
//!
//! Asides from that, we also generate arbitrary (not necessarily balanced)
//! expression trees and check that their text, JSON and `.dot` representations
//! are consistent with the tree itself. Long random formulas then repeat these
//! checks for trees that are hundreds of levels deep and nested up to the
//! parser's parenthesis limit.

use crate::_test_util::{mk_random_expression, mk_random_formula};
use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Debug)]
enum LogicOp {
    And,
    Or,
    Xor,
}

#[derive(Debug)]
struct Op {
    op: LogicOp,
    negate: bool,
}

#[derive(Debug)]
struct LogicOpTree {
    leaves: Vec<u32>,
    ops: Vec<Vec<Op>>,
}

impl LogicOpTree {
    /// Create a new random tree. The `tree_height` is the number of levels in the tree
    /// (so the number of leaves will be `2^tree_height`).
    fn new_random(tree_height: u8, num_vars: u32, seed: u64) -> LogicOpTree {
        let mut rand = StdRng::seed_from_u64(seed);
        let num_leafs = 1 << (tree_height as usize);
        let mut levels: Vec<Vec<Op>> = Vec::new();

        let leaves: Vec<u32> = (0..num_leafs)
            .map(|_| rand.next_u32() % num_vars)
            .collect();

        let mut level_width = num_leafs / 2;
        for _ in 0..tree_height {
            let level: Vec<Op> = (0..level_width)
                .map(|_| {
                    let negate = rand.next_u32() % 2 == 0;
                    let op = match rand.next_u32() % 3 {
                        0 => LogicOp::And,
                        1 => LogicOp::Or,
                        _ => LogicOp::Xor,
                    };
                    Op { op, negate }
                })
                .collect();
            levels.push(level);
            level_width /= 2;
        }

        LogicOpTree {
            leaves,
            ops: levels,
        }
    }

    /// Convert this op tree to a `BooleanExpression`.
    fn to_expression(&self) -> BooleanExpression {
        let mut formulas: Vec<BooleanExpression> = self
            .leaves
            .iter()
            .map(|v| BooleanExpression::mk_var(&format!("x_{v}")))
            .collect();

        for level in self.ops.iter() {
            let mut new_formulas = Vec::new();
            let mut pairs = formulas.into_iter();
            let mut i = 0;
            while let (Some(a), Some(b)) = (pairs.next(), pairs.next()) {
                let op = &level[i];
                let result = match op.op {
                    LogicOp::And => BooleanExpression::mk_and(a, b),
                    LogicOp::Or => BooleanExpression::mk_or(a, b),
                    LogicOp::Xor => BooleanExpression::mk_xor(a, b),
                };
                if op.negate {
                    new_formulas.push(BooleanExpression::mk_not(result));
                } else {
                    new_formulas.push(result);
                }
                i += 1;
            }
            formulas = new_formulas;
        }

        formulas.remove(0)
    }

    /// Evaluate this op tree with the values of variables given as bits of `valuation`.
    fn eval_in_valuation(&self, valuation: u32) -> bool {
        let mut values: Vec<bool> = self
            .leaves
            .iter()
            .map(|v| valuation & (1 << v) != 0)
            .collect();

        for level in self.ops.iter() {
            let mut i = 0;
            let mut new_values = Vec::new();
            while i < values.len() {
                let a = values[i];
                let b = values[i + 1];
                let op = &level[i / 2];
                let result = match op.op {
                    LogicOp::And => a && b,
                    LogicOp::Or => a || b,
                    LogicOp::Xor => a ^ b,
                };
                if op.negate {
                    new_values.push(!result)
                } else {
                    new_values.push(result);
                }
                i += 2;
            }
            values = new_values;
        }

        values[0]
    }
}

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

fn fuzz_test(num_vars: u32, tree_height: u8, seed: u64) {
    let op_tree = LogicOpTree::new_random(tree_height, num_vars, seed);
    let expression = op_tree.to_expression();
    let parsed = parse(&expression.to_string()).unwrap();
    assert_eq!(expression, parsed);

    for valuation in 0..(1u32 << num_vars) {
        let context: LogicValuation = (0..num_vars)
            .map(|v| (format!("x_{v}"), valuation & (1 << v) != 0))
            .collect();
        assert_eq!(
            Ok(op_tree.eval_in_valuation(valuation)),
            evaluate(&parsed, &context),
            "Error in valuation {valuation:b}"
        );
    }
}

#[test]
fn fuzz_var_2() {
    for height in 1..8 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(2, height, *seed);
        }
    }
}

#[test]
fn fuzz_var_4() {
    for height in 1..8 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(4, height, *seed);
        }
    }
}

#[test]
fn fuzz_var_6() {
    for height in 1..6 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(6, height, *seed);
        }
    }
}

#[test]
fn fuzz_json_round_trip() {
    for height in 0..10 {
        for seed in FUZZ_SEEDS.iter() {
            let expression = mk_random_expression(height, 5, *seed);
            let json = expression.to_json().unwrap();
            assert_eq!(expression, BooleanExpression::from_json(&json).unwrap());
        }
    }
}

#[test]
fn fuzz_display_round_trip() {
    for height in 0..10 {
        for seed in FUZZ_SEEDS.iter() {
            let expression = mk_random_expression(height, 5, *seed);
            assert_eq!(expression, parse(&expression.to_string()).unwrap());
        }
    }
}

#[test]
fn fuzz_dot_node_and_edge_count() {
    for height in 0..10 {
        for seed in FUZZ_SEEDS.iter() {
            let expression = mk_random_expression(height, 5, *seed);
            let dot = to_graph(&expression);
            let lines: Vec<&str> = dot.lines().collect();
            assert_eq!(Some(&"digraph LogicTree {"), lines.first());
            assert_eq!(Some(&"}"), lines.last());

            let nodes = lines.iter().filter(|l| l.contains(" [label=")).count();
            let edges = lines.iter().filter(|l| l.contains(" -> ")).count();
            assert_eq!(expression.size(), nodes);
            assert_eq!(expression.size() - 1, edges);
            assert_eq!(expression.size() * 2 + 1, lines.len());
        }
    }
}

#[test]
fn fuzz_dot_ids_follow_pre_order() {
    for seed in FUZZ_SEEDS.iter() {
        let expression = mk_random_expression(6, 3, *seed);
        let dot = to_graph(&expression);
        let declared: Vec<String> = dot
            .lines()
            .filter(|l| l.contains(" [label="))
            .map(|l| l.split(' ').next().unwrap().to_string())
            .collect();
        let expected: Vec<String> = (0..expression.size()).map(|i| format!("n{i}")).collect();
        assert_eq!(expected, declared);
    }
}

#[test]
fn fuzz_deep_formulas() {
    for seed in FUZZ_SEEDS.iter() {
        let formula = mk_random_formula(500, 5, *seed);
        let (_, nesting) = formula.chars().fold((0, 0), |(open, deepest), c| match c {
            '(' => (open + 1, std::cmp::max(deepest, open + 1)),
            ')' => (open - 1, deepest),
            _ => (open, deepest),
        });
        assert_eq!(MAX_NESTING_DEPTH, nesting);

        let expression = parse(&formula).unwrap();
        assert!(expression.depth() > 128);
        assert_eq!(expression, parse(&expression.to_string()).unwrap());

        let json = expression.to_json().unwrap();
        assert_eq!(expression, BooleanExpression::from_json(&json).unwrap());

        let dot = to_graph(&expression);
        assert_eq!(expression.size() * 2 + 1, dot.lines().count());
    }
}
