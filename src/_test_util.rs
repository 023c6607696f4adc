use super::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

/// Make a pseudo-random expression over variables $x_0, ..., x_{n-1}$ with at most
/// `max_height` levels of operators. The same `seed` always yields the same expression.
pub fn mk_random_expression(max_height: u8, num_vars: u32, seed: u64) -> BooleanExpression {
    let mut rand = StdRng::seed_from_u64(seed);
    random_node(&mut rand, max_height, num_vars)
}

fn random_node(rand: &mut StdRng, height: u8, num_vars: u32) -> BooleanExpression {
    if height == 0 || rand.next_u32() % 5 == 0 {
        return match rand.next_u32() % 8 {
            0 => BooleanExpression::mk_const(true),
            1 => BooleanExpression::mk_const(false),
            _ => BooleanExpression::mk_var(&format!("x_{}", rand.next_u32() % num_vars)),
        };
    }
    match rand.next_u32() % 4 {
        0 => BooleanExpression::mk_not(random_node(rand, height - 1, num_vars)),
        op => {
            let left = random_node(rand, height - 1, num_vars);
            let right = random_node(rand, height - 1, num_vars);
            match op {
                1 => BooleanExpression::mk_and(left, right),
                2 => BooleanExpression::mk_or(left, right),
                _ => BooleanExpression::mk_xor(left, right),
            }
        }
    }
}

/// Make a pseudo-random formula with `operators` binary operators over $x_0, ..., x_{n-1}$.
///
/// Parenthesis groups are opened much more often than they are closed, so a formula with a few
/// hundred operators reaches `MAX_NESTING_DEPTH` nested groups (but never exceeds it).
pub fn mk_random_formula(operators: usize, num_vars: u32, seed: u64) -> String {
    let mut rand = StdRng::seed_from_u64(seed);
    let mut formula = String::new();
    let mut open = 0;
    for i in 0..=operators {
        if i > 0 {
            formula.push_str([" AND ", " OR ", " XOR "][(rand.next_u32() % 3) as usize]);
        }
        if open < MAX_NESTING_DEPTH && rand.next_u32() % 4 != 0 {
            formula.push('(');
            open += 1;
        }
        if rand.next_u32() % 6 == 0 {
            formula.push_str("NOT ");
        }
        formula.push_str(&format!("x_{}", rand.next_u32() % num_vars));
        if open > 0 && rand.next_u32() % 8 == 0 {
            formula.push(')');
            open -= 1;
        }
    }
    formula.push_str(&")".repeat(open));
    formula
}

pub fn load_expected_results(test_name: &str) -> String {
    std::fs::read_to_string(format!("res/test_results/{test_name}"))
        .expect("Cannot open result file.")
}
