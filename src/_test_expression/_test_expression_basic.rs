use crate::BooleanExpression as E;
use crate::*;

fn var(name: &str) -> E {
    E::mk_var(name)
}

#[test]
fn precedence_and_binds_tighter_than_or() {
    assert_eq!(
        E::mk_or(E::mk_and(var("A"), var("B")), var("C")),
        parse("A AND B OR C").unwrap()
    );
    assert_eq!(
        E::mk_or(var("A"), E::mk_and(var("B"), var("C"))),
        parse("A OR B AND C").unwrap()
    );
}

#[test]
fn precedence_xor_is_between_or_and_and() {
    assert_eq!(
        E::mk_or(var("A"), E::mk_xor(var("B"), var("C"))),
        parse("A OR B XOR C").unwrap()
    );
    assert_eq!(
        E::mk_xor(E::mk_and(var("A"), var("B")), var("C")),
        parse("A AND B XOR C").unwrap()
    );
}

#[test]
fn binary_operators_are_left_associative() {
    for (keyword, constructor) in [
        ("OR", E::mk_or as fn(E, E) -> E),
        ("XOR", E::mk_xor),
        ("AND", E::mk_and),
    ] {
        let formula = format!("A {keyword} B {keyword} C");
        assert_eq!(
            constructor(constructor(var("A"), var("B")), var("C")),
            parse(&formula).unwrap()
        );
    }
}

#[test]
fn negation_binds_tightest() {
    assert_eq!(E::mk_not(E::mk_not(var("A"))), parse("NOT NOT A").unwrap());
    assert_eq!(
        E::mk_and(E::mk_not(var("A")), var("B")),
        parse("NOT A AND B").unwrap()
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        E::mk_and(E::mk_or(var("A"), var("B")), var("C")),
        parse("(A OR B) AND C").unwrap()
    );
}

#[test]
fn example_formula_is_true_for_all_valuations() {
    let tree = parse("A AND (B XOR TRUE) OR NOT FALSE").unwrap();
    let valuation = LogicValuation::new().with("A", true).with("B", false);
    assert_eq!(Ok(true), evaluate(&tree, &valuation));
    let valuation = LogicValuation::new().with("A", false).with("B", true);
    assert_eq!(Ok(true), evaluate(&tree, &valuation));
}

#[test]
fn failures_are_typed() {
    let empty = LogicValuation::new();
    assert_eq!(
        Err(EvalError::UndefinedVariable("A".to_string())),
        evaluate(&parse("A").unwrap(), &empty)
    );
    assert_eq!(Err(ParseError::InvalidCharacter('&', 2)), parse("A & B"));
    assert_eq!(Err(ParseError::UnexpectedEndOfInput), parse("A AND"));
}

#[test]
fn error_messages() {
    assert_eq!(
        "Invalid character '&' at position 2.",
        parse("A & B").unwrap_err().to_string()
    );
    assert_eq!(
        "Unexpected token `)` at position 4.",
        parse("A OR)").unwrap_err().to_string()
    );
    assert_eq!(
        "Unexpected end of input.",
        parse("NOT").unwrap_err().to_string()
    );
    assert_eq!(
        "Undefined variable `x`.",
        evaluate(&parse("x").unwrap(), &LogicValuation::new())
            .unwrap_err()
            .to_string()
    );
}

#[test]
fn expressions_can_be_shared_between_threads() {
    let tree = std::sync::Arc::new(parse("a XOR b").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tree = tree.clone();
            std::thread::spawn(move || {
                let valuation = LogicValuation::new().with("a", i % 2 == 0).with("b", true);
                (evaluate(tree.as_ref(), &valuation), to_graph(&tree))
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let (value, graph) = handle.join().unwrap();
        assert_eq!(Ok(i % 2 != 0), value);
        assert_eq!(to_graph(&tree), graph);
    }
}
