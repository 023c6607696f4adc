use super::BooleanExpression;
use super::BooleanExpression::*;
use crate::{EvalError, VariableContext};

/// Evaluate the given `BooleanExpression` in the given variable `context`.
///
/// Operands are evaluated from left to right and the first unknown variable aborts
/// the evaluation with `EvalError::UndefinedVariable`.
pub fn evaluate<C: VariableContext + ?Sized>(
    expression: &BooleanExpression,
    context: &C,
) -> Result<bool, EvalError> {
    match expression {
        Const(value) => Ok(*value),
        Variable(name) => context.value_of(name).ok_or_else(|| {
            log::trace!("Variable `{}` is not defined in the evaluation context.", name);
            EvalError::UndefinedVariable(name.clone())
        }),
        Not(inner) => Ok(!evaluate(inner, context)?),
        And(l, r) => {
            let left = evaluate(l, context)?;
            let right = evaluate(r, context)?;
            Ok(left && right)
        }
        Or(l, r) => {
            let left = evaluate(l, context)?;
            let right = evaluate(r, context)?;
            Ok(left || right)
        }
        Xor(l, r) => {
            let left = evaluate(l, context)?;
            let right = evaluate(r, context)?;
            Ok(left ^ right)
        }
    }
}

/// Methods for evaluating boolean expressions.
impl BooleanExpression {
    /// Evaluate this expression in the given `context`. Return an error if some variables
    /// are unknown.
    ///
    /// See also: [evaluate](fn.evaluate.html)
    pub fn evaluate<C: VariableContext + ?Sized>(&self, context: &C) -> Result<bool, EvalError> {
        evaluate(self, context)
    }
}
