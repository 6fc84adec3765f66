/// Evaluation trace types.
///
/// Defines the step records the evaluator appends while it runs and the
/// [`Trace`](trace::Trace) that owns them.
pub mod trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::trace::{Action, Step, Trace},
        lexer::Token,
    },
    util::{num::parse_decimal_checked, stack::Stack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A successful evaluation: the final value and the steps that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The single value left on the stack.
    pub value: f64,
    /// Every step, in processing order.
    pub trace: Trace,
}

/// Evaluates a postfix token sequence on a value stack.
///
/// Numbers are parsed and pushed. Any other token pops the right operand,
/// then the left one, and pushes the operator's result. Each token appends
/// one [`Step`] holding a snapshot of the stack after it was processed.
///
/// # Errors
/// - [`EvalError::InvalidNumber`] for number text that is not a finite
///   decimal.
/// - [`EvalError::MalformedExpression`] when a token in operator position
///   finds fewer than two values, or the stack does not end with exactly one
///   value.
/// - [`EvalError::DivisionByZero`] when `/` has a zero right operand.
/// - [`EvalError::UnknownOperator`] when a parenthesis reaches operator
///   position.
///
/// # Example
/// ```
/// use rpntrace::interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize};
///
/// let postfix = to_postfix(&tokenize("3 + 4 * 2").unwrap());
/// let evaluation = evaluate(&postfix).unwrap();
///
/// assert_eq!(evaluation.value, 11.0);
/// assert_eq!(evaluation.trace.len(), postfix.len());
/// assert_eq!(evaluation.trace.last().unwrap().stack, vec![11.0]);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<Evaluation> {
    let mut stack: Stack<f64> = Stack::new();
    let mut trace = Trace::new();

    for (i, token) in postfix.iter().enumerate() {
        let action = if let Token::Number(text) = token {
            let value = parse_decimal_checked(text)?;
            stack.push(value);
            Action::PushOperand { value }
        } else {
            let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                return Err(EvalError::MalformedExpression);
            };

            let Token::Operator(operator) = token else {
                return Err(EvalError::UnknownOperator { token: token.to_string() });
            };

            let result = operator.apply(left, right)?;
            stack.push(result);
            Action::ApplyOperator { operator: *operator,
                                    left,
                                    right,
                                    result }
        };

        trace.record(Step { index: i + 1,
                            token: token.clone(),
                            action,
                            stack: stack.as_slice().to_vec() });
    }

    match stack.as_slice() {
        [value] => Ok(Evaluation { value: *value,
                                   trace }),
        _ => Err(EvalError::MalformedExpression),
    }
}
