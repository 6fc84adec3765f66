use std::fmt::Write as _;

use crate::{
    interpreter::{
        evaluator::trace::{Action, Step, Trace},
        lexer::Token,
    },
    util::num::format_value,
};

/// Joins tokens with single spaces, the way sequences are shown to users.
///
/// # Example
/// ```
/// use rpntrace::{compile, render::join_tokens};
///
/// let compiled = compile("3+4*2").unwrap();
/// assert_eq!(join_tokens(&compiled.tokens), "3 + 4 * 2");
/// assert_eq!(join_tokens(&compiled.postfix), "3 4 2 * +");
/// ```
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Renders a stack snapshot top first.
///
/// `stack` is ordered bottom-to-top, as stored in [`Step::stack`]. The top
/// entry is marked with `<- top`.
#[must_use]
pub fn render_stack(stack: &[f64]) -> String {
    if stack.is_empty() {
        return "(empty stack)".to_string();
    }

    let mut out = String::from("Stack (top first):");
    for (i, value) in stack.iter().rev().enumerate() {
        let marker = if i == 0 { "  <- top" } else { "" };
        let _ = write!(out, "\n  [{}]{marker}", format_value(*value));
    }
    out
}

/// Renders every step of a trace, separated by blank lines.
#[must_use]
pub fn render_trace(trace: &Trace) -> String {
    trace.steps()
         .iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join("\n\n")
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.action {
            Action::PushOperand { .. } => {
                writeln!(f, "Step {}: Push operand", self.index)?;
                writeln!(f, "Token: {} (operand)", self.token)?;
                writeln!(f, "Action: Push to stack")?;
            },
            Action::ApplyOperator { operator,
                                    left,
                                    right,
                                    result, } => {
                let (left, right, result) =
                    (format_value(*left), format_value(*right), format_value(*result));
                writeln!(f, "Step {}: Apply operator", self.index)?;
                writeln!(f, "Token: {} (operator)", self.token)?;
                writeln!(f, "Action: Pop {right}, then pop {left}")?;
                writeln!(f, "Calculate: {left} {operator} {right} = {result}")?;
                writeln!(f, "Push result to stack")?;
            },
        }
        write!(f, "{}", render_stack(&self.stack))
    }
}
