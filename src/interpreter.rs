/// The lexer module tokenizes expression text.
///
/// The lexer reads raw text and produces numbers, operators and
/// parentheses. It classifies characters only; number text is validated
/// during evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Skips whitespace without splitting numbers.
/// - Reports the position of characters outside the expression alphabet.
pub mod lexer;
/// The converter module reorders infix tokens into postfix order.
///
/// Implements the shunting-yard algorithm with an explicit operator stack
/// and the precedence table of [`Operator`](crate::operator::Operator).
///
/// # Responsibilities
/// - Emits numbers directly and operators by precedence.
/// - Resolves parentheses, leniently or strictly.
pub mod converter;
/// The evaluator module runs postfix sequences on a value stack.
///
/// It computes the final value and records a replayable trace of every
/// stack transition along the way.
///
/// # Responsibilities
/// - Parses number text and applies operators.
/// - Detects division by zero, missing operands and leftover values.
/// - Builds the evaluation trace.
pub mod evaluator;
