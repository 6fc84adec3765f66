#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// The right operand of `/` was zero.
    DivisionByZero,
    /// An operator lacked two operands, or the evaluation did not end with
    /// exactly one value on the stack.
    MalformedExpression,
    /// A token that is not an arithmetic operator reached operator position.
    UnknownOperator {
        /// Source text of the token.
        token: String,
    },
    /// A number token whose text is not a finite decimal value.
    InvalidNumber {
        /// Source text of the token.
        text: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MalformedExpression => write!(f, "Invalid expression."),
            Self::UnknownOperator { token } => write!(f, "Unknown operator: {token}."),
            Self::InvalidNumber { text } => write!(f, "Invalid number: {text}."),
        }
    }
}

impl std::error::Error for EvalError {}
