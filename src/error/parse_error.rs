#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the checked infix-to-postfix conversion can report.
///
/// The lenient conversion never produces these; it absorbs unbalanced
/// parentheses instead.
pub enum ParseError {
    /// A `)` was found with no `(` left open before it.
    UnmatchedClosingParen {
        /// Index of the `)` in the token sequence.
        index: usize,
    },
    /// A `(` was never closed.
    UnclosedParen {
        /// Index of the `(` in the token sequence.
        index: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClosingParen { index } => write!(f,
                                                            "Unbalanced parentheses: ')' at token {index} has no matching '('."),
            Self::UnclosedParen { index } => write!(f,
                                                    "Unbalanced parentheses: '(' at token {index} is never closed."),
        }
    }
}

impl std::error::Error for ParseError {}
