use crate::error::{EvalError, LexError, ParseError};

/// Pipeline stage that produced a [`CompileError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Input validation before tokenizing.
    Input,
    /// Tokenization.
    Tokenize,
    /// Infix-to-postfix conversion.
    Convert,
    /// Postfix evaluation.
    Evaluate,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = match self {
            Self::Input => "input",
            Self::Tokenize => "tokenize",
            Self::Convert => "convert",
            Self::Evaluate => "evaluate",
        };
        write!(f, "{stage}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a failure of the full text-to-value pipeline, tagged by stage.
pub enum CompileError {
    /// The input was empty or only whitespace.
    EmptyExpression,
    /// Tokenizing failed.
    Lex(LexError),
    /// Checked conversion found unbalanced parentheses.
    Parse(ParseError),
    /// Evaluating the postfix sequence failed.
    Eval(EvalError),
}

impl CompileError {
    /// Returns the stage that produced the error.
    ///
    /// # Example
    /// ```
    /// use rpntrace::{compile, error::Stage};
    ///
    /// let err = compile("5 / 0").unwrap_err();
    /// assert_eq!(err.stage(), Stage::Evaluate);
    /// ```
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::EmptyExpression => Stage::Input,
            Self::Lex(_) => Stage::Tokenize,
            Self::Parse(_) => Stage::Convert,
            Self::Eval(_) => Stage::Evaluate,
        }
    }
}

impl From<LexError> for CompileError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for CompileError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for CompileError {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Please enter an arithmetic expression."),
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyExpression => None,
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
