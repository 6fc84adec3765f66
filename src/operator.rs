use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Represents a binary arithmetic operator.
///
/// The operator set is closed: every stage of the pipeline matches on it
/// exhaustively, so adding a variant forces every consumer to handle it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// Higher binds tighter: `^` is 4, `*` and `/` are 3, `+` and `-` are 2.
    /// Ties group to the left for every operator, `^` included, so
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    ///
    /// # Example
    /// ```
    /// use rpntrace::operator::Operator;
    ///
    /// assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 4,
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 2,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Looks up the operator written as `c`.
    ///
    /// # Example
    /// ```
    /// use rpntrace::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('('), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// Division by an exact zero is the only failure; every other
    /// combination follows IEEE 754 arithmetic.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use rpntrace::{error::EvalError, operator::Operator};
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0).unwrap(), 1024.0);
    /// assert!(matches!(Operator::Div.apply(5.0, 0.0), Err(EvalError::DivisionByZero)));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            Self::Pow => Ok(left.powf(right)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
