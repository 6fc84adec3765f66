use crate::{
    error::ParseError,
    interpreter::lexer::Token,
    operator::Operator,
    util::stack::Stack,
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// How the converter treats parentheses that do not balance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ParenPolicy {
    /// Report unbalanced parentheses as a [`ParseError`].
    #[default]
    Strict,
    /// Absorb them. An unmatched `)` empties the operator stack and is
    /// discarded; an unclosed `(` is flushed into the output, where the
    /// evaluator later rejects it.
    Lenient,
}

/// Infix-to-postfix converter built on the shunting-yard algorithm.
///
/// An operator already on the stack is moved to the output when its
/// precedence is greater than or equal to the incoming operator's, so ties
/// group to the left for every operator, `^` included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Converter {
    /// Treatment of unbalanced parentheses.
    pub policy: ParenPolicy,
}

/// Entry on the operator stack, remembering where an open paren came from.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    LParen { index: usize },
}

impl Pending {
    fn into_token(self) -> Token {
        match self {
            Self::Operator(op) => Token::Operator(op),
            Self::LParen { .. } => Token::LParen,
        }
    }
}

impl Converter {
    #[must_use]
    pub const fn new(policy: ParenPolicy) -> Self {
        Self { policy }
    }

    /// Converts an infix token sequence into postfix order.
    ///
    /// # Errors
    /// Under [`ParenPolicy::Strict`], returns
    /// [`ParseError::UnmatchedClosingParen`] or [`ParseError::UnclosedParen`]
    /// for the first unbalanced parenthesis. Under [`ParenPolicy::Lenient`]
    /// this never fails.
    pub fn convert(&self, tokens: &[Token]) -> ParseResult<Vec<Token>> {
        let (postfix, unbalanced) = shunt(tokens);
        match (self.policy, unbalanced) {
            (ParenPolicy::Strict, Some(err)) => Err(err),
            _ => Ok(postfix),
        }
    }
}

/// Runs the shunting-yard pass, absorbing unbalanced parentheses.
///
/// Returns the postfix sequence together with the first unbalanced
/// parenthesis found, if any.
fn shunt(tokens: &[Token]) -> (Vec<Token>, Option<ParseError>) {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Stack<Pending> = Stack::new();
    let mut unbalanced = None;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::LParen => stack.push(Pending::LParen { index }),
            Token::RParen => {
                let mut matched = false;
                while let Some(top) = stack.pop() {
                    if let Pending::LParen { .. } = top {
                        matched = true;
                        break;
                    }
                    output.push(top.into_token());
                }
                if !matched {
                    unbalanced.get_or_insert(ParseError::UnmatchedClosingParen { index });
                }
            },
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = stack.peek()
                      && top.precedence() >= op.precedence()
                {
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Operator(*op));
            },
        }
    }

    while let Some(top) = stack.pop() {
        if let Pending::LParen { index } = top {
            unbalanced.get_or_insert(ParseError::UnclosedParen { index });
        }
        output.push(top.into_token());
    }

    (output, unbalanced)
}

/// Converts infix tokens to postfix, silently absorbing unbalanced
/// parentheses.
///
/// # Example
/// ```
/// use rpntrace::interpreter::{converter::to_postfix, lexer::tokenize};
///
/// let postfix = to_postfix(&tokenize("(3 + 4) * 2").unwrap());
/// let text: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(text, ["3", "4", "+", "2", "*"]);
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    shunt(tokens).0
}

/// Converts infix tokens to postfix, rejecting unbalanced parentheses.
///
/// # Errors
/// Returns a [`ParseError`] naming the token index of the first unbalanced
/// parenthesis.
///
/// # Example
/// ```
/// use rpntrace::{
///     error::ParseError,
///     interpreter::{converter::to_postfix_checked, lexer::tokenize},
/// };
///
/// let err = to_postfix_checked(&tokenize("(1 + 2").unwrap()).unwrap_err();
/// assert_eq!(err, ParseError::UnclosedParen { index: 0 });
/// ```
pub fn to_postfix_checked(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    Converter::new(ParenPolicy::Strict).convert(tokens)
}
