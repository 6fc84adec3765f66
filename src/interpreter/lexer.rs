use logos::Logos;

use crate::{error::LexError, operator::Operator};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token of an arithmetic expression.
///
/// Number tokens keep their raw source text. The lexer only classifies
/// characters; whether the text is a valid decimal is decided when the
/// number is evaluated.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A run of digits and decimal points, such as `42`, `3.5` or `.5`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// One of `+`, `-`, `*`, `/` or `^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns `true` for number tokens.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` for `+ - * / ^`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Converts expression text into a sequence of tokens.
///
/// Whitespace is skipped and never separates a number: digits on both sides
/// of a gap join the same token, so `"1 2"` is the single number `12`.
/// Every operator and parenthesis becomes its own token regardless of what
/// surrounds it.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] for the first character that is
/// not a digit, `.`, an operator, a parenthesis or whitespace. The position
/// counts characters, not bytes.
///
/// # Example
/// ```
/// use rpntrace::{
///     error::LexError,
///     interpreter::lexer::{Token, tokenize},
///     operator::Operator,
/// };
///
/// let tokens = tokenize("3 + 4").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("3".to_string()),
///                 Token::Operator(Operator::Add),
///                 Token::Number("4".to_string())]);
///
/// let err = tokenize("3 & 4").unwrap_err();
/// assert_eq!(err, LexError::InvalidCharacter { position: 2, character: '&' });
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Number(text)) => {
                if let Some(Token::Number(previous)) = tokens.last_mut() {
                    previous.push_str(&text);
                } else {
                    tokens.push(Token::Number(text));
                }
            },
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(invalid_character(source, lexer.span().start)),
        }
    }

    Ok(tokens)
}

/// Builds the error for the character starting at byte offset `start`.
fn invalid_character(source: &str, start: usize) -> LexError {
    let position = source[..start].chars().count();
    let character = source[start..].chars().next().unwrap_or_default();
    LexError::InvalidCharacter { position, character }
}
