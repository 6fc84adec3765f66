/// Lexing errors.
///
/// Raised when the input contains a character that cannot start or continue
/// any token.
pub mod lex_error;
/// Conversion errors.
///
/// Raised only by the checked infix-to-postfix conversion, when parentheses
/// do not balance.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while running a postfix sequence: division by zero, missing
/// operands, leftover values, unparsable numbers and stray parentheses.
pub mod eval_error;
/// Pipeline errors.
///
/// Wraps the stage errors above and records which stage failed.
pub mod compile_error;

pub use compile_error::{CompileError, Stage};
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
