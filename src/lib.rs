//! # rpntrace
//!
//! rpntrace compiles arithmetic expressions written in infix notation into
//! postfix (Reverse Polish) form and evaluates them on a stack machine,
//! keeping a step-by-step trace of every intermediate stack state.
//!
//! The pipeline has three pure stages: [`tokenize`], [`to_postfix`] and
//! [`evaluate`]. [`compile`] runs all three and tags failures with the stage
//! that produced them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, trace};

pub use crate::interpreter::{
    converter::{Converter, ParenPolicy, to_postfix, to_postfix_checked},
    evaluator::{Evaluation, evaluate, trace::Trace},
    lexer::{Token, tokenize},
};
use crate::error::CompileError;

/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised during lexing,
/// conversion or evaluation, and the [`CompileError`] wrapper that records
/// which stage failed.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Implements `Display` with messages fit to show to end users.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the three expression-processing stages.
///
/// # Responsibilities
/// - Tokenizes text, converts tokens to postfix and evaluates postfix.
/// - Keeps each stage a pure function of its input.
pub mod interpreter;
/// Defines the arithmetic operators and their precedence table.
pub mod operator;
/// Renders tokens, stacks and traces as text for a presentation layer.
pub mod render;
/// General utilities: checked number parsing and the stack container.
pub mod util;

/// Result type of [`compile`].
pub type CompileResult<T> = Result<T, CompileError>;

/// Settings for [`compile_with`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CompileOptions {
    /// Treatment of unbalanced parentheses during conversion.
    pub parentheses: ParenPolicy,
}

/// Everything produced by compiling one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    /// Tokens in source order.
    pub tokens:  Vec<Token>,
    /// Tokens in postfix order.
    pub postfix: Vec<Token>,
    /// The final value.
    pub value:   f64,
    /// Every evaluation step.
    pub trace:   Trace,
}

/// Compiles and evaluates an expression, rejecting unbalanced parentheses.
///
/// Equivalent to [`compile_with`] with default [`CompileOptions`].
///
/// # Errors
/// Returns a [`CompileError`] describing the first failure; no partial
/// results are returned.
///
/// # Examples
/// ```
/// use rpntrace::{compile, error::{CompileError, EvalError}};
///
/// let compiled = compile("(3 + 4) * 2").unwrap();
/// assert_eq!(compiled.value, 14.0);
///
/// let err = compile("5 / 0").unwrap_err();
/// assert_eq!(err, CompileError::Eval(EvalError::DivisionByZero));
/// ```
pub fn compile(source: &str) -> CompileResult<Compilation> {
    compile_with(source, &CompileOptions::default())
}

/// Compiles and evaluates an expression with explicit options.
///
/// Blank input is rejected. Error positions count from the start of
/// `source`, surrounding whitespace included.
///
/// # Errors
/// Returns [`CompileError::EmptyExpression`] for blank input, otherwise the
/// error of the first failing stage.
///
/// # Example
/// ```
/// use rpntrace::{
///     CompileOptions, ParenPolicy, compile_with,
///     error::{CompileError, EvalError},
/// };
///
/// let lenient = CompileOptions { parentheses: ParenPolicy::Lenient };
/// let compiled = compile_with("(1 + 2) * 3)", &lenient).unwrap();
/// assert_eq!(compiled.value, 9.0);
///
/// let err = compile_with("(1 + 2", &lenient).unwrap_err();
/// assert_eq!(err,
///            CompileError::Eval(EvalError::MalformedExpression));
/// ```
pub fn compile_with(source: &str, options: &CompileOptions) -> CompileResult<Compilation> {
    if source.trim().is_empty() {
        return Err(CompileError::EmptyExpression);
    }

    let tokens = tokenize(source)?;
    debug!(count = tokens.len(), "tokenized expression");

    let postfix = Converter::new(options.parentheses).convert(&tokens)?;
    debug!(postfix = %render::join_tokens(&postfix), "converted to postfix");

    let Evaluation { value, trace } = evaluate(&postfix)?;
    trace!(steps = trace.len(), value, "evaluated postfix");

    Ok(Compilation { tokens,
                     postfix,
                     value,
                     trace })
}
