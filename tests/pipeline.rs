use pretty_assertions::assert_eq;
use rpntrace::{
    Compilation, CompileOptions, Converter, ParenPolicy, Token, compile, compile_with,
    error::{CompileError, EvalError, LexError, ParseError, Stage},
    evaluate,
    interpreter::evaluator::trace::Action,
    operator::Operator,
    to_postfix, to_postfix_checked, tokenize,
};

fn num(text: &str) -> Token {
    Token::Number(text.to_string())
}

fn op(c: char) -> Token {
    match Operator::from_symbol(c) {
        Some(op) => Token::Operator(op),
        None => panic!("'{c}' is not an operator"),
    }
}

fn texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

fn assert_success(src: &str) -> Compilation {
    compile(src).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
}

fn assert_failure(src: &str) -> CompileError {
    match compile(src) {
        Ok(c) => panic!("Expression {src:?} succeeded with {} but was expected to fail", c.value),
        Err(e) => e,
    }
}

/// Checks the trace invariants that hold for every successful evaluation.
fn assert_trace_consistent(compiled: &Compilation) {
    let numbers = compiled.postfix.iter().filter(|t| t.is_number()).count();
    let operators = compiled.postfix.iter().filter(|t| t.is_operator()).count();

    assert_eq!(compiled.trace.operand_count(), numbers);
    assert_eq!(compiled.trace.operator_count(), operators);
    assert_eq!(compiled.trace.len(), compiled.postfix.len());

    assert!(!compiled.trace.is_empty());
    let last = compiled.trace.last().expect("trace is never empty on success");
    assert_eq!(last.stack, vec![compiled.value]);

    let recorded: Vec<Vec<f64>> = compiled.trace.steps().iter().map(|s| s.stack.clone()).collect();
    assert_eq!(compiled.trace.replay(), Some(recorded));
}

#[test]
fn precedence_round_trip() {
    let compiled = assert_success("3 + 4 * 2");
    assert_eq!(compiled.tokens, vec![num("3"), op('+'), num("4"), op('*'), num("2")]);
    assert_eq!(texts(&compiled.postfix), ["3", "4", "2", "*", "+"]);
    assert_eq!(compiled.value, 11.0);
    assert_trace_consistent(&compiled);
}

#[test]
fn parentheses_override_precedence() {
    let compiled = assert_success("(3 + 4) * 2");
    assert_eq!(texts(&compiled.postfix), ["3", "4", "+", "2", "*"]);
    assert_eq!(compiled.value, 14.0);
    assert_trace_consistent(&compiled);
}

#[test]
fn power_is_left_associative() {
    let compiled = assert_success("2 ^ 3 ^ 2");
    assert_eq!(texts(&compiled.postfix), ["2", "3", "^", "2", "^"]);
    assert_eq!(compiled.value, 64.0);
}

#[test]
fn subtraction_and_division_group_left() {
    assert_eq!(assert_success("10 - 4 - 3").value, 3.0);
    assert_eq!(assert_success("100 / 10 / 5").value, 2.0);
    assert_eq!(assert_success("8 / 2 * 4").value, 16.0);
}

#[test]
fn nested_parentheses_and_decimals() {
    let compiled = assert_success("((1.5 + .5) * (10 - 4)) / 3");
    assert_eq!(texts(&compiled.postfix), ["1.5", ".5", "+", "10", "4", "-", "*", "3", "/"]);
    assert_eq!(compiled.value, 4.0);
    assert_trace_consistent(&compiled);
}

#[test]
fn single_number_is_a_valid_expression() {
    let compiled = assert_success("  42  ");
    assert_eq!(compiled.value, 42.0);
    assert_eq!(compiled.trace.len(), 1);
    assert_trace_consistent(&compiled);
}

#[test]
fn division_by_zero() {
    assert_eq!(assert_failure("5 / 0"), CompileError::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("1 / (2 - 2)"), CompileError::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("5 / 0.0").stage(), Stage::Evaluate);
}

#[test]
fn invalid_character_reports_position() {
    assert_eq!(assert_failure("3 & 4"),
               CompileError::Lex(LexError::InvalidCharacter { position: 2, character: '&' }));
    assert_eq!(tokenize("1 + x").unwrap_err(),
               LexError::InvalidCharacter { position: 4, character: 'x' });
}

#[test]
fn invalid_character_position_counts_surrounding_whitespace() {
    let expected = LexError::InvalidCharacter { position: 5, character: '&' };
    assert_eq!(tokenize("   3 & 4").unwrap_err(), expected);
    assert_eq!(assert_failure("   3 & 4"), CompileError::Lex(expected));
    assert_eq!(assert_failure("\t1 +\n2 $"),
               CompileError::Lex(LexError::InvalidCharacter { position: 7, character: '$' }));
}

#[test]
fn invalid_character_position_counts_characters() {
    assert_eq!(tokenize("é+1").unwrap_err(),
               LexError::InvalidCharacter { position: 0, character: 'é' });
    assert_eq!(tokenize("1 + 2 × 3").unwrap_err(),
               LexError::InvalidCharacter { position: 6, character: '×' });
}

#[test]
fn malformed_postfix() {
    assert_eq!(evaluate(&[num("3"), op('+')]).unwrap_err(), EvalError::MalformedExpression);
    assert_eq!(evaluate(&[num("3"), num("4")]).unwrap_err(), EvalError::MalformedExpression);
    assert_eq!(evaluate(&[]).unwrap_err(), EvalError::MalformedExpression);
}

#[test]
fn unary_minus_is_not_supported() {
    assert_eq!(tokenize("-3").unwrap(), vec![op('-'), num("3")]);
    assert_eq!(assert_failure("-3"), CompileError::Eval(EvalError::MalformedExpression));
    assert_eq!(assert_failure("2 * -3"), CompileError::Eval(EvalError::MalformedExpression));
}

#[test]
fn parenthesis_in_operator_position_is_unknown_operator() {
    let err = evaluate(&[num("1"), num("2"), Token::LParen]).unwrap_err();
    assert_eq!(err, EvalError::UnknownOperator { token: "(".to_string() });
}

#[test]
fn malformed_numbers_fail_at_evaluation() {
    assert_eq!(tokenize("1.2.3 + 1").unwrap(), vec![num("1.2.3"), op('+'), num("1")]);
    assert_eq!(assert_failure("1.2.3 + 1"),
               CompileError::Eval(EvalError::InvalidNumber { text: "1.2.3".to_string() }));
    assert_eq!(assert_failure("."),
               CompileError::Eval(EvalError::InvalidNumber { text: ".".to_string() }));
}

#[test]
fn whitespace_invariance() {
    assert_eq!(tokenize("1+2").unwrap(), tokenize("1 + 2").unwrap());
    assert_eq!(tokenize("(1+2)*3").unwrap(), tokenize(" ( 1 +\t2 ) *\n3 ").unwrap());
}

#[test]
fn whitespace_does_not_split_numbers() {
    assert_eq!(tokenize("1 2 + 3").unwrap(), vec![num("12"), op('+'), num("3")]);
    assert_eq!(assert_success("1 0 * 2").value, 20.0);
}

#[test]
fn conversion_is_idempotent() {
    let tokens = tokenize("1 + 2 * (3 - 4) ^ 2 / 5").unwrap();
    assert_eq!(to_postfix(&tokens), to_postfix(&tokens));
    assert_eq!(to_postfix_checked(&tokens).unwrap(), to_postfix(&tokens));
}

#[test]
fn strict_conversion_rejects_unbalanced_parentheses() {
    assert_eq!(assert_failure("(1 + 2"), CompileError::Parse(ParseError::UnclosedParen { index: 0 }));
    assert_eq!(assert_failure("1 + 2)"),
               CompileError::Parse(ParseError::UnmatchedClosingParen { index: 3 }));
    assert_eq!(assert_failure("((1)").stage(), Stage::Convert);
}

#[test]
fn lenient_conversion_absorbs_unbalanced_parentheses() {
    let lenient = CompileOptions { parentheses: ParenPolicy::Lenient };

    let tokens = tokenize("1 + 2) * 3").unwrap();
    assert_eq!(texts(&to_postfix(&tokens)), ["1", "2", "+", "3", "*"]);
    assert_eq!(compile_with("1 + 2) * 3", &lenient).unwrap().value, 9.0);

    let tokens = tokenize("5 (1 + 2").unwrap();
    assert_eq!(texts(&to_postfix(&tokens)), ["5", "1", "2", "+", "("]);
    assert_eq!(compile_with("5 (1 + 2", &lenient).unwrap_err(),
               CompileError::Eval(EvalError::UnknownOperator { token: "(".to_string() }));

    assert_eq!(compile_with("(1 + 2", &lenient).unwrap_err(),
               CompileError::Eval(EvalError::MalformedExpression));
}

#[test]
fn lenient_converter_never_fails_and_matches_to_postfix() {
    let lenient = Converter::new(ParenPolicy::Lenient);

    for src in ["(1 + 2", "1 + 2)", ")(", "((1 + 2) * 3", "1 + 2) * (3"] {
        let tokens = tokenize(src).unwrap();
        let postfix = to_postfix(&tokens);
        assert!(!postfix.is_empty(), "{src:?} produced no postfix");
        assert_eq!(lenient.convert(&tokens), Ok(postfix));
        assert!(to_postfix_checked(&tokens).is_err(), "{src:?} should be unbalanced");
    }
}

#[test]
fn strict_conversion_reports_the_first_unbalanced_paren() {
    let tokens = tokenize("1) + (2").unwrap();
    assert_eq!(to_postfix_checked(&tokens),
               Err(ParseError::UnmatchedClosingParen { index: 1 }));
}

#[test]
fn blank_input_is_rejected() {
    assert_eq!(assert_failure(""), CompileError::EmptyExpression);
    assert_eq!(assert_failure(" \t "), CompileError::EmptyExpression);
    assert_eq!(assert_failure("").stage(), Stage::Input);
}

#[test]
fn trace_records_operands_and_results() {
    let compiled = assert_success("6 - 2 ^ 2");
    let steps = compiled.trace.steps();

    assert_eq!(steps[0].action, Action::PushOperand { value: 6.0 });
    assert_eq!(steps[2].stack, vec![6.0, 2.0, 2.0]);
    assert_eq!(steps[3].action,
               Action::ApplyOperator { operator: Operator::Pow,
                                       left:     2.0,
                                       right:    2.0,
                                       result:   4.0, });
    assert_eq!(steps[4].action,
               Action::ApplyOperator { operator: Operator::Sub,
                                       left:     6.0,
                                       right:    4.0,
                                       result:   2.0, });
    assert_eq!(steps.iter().map(|s| s.index).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_trace_consistent(&compiled);
}
