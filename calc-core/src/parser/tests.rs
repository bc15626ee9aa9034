use crate::{
    lexer::prelude::{lex, LexResult, LexicalErrorType, Token},
    parser::prelude::{
        parse_statement, BinaryOperator, Expression, ParseError, ParseErrorType, Parser, Postfix, Statement,
        MAX_NESTING_DEPTH
    },
    utils::prelude::SrcSpan,
};

fn error_type(input: &str) -> ParseErrorType {
    match parse_statement(input) {
        Ok(statement) => panic!("`{input}` parsed as {statement}"),
        Err(err) => err.error
    }
}

#[test]
fn test_precedence() -> Result<(), ParseError> {
    let cases = [
        ("2+3*4", "(2 + (3 * 4))"),
        ("(2+3)*4", "((2 + 3) * 4)"),
        ("10-3-2", "((10 - 3) - 2)"),
        ("8/4/2", "((8 / 4) / 2)"),
        ("7%3*2", "((7 % 3) * 2)"),
        ("1+2-3+4", "(((1 + 2) - 3) + 4)"),
        ("a*b+c*d", "((a * b) + (c * d))"),
    ];

    for (input, expected) in cases {
        let statement = parse_statement(input)?;

        assert_eq!(statement.to_string(), expected, "input: {input}");
    }

    Ok(())
}

#[test]
fn test_prefix() -> Result<(), ParseError> {
    let cases = [
        ("-5+2", "(-5 + 2)"),
        ("+5", "5"),
        ("--5", "--5"),
        ("-(1+2)", "-(1 + 2)"),
        ("2*-3", "(2 * -3)"),
        ("+-+x", "-x"),
    ];

    for (input, expected) in cases {
        let statement = parse_statement(input)?;

        assert_eq!(statement.to_string(), expected, "input: {input}");
    }

    Ok(())
}

#[test]
fn test_assignment() -> Result<(), ParseError> {
    let statement = parse_statement("x = 5 * (y - 1)")?;

    match &statement {
        Statement::Assignment(assignment) => {
            assert_eq!(assignment.identifier.name, "x");
            assert_eq!(assignment.identifier.location, SrcSpan::from(0, 1));
            assert_eq!(assignment.location, SrcSpan::from(0, 14));
        },
        Statement::Expression(_) => panic!("expected an assignment")
    }

    assert_eq!(statement.to_string(), "x = (5 * (y - 1))");

    // a lone identifier is still an expression
    assert!(matches!(parse_statement("x")?, Statement::Expression(Expression::Identifier(_))));

    Ok(())
}

#[test]
fn test_tree_shape() -> Result<(), ParseError> {
    let statement = parse_statement("1 - 2 % x")?;

    let Statement::Expression(Expression::Binary(root)) = statement else {
        panic!("expected a binary expression");
    };

    assert_eq!(root.operator, BinaryOperator::Sub);
    assert_eq!(root.location, SrcSpan::from(0, 9));
    assert!(matches!(*root.left, Expression::Literal { value: 1, .. }));

    let Expression::Binary(right) = *root.right else {
        panic!("expected a binary right operand");
    };

    assert_eq!(right.operator, BinaryOperator::Mod);
    assert!(matches!(*right.right, Expression::Identifier(ref ident) if ident.name == "x"));

    Ok(())
}

#[test]
fn test_postfix() -> Result<(), ParseError> {
    assert_eq!(parse_statement("2+3*4")?.postfix(), "2 3 4 * +");
    assert_eq!(parse_statement("-(a-b)")?.postfix(), "a b - neg");
    assert_eq!(parse_statement("total = 1 + 2")?.postfix(), "total 1 2 + =");

    Ok(())
}

#[test]
fn test_reparse_is_pure() -> Result<(), ParseError> {
    let inputs = ["x = -(3 + y) * 2 % z", "((1))", "a_b-c", "--+-7/ 2"];

    for input in inputs {
        assert_eq!(parse_statement(input)?, parse_statement(input)?);

        let printed = parse_statement(input)?.to_string();
        assert_eq!(parse_statement(&printed)?.to_string(), printed);
    }

    Ok(())
}

#[test]
fn test_malformed() {
    assert_eq!(error_type("(1+2"), ParseErrorType::UnclosedParen);
    assert_eq!(error_type("1+"), ParseErrorType::UnexpectedEof);
    assert_eq!(error_type(""), ParseErrorType::UnexpectedEof);
    assert_eq!(error_type("-"), ParseErrorType::UnexpectedEof);
    assert_eq!(error_type("x ="), ParseErrorType::UnexpectedEof);

    assert!(matches!(
        error_type("*5"),
        ParseErrorType::UnexpectedToken { token: Token::Asterisk, .. }
    ));
    assert!(matches!(
        error_type("()"),
        ParseErrorType::UnexpectedToken { token: Token::RParen, .. }
    ));
    assert!(matches!(
        error_type("(1 2)"),
        ParseErrorType::UnexpectedToken { token: Token::Int(2), .. }
    ));

    assert_eq!(error_type("1 2"), ParseErrorType::TrailingToken { token: Token::Int(2) });
    assert_eq!(error_type("(1))"), ParseErrorType::TrailingToken { token: Token::RParen });
    assert_eq!(error_type("x = y = 1"), ParseErrorType::TrailingToken { token: Token::Assign });

    assert_eq!(
        error_type("5 = 3"),
        ParseErrorType::InvalidAssignmentTarget { token: Token::Int(5) }
    );
}

#[test]
fn test_error_spans() {
    let err = parse_statement("(1+2").unwrap_err();
    assert_eq!(err.span, SrcSpan::from(0, 1));

    let err = parse_statement("1 +").unwrap_err();
    assert_eq!(err.span, SrcSpan::from(3, 3));

    let err = parse_statement("4 * )").unwrap_err();
    assert_eq!(err.span, SrcSpan::from(4, 5));
}

#[test]
fn test_lexical_errors() {
    let err = parse_statement("1 + $").unwrap_err();

    match err.error {
        ParseErrorType::LexError { error } => {
            assert_eq!(error.error, LexicalErrorType::UnrecognizedToken { tok: '$' });
            assert_eq!(err.span, SrcSpan::from(4, 5));
        },
        other => panic!("expected a lexical error, got {other:?}")
    }

    // reported even when the statement would otherwise be complete
    assert!(matches!(
        parse_statement("x = 1 #").unwrap_err().error,
        ParseErrorType::LexError { .. }
    ));

    assert!(matches!(
        parse_statement("99999999999999999999").unwrap_err().error,
        ParseErrorType::LexError { error } if error.error == LexicalErrorType::NumberTooLarge
    ));
}

#[test]
fn test_parser_window() -> Result<(), ParseError> {
    let mut parser = Parser::new(lex("a = 1"));

    assert!(matches!(parser.current_token, Some((0, Token::Ident(_), 1))));
    assert!(matches!(parser.next_token, Some((2, Token::Assign, 3))));

    let statement = parser.parse()?;
    assert_eq!(statement.to_string(), "a = 1");

    Ok(())
}

#[test]
fn test_nesting_limit() -> Result<(), ParseError> {
    let parens = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_eq!(error_type(&parens), ParseErrorType::NestingTooDeep);

    let negations = format!("{}1", "-".repeat(200_000));
    assert_eq!(error_type(&negations), ParseErrorType::NestingTooDeep);

    let pluses = format!("{}1", "+".repeat(200_000));
    assert_eq!(error_type(&pluses), ParseErrorType::NestingTooDeep);

    let chain = format!("1{}", "+1".repeat(10_000));
    assert_eq!(error_type(&chain), ParseErrorType::NestingTooDeep);

    // the error points at the token that went one level too deep
    let err = parse_statement(&"(".repeat(MAX_NESTING_DEPTH + 1)).unwrap_err();
    assert_eq!(err.span, SrcSpan::from(MAX_NESTING_DEPTH as u32, MAX_NESTING_DEPTH as u32 + 1));

    // moderate nesting still parses
    let nested = format!("{}7{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(parse_statement(&nested)?.to_string(), "7");

    let negated = format!("{}7", "-".repeat(200));
    assert_eq!(parse_statement(&negated)?.postfix(), format!("7{}", " neg".repeat(200)));

    let sum = format!("1{}", "+1".repeat(100));
    assert!(matches!(parse_statement(&sum)?, Statement::Expression(Expression::Binary(_))));

    Ok(())
}

#[test]
fn test_eof_spans_after_last_token() {
    // a token stream that stops without an `Eof` token leaves a hole in the window
    let tokens: Vec<LexResult> = vec![Ok((0, Token::Int(1), 1)), Ok((2, Token::Plus, 3))];
    let err = Parser::new(tokens.into_iter()).parse().unwrap_err();

    assert_eq!(err.error, ParseErrorType::UnexpectedEof);
    assert_eq!(err.span, SrcSpan::from(3, 3));

    let tokens: Vec<LexResult> = vec![Ok((0, Token::LParen, 1)), Ok((1, Token::Ident("x".to_string()), 2))];
    let err = Parser::new(tokens.into_iter()).parse().unwrap_err();

    assert_eq!(err.error, ParseErrorType::UnexpectedEof);
    assert_eq!(err.span, SrcSpan::from(2, 2));

    let tokens: Vec<LexResult> = vec![Ok((4, Token::Ident("x".to_string()), 5))];
    let err = Parser::new(tokens.into_iter()).parse().unwrap_err();

    assert_eq!(err.error, ParseErrorType::UnexpectedEof);
    assert_eq!(err.span, SrcSpan::from(5, 5));
}
