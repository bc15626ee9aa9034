use crate::{lexer::prelude::{LexicalError, Token}, utils::prelude::SrcSpan};
use super::parser::MAX_NESTING_DEPTH;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedIdent,
    UnexpectedEof,
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    UnclosedParen,
    NestingTooDeep,
    TrailingToken {
        token: Token,
    },
    InvalidAssignmentTarget {
        token: Token,
    },
    LexError { error: LexicalError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

fn describe(token: &Token) -> String {
    match token {
        Token::Int(_) => "a Number".to_string(),
        Token::Ident(_) => "an Identifier".to_string(),
        Token::Eof => "the end of input".to_string(),
        _ => format!("`{}`", token.as_literal())
    }
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedIdent => ("Expected identifier", vec![]),
            ParseErrorType::UnexpectedToken { token, expected } => {
                let found = describe(token);

                let messages = std::iter::once(format!("Found {found}, expected one of: "))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::UnexpectedEof => ("Unexpected end of input", vec![
                "The expression is missing an operand.".to_string()
            ]),
            ParseErrorType::UnclosedParen => ("This parenthesis is never closed", vec![]),
            ParseErrorType::NestingTooDeep => ("Expression is nested too deeply", vec![
                format!("At most {MAX_NESTING_DEPTH} levels of nesting are allowed.")
            ]),
            ParseErrorType::TrailingToken { token } => ("Unexpected token after statement", vec![
                format!("Found {}, but the statement was already complete.", describe(token))
            ]),
            ParseErrorType::InvalidAssignmentTarget { token } => ("Invalid assignment target", vec![
                format!("Only an identifier can be assigned to, found {}.", describe(token))
            ]),
            ParseErrorType::LexError { error } => error.details()
        }
    }
}
