use std::fmt::Display;

use crate::{
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, InfixParse, Parse, ParseError, ParseErrorType, Parser, Precedence},
    utils::prelude::SrcSpan
};

pub trait Postfix {
    fn postfix(&self) -> String;
}

// statement -> <assignment> | <expression>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expression),
    Assignment(Assignment),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Statement {
    fn parse(
        parser: &mut Parser<T>, 
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let is_assignment = matches!(parser.next_token, Some((_, Token::Assign, _)));

        let res = match &parser.current_token {
            Some((_, Token::Ident(_), _)) if is_assignment => {
                Self::Assignment(Assignment::parse(parser, None)?)
            },
            Some((start, token, end)) if is_assignment => return parse_error(
                ParseErrorType::InvalidAssignmentTarget { token: token.clone() },
                SrcSpan { start: *start, end: *end }
            ),
            _ => Self::Expression(Expression::parse(parser, None)?)
        };

        Ok(res)  
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression(expression) => write!(f, "{expression}"),
            Self::Assignment(assignment) => write!(f, "{assignment}")
        }
    }
}

impl Postfix for Statement {
    fn postfix(&self) -> String {
        match self {
            Self::Expression(expression) => expression.postfix(),
            Self::Assignment(assignment) => assignment.postfix()
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Expression(expression) => expression.location(),
            Self::Assignment(assignment) => assignment.location
        }
    }
}

// assignment -> <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: Identifier,
    pub value: Expression,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Assignment {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let ident = parser.expect_ident()?;
        let start = ident.0;

        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser, None)?;
        let end = value.location().end;

        Ok(Self {
            identifier: ident.into(),
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.identifier, self.value)
    }
}

impl Postfix for Assignment {
    fn postfix(&self) -> String {
        format!("{} {} =", self.identifier, self.value.postfix())
    }
}

// expression -> <identifier> | <number> | <binary> | <prefix> <expression> | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal {
        value: i64,
        location: SrcSpan
    },
    Identifier(Identifier),
    Binary(BinaryExpression),
    Negative(NegativeExpression),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Expression {
    fn parse(
        parser: &mut Parser<T>, 
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        parser.enter()?;
        let mut levels = 1;

        let mut expr = match &parser.current_token {
            Some((start, token, end)) => match token {
                Token::Ident(_) => {
                    let (start, ident, end) = parser.expect_ident()?;

                    Self::Identifier(Identifier::from((start, ident, end)))
                },
                Token::Int(value) => {
                    let literal = Self::Literal {
                        value: *value,
                        location: SrcSpan { start: *start, end: *end }
                    };
                    parser.step();

                    literal
                },
                // unary plus leaves its operand untouched
                Token::Plus => {
                    parser.step();

                    Expression::parse(parser, Some(Precedence::Prefix))?
                },
                Token::Minus => Self::Negative(NegativeExpression::parse(parser, None)?),
                Token::LParen => {
                    let (start, _) = parser.expect_one(Token::LParen)?;

                    let expression = Expression::parse(parser, None)?;

                    if let Some((_, Token::Eof, _)) = parser.current_token {
                        return parse_error(
                            ParseErrorType::UnclosedParen,
                            SrcSpan { start, end: start + 1 }
                        );
                    }

                    parser.expect_one(Token::RParen)?;

                    expression
                },
                Token::Eof => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: *start, end: *end }
                ),
                _ => return parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: token.clone(),
                        expected: vec![
                            "a Number".to_string(),
                            "an Identifier".to_string(),
                            "`+` or `-`".to_string(),
                            "`(`".to_string()
                        ]
                    },
                    SrcSpan { start: *start, end: *end }
                )
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof, 
                parser.current_span()
            )
        };

        while precedence.unwrap_or(Precedence::Lowest) < parser.current_precedence() {
            let is_operator = matches!(
                &parser.current_token,
                Some((_, token, _)) if token.is_operator()
            );

            if !is_operator {
                break;
            }

            // every operator in a chain wraps the tree built so far
            parser.enter()?;
            levels += 1;

            expr = Self::Binary(BinaryExpression::parse(parser, expr, precedence)?);
        }

        parser.leave(levels);

        Ok(expr)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Binary(binary) => write!(f, "{binary}"),
            Self::Negative(negative) => write!(f, "{negative}")
        }
    }
}

impl Postfix for Expression {
    fn postfix(&self) -> String {
        match self {
            Self::Literal { value, .. } => format!("{value}"),
            Self::Identifier(ident) => format!("{ident}"),
            Self::Binary(binary) => binary.postfix(),
            Self::Negative(negative) => negative.postfix()
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Literal { location, .. } => *location,
            Self::Identifier(ident) => ident.location,
            Self::Binary(binary) => binary.location,
            Self::Negative(negative) => negative.location
        }
    }
}

// identifier -> (<letter> | _) { <letter> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            name: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Option<Self> {
        Some(match token {
            Token::Plus => Self::Add,
            Token::Minus => Self::Sub,
            Token::Asterisk => Self::Mul,
            Token::Slash => Self::Div,
            Token::Percent => Self::Mod,
            _ => return None
        })
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%"
        };

        write!(f, "{operator}")
    }
}

// binary -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> InfixParse<T> for BinaryExpression {
    fn parse(
        parser: &mut Parser<T>, 
        left: Expression, 
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let precedence = parser.current_precedence();

        let operator = match parser.next_token() {
            Some((start, token, end)) => match BinaryOperator::from_token(&token) {
                Some(operator) => operator,
                None => return parse_error(
                    ParseErrorType::UnexpectedToken {
                        token,
                        expected: vec!["one of `+ - * / %`".to_string()]
                    },
                    SrcSpan { start, end }
                )
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof, 
                SrcSpan::empty(left.location().end)
            )
        };

        // same precedence on the right keeps the chain left-associative
        let right = Expression::parse(parser, Some(precedence))?;

        let location = left.location().merge(right.location());

        Ok(Self {
            left: Box::new(left), 
            operator,
            right: Box::new(right), 
            location
        })
    }
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl Postfix for BinaryExpression {
    fn postfix(&self) -> String {
        format!("{} {} {}", self.left.postfix(), self.right.postfix(), self.operator)
    }
}

// prefix -> - <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct NegativeExpression {
    pub expression: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for NegativeExpression {
    fn parse(
        parser: &mut Parser<T>, 
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let span = parser.current_span();

        let start = match parser.next_token() {
            Some((start, _, _)) => start,
            None => return parse_error(ParseErrorType::UnexpectedEof, span)
        };

        let expression = Expression::parse(parser, Some(Precedence::Prefix))?;
        let end = expression.location().end;

        Ok(Self {
            expression: Box::new(expression),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for NegativeExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-{}", self.expression)
    }
}

impl Postfix for NegativeExpression {
    fn postfix(&self) -> String {
        format!("{} neg", self.expression.postfix())
    }
}
