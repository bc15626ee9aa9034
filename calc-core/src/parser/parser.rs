use crate::{lexer::prelude::{lex, LexResult, LexicalError, Spanned, Token}, utils::prelude::SrcSpan};
use super::error::{ParseError, ParseErrorType};
use super::ast::{Expression, Statement};

pub trait Parse<T: Iterator<Item = LexResult>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>, 
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

pub trait InfixParse<T: Iterator<Item = LexResult>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>, 
        left: Expression, 
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

/// Deepest chain of nested expressions a single statement may build.
/// Parsing, evaluating and dropping the tree all recurse on it.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Pratt parser over a token stream with a two token window.
pub struct Parser<T: Iterator<Item = LexResult>> {
    pub current_token: Option<Spanned>,
    pub next_token: Option<Spanned>,
    pub lex_errors: Vec<LexicalError>,

    tokens: T,
    depth: usize,
    last_end: u32,
}

impl<T: Iterator<Item = LexResult>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            next_token: None,
            lex_errors: vec![],

            tokens: input,
            depth: 0,
            last_end: 0,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    /// Shifts the window by one token and returns the token that left it.
    /// A lexical error leaves a hole (`None`) in the window.
    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();

        let next = match self.tokens.next() {
            Some(Ok(tok)) => Some(tok),
            Some(Err(err)) => {
                self.lex_errors.push(err);

                None
            },
            None => None
        };

        self.current_token = self.next_token.take();
        self.next_token = next;

        if let Some((_, _, end)) = &t {
            self.last_end = *end;
        }

        t
    }

    /// Span of the current token. A hole in the window points right after
    /// the last token that left it.
    pub fn current_span(&self) -> SrcSpan {
        match &self.current_token {
            Some((start, _, end)) => SrcSpan { start: *start, end: *end },
            None => SrcSpan::empty(self.last_end)
        }
    }

    /// Goes one level deeper into the expression tree.
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return parse_error(ParseErrorType::NestingTooDeep, self.current_span());
        }

        self.depth += 1;

        Ok(())
    }

    pub fn leave(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    pub fn current_precedence(&self) -> Precedence {
        match &self.current_token {
            Some((_, token, _)) => Precedence::from(token),
            None => Precedence::Lowest
        }
    }

    /// Parses exactly one statement and requires the input to end after it.
    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        let statement = Statement::parse(self, None);

        if let Some(error) = self.lex_errors.first() {
            return parse_error(
                ParseErrorType::LexError { error: *error },
                error.location
            );
        }

        let statement = statement?;

        match self.current_token.take() {
            Some((_, Token::Eof, _)) => Ok(statement),
            Some((start, token, end)) => parse_error(
                ParseErrorType::TrailingToken { token },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan::empty(statement.location().end)
            )
        }
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match self.current_token.take() {
            Some((start, tok, end)) if tok == token => {
                self.step();
                Ok((start, end))
            },
            Some(t) => {
                let (start, tok, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: tok,
                        expected: vec![format!("`{}`", token.as_literal())],
                    },
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan::empty(self.last_end)
            )
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        match self.current_token.take() {
            Some((start, Token::Ident(value), end)) => {
                self.step();
                Ok((start, value, end))
            },
            Some(t) => {
                let (start, _, end) = t.clone();
                self.current_token = Some(t);

                parse_error(
                    ParseErrorType::ExpectedIdent,
                    SrcSpan { start, end }
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan::empty(self.last_end)
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    AddSub,
    ProdDivMod,
    Prefix
}

impl From<&Token> for Precedence {
    fn from(value: &Token) -> Self {
        match value {
            Token::Plus | Token::Minus => Self::AddSub,
            Token::Asterisk | Token::Slash | Token::Percent => Self::ProdDivMod,
            _ => Self::Lowest,
        }
    }
}

/// Parses one line of input into a statement.
pub fn parse_statement(src: &str) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(lex(src));
    let statement = parser.parse()?;

    Ok(statement)
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
