use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use std::fmt::Display;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
}

/// Builds a lexer over a single input line.
pub fn lex(src: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, 
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}", 
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

	/// Once the input is exhausted every call yields `Eof` with the same span.
    pub fn next_token(&mut self) -> LexResult {
		self.skip_whitespace();

		let span = match self.ch {
			Some(ch) => match ch {
				'+' => self.eat_one_char(Token::Plus),
				'-' => self.eat_one_char(Token::Minus),
				'*' => self.eat_one_char(Token::Asterisk),
				'/' => self.eat_one_char(Token::Slash),
				'%' => self.eat_one_char(Token::Percent),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'=' => self.eat_one_char(Token::Assign),
				'0'..='9' => {
					return self.lex_number();
				},
				'a'..='z' | 'A'..='Z' | '_' => {
					return Ok(self.lex_ident());
				},
				c => {
					let start = self.position;
					let _ = self.next_char();
					let end = self.position;

					return Err(LexicalError {
						error: LexicalErrorType::UnrecognizedToken { tok: c },
						location: SrcSpan::from(start, end),
					});
				}
			},
			None => (self.position, Token::Eof, self.position)
		};

		Ok(span)
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;
		
		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += self.next_ch.map_or(0, char::len_utf8) as u32;

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	// Only the space character separates tokens.
	fn skip_whitespace(&mut self) {
		while let Some(' ') = self.ch {
			let _ = self.next_char();
		}
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch {
			if !(ch.is_ascii_alphabetic() || ch == '_') {
				break;
			}

			ident.push(ch);
			let _ = self.next_char();
		}

        let end_pos = self.position;

		(start_pos, Token::Ident(ident), end_pos)
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.position;

		let mut value: Option<i64> = Some(0);

		while let Some(ch) = self.ch {
			let digit = match ch.to_digit(10) {
				Some(digit) => digit as i64,
				None => break
			};

			value = value
				.and_then(|value| value.checked_mul(10))
				.and_then(|value| value.checked_add(digit));

			let _ = self.next_char();
		}

		let end_pos = self.position;

		match value {
			Some(value) => Ok((start_pos, Token::Int(value), end_pos)),
			None => Err(LexicalError {
				error: LexicalErrorType::NumberTooLarge,
				location: SrcSpan::from(start_pos, end_pos)
			})
		}
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.next_token();

		Some(token)
	}
}
