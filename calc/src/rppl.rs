use calc_core::{
	parser::prelude::{parse_statement, Postfix},
	utils::prelude::Error
};

use crate::cli::{print_error, read_line};

const PROMPT: &str = ">> ";

/// Echoes every line back as a fully parenthesized or postfix tree.
pub fn start(postfix: bool) -> std::io::Result<()> {
	while let Some(input) = read_line(PROMPT)? {
		match input.trim() {
			"" => continue,
			"exit" => break,
			_ => {}
		}

		match parse_statement(&input) {
			Ok(statement) if postfix => println!("{}", statement.postfix()),
			Ok(statement) => println!("{statement}"),
			Err(error) => print_error(&Error::Parse { src: input, error })
		}
	}

	Ok(())
}
