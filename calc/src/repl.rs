use std::rc::Rc;

use calc_core::session::prelude::Session;

use crate::cli::{print_error, read_line, ConsoleWarningEmitter, Status};

const PROMPT: &str = ">>> ";
const RESULT: &str = "=> ";
const WELCOME: &str = "Welcome to the Calculator REPL!
type <expression> to evaluate an expression
type 'vars' to list variables
type 'clear' to clear variables
type 'exit' to exit
";
const GOODBYE: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaCommand {
	Vars,
	Clear,
	Exit,
}

impl MetaCommand {
	fn from_line(line: &str) -> Option<Self> {
		match line.trim() {
			"vars" => Some(Self::Vars),
			"clear" => Some(Self::Clear),
			"exit" => Some(Self::Exit),
			_ => None
		}
	}
}

pub fn start(quiet: bool) -> std::io::Result<()> {
	if let Err(err) = ctrlc::set_handler(|| {
		println!("\n{GOODBYE}");
		std::process::exit(0);
	}) {
		Status::Warning.print(format_args!("cannot handle Ctrl-C: {err}"));
	}

	let mut session = Session::new(Rc::new(ConsoleWarningEmitter));

	if !quiet {
		println!("{WELCOME}");
	}

	loop {
		let Some(input) = read_line(PROMPT)? else {
			println!("\n{GOODBYE}");
			return Ok(());
		};

		match MetaCommand::from_line(&input) {
			Some(MetaCommand::Exit) => {
				println!("{GOODBYE}");
				return Ok(());
			},
			Some(MetaCommand::Clear) => {
				let count = session.variables().len();
				session.clear();
				Status::Cleared.print(format_args!("{count} variable(s)"));
			},
			Some(MetaCommand::Vars) => {
				for (name, value) in session.variables() {
					println!("{name} = {value}");
				}
			},
			None if input.trim().is_empty() => {},
			None => match session.run(&input) {
				Ok(value) => println!("{RESULT}{value}"),
				Err(err) => print_error(&err)
			}
		}
	}
}
