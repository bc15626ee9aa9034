mod cli;
mod repl;
mod rppl;

use std::rc::Rc;

use clap::{Parser, Subcommand};
use cli::{print_error, ConsoleWarningEmitter, Status};
use calc_core::{
    parser::prelude::parse_statement,
    session::prelude::Session,
    utils::prelude::Error
};

/// Interactive calculator for integer arithmetic with variables.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Runs Read Eval Print Loop [default]
    Repl {
        /// Do not print the welcome banner
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Evaluates a single statement and prints its result
    Eval {
        /// Statement to evaluate, e.g. "2 + 3 * 4"
        statement: String,
        /// Print the parsed statement before evaluating it
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Runs Read Parse Print Loop
    Rppl {
        /// Print statements in reverse Polish notation
        #[arg(short, long, default_value_t = false)]
        postfix: bool,
    }
}

fn main() {
    let command = Args::parse().command
        .unwrap_or(Command::Repl { quiet: false });

    let result = match command {
        Command::Repl { quiet } => repl::start(quiet),
        Command::Eval { statement, print_ast } => {
            if !eval(&statement, print_ast) {
                std::process::exit(1);
            }

            Ok(())
        },
        Command::Rppl { postfix } => rppl::start(postfix)
    };

    if let Err(err) = result {
        print_error(&Error::StdIo { err: err.kind() });
        std::process::exit(1);
    }
}

fn eval(statement: &str, print_ast: bool) -> bool {
    if print_ast {
        match parse_statement(statement) {
            Ok(parsed) => println!("{parsed:#?}"),
            Err(error) => {
                print_error(&Error::Parse { src: statement.to_string(), error });
                return false;
            }
        }
    }

    Status::Evaluating.print(statement);
    let start = std::time::Instant::now();

    let mut session = Session::new(Rc::new(ConsoleWarningEmitter));

    match session.run(statement) {
        Ok(value) => {
            Status::Evaluated.print(format_args!("in {:.2}s", start.elapsed().as_secs_f32()));
            println!("{value}");

            true
        },
        Err(err) => {
            print_error(&err);

            false
        }
    }
}
