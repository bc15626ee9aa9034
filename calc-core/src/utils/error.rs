use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::EvalError,
    parser::prelude::{ParseError, ParseErrorType},
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Location};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse statement")]
    Parse {
        src: String,
        error: ParseError
    },
    #[error("failed to evaluate statement")]
    Eval {
        src: String,
        error: EvalError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        self.to_diagnostic().write(buf);
        writeln!(buf).expect("write new line diagnostic");
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse { src, error } => {
                let (message, notes) = error.details();

                let title = match error.error {
                    ParseErrorType::LexError { .. } => "Lexical error",
                    _ => "Syntax error"
                };

                // a missing operand is reported where the line ends
                let span = match error.error {
                    ParseErrorType::UnexpectedEof => SrcSpan::empty(src.len() as u32),
                    _ => error.span
                };

                Diagnostic::error(title, notes.join("\n"), Some(Location { src, span, message }))
            },
            Error::Eval { src, error: EvalError::DivisionByZero { location } } => Diagnostic::error(
                "Division by zero",
                String::new(),
                Some(Location { src, span: *location, message: "This evaluates to zero" })
            ),
            Error::Eval { error: EvalError::UndefinedVariable { name }, .. } => Diagnostic::error(
                "Undefined variable",
                format!("Variable `{name}` is not defined."),
                None
            ),
            Error::StdIo { err } => Diagnostic::error("Standard IO error", format!("{err}"), None)
        }
    }
}
