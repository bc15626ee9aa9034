use std::io::{self, BufRead, IsTerminal, Write};
use std::fmt::Display;

use calc_core::utils::prelude::{Error, Warning, WarningEmitterIO};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Progress line printed to stderr with a right-aligned coloured tag.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Status {
    Evaluating,
    Evaluated,
    Cleared,
    Warning,
}

impl Status {
    fn tag(self) -> (&'static str, Color) {
        match self {
            Self::Evaluating => ("Evaluating", Color::Magenta),
            Self::Evaluated => ("Evaluated", Color::Green),
            Self::Cleared => ("Cleared", Color::Cyan),
            Self::Warning => ("Warning", Color::Yellow),
        }
    }

    pub(crate) fn print(self, text: impl Display) {
        let (tag, colour) = self.tag();

        write_stderr(|buf| {
            buf.set_color(ColorSpec::new().set_intense(true).set_bold(true).set_fg(Some(colour)))?;
            write!(buf, "{tag: >11}")?;
            buf.reset()?;
            writeln!(buf, " {text}")
        });
    }
}

pub(crate) fn print_error(err: &Error) {
    write_stderr(|buf| {
        err.pretty(buf);
        Ok(())
    });
}

/// Prints evaluation warnings as soon as the session reports them.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        write_stderr(|buf| {
            warning.pretty(buf);
            Ok(())
        });
    }
}

/// Shows `prompt` and reads one line without its line ending.
/// `None` means stdin is closed.
pub(crate) fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();

    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let len = input.trim_end_matches(['\n', '\r']).len();
    input.truncate(len);

    Ok(Some(input))
}

fn write_stderr(fill: impl FnOnce(&mut Buffer) -> io::Result<()>) {
    let writer = BufferWriter::stderr(color_choice());
    let mut buf = writer.buffer();

    fill(&mut buf)
        .and_then(|_| writer.print(&buf))
        .expect("Writing to stderr");
}

/// `FORCE_COLOR` wins, otherwise colour only goes to a terminal.
fn color_choice() -> ColorChoice {
    match std::env::var_os("FORCE_COLOR") {
        Some(force) if !force.is_empty() => ColorChoice::Always,
        _ if io::stderr().is_terminal() => ColorChoice::Auto,
        _ => ColorChoice::Never
    }
}
