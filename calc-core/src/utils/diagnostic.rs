pub use codespan_reporting::diagnostic::Severity;
use codespan_reporting::{
    diagnostic::{Diagnostic as Report, Label},
    files::SimpleFile,
    term::{self, Config},
};
use termcolor::Buffer;
use super::src_span::SrcSpan;

/// Name shown in diagnostics for the line typed by the user.
pub const INPUT_NAME: &str = "<input>";

/// The part of the input line a diagnostic points at.
pub struct Location<'a> {
    pub src: &'a str,
    pub span: SrcSpan,
    pub message: &'static str,
}

pub struct Diagnostic<'a> {
    pub title: &'static str,
    pub text: String,
    pub severity: Severity,
    pub location: Option<Location<'a>>
}

impl<'a> Diagnostic<'a> {
    pub fn error(title: &'static str, text: String, location: Option<Location<'a>>) -> Self {
        Self { title, text, severity: Severity::Error, location }
    }

    pub fn warning(title: &'static str, text: String, location: Location<'a>) -> Self {
        Self { title, text, severity: Severity::Warning, location: Some(location) }
    }

    /// Renders the title, the marked input line (if any) and the note text.
    pub fn write(&self, buf: &mut Buffer) {
        let mut report = Report::new(self.severity).with_message(self.title);

        if let Some(location) = &self.location {
            let range = (location.span.start as usize)..(location.span.end as usize);

            report = report.with_labels(vec![
                Label::primary((), range).with_message(location.message)
            ]);
        }

        if !self.text.is_empty() {
            report = report.with_notes(vec![self.text.clone()]);
        }

        let src = self.location.as_ref().map_or("", |location| location.src);
        let file = SimpleFile::new(INPUT_NAME, src);

        term::emit(buf, &Config::default(), &file, &report)
            .expect("write_diagnostic");
    }
}
