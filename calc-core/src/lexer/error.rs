use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedToken { tok: char },
    NumberTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedToken { tok } => {
                ("Unrecognized character", vec![
                    format!("`{}` is not part of the language.", tok.escape_default()),
                    "Expected a digit, a letter, `_`, `=`, `(`, `)` or one of `+ - * / %`.".to_string()
                ])
            },
            LexicalErrorType::NumberTooLarge => {
                ("Number is too large", vec![
                    format!("Integer literals must not exceed {}.", i64::MAX)
                ])
            }
        }
    }
}
