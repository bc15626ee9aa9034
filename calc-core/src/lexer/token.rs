#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // (<буква>|_){<буква>|_}
    Ident(String),
    // {/ <цифра> /}
    Int(i64),

    // Операции группы сложения
    Plus, // +
    Minus, // -

    // Операции группы умножения
    Asterisk, // *
    Slash, // /
    Percent, // %

    // Группировка
    LParen, // (
    RParen, // )

    // Операция присваивания
    Assign, // =

    Eof,
}

impl Token {
    /// Tokens that can join two operands.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus
            | Token::Minus
            | Token::Asterisk
            | Token::Slash
            | Token::Percent
        )
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Int(value) => format!("{}", value),

            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Percent => "%".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Assign => "=".to_string(),

            Token::Eof => "\0".to_string(),
        }
    }
}
