//! Token types for the expression lexer

/// Token types for the expression lexer
#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum TokenType {
    /// Single-quoted quantity literal; the value holds the text between quotes
    QuantityLiteral,

    /// Operator name
    Identifier,

    OpenParen,  // (
    CloseParen, // )

    // End of input
    Eof,

    // Error
    Error, // For lexical errors; the value holds the message
}

/// A token in the expression text
#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    /// Byte offset of the first character
    pub position: usize,
}

impl Token {
    pub fn new(token_type: TokenType, value: String, position: usize) -> Self {
        Self {
            token_type,
            value,
            position,
        }
    }

    pub fn eof(position: usize) -> Self {
        Self::new(TokenType::Eof, String::new(), position)
    }

    pub fn error(message: String, position: usize) -> Self {
        Self::new(TokenType::Error, message, position)
    }
}
