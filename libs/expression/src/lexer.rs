//! Expression lexer - tokenizes input strings
//!
//! Produces quantity literals, operator names and parentheses. Any run of
//! whitespace separates tokens.

use crate::token::{Token, TokenType};

/// The expression lexer
pub struct Lexer {
    input: String,
    /// Byte offset and character, from `char_indices`
    chars: Vec<(usize, char)>,
    index: usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Create a new lexer for the given input
    pub fn new(input: String) -> Self {
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let current_char = chars.first().map(|&(_, c)| c);

        Self {
            input,
            chars,
            index: 0,
            current_char,
        }
    }

    /// Byte offset of the current character
    fn position(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    /// Advance to the next character
    fn advance(&mut self) {
        self.index += 1;
        self.current_char = self.chars.get(self.index).map(|&(_, c)| c);
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read an identifier
    fn read_identifier(&mut self) -> String {
        let start = self.position();

        while let Some(c) = self.current_char {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        self.input[start..self.position()].to_string()
    }

    /// Read a quantity literal: 'text'
    ///
    /// The body is taken verbatim; there are no escape sequences.
    fn read_quantity(&mut self) -> Option<String> {
        self.advance(); // Skip opening quote
        let start = self.position();

        while let Some(c) = self.current_char {
            if c == '\'' {
                let value = self.input[start..self.position()].to_string();
                self.advance(); // Skip closing quote
                return Some(value);
            }
            self.advance();
        }

        None
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.position();
        let Some(c) = self.current_char else {
            return Token::eof(position);
        };

        match c {
            '(' => {
                self.advance();
                Token::new(TokenType::OpenParen, "(".into(), position)
            }
            ')' => {
                self.advance();
                Token::new(TokenType::CloseParen, ")".into(), position)
            }
            '\'' => match self.read_quantity() {
                Some(value) => Token::new(TokenType::QuantityLiteral, value, position),
                None => Token::error("Unterminated quantity literal".into(), position),
            },
            c if c.is_alphabetic() || c == '_' => {
                let name = self.read_identifier();
                Token::new(TokenType::Identifier, name, position)
            }
            other => {
                self.advance();
                Token::error(format!("Unexpected character '{}'", other), position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input.to_string());
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = matches!(token.token_type, TokenType::Eof | TokenType::Error);
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn test_call_tokens() {
        let tokens = tokenize("sum ( '1 m' '2' )");
        let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Identifier,
                TokenType::OpenParen,
                TokenType::QuantityLiteral,
                TokenType::QuantityLiteral,
                TokenType::CloseParen,
                TokenType::Eof,
            ]
        );
        assert_eq!(tokens[0].value, "sum");
        assert_eq!(tokens[2].value, "1 m");
        assert_eq!(tokens[3].value, "2");
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let tokens = tokenize("'2 m²' x");
        assert_eq!(tokens[0].position, 0);
        // '²' is two bytes in UTF-8
        assert_eq!(tokens[1].position, 8);
    }

    #[test]
    fn test_unit_text_is_verbatim() {
        let tokens = tokenize("'4 √(m·ft)/s'");
        assert_eq!(tokens[0].token_type, TokenType::QuantityLiteral);
        assert_eq!(tokens[0].value, "4 √(m·ft)/s");
    }

    #[test]
    fn test_parens_need_no_spaces() {
        let tokens = tokenize("abs('1')");
        assert_eq!(tokens[1].token_type, TokenType::OpenParen);
        assert_eq!(tokens[3].token_type, TokenType::CloseParen);
    }

    #[test]
    fn test_unterminated_literal() {
        let tokens = tokenize("sum ( '1 m");
        let last = tokens.last().unwrap();
        assert_eq!(last.token_type, TokenType::Error);
        assert_eq!(last.position, 6);
    }

    #[test]
    fn test_unexpected_character() {
        let tokens = tokenize("sum , '1'");
        assert_eq!(tokens[1].token_type, TokenType::Error);
        assert!(tokens[1].value.contains(','));
    }
}
