//! Expression parser - converts text to a [`Node`] tree
//!
//! Recursive descent over the lexer's tokens. Operator names are resolved
//! while parsing, so an unknown function or a wrong argument count fails
//! here rather than during evaluation.

use crate::ast::Node;
use crate::error::{Error, Result};
use crate::functions;
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use semio_units::{Quantity, Unit};

/// Default bound on call nesting, shared with the evaluator
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Deepest call nesting accepted before failing with [`Error::TooDeep`]
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parser for quantity expressions
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    recursion_depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Create a new parser for the given input string
    pub fn new(input: String) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: String, options: &ParseOptions) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Self {
            lexer,
            current_token,
            recursion_depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Advance to the next token
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current_token, next)
    }

    fn current_token_is(&self, token_type: TokenType) -> bool {
        self.current_token.token_type == token_type
    }

    fn unexpected(&self, expected: &str) -> Error {
        let token = &self.current_token;
        match token.token_type {
            TokenType::Error => Error::SyntaxError(format!(
                "{} at position {}",
                token.value, token.position
            )),
            TokenType::Eof => Error::SyntaxError(format!(
                "Expected {}, but reached end of input",
                expected
            )),
            other => Error::SyntaxError(format!(
                "Expected {}, got {:?} '{}' at position {}",
                expected, other, token.value, token.position
            )),
        }
    }

    /// Expect a specific token type and advance
    fn expect(&mut self, token_type: TokenType, expected: &str) -> Result<Token> {
        if self.current_token_is(token_type) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Parse the entire expression (top-level entry point)
    pub fn parse(&mut self) -> Result<Node> {
        let node = self.parse_expression()?;

        // Ensure we've consumed all input
        if !self.current_token_is(TokenType::Eof) {
            return Err(self.unexpected("end of input"));
        }

        Ok(node)
    }

    /// Parse an expression: literal | call
    fn parse_expression(&mut self) -> Result<Node> {
        match self.current_token.token_type {
            TokenType::QuantityLiteral => {
                let token = self.advance();
                parse_quantity(&token.value, token.position).map(Node::Literal)
            }
            TokenType::Identifier => self.parse_call(),
            _ => Err(self.unexpected("quantity literal or function call")),
        }
    }

    /// Parse call: identifier "(" expr (whitespace expr)* ")"
    fn parse_call(&mut self) -> Result<Node> {
        let name = self.advance();
        let meta = functions::lookup(&name.value)
            .ok_or_else(|| Error::UnknownOperator(name.value.clone()))?;
        self.expect(TokenType::OpenParen, "'('")?;

        self.recursion_depth += 1;
        if self.recursion_depth > self.max_depth {
            return Err(Error::TooDeep(self.max_depth));
        }

        let mut arguments = Vec::new();
        while !self.current_token_is(TokenType::CloseParen) {
            arguments.push(self.parse_expression()?);
        }
        self.advance(); // Skip ')'
        self.recursion_depth -= 1;

        functions::check_arity(meta.operator, arguments.len())?;
        Ok(Node::call(meta.operator, arguments))
    }
}

/// Parse the body of a quantity literal: `["-"] digits ["." digits] [" " unit]`
fn parse_quantity(body: &str, position: usize) -> Result<Quantity> {
    let (number, unit) = match body.split_once(' ') {
        Some((number, unit)) => (number, Some(unit)),
        None => (body, None),
    };

    if !is_decimal(number) {
        return Err(Error::SyntaxError(format!(
            "Invalid quantity literal '{}' at position {}: expected a decimal number",
            body, position
        )));
    }
    let magnitude = number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            Error::SyntaxError(format!(
                "Number '{}' at position {} is out of range",
                number, position
            ))
        })?;

    let unit = match unit {
        Some("") => {
            return Err(Error::SyntaxError(format!(
                "Missing unit after space in quantity literal at position {}",
                position
            )))
        }
        Some(text) => Unit::Atomic(text.to_string()),
        None => Unit::None,
    };

    Ok(Quantity::new(magnitude, unit))
}

/// `["-"] digits ["." digits]`
fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(integer) && fraction.map_or(true, all_digits)
}

/// Parse `input` with default options.
pub fn parse(input: &str) -> Result<Node> {
    Parser::new(input.to_string()).parse()
}
