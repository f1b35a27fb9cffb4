//! Reader for rendered unit text.
//!
//! Accepts exactly what [`Unit`]'s `Display` produces, plus `*` as a product
//! separator. `/` binds loosest, `·` tighter, both left-associative.
//! Parenthesised groups may carry an integer exponent. Whitespace around
//! operators is ignored; inside a symbol it is kept, so `sq ft` stays one
//! opaque atom.

use crate::error::{Error, Result};
use crate::unit::Unit;

const MAX_NESTING: usize = 64;

pub(crate) fn parse(text: &str) -> Result<Unit> {
    let src = text.trim();
    if src.is_empty() {
        return Ok(Unit::None);
    }

    let mut parser = UnitParser {
        src,
        pos: 0,
        depth: 0,
    };
    let unit = parser.quotient()?;
    if parser.pos < src.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(unit)
}

struct UnitParser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl UnitParser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.bump(c);
        }
    }

    fn error(&self, message: &'static str) -> Error {
        Error::Syntax {
            pos: self.pos,
            message,
        }
    }

    fn expect(&mut self, expected: char, message: &'static str) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump(c);
                Ok(())
            }
            _ => Err(self.error(message)),
        }
    }

    fn quotient(&mut self) -> Result<Unit> {
        let mut unit = self.product()?;
        self.skip_whitespace();
        while self.peek() == Some('/') {
            self.bump('/');
            let denominator = self.product()?;
            unit = Unit::quotient(unit, denominator);
            self.skip_whitespace();
        }
        Ok(unit)
    }

    fn product(&mut self) -> Result<Unit> {
        let mut unit = self.factor()?;
        self.skip_whitespace();
        while let Some(c @ ('·' | '*')) = self.peek() {
            self.bump(c);
            let right = self.factor()?;
            unit = Unit::product(unit, right);
            self.skip_whitespace();
        }
        Ok(unit)
    }

    fn factor(&mut self) -> Result<Unit> {
        self.skip_whitespace();
        match self.peek() {
            Some('√') => {
                self.bump('√');
                self.skip_whitespace();
                self.expect('(', "expected '(' after '√'")?;
                let inner = self.group()?;
                Ok(Unit::root(inner))
            }
            Some('(') => {
                self.bump('(');
                let inner = self.group()?;
                self.skip_whitespace();
                if self.peek() == Some('^') {
                    self.bump('^');
                    self.skip_whitespace();
                    let exponent = self.exponent()?;
                    Ok(Unit::power(inner, exponent))
                } else {
                    Ok(inner)
                }
            }
            Some(c) if is_symbol_char(c) => Ok(self.symbol()),
            Some(_) => Err(self.error("expected unit symbol")),
            None => Err(self.error("unexpected end of unit")),
        }
    }

    /// Body of a parenthesised group, consuming the closing `)`.
    fn group(&mut self) -> Result<Unit> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(self.error("unit nested too deeply"));
        }
        let inner = self.quotient()?;
        self.skip_whitespace();
        self.expect(')', "expected ')'")?;
        self.depth -= 1;
        Ok(inner)
    }

    fn symbol(&mut self) -> Unit {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_symbol_char(c) {
                break;
            }
            self.bump(c);
        }
        Unit::Atomic(self.src[start..self.pos].trim_end().to_string())
    }

    fn exponent(&mut self) -> Result<i32> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump('-');
        }
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump(c);
        }
        self.src[start..self.pos]
            .parse()
            .map_err(|_| Error::Syntax {
                pos: start,
                message: "invalid exponent",
            })
    }
}

fn is_symbol_char(c: char) -> bool {
    !matches!(c, '·' | '*' | '/' | '(' | ')' | '^' | '√')
}
