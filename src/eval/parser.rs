//! Recursive-descent evaluator for computable arithmetic.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')' | '(' ')'
//! number  := digits with at most one '.'
//! ```
//!
//! Operators of equal precedence associate to the left. Whitespace is
//! skipped between tokens. An empty input or an empty group evaluates to
//! NaN, which the caller reports as an invalid result. Groups and unary
//! signs together may nest at most [`MAX_DEPTH`] levels.

use super::error::SyntaxError;

/// Deepest combined nesting of groups and unary signs.
pub const MAX_DEPTH: usize = 256;

/// Parse and evaluate `input` in one pass.
pub fn evaluate(input: &str) -> Result<f64, SyntaxError> {
    let mut parser = Parser::new(input);
    if parser.at_end() {
        return Ok(f64::NAN);
    }

    let value = parser.expr()?;
    match parser.peek() {
        None => Ok(value),
        Some(found) => Err(parser.unexpected(found)),
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    /// Run `parse` one nesting level deeper.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<f64, SyntaxError>,
    ) -> Result<f64, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let value = parse(self)?;
        self.depth -= 1;
        Ok(value)
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input[self.pos..].chars().next()
    }

    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn unexpected(&self, found: char) -> SyntaxError {
        SyntaxError::UnexpectedChar {
            found,
            position: self.input[..self.pos].chars().count(),
        }
    }

    fn expr(&mut self) -> Result<f64, SyntaxError> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.bump(op);
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, SyntaxError> {
        let mut value = self.unary()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.bump(op);
            let rhs = self.unary()?;
            value = if op == '*' { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, SyntaxError> {
        match self.peek() {
            Some('-') => {
                self.bump('-');
                let value = self.nested(Self::unary)?;
                Ok(-value)
            }
            Some('+') => {
                self.bump('+');
                self.nested(Self::unary)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, SyntaxError> {
        match self.peek() {
            Some('(') => {
                self.bump('(');
                self.nested(Self::group)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(found) => Err(self.unexpected(found)),
            None => Err(SyntaxError::UnexpectedEnd),
        }
    }

    /// The inside of a group, up to and including its `)`.
    fn group(&mut self) -> Result<f64, SyntaxError> {
        if self.peek() == Some(')') {
            self.bump(')');
            return Ok(f64::NAN);
        }
        let value = self.expr()?;
        match self.peek() {
            Some(')') => {
                self.bump(')');
                Ok(value)
            }
            Some(found) => Err(self.unexpected(found)),
            None => Err(SyntaxError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, SyntaxError> {
        let start = self.pos;
        let len = self.input[start..]
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(self.input.len() - start);
        self.pos += len;

        let literal = &self.input[start..self.pos];
        if literal.matches('.').count() > 1 {
            return Err(SyntaxError::MalformedNumber(literal.to_string()));
        }
        literal
            .parse::<f64>()
            .map_err(|_| SyntaxError::MalformedNumber(literal.to_string()))
    }
}
