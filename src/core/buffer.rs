//! The in-progress expression and its parenthesis counter.
//!
//! Every input event mutates the buffer through [`ExpressionBuffer::append`],
//! [`ExpressionBuffer::backspace`] or [`ExpressionBuffer::clear`]. The
//! append rules keep the expression well-formed enough to type naturally:
//! no doubled operators, one decimal point per number, and a paren key that
//! opens or closes a group depending on context.

use super::token::{is_operator, Token};
use serde::{Deserialize, Serialize};

/// What an [`ExpressionBuffer::append`] call did to the buffer.
///
/// Anything other than `Rejected` changed the text, so the caller
/// should refresh its display.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppendOutcome {
    /// One character was pushed onto the end.
    Appended,
    /// The trailing operator was swapped for a different one.
    Replaced,
    /// The token was ignored; the buffer is unchanged.
    Rejected,
}

impl AppendOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Expression text in display form plus the count of unmatched `(`.
///
/// The counter is kept in lockstep with the text: every `(` appended or
/// `)` removed increments it, every `)` appended or `(` removed
/// decrements it.
///
/// # Example
///
/// ```rust
/// use reckon::core::{ExpressionBuffer, Operator, Token};
///
/// let mut buffer = ExpressionBuffer::new();
/// buffer.append(Token::Paren);
/// buffer.append(Token::Digit(1));
/// buffer.append(Token::Operator(Operator::Add));
/// buffer.append(Token::Digit(1));
///
/// assert_eq!(buffer.text(), "(1+1");
/// assert_eq!(buffer.open_parens(), 1);
///
/// buffer.append(Token::Paren);
/// assert_eq!(buffer.text(), "(1+1)");
/// assert_eq!(buffer.open_parens(), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ExpressionBuffer {
    text: String,
    open_parens: usize,
}

impl ExpressionBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding a previous result, ready for chaining.
    ///
    /// The seed is taken verbatim and the paren counter starts at zero.
    pub fn seeded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            open_parens: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn open_parens(&self) -> usize {
        self.open_parens
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn last_char(&self) -> Option<char> {
        self.text.chars().last()
    }

    /// Apply one input token, enforcing the append rules.
    pub fn append(&mut self, token: Token) -> AppendOutcome {
        match token {
            Token::Paren => self.toggle_paren(),
            Token::Percent => self.push_percent(),
            Token::Operator(op) => self.push_operator(op.glyph()),
            Token::Point => self.push_point(),
            Token::Digit(_) => match token.as_char() {
                Some(c) => self.push(c),
                None => AppendOutcome::Rejected,
            },
        }
    }

    /// Remove the last character, keeping the paren counter consistent.
    ///
    /// Returns `false` when the buffer was already empty.
    pub fn backspace(&mut self) -> bool {
        match self.text.pop() {
            Some('(') => {
                self.open_parens = self.open_parens.saturating_sub(1);
                true
            }
            Some(')') => {
                self.open_parens += 1;
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.open_parens = 0;
    }

    /// Hand over the text and paren counter, leaving the buffer empty.
    pub fn take(&mut self) -> (String, usize) {
        let open_parens = std::mem::take(&mut self.open_parens);
        (std::mem::take(&mut self.text), open_parens)
    }

    fn push(&mut self, c: char) -> AppendOutcome {
        self.text.push(c);
        AppendOutcome::Appended
    }

    fn toggle_paren(&mut self) -> AppendOutcome {
        let open = match self.last_char() {
            None => true,
            Some(c) if c == '(' || is_operator(c) => true,
            // Close only when there is something to close
            Some(_) => self.open_parens == 0,
        };

        if open {
            self.open_parens += 1;
            self.push('(')
        } else {
            self.open_parens -= 1;
            self.push(')')
        }
    }

    fn push_percent(&mut self) -> AppendOutcome {
        match self.last_char() {
            Some(c) if !is_operator(c) && c != '%' => self.push('%'),
            _ => AppendOutcome::Rejected,
        }
    }

    fn push_operator(&mut self, glyph: char) -> AppendOutcome {
        match self.last_char() {
            None if glyph == '-' => self.push(glyph),
            None => AppendOutcome::Rejected,
            Some(last) if last == glyph => AppendOutcome::Rejected,
            Some(last) if is_operator(last) => {
                // A lone unary minus may only be followed by an operand
                if self.text.len() == last.len_utf8() && glyph != '-' {
                    return AppendOutcome::Rejected;
                }
                self.text.pop();
                self.text.push(glyph);
                AppendOutcome::Replaced
            }
            Some(_) => self.push(glyph),
        }
    }

    fn push_point(&mut self) -> AppendOutcome {
        if numeric_run(&self.text).contains('.') {
            AppendOutcome::Rejected
        } else {
            self.push('.')
        }
    }
}

/// The number currently being typed: everything after the last operator
/// or parenthesis.
///
/// ```rust
/// use reckon::core::numeric_run;
///
/// assert_eq!(numeric_run("12+3.5"), "3.5");
/// assert_eq!(numeric_run("(4×"), "");
/// assert_eq!(numeric_run("7%"), "7%");
/// ```
pub fn numeric_run(text: &str) -> &str {
    text.rsplit(|c: char| is_operator(c) || c == '(' || c == ')')
        .next()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::Operator;

    fn typed(tokens: &[Token]) -> ExpressionBuffer {
        let mut buffer = ExpressionBuffer::new();
        for token in tokens {
            buffer.append(*token);
        }
        buffer
    }

    const ADD: Token = Token::Operator(Operator::Add);
    const SUB: Token = Token::Operator(Operator::Subtract);
    const MUL: Token = Token::Operator(Operator::Multiply);
    const DIV: Token = Token::Operator(Operator::Divide);

    #[test]
    fn new_buffer_is_empty() {
        let buffer = ExpressionBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.open_parens(), 0);
    }

    #[test]
    fn digits_append_verbatim() {
        let buffer = typed(&[Token::Digit(1), Token::Digit(2), Token::Digit(0)]);
        assert_eq!(buffer.text(), "120");
    }

    #[test]
    fn leading_binary_operator_is_ignored() {
        for op in [ADD, MUL, DIV] {
            let mut buffer = ExpressionBuffer::new();
            assert_eq!(buffer.append(op), AppendOutcome::Rejected);
            assert!(buffer.is_empty());
        }
    }

    #[test]
    fn leading_unary_minus_is_accepted() {
        let buffer = typed(&[SUB, Token::Digit(5)]);
        assert_eq!(buffer.text(), "-5");
    }

    #[test]
    fn lone_minus_is_not_replaced_by_binary_operator() {
        let mut buffer = typed(&[SUB]);
        assert_eq!(buffer.append(MUL), AppendOutcome::Rejected);
        assert_eq!(buffer.text(), "-");
    }

    #[test]
    fn consecutive_operator_replaces_previous() {
        let mut buffer = typed(&[Token::Digit(3), ADD]);
        assert_eq!(buffer.append(MUL), AppendOutcome::Replaced);
        assert_eq!(buffer.text(), "3×");

        assert_eq!(buffer.append(MUL), AppendOutcome::Rejected);
        assert_eq!(buffer.text(), "3×");
    }

    #[test]
    fn second_point_in_same_number_is_rejected() {
        let mut buffer = typed(&[Token::Digit(1), Token::Point, Token::Digit(5)]);
        assert_eq!(buffer.append(Token::Point), AppendOutcome::Rejected);
        assert_eq!(buffer.text(), "1.5");
    }

    #[test]
    fn point_allowed_again_after_operator() {
        let buffer = typed(&[
            Token::Digit(1),
            Token::Point,
            Token::Digit(5),
            ADD,
            Token::Point,
            Token::Digit(2),
        ]);
        assert_eq!(buffer.text(), "1.5+.2");
    }

    #[test]
    fn point_allowed_after_paren() {
        let buffer = typed(&[Token::Digit(1), Token::Point, MUL, Token::Paren, Token::Point]);
        assert_eq!(buffer.text(), "1.×(.");
    }

    #[test]
    fn percent_requires_an_operand() {
        let mut buffer = ExpressionBuffer::new();
        assert_eq!(buffer.append(Token::Percent), AppendOutcome::Rejected);

        let mut buffer = typed(&[Token::Digit(5), ADD]);
        assert_eq!(buffer.append(Token::Percent), AppendOutcome::Rejected);
        assert_eq!(buffer.text(), "5+");
    }

    #[test]
    fn percent_is_not_repeatable() {
        let mut buffer = typed(&[Token::Digit(5), Token::Percent]);
        assert_eq!(buffer.text(), "5%");
        assert_eq!(buffer.append(Token::Percent), AppendOutcome::Rejected);
        assert_eq!(buffer.text(), "5%");
    }

    #[test]
    fn paren_opens_on_empty_buffer() {
        let buffer = typed(&[Token::Paren]);
        assert_eq!(buffer.text(), "(");
        assert_eq!(buffer.open_parens(), 1);
    }

    #[test]
    fn paren_opens_after_operator_and_open_paren() {
        let buffer = typed(&[Token::Digit(2), MUL, Token::Paren, Token::Paren]);
        assert_eq!(buffer.text(), "2×((");
        assert_eq!(buffer.open_parens(), 2);
    }

    #[test]
    fn paren_closes_after_operand_when_group_is_open() {
        let buffer = typed(&[Token::Paren, Token::Digit(4), Token::Paren]);
        assert_eq!(buffer.text(), "(4)");
        assert_eq!(buffer.open_parens(), 0);
    }

    #[test]
    fn paren_opens_after_operand_when_balanced() {
        let buffer = typed(&[Token::Digit(4), Token::Paren]);
        assert_eq!(buffer.text(), "4(");
        assert_eq!(buffer.open_parens(), 1);
    }

    #[test]
    fn paren_closes_after_percent() {
        let buffer = typed(&[Token::Paren, Token::Digit(5), Token::Percent, Token::Paren]);
        assert_eq!(buffer.text(), "(5%)");
        assert_eq!(buffer.open_parens(), 0);
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut buffer = ExpressionBuffer::new();
        assert!(!buffer.backspace());
        assert_eq!(buffer, ExpressionBuffer::new());
    }

    #[test]
    fn backspace_tracks_parens() {
        let mut buffer = typed(&[Token::Paren, Token::Digit(1), Token::Paren]);
        assert_eq!(buffer.open_parens(), 0);

        buffer.backspace();
        assert_eq!(buffer.text(), "(1");
        assert_eq!(buffer.open_parens(), 1);

        buffer.backspace();
        buffer.backspace();
        assert!(buffer.is_empty());
        assert_eq!(buffer.open_parens(), 0);
    }

    #[test]
    fn backspace_removes_multibyte_glyph() {
        let mut buffer = typed(&[Token::Digit(8), DIV]);
        buffer.backspace();
        assert_eq!(buffer.text(), "8");
    }

    #[test]
    fn clear_resets_text_and_counter() {
        let mut buffer = typed(&[Token::Paren, Token::Paren, Token::Digit(3)]);
        buffer.clear();
        assert_eq!(buffer, ExpressionBuffer::new());
    }

    #[test]
    fn take_empties_buffer() {
        let mut buffer = typed(&[Token::Paren, Token::Digit(9)]);
        let (text, open) = buffer.take();
        assert_eq!(text, "(9");
        assert_eq!(open, 1);
        assert!(buffer.is_empty());
        assert_eq!(buffer.open_parens(), 0);
    }

    #[test]
    fn seeded_buffer_continues_a_chain() {
        let mut buffer = ExpressionBuffer::seeded("-4");
        buffer.append(MUL);
        buffer.append(Token::Digit(2));
        assert_eq!(buffer.text(), "-4×2");
        assert_eq!(buffer.open_parens(), 0);
    }

    #[test]
    fn numeric_run_splits_on_operators_and_parens() {
        assert_eq!(numeric_run(""), "");
        assert_eq!(numeric_run("12"), "12");
        assert_eq!(numeric_run("1+2.5"), "2.5");
        assert_eq!(numeric_run("3×(4"), "4");
        assert_eq!(numeric_run("(4)"), "");
        assert_eq!(numeric_run("6÷"), "");
    }

    #[test]
    fn buffer_serializes_correctly() {
        let buffer = typed(&[Token::Paren, Token::Digit(2), MUL]);
        let json = serde_json::to_string(&buffer).unwrap();
        let deserialized: ExpressionBuffer = serde_json::from_str(&json).unwrap();
        assert_eq!(buffer, deserialized);
    }
}
