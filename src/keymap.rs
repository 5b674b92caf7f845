//! Keyboard mapping for front ends that deliver key names.
//!
//! Key names follow the DOM `KeyboardEvent.key` convention (`"7"`, `"+"`,
//! `"Enter"`, `"Backspace"`, `"Escape"`), which terminal front ends can
//! mimic easily.

use crate::calculator::Input;
use crate::core::{Operator, Token};

/// Translate a key name into a calculator command.
///
/// ASCII `*` and `/` map to the display glyphs `×` and `÷`, and the
/// comma is accepted as a decimal point for locales that use it. Either
/// parenthesis key toggles. Unknown keys return `None`.
///
/// # Example
///
/// ```rust
/// use reckon::calculator::Input;
/// use reckon::core::{Operator, Token};
/// use reckon::keymap::map_key;
///
/// assert_eq!(map_key("*"), Some(Input::Token(Token::Operator(Operator::Multiply))));
/// assert_eq!(map_key(","), Some(Input::Token(Token::Point)));
/// assert_eq!(map_key("Enter"), Some(Input::Evaluate));
/// assert_eq!(map_key("Tab"), None);
/// ```
pub fn map_key(key: &str) -> Option<Input> {
    match key {
        "Enter" | "=" => return Some(Input::Evaluate),
        "Backspace" => return Some(Input::Backspace),
        "Escape" => return Some(Input::Clear),
        _ => {}
    }

    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    let token = match c {
        '0'..='9' => Token::digit(c.to_digit(10)? as u8)?,
        '.' | ',' => Token::Point,
        '(' | ')' => Token::Paren,
        '%' => Token::Percent,
        other => Token::Operator(Operator::from_char(other)?),
    };
    Some(Input::Token(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_digit_tokens() {
        for d in 0..=9u8 {
            assert_eq!(
                map_key(&d.to_string()),
                Some(Input::Token(Token::Digit(d)))
            );
        }
    }

    #[test]
    fn operators_map_to_glyphs() {
        assert_eq!(
            map_key("+"),
            Some(Input::Token(Token::Operator(Operator::Add)))
        );
        assert_eq!(
            map_key("-"),
            Some(Input::Token(Token::Operator(Operator::Subtract)))
        );
        assert_eq!(
            map_key("/"),
            Some(Input::Token(Token::Operator(Operator::Divide)))
        );
        assert_eq!(
            map_key("×"),
            Some(Input::Token(Token::Operator(Operator::Multiply)))
        );
    }

    #[test]
    fn both_parens_toggle() {
        assert_eq!(map_key("("), Some(Input::Token(Token::Paren)));
        assert_eq!(map_key(")"), Some(Input::Token(Token::Paren)));
    }

    #[test]
    fn point_and_comma_are_decimal_points() {
        assert_eq!(map_key("."), Some(Input::Token(Token::Point)));
        assert_eq!(map_key(","), Some(Input::Token(Token::Point)));
    }

    #[test]
    fn commands_map() {
        assert_eq!(map_key("="), Some(Input::Evaluate));
        assert_eq!(map_key("Enter"), Some(Input::Evaluate));
        assert_eq!(map_key("Backspace"), Some(Input::Backspace));
        assert_eq!(map_key("Escape"), Some(Input::Clear));
        assert_eq!(map_key("%"), Some(Input::Token(Token::Percent)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        for key in ["", "a", "Shift", "12", "^", "e"] {
            assert_eq!(map_key(key), None, "{key:?} should not map");
        }
    }
}
