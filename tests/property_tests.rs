//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use reckon::calculator::{Calculator, Evaluation};
use reckon::core::{format_result, is_operator, AppendOutcome, ExpressionBuffer, Operator, Token};
use reckon::eval::{evaluate, EvalError};
use reckon::history::{HistoryStore, MemoryStore, DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY};

fn arbitrary_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        4 => (0..10u8).prop_map(Token::Digit),
        2 => prop::sample::select(Operator::ALL.to_vec()).prop_map(Token::Operator),
        1 => Just(Token::Point),
        1 => Just(Token::Percent),
        1 => Just(Token::Paren),
    ]
}

prop_compose! {
    fn arbitrary_buffer()(
        tokens in prop::collection::vec(arbitrary_token(), 0..24)
    ) -> ExpressionBuffer {
        let mut buffer = ExpressionBuffer::new();
        for token in tokens {
            buffer.append(token);
        }
        buffer
    }
}

proptest! {
    #[test]
    fn buffer_never_holds_consecutive_operators(buffer in arbitrary_buffer()) {
        let chars: Vec<char> = buffer.text().chars().collect();
        for pair in chars.windows(2) {
            prop_assert!(
                !(is_operator(pair[0]) && is_operator(pair[1])),
                "consecutive operators in {:?}",
                buffer.text()
            );
        }
    }

    #[test]
    fn buffer_starts_with_operand_or_unary_minus(buffer in arbitrary_buffer()) {
        if let Some(first) = buffer.text().chars().next() {
            prop_assert!(!is_operator(first) || first == '-');
        }
    }

    #[test]
    fn paren_counter_matches_text(buffer in arbitrary_buffer()) {
        let opens = buffer.text().matches('(').count();
        let closes = buffer.text().matches(')').count();
        prop_assert_eq!(opens - closes, buffer.open_parens());
    }

    #[test]
    fn paren_toggles_balance_counter(count in 0..20usize) {
        let mut buffer = ExpressionBuffer::new();
        for _ in 0..count {
            buffer.append(Token::Paren);
        }
        let opens = buffer.text().matches('(').count();
        let closes = buffer.text().matches(')').count();
        prop_assert_eq!(opens - closes, buffer.open_parens());
    }

    #[test]
    fn backspace_inverts_append(buffer in arbitrary_buffer(), token in arbitrary_token()) {
        let before = buffer.clone();
        let mut after = buffer;

        if after.append(token) == AppendOutcome::Appended {
            after.backspace();
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn rejected_append_leaves_buffer_unchanged(
        buffer in arbitrary_buffer(),
        token in arbitrary_token()
    ) {
        let before = buffer.clone();
        let mut after = buffer;

        if after.append(token) == AppendOutcome::Rejected {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn numeric_runs_hold_at_most_one_point(buffer in arbitrary_buffer()) {
        for run in buffer.text().split(|c: char| is_operator(c) || c == '(' || c == ')') {
            prop_assert!(run.matches('.').count() <= 1, "run {:?}", run);
        }
    }

    #[test]
    fn evaluation_is_finite_or_an_error(buffer in arbitrary_buffer()) {
        match evaluate(buffer.text(), buffer.open_parens()) {
            Ok(value) => prop_assert!(value.is_finite()),
            Err(EvalError::InvalidResult { value }) => prop_assert!(!value.is_finite()),
            Err(EvalError::InvalidExpression(_)) => {}
        }
    }

    #[test]
    fn integer_sums_evaluate_exactly(a in 0..10_000i64, b in 0..10_000i64) {
        let expression = format!("{a}+{b}");
        prop_assert_eq!(evaluate(&expression, 0).unwrap(), (a + b) as f64);
    }

    #[test]
    fn products_respect_precedence(a in 1..100i64, b in 1..100i64, c in 1..100i64) {
        let expression = format!("{a}+{b}×{c}");
        prop_assert_eq!(evaluate(&expression, 0).unwrap(), (a + b * c) as f64);
    }

    #[test]
    fn formatted_results_fit_or_go_scientific(value in -1e30f64..1e30f64) {
        let text = format_result(value);
        prop_assert!(text.chars().count() <= 12 || text.contains('e'), "{}", text);
    }

    #[test]
    fn formatted_integers_have_no_point(value in -99_999_999_999i64..99_999_999_999i64) {
        prop_assert_eq!(format_result(value as f64), value.to_string());
    }

    #[test]
    fn history_is_bounded_and_newest_first(count in 0..10usize) {
        let mut history = HistoryStore::new(MemoryStore::new());
        for i in 0..count {
            history.record(format!("{i}+0"), i.to_string()).unwrap();
        }

        let entries = history.get_all();
        prop_assert_eq!(entries.len(), count.min(DEFAULT_HISTORY_CAPACITY));
        for (offset, entry) in entries.iter().enumerate() {
            prop_assert_eq!(&entry.result, &(count - 1 - offset).to_string());
        }
    }

    #[test]
    fn arbitrary_stored_blob_never_errors(blob in ".*") {
        let history = HistoryStore::new(MemoryStore::new().with_value(DEFAULT_HISTORY_KEY, blob));
        prop_assert!(history.get_all().len() <= DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn session_always_recovers(tokens in prop::collection::vec(arbitrary_token(), 0..16)) {
        let mut calculator = Calculator::new(MemoryStore::new());
        for token in tokens {
            calculator.append(token);
        }

        match calculator.evaluate() {
            Evaluation::Skipped | Evaluation::Computed { .. } => {}
            Evaluation::Failed(_) => {
                prop_assert!(calculator.buffer().is_empty());
                prop_assert_eq!(calculator.buffer().open_parens(), 0);
                prop_assert!(calculator.history().is_empty());
            }
        }
        prop_assert!(calculator.history().len() <= 1);
    }
}
