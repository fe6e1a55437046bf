//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use calcpad::core::{format_number, parse_float, BinaryOperator, EntryToken};
use calcpad::engine::Calculator;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(digit in 0..10u8) -> EntryToken {
        EntryToken::ALL[digit as usize]
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> BinaryOperator {
        match variant {
            0 => BinaryOperator::Add,
            1 => BinaryOperator::Subtract,
            2 => BinaryOperator::Multiply,
            _ => BinaryOperator::Divide,
        }
    }
}

fn type_number(calc: &mut Calculator, n: u32) {
    for c in n.to_string().chars() {
        if let Some(token) = EntryToken::from_char(c) {
            calc.enter_digit_or_decimal(token);
        }
    }
}

proptest! {
    #[test]
    fn typed_digits_concatenate(digits in prop::collection::vec(arbitrary_digit(), 1..=15)) {
        let mut calc = Calculator::new();
        calc.clear_all();
        for token in &digits {
            calc.enter_digit_or_decimal(*token);
        }

        let expected: String = digits.iter().map(|t| t.as_char()).collect();
        prop_assert_eq!(calc.display(), expected.as_str());
    }

    #[test]
    fn entry_is_capped_at_fifteen_characters(
        digits in prop::collection::vec(arbitrary_digit(), 15..=15),
        extra in prop::collection::vec(arbitrary_digit(), 1..10)
    ) {
        let mut calc = Calculator::new();
        for token in &digits {
            calc.enter_digit_or_decimal(*token);
        }
        let full = calc.display().to_string();

        for token in &extra {
            calc.enter_digit_or_decimal(*token);
        }
        prop_assert_eq!(calc.display(), full.as_str());
        prop_assert_eq!(calc.display().len(), 15);
    }

    #[test]
    fn evaluate_without_pending_operator_is_noop(
        digits in prop::collection::vec(arbitrary_digit(), 0..8)
    ) {
        let mut calc = Calculator::new();
        for token in &digits {
            calc.enter_digit_or_decimal(*token);
        }
        let before = calc.state().clone();

        prop_assert_eq!(calc.evaluate(), None);

        let after = calc.state();
        prop_assert_eq!(&after.entry, &before.entry);
        prop_assert_eq!(after.awaiting_new_entry, before.awaiting_new_entry);
        prop_assert_eq!(after.pending_operator, before.pending_operator);
        prop_assert_eq!(after.history.len(), 0);
    }

    #[test]
    fn binary_result_matches_float_arithmetic(
        lhs in 0..100_000u32,
        rhs in 0..100_000u32,
        operator in arbitrary_operator()
    ) {
        let mut calc = Calculator::new();
        type_number(&mut calc, lhs);
        calc.select_operator(operator);
        type_number(&mut calc, rhs);
        calc.evaluate();

        let expected = format_number(operator.apply(lhs as f64, rhs as f64));
        prop_assert_eq!(calc.display(), expected.as_str());
    }

    #[test]
    fn chained_operators_fold_left(operands in prop::collection::vec(0..1000u32, 2..8)) {
        let mut calc = Calculator::new();
        type_number(&mut calc, operands[0]);
        for operand in &operands[1..] {
            calc.select_operator(BinaryOperator::Add);
            type_number(&mut calc, *operand);
        }
        calc.evaluate();

        let total: u32 = operands.iter().sum();
        prop_assert_eq!(calc.display(), total.to_string());
    }

    #[test]
    fn history_holds_at_most_five_newest_first(count in 1..20usize) {
        let mut calc = Calculator::new();
        for i in 1..=count {
            type_number(&mut calc, i as u32);
            calc.select_operator(BinaryOperator::Add);
            type_number(&mut calc, 0);
            calc.evaluate();
        }

        let lines = calc.state().history.lines();
        prop_assert_eq!(lines.len(), count.min(5));
        prop_assert_eq!(&lines[0], &format!("{count} + 0 = {count}"));
    }

    #[test]
    fn formatted_numbers_parse_back(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        prop_assert_eq!(parse_float(&format_number(value)), value);
    }

    #[test]
    fn memory_clear_always_recalls_zero(digits in prop::collection::vec(arbitrary_digit(), 1..10)) {
        let mut calc = Calculator::new();
        for token in &digits {
            calc.enter_digit_or_decimal(*token);
        }
        calc.memory_add();
        calc.memory_clear();
        calc.memory_recall();
        prop_assert_eq!(calc.display(), "0");
    }
}
