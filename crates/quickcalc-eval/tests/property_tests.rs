//! Property tests: well-formed expressions evaluate to the arithmetic
//! result, and evaluation never depends on anything but its input.

use proptest::prelude::*;
use quickcalc_eval::{evaluate, try_evaluate, ErrorKind};

fn operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("x"), Just("X"), Just("/")]
}

fn expected(left: f64, symbol: &str, right: f64) -> f64 {
    match symbol {
        "+" => left + right,
        "-" => left - right,
        "/" => left / right,
        _ => left * right,
    }
}

proptest! {
    #[test]
    fn well_formed_expressions_evaluate(
        left in -1.0e6f64..1.0e6,
        symbol in operator(),
        right in -1.0e6f64..1.0e6,
    ) {
        prop_assume!(symbol != "/" || right != 0.0);
        let input = format!("{left} {symbol} {right}");
        let value = evaluate(Some(&input)).unwrap();
        prop_assert!((value - expected(left, symbol, right)).abs() <= 1e-6, "{input} = {value}");
    }

    #[test]
    fn integer_division_by_zero_always_rejected(left in any::<i64>()) {
        let err = evaluate(Some(&format!("{left} / 0"))).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::DivideByZero);
    }

    #[test]
    fn grouped_integers_match_plain(n in 0u64..1_000_000_000_000) {
        let plain = n.to_string();
        let mut grouped = String::new();
        for (i, ch) in plain.chars().enumerate() {
            if i > 0 && (plain.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let a = evaluate(Some(&format!("{plain} + 0"))).unwrap();
        let b = evaluate(Some(&format!("{grouped} + 0"))).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn evaluation_is_idempotent(input in "\\PC{0,24}") {
        let first = try_evaluate(Some(&input));
        let second = try_evaluate(Some(&input));
        prop_assert_eq!(first.success, second.success);
        prop_assert_eq!(first.value.to_bits(), second.value.to_bits());
        prop_assert_eq!(first.message, second.message);
    }
}
