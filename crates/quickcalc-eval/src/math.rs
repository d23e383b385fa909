//! Arithmetic helpers usable without going through [`crate::evaluate`].
//!
//! None of these parse input or report recoverable errors.

use quickcalc_types::ErrorKind;

/// `|value|`.
pub fn absolute_value(value: f64) -> f64 {
    value.abs()
}

/// `base` raised to `exponent`.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// `value * value`.
pub fn square(value: f64) -> f64 {
    value * value
}

/// Divide, treating a zero denominator as a broken caller contract.
///
/// Use [`crate::evaluate`] for user input; this is for callers that have
/// already ruled out a zero divisor.
///
/// # Panics
///
/// Panics with `Cannot divide by zero.` if `denominator` is zero
/// (including `-0.0`).
pub fn strict_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        panic!("{}", ErrorKind::DivideByZero.message());
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_value() {
        assert_eq!(absolute_value(-4.5), 4.5);
        assert_eq!(absolute_value(4.5), 4.5);
        assert_eq!(absolute_value(0.0), 0.0);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(9.0, 0.5), 3.0);
        assert_eq!(power(5.0, 0.0), 1.0);
        assert_eq!(power(2.0, -1.0), 0.5);
    }

    #[test]
    fn test_square() {
        assert_eq!(square(3.0), 9.0);
        assert_eq!(square(-3.0), 9.0);
        assert_eq!(square(1.5), 2.25);
    }

    #[test]
    fn test_strict_divide() {
        assert_eq!(strict_divide(7.0, 2.0), 3.5);
        assert_eq!(strict_divide(-9.0, 3.0), -3.0);
    }

    #[test]
    #[should_panic(expected = "Cannot divide by zero.")]
    fn test_strict_divide_by_zero_panics() {
        strict_divide(1.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "Cannot divide by zero.")]
    fn test_strict_divide_by_negative_zero_panics() {
        strict_divide(1.0, -0.0);
    }
}
