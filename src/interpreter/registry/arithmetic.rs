use tracing::warn;

use super::{BinaryOperator, Operation, OperatorDescriptor, UnaryOperator};
use crate::util::num::report_overflow;

operator_table! {
    OPERATORS {
        "+" => { priority: 0, operation: Operation::Binary(BinaryOperator::Add) },
        "-" => { priority: 0, operation: Operation::Binary(BinaryOperator::Sub) },
        "*" => { priority: 1, operation: Operation::Binary(BinaryOperator::Mul) },
        "/" => { priority: 1, operation: Operation::Binary(BinaryOperator::Div) },
        "%" => { priority: 1, operation: Operation::Binary(BinaryOperator::Mod) },
        "~" => { priority: 2, operation: Operation::Unary(UnaryOperator::Negate) },
        "^" => { priority: 3, operation: Operation::Binary(BinaryOperator::Pow) },
    }
}

pub fn add(left: i64, right: i64) -> i64 {
    report_overflow(left.overflowing_add(right), "+")
}

pub fn sub(left: i64, right: i64) -> i64 {
    report_overflow(left.overflowing_sub(right), "-")
}

pub fn mul(left: i64, right: i64) -> i64 {
    report_overflow(left.overflowing_mul(right), "*")
}

/// Integer division truncating towards zero.
///
/// Dividing by zero does not fail the line: a warning is logged and `0` is
/// returned instead.
///
/// # Example
/// ```
/// use infixer::interpreter::registry::arithmetic::div;
///
/// assert_eq!(div(7, 2), 3);
/// assert_eq!(div(-7, 2), -3);
/// assert_eq!(div(5, 0), 0);
/// ```
pub fn div(left: i64, right: i64) -> i64 {
    if right == 0 {
        warn!(left, "division by zero, substituting 0");
        return 0;
    }
    report_overflow(left.overflowing_div(right), "/")
}

/// Remainder with the sign of the dividend; `x % 0` is `0` with a warning.
pub fn rem(left: i64, right: i64) -> i64 {
    if right == 0 {
        warn!(left, "modulus by zero, substituting 0");
        return 0;
    }
    report_overflow(left.overflowing_rem(right), "%")
}

/// Raises `base` to a non-negative `exponent` by repeated squaring.
///
/// Negative exponents have no integer result; they log a warning and yield
/// `0`.
///
/// # Example
/// ```
/// use infixer::interpreter::registry::arithmetic::pow;
///
/// assert_eq!(pow(2, 10), 1024);
/// assert_eq!(pow(-3, 3), -27);
/// assert_eq!(pow(7, 0), 1);
/// assert_eq!(pow(2, -1), 0);
/// ```
pub fn pow(base: i64, exponent: i64) -> i64 {
    if exponent < 0 {
        warn!(base, exponent, "negative exponent is not supported, substituting 0");
        return 0;
    }

    let mut result: i64 = 1;
    let mut base = base;
    let mut exponent = exponent;
    let mut overflowed = false;

    while exponent > 0 {
        if exponent & 1 == 1 {
            let (value, o) = result.overflowing_mul(base);
            result = value;
            overflowed |= o;
        }
        exponent >>= 1;
        if exponent > 0 {
            let (value, o) = base.overflowing_mul(base);
            base = value;
            overflowed |= o;
        }
    }

    report_overflow((result, overflowed), "^")
}

pub fn negate(operand: i64) -> i64 {
    report_overflow(operand.overflowing_neg(), "~")
}
