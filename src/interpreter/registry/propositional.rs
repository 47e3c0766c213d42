use super::{BinaryOperator, Operation, OperatorDescriptor, UnaryOperator};

operator_table! {
    OPERATORS {
        "~"  => { priority: 9, operation: Operation::Unary(UnaryOperator::Not) },
        "&"  => { priority: 8, operation: Operation::Binary(BinaryOperator::And) },
        "|"  => { priority: 7, operation: Operation::Binary(BinaryOperator::Or) },
        "->" => { priority: 6, operation: Operation::Binary(BinaryOperator::Implication) },
        "+>" => { priority: 5, operation: Operation::Binary(BinaryOperator::Coimplication) },
        "<>" => { priority: 4, operation: Operation::Binary(BinaryOperator::Xor) },
        "!"  => { priority: 3, operation: Operation::Binary(BinaryOperator::Sheffer) },
        "?"  => { priority: 2, operation: Operation::Binary(BinaryOperator::Webb) },
        "="  => { priority: 1, operation: Operation::Binary(BinaryOperator::Equivalence) },
    }
}

// Any non-zero operand is true; results are always 0 or 1.
const fn truth(value: i64) -> bool {
    value != 0
}

fn bit(value: bool) -> i64 {
    i64::from(value)
}

pub fn not(operand: i64) -> i64 {
    bit(!truth(operand))
}

pub fn and(left: i64, right: i64) -> i64 {
    bit(truth(left) && truth(right))
}

pub fn or(left: i64, right: i64) -> i64 {
    bit(truth(left) || truth(right))
}

pub fn implication(left: i64, right: i64) -> i64 {
    bit(!truth(left) || truth(right))
}

/// Negated implication: `a +> b` holds only when `a` is true and `b` false.
pub fn coimplication(left: i64, right: i64) -> i64 {
    bit(truth(left) && !truth(right))
}

pub fn xor(left: i64, right: i64) -> i64 {
    bit(truth(left) != truth(right))
}

pub fn equivalence(left: i64, right: i64) -> i64 {
    bit(truth(left) == truth(right))
}

pub fn sheffer(left: i64, right: i64) -> i64 {
    bit(!(truth(left) && truth(right)))
}

pub fn webb(left: i64, right: i64) -> i64 {
    bit(!(truth(left) || truth(right)))
}
