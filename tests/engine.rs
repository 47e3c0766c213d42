use infixer::{
    error::LineError,
    grammar::Grammar,
    interpreter::{
        converter::to_postfix,
        evaluator::{Bindings, evaluate_bound},
        postfix::Postfix,
        registry::{Arity, Registry},
        truth_table::enumerate,
    },
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn calculate(infix: &str) -> Result<(String, i64), LineError> {
    let registry = Registry::build(Grammar::Arithmetic);
    let postfix = to_postfix(infix, &registry)?;
    let value = evaluate_bound(&postfix, &registry, &Bindings::new())?;
    Ok((postfix.to_string(), value))
}

/// Operand depth left after running `postfix`: operands push one value, an
/// operator pops its arity and pushes its result.
fn final_depth(postfix: &Postfix, registry: &Registry) -> i64 {
    postfix.tokens().fold(0, |depth, token| match registry.get(token).map(|op| op.arity()) {
                        Some(Arity::Unary) => depth,
                        Some(Arity::Binary) => depth - 1,
                        None => depth + 1,
                    })
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(calculate("3 + 4 * 2"), Ok(("3 4 2 * +".to_string(), 11)));
}

#[test]
fn parentheses_override_priority() {
    assert_eq!(calculate("(3 + 4) * 2"), Ok(("3 4 + 2 *".to_string(), 14)));
}

#[test]
fn division_by_zero_yields_zero() {
    assert_eq!(calculate("5 / 0"), Ok(("5 0 /".to_string(), 0)));
    assert_eq!(calculate("7 % (2 - 2)"), Ok(("7 2 2 - %".to_string(), 0)));
}

#[test]
fn unbalanced_braces_are_rejected() {
    assert_eq!(calculate("(3 + 4"), Err(LineError::InvalidBraces));
    assert_eq!(calculate("3 + 4)"), Err(LineError::InvalidBraces));
}

#[test]
fn conjunction_truth_table() {
    let registry = Registry::build(Grammar::Propositional);
    let postfix = to_postfix("a & b", &registry).unwrap();
    let table = enumerate(&postfix, &registry).unwrap();

    assert_eq!(table.variables(), ["a".to_string(), "b".to_string()]);
    let rows: Vec<_> = table.rows()
                            .iter()
                            .map(|row| (row.assignment.clone(), row.result))
                            .collect();
    assert_eq!(rows,
               vec![(vec![false, false], false),
                    (vec![true, false], false),
                    (vec![false, true], false),
                    (vec![true, true], true)]);
}

#[test]
fn propositional_literals_are_bits() {
    let registry = Registry::build(Grammar::Propositional);
    let postfix = to_postfix("a & 2", &registry).unwrap();
    assert_eq!(enumerate(&postfix, &registry).unwrap_err(),
               LineError::InvalidOperand { token: "2".to_string() });
}

#[test]
fn multi_character_connectives() {
    let registry = Registry::build(Grammar::Propositional);
    let postfix = to_postfix("~a -> b <> c", &registry).unwrap();
    assert_eq!(postfix.to_string(), "a ~ b -> c <>");
    assert_eq!(enumerate(&postfix, &registry).unwrap().rows().len(), 8);
}

#[derive(Debug, Clone)]
enum Expr {
    Literal(i64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn value(&self) -> i64 {
        match self {
            Self::Literal(value) => *value,
            Self::Add(l, r) => l.value().wrapping_add(r.value()),
            Self::Sub(l, r) => l.value().wrapping_sub(r.value()),
            Self::Mul(l, r) => l.value().wrapping_mul(r.value()),
        }
    }

    /// Every binary node in one pair of parentheses, or `extra` more pairs.
    fn render(&self, extra: usize) -> String {
        let (l, op, r) = match self {
            Self::Literal(value) => return value.to_string(),
            Self::Add(l, r) => (l, '+', r),
            Self::Sub(l, r) => (l, '-', r),
            Self::Mul(l, r) => (l, '*', r),
        };
        let open = "(".repeat(extra + 1);
        let close = ")".repeat(extra + 1);
        format!("{open}{} {op} {}{close}", l.render(extra), r.render(extra))
    }
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = (0i64..50).prop_map(Expr::Literal);
    leaf.prop_recursive(5, 32, 2, |inner| {
            prop_oneof![(inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Add(Box::new(l), Box::new(r))),
                        (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Sub(Box::new(l), Box::new(r))),
                        (inner.clone(), inner).prop_map(|(l, r)| Expr::Mul(Box::new(l), Box::new(r))),]
        })
}

#[derive(Debug, Clone)]
enum Prop {
    Bit(bool),
    Not(Box<Prop>),
    And(Box<Prop>, Box<Prop>),
    Or(Box<Prop>, Box<Prop>),
}

impl Prop {
    fn value(&self) -> bool {
        match self {
            Self::Bit(bit) => *bit,
            Self::Not(p) => !p.value(),
            Self::And(l, r) => l.value() && r.value(),
            Self::Or(l, r) => l.value() || r.value(),
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Bit(bit) => u8::from(*bit).to_string(),
            Self::Not(p) => format!("(~{})", p.render()),
            Self::And(l, r) => format!("({} & {})", l.render(), r.render()),
            Self::Or(l, r) => format!("({} | {})", l.render(), r.render()),
        }
    }
}

fn prop_strategy() -> impl Strategy<Value = Prop> {
    any::<bool>().prop_map(Prop::Bit).prop_recursive(5, 32, 2, |inner| {
                                         prop_oneof![inner.clone().prop_map(|p| Prop::Not(Box::new(p))),
                                                     (inner.clone(), inner.clone()).prop_map(|(l, r)| {
                                                         Prop::And(Box::new(l), Box::new(r))
                                                     }),
                                                     (inner.clone(), inner).prop_map(|(l, r)| {
                                                         Prop::Or(Box::new(l), Box::new(r))
                                                     }),]
                                     })
}

proptest! {
    #[test]
    fn parenthesized_arithmetic_round_trips(expr in expr_strategy()) {
        let (_, value) = calculate(&expr.render(0)).unwrap();
        prop_assert_eq!(value, expr.value());
    }

    #[test]
    fn redundant_parentheses_change_nothing(expr in expr_strategy()) {
        let plain = calculate(&expr.render(0)).unwrap();
        let padded = calculate(&expr.render(2)).unwrap();
        prop_assert_eq!(plain, padded);
    }

    #[test]
    fn valid_postfix_leaves_one_operand(expr in expr_strategy()) {
        let registry = Registry::build(Grammar::Arithmetic);
        let postfix = to_postfix(&expr.render(0), &registry).unwrap();
        prop_assert_eq!(final_depth(&postfix, &registry), 1);
    }

    #[test]
    fn parenthesized_logic_round_trips(prop in prop_strategy()) {
        let registry = Registry::build(Grammar::Propositional);
        let postfix = to_postfix(&prop.render(), &registry).unwrap();
        prop_assert_eq!(final_depth(&postfix, &registry), 1);

        let table = enumerate(&postfix, &registry).unwrap();
        prop_assert_eq!(table.rows().len(), 1);
        prop_assert_eq!(table.rows()[0].result, prop.value());
    }

    #[test]
    fn tables_cover_every_assignment(count in 1usize..8) {
        let registry = Registry::build(Grammar::Propositional);
        let infix = (0..count).map(|i| format!("v{i}")).collect::<Vec<_>>().join(" | ");
        let table = enumerate(&to_postfix(&infix, &registry).unwrap(), &registry).unwrap();

        prop_assert_eq!(table.rows().len(), 1 << count);
        let mut seen: Vec<_> = table.rows().iter().map(|row| row.assignment.clone()).collect();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), 1 << count);
    }
}
