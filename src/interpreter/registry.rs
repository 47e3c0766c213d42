use std::collections::HashMap;

use crate::grammar::Grammar;

/// Conversion priority of an operator; higher binds tighter.
pub type Priority = i32;

/// Priority of the open-paren sentinel. No regular operator can pop it.
pub const OPEN_PAREN_PRIORITY: Priority = Priority::MIN;

/// Defines a static operator table.
///
/// Each entry provides:
/// - the operator symbol as written in the infix text,
/// - its conversion priority,
/// - the operation it dispatches to during evaluation.
///
/// The table keeps insertion order, which is also the order used when two
/// symbols of the same length match at one position.
macro_rules! operator_table {
    (
        $table:ident {
            $(
                $symbol:literal => {
                    priority: $priority:expr,
                    operation: $operation:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        pub static $table: &[OperatorDescriptor] = &[
            $(
                OperatorDescriptor { symbol: $symbol, priority: $priority, operation: $operation },
            )*
        ];
    };
}

/// Integer operators and their evaluation functions.
///
/// Registers `+ - * / % ^` as binary and `~` as unary negation. Division and
/// modulus by zero substitute `0` after logging a warning; overflow wraps.
pub mod arithmetic;
/// Propositional connectives over `0`/`1`.
///
/// Registers `~` as unary negation and the binary connectives `&`, `|`, `->`,
/// `+>`, `<>`, `!`, `?` and `=`.
pub mod propositional;

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand, written before it in infix: `~a`.
    Unary,
    /// Two operands, written between them in infix: `a + b`.
    Binary,
}

/// Operators that take a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation: `~5 = -5`.
    Negate,
    /// Logical negation: `~1 = 0`.
    Not,
}

/// Operators that take a left and a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating towards zero.
    Div,
    /// `%`, with the sign of the left operand.
    Mod,
    /// `^`, exponentiation by squaring.
    Pow,
    /// `&`, conjunction.
    And,
    /// `|`, disjunction.
    Or,
    /// `->`, implication.
    Implication,
    /// `+>`, co-implication: true only for `1 +> 0`.
    Coimplication,
    /// `<>`, addition modulo 2.
    Xor,
    /// `=`, equivalence.
    Equivalence,
    /// `!`, Sheffer stroke (NAND).
    Sheffer,
    /// `?`, Webb function / Peirce arrow (NOR).
    Webb,
}

/// The behaviour an operator symbol dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A unary operation.
    Unary(UnaryOperator),
    /// A binary operation.
    Binary(BinaryOperator),
}

/// Describes one operator of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    /// The symbol, one or more characters.
    pub symbol:    &'static str,
    /// Conversion priority; higher binds tighter.
    pub priority:  Priority,
    /// What the operator does when evaluated.
    pub operation: Operation,
}

impl OperatorDescriptor {
    /// The number of operands the operator consumes.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.operation {
            Operation::Unary(_) => Arity::Unary,
            Operation::Binary(_) => Arity::Binary,
        }
    }
}

impl UnaryOperator {
    /// Applies the operator to its operand.
    #[must_use]
    pub fn apply(self, operand: i64) -> i64 {
        match self {
            Self::Negate => arithmetic::negate(operand),
            Self::Not => propositional::not(operand),
        }
    }
}

impl BinaryOperator {
    /// Applies the operator as `left op right`.
    ///
    /// # Example
    /// ```
    /// use infixer::interpreter::registry::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7, 2), 5);
    /// assert_eq!(BinaryOperator::Implication.apply(1, 0), 0);
    /// ```
    #[must_use]
    pub fn apply(self, left: i64, right: i64) -> i64 {
        use propositional as logic;

        match self {
            Self::Add => arithmetic::add(left, right),
            Self::Sub => arithmetic::sub(left, right),
            Self::Mul => arithmetic::mul(left, right),
            Self::Div => arithmetic::div(left, right),
            Self::Mod => arithmetic::rem(left, right),
            Self::Pow => arithmetic::pow(left, right),
            Self::And => logic::and(left, right),
            Self::Or => logic::or(left, right),
            Self::Implication => logic::implication(left, right),
            Self::Coimplication => logic::coimplication(left, right),
            Self::Xor => logic::xor(left, right),
            Self::Equivalence => logic::equivalence(left, right),
            Self::Sheffer => logic::sheffer(left, right),
            Self::Webb => logic::webb(left, right),
        }
    }
}

/// Immutable mapping from operator symbol to its descriptor.
///
/// A registry is built once per grammar, before any line is processed, and
/// is only read afterwards: by the lexer (longest symbol match), by the
/// converter (priorities) and by the evaluator (dispatch).
#[derive(Debug, Clone)]
pub struct Registry {
    grammar:   Grammar,
    operators: &'static [OperatorDescriptor],
    index:     HashMap<&'static str, &'static OperatorDescriptor>,
}

impl Registry {
    /// Builds the operator registry for `grammar`.
    ///
    /// # Example
    /// ```
    /// use infixer::{grammar::Grammar, interpreter::registry::{Arity, Registry}};
    ///
    /// let registry = Registry::build(Grammar::Arithmetic);
    /// assert_eq!(registry.get("~").map(|op| op.arity()), Some(Arity::Unary));
    /// assert!(registry.get("&").is_none());
    /// ```
    #[must_use]
    pub fn build(grammar: Grammar) -> Self {
        let operators = match grammar {
            Grammar::Arithmetic => arithmetic::OPERATORS,
            Grammar::Propositional => propositional::OPERATORS,
        };
        let index = operators.iter().map(|op| (op.symbol, op)).collect();

        Self { grammar,
               operators,
               index }
    }

    /// The grammar this registry was built for.
    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Looks up an operator by its exact symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&'static OperatorDescriptor> {
        self.index.get(symbol).copied()
    }

    /// Returns `true` if `symbol` is a registered operator.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Priority of `symbol`, or `None` when it is not an operator.
    #[must_use]
    pub fn priority(&self, symbol: &str) -> Option<Priority> {
        self.get(symbol).map(|op| op.priority)
    }

    /// All operators in registration order.
    pub fn operators(&self) -> impl Iterator<Item = &'static OperatorDescriptor> + '_ {
        self.operators.iter()
    }

    /// Finds the longest operator symbol that `text` starts with.
    ///
    /// Returns the matching descriptor, or `None` when no operator starts at
    /// the beginning of `text`. On equal lengths the earlier registration wins.
    ///
    /// # Example
    /// ```
    /// use infixer::{grammar::Grammar, interpreter::registry::Registry};
    ///
    /// let registry = Registry::build(Grammar::Propositional);
    /// assert_eq!(registry.match_operator("->b").map(|op| op.symbol), Some("->"));
    /// assert!(registry.match_operator("-b").is_none());
    /// ```
    #[must_use]
    pub fn match_operator(&self, text: &str) -> Option<&'static OperatorDescriptor> {
        let mut best: Option<&'static OperatorDescriptor> = None;
        for op in self.operators {
            if text.starts_with(op.symbol)
               && best.is_none_or(|current| op.symbol.len() > current.symbol.len())
            {
                best = Some(op);
            }
        }
        best
    }
}

/// Builds the operator registry for `grammar`.
///
/// Same as [`Registry::build`].
#[must_use]
pub fn build_registry(grammar: Grammar) -> Registry {
    Registry::build(grammar)
}
