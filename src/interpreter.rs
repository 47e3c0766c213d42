/// The operator registry of each grammar.
///
/// Maps operator symbols to their arity, conversion priority and evaluation
/// behaviour. Built once per grammar and only read afterwards.
///
/// # Responsibilities
/// - Declares the arithmetic and propositional operator tables.
/// - Finds the longest operator symbol at a position of the infix text.
/// - Applies operators to integer operands.
pub mod registry;
/// The lexer classifies infix text for the converter.
///
/// Splits a line into operand runs, parentheses and operators (matched by
/// longest symbol against the registry), skipping whitespace and reporting
/// any character outside the grammar.
pub mod lexer;
/// A LIFO stack with an explicit empty state.
pub mod stack;
/// The postfix token stream passed from the converter to its consumers.
pub mod postfix;
/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm over the lexer's tokens, driven by
/// the registry's priorities.
///
/// # Responsibilities
/// - Orders operators by priority, left-associatively within one priority.
/// - Validates parenthesis placement.
pub mod converter;
/// Postfix evaluation.
///
/// Runs a postfix stream on an operand stack, binding variables from a map
/// or from an interactive prompt.
///
/// # Responsibilities
/// - Dispatches operators through the registry.
/// - Validates operands against the grammar.
/// - Detects operand/operator mismatches.
pub mod evaluator;
/// Truth tables for propositional formulas.
///
/// Discovers the free variables of a postfix formula and evaluates it under
/// every assignment.
pub mod truth_table;
/// Expression trees rebuilt from postfix, for display.
pub mod tree;
