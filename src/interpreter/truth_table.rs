use std::collections::HashSet;

use crate::{
    error::LineError,
    grammar::Operand,
    interpreter::{
        evaluator::{Bindings, evaluate_bound},
        postfix::Postfix,
        registry::Registry,
    },
};

/// The largest number of free variables a table is built for.
pub const MAX_VARIABLES: usize = 16;

/// Column header of the result column.
const RESULT_HEADER: &str = "F";

/// One assignment of the free variables and the formula's value under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Values of the free variables, in discovery order.
    pub assignment: Vec<bool>,
    /// Whether the formula evaluated to a non-zero value.
    pub result:     bool,
}

/// A complete truth table: every assignment of the free variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows:      Vec<Row>,
}

impl TruthTable {
    /// Free variable names, in first-occurrence order.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Rows in ascending assignment index.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl std::fmt::Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths: Vec<usize> = self.variables.iter().map(String::len).collect();

        for (name, width) in self.variables.iter().zip(&widths) {
            write!(f, "{name:<width$} ")?;
        }
        writeln!(f, "| {RESULT_HEADER}")?;

        for row in &self.rows {
            for (value, width) in row.assignment.iter().zip(&widths) {
                write!(f, "{:<width$} ", u8::from(*value))?;
            }
            writeln!(f, "| {}", u8::from(row.result))?;
        }
        Ok(())
    }
}

/// Collects the free variables of a postfix formula.
///
/// Every token that is neither an operator nor a literal is a variable.
/// Names are returned once each, in order of first occurrence.
///
/// # Errors
/// Returns [`LineError::InvalidOperand`] for a literal or name the grammar
/// rejects, such as `2` in a propositional formula.
pub fn free_variables(postfix: &Postfix, registry: &Registry) -> Result<Vec<String>, LineError> {
    let grammar = registry.grammar();
    let mut seen = HashSet::new();
    let mut variables = Vec::new();

    for token in postfix.tokens().filter(|token| !registry.contains(token)) {
        if let Operand::Variable(name) = grammar.classify_operand(token)?
           && seen.insert(name)
        {
            variables.push(name.to_string());
        }
    }

    Ok(variables)
}

/// Evaluates a formula under every assignment of its free variables.
///
/// For `n` variables the rows are produced for indices `0..2^n`; bit `j` of
/// the index is the value of the `j`-th discovered variable, so the first
/// variable alternates fastest.
///
/// # Errors
/// - [`LineError::InvalidOperand`] from variable discovery.
/// - [`LineError::TooManyVariables`] above [`MAX_VARIABLES`].
/// - [`LineError::InvalidOperations`] from evaluating any row.
///
/// # Example
/// ```
/// use infixer::{
///     grammar::Grammar,
///     interpreter::{postfix::Postfix, registry::Registry, truth_table::enumerate},
/// };
///
/// let registry = Registry::build(Grammar::Propositional);
/// let table = enumerate(&Postfix::from("a b &"), &registry).unwrap();
///
/// let results: Vec<bool> = table.rows().iter().map(|row| row.result).collect();
/// assert_eq!(table.variables(), ["a", "b"]);
/// assert_eq!(results, [false, false, false, true]);
/// ```
pub fn enumerate(postfix: &Postfix, registry: &Registry) -> Result<TruthTable, LineError> {
    let variables = free_variables(postfix, registry)?;
    if variables.len() > MAX_VARIABLES {
        return Err(LineError::TooManyVariables { count: variables.len(),
                                                 limit: MAX_VARIABLES, });
    }

    let count = 1_u32 << variables.len();
    let mut rows = Vec::with_capacity(count as usize);

    // One map for every row; each row overwrites all of its values.
    let mut bindings: Bindings = variables.iter().map(|name| (name.as_str(), 0)).collect();

    for index in 0..count {
        let assignment: Vec<bool> = (0..variables.len()).map(|bit| (index >> bit) & 1 == 1).collect();
        for (name, &value) in variables.iter().zip(&assignment) {
            bindings.set(name, i64::from(value));
        }

        let result = evaluate_bound(postfix, registry, &bindings)? != 0;
        rows.push(Row { assignment, result });
    }

    Ok(TruthTable { variables, rows })
}
