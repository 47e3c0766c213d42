use crate::error::LineError;

/// Selects the family of formulas a file contains.
///
/// The grammar decides which operator table is built and how operands are
/// validated: arithmetic literals are any base-10 integer, propositional
/// literals are only `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Integer arithmetic: `+ - * / % ^ ~`.
    Arithmetic,
    /// Two-valued propositional logic: `& | ~ -> +> <> = ! ?`.
    Propositional,
}

/// An operand token from the postfix stream, after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'t> {
    /// A literal value written directly in the formula.
    Literal(i64),
    /// A named value resolved from the variable bindings.
    Variable(&'t str),
}

impl Grammar {
    /// Human readable name of the grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arithmetic => "arithmetic",
            Self::Propositional => "propositional",
        }
    }

    /// Classifies a non-operator token as a literal or a variable.
    ///
    /// A token made only of digits is a literal and must be valid for the
    /// grammar. A token starting with a letter is a variable name. Anything
    /// else (for example `2x`) is rejected.
    ///
    /// # Errors
    /// Returns [`LineError::InvalidOperand`] for literals that overflow `i64`,
    /// propositional literals other than `0`/`1`, and malformed names.
    ///
    /// # Example
    /// ```
    /// use infixer::grammar::{Grammar, Operand};
    ///
    /// assert_eq!(Grammar::Arithmetic.classify_operand("42").unwrap(), Operand::Literal(42));
    /// assert_eq!(Grammar::Propositional.classify_operand("p").unwrap(), Operand::Variable("p"));
    /// assert!(Grammar::Propositional.classify_operand("2").is_err());
    /// ```
    pub fn classify_operand(self, token: &str) -> Result<Operand<'_>, LineError> {
        let invalid = || LineError::InvalidOperand { token: token.to_string() };

        if is_literal(token) {
            let value = match self {
                Self::Arithmetic => token.parse::<i64>().map_err(|_| invalid())?,
                Self::Propositional => match token {
                    "0" => 0,
                    "1" => 1,
                    _ => return Err(invalid()),
                },
            };
            return Ok(Operand::Literal(value));
        }

        if is_variable_name(token) {
            Ok(Operand::Variable(token))
        } else {
            Err(invalid())
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` for a non-empty run of ASCII digits.
#[must_use]
pub fn is_literal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` for an ASCII alphanumeric run that starts with a letter.
#[must_use]
pub fn is_variable_name(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric())
}
