#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that abort the processing of a single line.
pub enum LineError {
    /// Parentheses are unbalanced or misplaced.
    InvalidBraces,
    /// A character outside the grammar's alphabet was found.
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Byte offset of the character in the infix text.
        offset: usize,
    },
    /// An operand is malformed for the active grammar.
    InvalidOperand {
        /// The operand as it appeared in the postfix stream.
        token: String,
    },
    /// Operators and operands do not combine into a single value.
    InvalidOperations {
        /// What exactly went wrong.
        details: String,
    },
    /// The formula has more free variables than a truth table may span.
    TooManyVariables {
        /// Number of distinct free variables found.
        count: usize,
        /// The largest accepted number of variables.
        limit: usize,
    },
}

impl LineError {
    /// Shorthand for [`LineError::InvalidOperations`].
    pub fn operations(details: impl Into<String>) -> Self {
        Self::InvalidOperations { details: details.into() }
    }

    /// The fixed message written to the sidecar error log for this kind.
    ///
    /// # Example
    /// ```
    /// use infixer::error::LineError;
    ///
    /// assert_eq!(LineError::InvalidBraces.message(), "Invalid braces placement error");
    /// ```
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidBraces => "Invalid braces placement error",
            Self::InvalidSymbol { .. } => "Invalid symbol occurrence error",
            Self::InvalidOperand { .. } => "Invalid operand error",
            Self::InvalidOperations { .. } => "Invalid operations and operands combination",
            Self::TooManyVariables { .. } => "Too many variables for a truth table",
        }
    }
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBraces => write!(f, "Invalid braces placement."),
            Self::InvalidSymbol { symbol, offset } => {
                write!(f, "Invalid symbol '{symbol}' at byte offset {offset}.")
            },
            Self::InvalidOperand { token } => write!(f, "Invalid operand '{token}'."),
            Self::InvalidOperations { details } => {
                write!(f, "Invalid operations and operands combination: {details}.")
            },
            Self::TooManyVariables { count, limit } => write!(f,
                                                              "Truth table over {count} variables requested, at most {limit} are supported."),
        }
    }
}

impl std::error::Error for LineError {}
