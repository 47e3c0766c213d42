/// A formula in postfix (reverse Polish) notation.
///
/// Each token is an operator symbol, a literal or a variable name. The
/// converter produces it; the evaluator, the truth-table enumerator and the
/// tree builder consume it left to right. It displays as the tokens joined
/// by single spaces.
///
/// # Example
/// ```
/// use infixer::interpreter::postfix::Postfix;
///
/// let postfix = Postfix::from("3 4   2 * + ");
/// assert_eq!(postfix.len(), 5);
/// assert_eq!(postfix.to_string(), "3 4 2 * +");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<String>,
}

impl Postfix {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a token to the stream.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Tokens in evaluation order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for Postfix {
    /// Splits already-postfix text on whitespace.
    fn from(text: &str) -> Self {
        Self { tokens: text.split_whitespace().map(str::to_string).collect() }
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
