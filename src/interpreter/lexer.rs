use logos::Logos;

use crate::{
    error::LineError,
    interpreter::registry::{OperatorDescriptor, Registry},
};

/// Raw lexical classes of the infix text.
///
/// The lexer only separates operand runs, parentheses and runs of other
/// characters. Runs of other characters are split into operators afterwards
/// by [`Tokens`], using the registry of the active grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    /// A maximal run of ASCII letters and digits, such as `42` or `x1`.
    #[regex(r"[A-Za-z0-9]+")]
    Operand,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// A run of characters that may contain operator symbols, such as `->~`.
    #[regex(r"[^A-Za-z0-9()\s]+", allow_greedy = true)]
    Symbols,
}

/// A classified piece of the infix text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'s> {
    /// An operand run, copied verbatim to the postfix output.
    Operand(&'s str),
    /// A registered operator, matched by longest symbol.
    Operator(&'static OperatorDescriptor),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

/// Iterator over the tokens of one infix line.
///
/// Yields [`LineError::InvalidSymbol`] for the first character that is not
/// an operand character, a parenthesis, whitespace or the start of a known
/// operator.
pub struct Tokens<'s, 'r> {
    lexer:    logos::Lexer<'s, Lexeme>,
    registry: &'r Registry,
    /// Unconsumed tail of a symbol run and its byte offset in the line.
    pending:  Option<(usize, &'s str)>,
}

impl<'s, 'r> Tokens<'s, 'r> {
    /// Starts tokenizing `infix` with the operators of `registry`.
    ///
    /// # Example
    /// ```
    /// use infixer::{
    ///     grammar::Grammar,
    ///     interpreter::{lexer::{Token, Tokens}, registry::Registry},
    /// };
    ///
    /// let registry = Registry::build(Grammar::Propositional);
    /// let tokens: Vec<_> = Tokens::new("a->~b", &registry).collect::<Result<_, _>>().unwrap();
    ///
    /// assert_eq!(tokens.len(), 4);
    /// assert!(matches!(tokens[1], Token::Operator(op) if op.symbol == "->"));
    /// assert!(matches!(tokens[2], Token::Operator(op) if op.symbol == "~"));
    /// ```
    #[must_use]
    pub fn new(infix: &'s str, registry: &'r Registry) -> Self {
        Self { lexer: Lexeme::lexer(infix),
               registry,
               pending: None }
    }

    /// Takes the longest operator off the front of a symbol run and keeps
    /// the remainder for the next call.
    fn split_symbols(&mut self, offset: usize, run: &'s str) -> Result<Token<'s>, LineError> {
        let Some(op) = self.registry.match_operator(run) else {
            return Err(invalid_symbol(run, offset));
        };

        let rest = &run[op.symbol.len()..];
        if !rest.is_empty() {
            self.pending = Some((offset + op.symbol.len(), rest));
        }
        Ok(Token::Operator(op))
    }
}

impl<'s> Iterator for Tokens<'s, '_> {
    type Item = Result<Token<'s>, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((offset, run)) = self.pending.take() {
            return Some(self.split_symbols(offset, run));
        }

        let lexeme = self.lexer.next()?;
        let offset = self.lexer.span().start;
        let slice = self.lexer.slice();

        Some(match lexeme {
                 Ok(Lexeme::Operand) => Ok(Token::Operand(slice)),
                 Ok(Lexeme::OpenParen) => Ok(Token::OpenParen),
                 Ok(Lexeme::CloseParen) => Ok(Token::CloseParen),
                 Ok(Lexeme::Symbols) => self.split_symbols(offset, slice),
                 Err(()) => Err(invalid_symbol(slice, offset)),
             })
    }
}

fn invalid_symbol(text: &str, offset: usize) -> LineError {
    LineError::InvalidSymbol { symbol: text.chars().next().unwrap_or(' '),
                               offset }
}
