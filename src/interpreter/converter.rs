use crate::{
    error::LineError,
    interpreter::{
        lexer::{Token, Tokens},
        postfix::Postfix,
        registry::{Arity, OPEN_PAREN_PRIORITY, OperatorDescriptor, Priority, Registry},
        stack::Stack,
    },
};

/// An entry on the converter's operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// An open parenthesis, or the sentinel seeded at the bottom.
    OpenParen,
    Operator(&'static OperatorDescriptor),
}

impl Pending {
    const fn priority(self) -> Priority {
        match self {
            Self::OpenParen => OPEN_PAREN_PRIORITY,
            Self::Operator(op) => op.priority,
        }
    }
}

/// Converts an infix formula to postfix with the shunting-yard algorithm.
///
/// The operator stack is seeded with an open-paren sentinel. Operand runs are
/// copied to the output as they appear. A binary operator first pops every
/// stacked operator of greater or equal priority, which makes operators of
/// one priority left-associative; a unary prefix operator is pushed as is,
/// since nothing to its left belongs to it. `)` pops up to its matching `(`.
/// At the end of input everything down to the sentinel is popped.
///
/// # Errors
/// - [`LineError::InvalidSymbol`] for characters outside the grammar.
/// - [`LineError::InvalidBraces`] when parentheses do not balance.
///
/// The first error aborts the conversion; no partial output is returned.
///
/// # Example
/// ```
/// use infixer::{
///     grammar::Grammar,
///     interpreter::{converter::to_postfix, registry::Registry},
/// };
///
/// let registry = Registry::build(Grammar::Arithmetic);
/// assert_eq!(to_postfix("3 + 4 * 2", &registry).unwrap().to_string(), "3 4 2 * +");
/// assert_eq!(to_postfix("(3 + 4) * 2", &registry).unwrap().to_string(), "3 4 + 2 *");
/// assert!(to_postfix("(3 + 4", &registry).is_err());
/// ```
pub fn to_postfix(infix: &str, registry: &Registry) -> Result<Postfix, LineError> {
    let mut output = Postfix::new();
    let mut operators = Stack::new();
    operators.push(Pending::OpenParen);

    for token in Tokens::new(infix, registry) {
        match token? {
            Token::Operand(operand) => output.push(operand),
            Token::OpenParen => operators.push(Pending::OpenParen),
            Token::CloseParen => {
                unwind_group(&mut operators, &mut output)?;
                // Popping the sentinel means this `)` has no partner.
                if operators.is_empty() {
                    return Err(LineError::InvalidBraces);
                }
            },
            Token::Operator(op) => {
                if op.arity() == Arity::Binary {
                    pop_while_tighter(&mut operators, &mut output, op.priority);
                }
                operators.push(Pending::Operator(op));
            },
        }
    }

    unwind_group(&mut operators, &mut output)?;
    if !operators.is_empty() {
        return Err(LineError::InvalidBraces);
    }

    Ok(output)
}

/// Emits stacked operators whose priority is at least `priority`.
fn pop_while_tighter(operators: &mut Stack<Pending>, output: &mut Postfix, priority: Priority) {
    while let Ok(&top) = operators.peek()
          && top.priority() >= priority
          && let Pending::Operator(op) = top
    {
        output.push(op.symbol);
        let _ = operators.pop();
    }
}

/// Emits operators until an open parenthesis is popped and discarded.
fn unwind_group(operators: &mut Stack<Pending>, output: &mut Postfix) -> Result<(), LineError> {
    loop {
        match operators.pop().map_err(|_| LineError::InvalidBraces)? {
            Pending::OpenParen => return Ok(()),
            Pending::Operator(op) => output.push(op.symbol),
        }
    }
}
