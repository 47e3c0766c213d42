use crate::{
    error::{EngineError, LineError},
    grammar::Operand,
    interpreter::{
        evaluator::{bindings::Bindings, prompt::ValuePrompt},
        postfix::Postfix,
        registry::{Operation, OperatorDescriptor, Registry},
        stack::Stack,
    },
};

/// Evaluates a postfix formula, asking for missing variables.
///
/// Tokens are read left to right. A token registered as an operator pops its
/// operands (for a binary operator the first pop is the right operand) and
/// pushes the result. Any other token is an operand: digits are a literal,
/// a name is looked up in `bindings`. An unbound name is requested from
/// `prompt` and bound for the rest of this evaluation; without a prompt it
/// is an error.
///
/// An empty stream evaluates to `0`.
///
/// # Errors
/// - [`LineError::InvalidOperand`] for literals the grammar rejects.
/// - [`LineError::InvalidOperations`] for missing operands, values left on
///   the stack, or an unbound variable with no prompt.
/// - [`crate::error::FatalError`] when the prompt fails.
///
/// # Example
/// ```
/// use infixer::{
///     grammar::Grammar,
///     interpreter::{
///         evaluator::{Bindings, evaluate},
///         postfix::Postfix,
///         registry::Registry,
///     },
/// };
///
/// let registry = Registry::build(Grammar::Arithmetic);
/// let mut bindings = Bindings::new();
/// bindings.set("x", 5);
///
/// let value = evaluate(&Postfix::from("x 2 ^ 1 -"), &registry, &mut bindings, None).unwrap();
/// assert_eq!(value, 24);
/// ```
pub fn evaluate(postfix: &Postfix,
                registry: &Registry,
                bindings: &mut Bindings,
                mut prompt: Option<&mut (dyn ValuePrompt + '_)>)
                -> Result<i64, EngineError> {
    run::<EngineError, _>(postfix, registry, |name| {
        if let Some(value) = bindings.get(name) {
            return Ok(value);
        }
        let Some(prompt) = prompt.as_deref_mut() else {
            return Err(unbound(name).into());
        };
        let value = prompt.request(name)?;
        bindings.set(name, value);
        Ok(value)
    })
}

/// Evaluates a postfix formula whose variables are all bound in advance.
///
/// This is the non-interactive path used by the truth-table enumerator.
///
/// # Errors
/// Same as [`evaluate`], minus the prompt failures; an unbound variable is
/// [`LineError::InvalidOperations`].
pub fn evaluate_bound(postfix: &Postfix,
                      registry: &Registry,
                      bindings: &Bindings)
                      -> Result<i64, LineError> {
    run(postfix, registry, |name| bindings.get(name).ok_or_else(|| unbound(name)))
}

fn unbound(name: &str) -> LineError {
    LineError::operations(format!("variable '{name}' has no value"))
}

/// The stack machine shared by both entry points; `resolve` supplies the
/// value of each variable operand.
fn run<E, F>(postfix: &Postfix, registry: &Registry, mut resolve: F) -> Result<i64, E>
    where E: From<LineError>,
          F: FnMut(&str) -> Result<i64, E>
{
    let grammar = registry.grammar();
    let mut operands = Stack::new();

    for token in postfix.tokens() {
        if let Some(op) = registry.get(token) {
            apply(&mut operands, op)?;
            continue;
        }

        let value = match grammar.classify_operand(token)? {
            Operand::Literal(value) => value,
            Operand::Variable(name) => resolve(name)?,
        };
        operands.push(value);
    }

    match operands.len() {
        0 => Ok(0),
        1 => Ok(operands.pop().map_err(|_| LineError::operations("no result"))?),
        left => {
            Err(LineError::operations(format!("{left} values left without an operator")).into())
        },
    }
}

fn apply(operands: &mut Stack<i64>, op: &OperatorDescriptor) -> Result<(), LineError> {
    let mut pop = || {
        operands.pop()
                .map_err(|_| LineError::operations(format!("not enough operands for '{}'", op.symbol)))
    };

    let result = match op.operation {
        Operation::Unary(unary) => unary.apply(pop()?),
        Operation::Binary(binary) => {
            let right = pop()?;
            let left = pop()?;
            binary.apply(left, right)
        },
    };

    operands.push(result);
    Ok(())
}
