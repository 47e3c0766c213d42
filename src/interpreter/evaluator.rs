/// Core evaluation logic.
///
/// Runs a postfix stream against an operand stack, dispatching operators
/// through the registry and resolving operands as literals or variables.
pub mod core;

/// Variable bindings.
///
/// The name-to-value map consulted for every variable operand. It lives for
/// one evaluated line, or for one row of a truth table.
pub mod bindings;

/// Interactive variable resolution.
///
/// Asks the user for the value of a variable that has no binding yet and
/// retries until a valid integer is entered.
pub mod prompt;

pub use self::{
    bindings::Bindings,
    core::{evaluate, evaluate_bound},
    prompt::{ConsolePrompt, ValuePrompt},
};
