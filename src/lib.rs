//! # infixer
//!
//! infixer converts formulas from infix to postfix notation and evaluates
//! them. Two grammars are supported: integer arithmetic, and propositional
//! logic, where each formula is expanded into a full truth table.
//! Files are processed line by line; malformed lines are recorded in a
//! sidecar error log and skipped.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io, path::Path};

use crate::{
    driver::{BatchDriver, DriverOptions, FileSummary},
    error::FatalError,
    grammar::Grammar,
    interpreter::evaluator::ConsolePrompt,
};

/// Runs whole files through the engine.
///
/// The batch driver reads a file line by line, converts and evaluates each
/// formula, writes a report, and sends recoverable errors to a sidecar log
/// next to the input.
///
/// # Responsibilities
/// - Classifies each line's outcome as success, recoverable or fatal.
/// - Creates the sidecar error log lazily and always closes it.
/// - Keeps line-local state (bindings, stacks) from leaking between lines.
pub mod driver;
/// Provides the error types of the engine and the driver.
///
/// Per-line errors are kept apart from errors that end a whole file, so the
/// driver can decide between skipping a line and aborting.
///
/// # Responsibilities
/// - Defines recoverable error kinds and their sidecar messages.
/// - Defines fatal I/O failures with their source errors.
pub mod error;
/// Selects between the arithmetic and propositional grammar.
///
/// The grammar decides which operators exist and which literals are valid.
pub mod grammar;
/// The conversion and evaluation engine.
///
/// This module holds the operator registries, the lexer, the shunting-yard
/// converter, the postfix evaluator and the truth-table enumerator.
///
/// # Responsibilities
/// - Converts infix text to a postfix token stream.
/// - Evaluates postfix streams with variable bindings.
/// - Enumerates truth tables for propositional formulas.
pub mod interpreter;
/// General helpers for integer arithmetic and logging setup.
pub mod util;

/// Processes one file with the default options.
///
/// Reports go to standard output. Unbound arithmetic variables are asked for
/// on standard input.
///
/// # Errors
/// Returns a [`FatalError`] if the file cannot be read, its sidecar log
/// cannot be written, or the console fails.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use infixer::{grammar::Grammar, process_file};
///
/// let summary = process_file(Path::new("formulas.txt"), Grammar::Propositional).unwrap();
/// println!("{} of {} lines failed", summary.failed, summary.processed);
/// ```
pub fn process_file(path: &Path, grammar: Grammar) -> Result<FileSummary, FatalError> {
    let mut prompt = ConsolePrompt::stdio();
    BatchDriver::new(grammar, DriverOptions::default(), io::stdout()).with_prompt(&mut prompt)
                                                                     .process_file(path)
}
