/// Recoverable, per-line errors.
///
/// Defines everything that can go wrong while converting or evaluating a
/// single formula: misplaced braces, symbols outside the grammar, malformed
/// operands and operator/operand mismatches. A line that fails with one of
/// these is recorded in the sidecar error log and processing moves on.
pub mod line_error;
/// Fatal errors.
///
/// Contains the failures that stop the processing of a whole file: input
/// that cannot be opened or read, a sidecar log that cannot be created or
/// written, a report that cannot be written, and interactive input that
/// closes while a variable value is still needed.
pub mod fatal_error;

pub use fatal_error::FatalError;
pub use line_error::LineError;

/// Either kind of failure, as produced by the evaluator.
///
/// Evaluation can fail recoverably (bad formula) or fatally (the prompt used
/// to resolve a variable stopped answering). The batch driver inspects the
/// variant to decide whether to log-and-continue or abort.
#[derive(Debug)]
pub enum EngineError {
    /// The current line is malformed; the file can continue.
    Line(LineError),
    /// Processing of the file has to stop.
    Fatal(FatalError),
}

impl From<LineError> for EngineError {
    fn from(error: LineError) -> Self {
        Self::Line(error)
    }
}

impl From<FatalError> for EngineError {
    fn from(error: FatalError) -> Self {
        Self::Fatal(error)
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(e) => write!(f, "{e}"),
            Self::Fatal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Line(e) => Some(e),
            Self::Fatal(e) => Some(e),
        }
    }
}
