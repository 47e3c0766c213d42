use std::io::{self, BufRead, Write};

use crate::error::FatalError;

/// Supplies values for variables that have no binding yet.
pub trait ValuePrompt {
    /// Returns the value to bind to `name`.
    ///
    /// # Errors
    /// Returns a [`FatalError`] when no value can be obtained at all, for
    /// example because the input was closed.
    fn request(&mut self, name: &str) -> Result<i64, FatalError>;
}

/// Asks for variable values on a line-oriented console.
///
/// Malformed entries are answered with a retry message and read again; they
/// never turn into an error. Only the end of input (or an I/O failure) stops
/// the prompt.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use infixer::interpreter::evaluator::{ConsolePrompt, ValuePrompt};
///
/// let mut transcript = Vec::new();
/// let mut prompt = ConsolePrompt::new(Cursor::new("abc\n12\n"), &mut transcript);
///
/// assert_eq!(prompt.request("x").unwrap(), 12);
/// drop(prompt);
/// assert!(String::from_utf8(transcript).unwrap().contains("Please try again"));
/// ```
pub struct ConsolePrompt<R, W> {
    input:  R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    /// A prompt reading standard input and writing standard output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) -> Result<(), FatalError> {
        self.output.write_all(text.as_bytes()).map_err(FatalError::Prompt)?;
        self.output.flush().map_err(FatalError::Prompt)
    }
}

impl<R: BufRead, W: Write> ValuePrompt for ConsolePrompt<R, W> {
    fn request(&mut self, name: &str) -> Result<i64, FatalError> {
        self.say(&format!("Please enter value for '{name}' variable: "))?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self.input.read_line(&mut line).map_err(FatalError::Prompt)?;
            if read == 0 {
                return Err(FatalError::PromptClosed { name: name.to_string() });
            }

            if let Ok(value) = line.trim().parse::<i64>() {
                return Ok(value);
            }
            self.say("Invalid input. Please enter a valid integer.\nPlease try again: ")?;
        }
    }
}
