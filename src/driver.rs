use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    error::{EngineError, FatalError, LineError},
    grammar::Grammar,
    interpreter::{
        converter::to_postfix,
        evaluator::{Bindings, ValuePrompt, evaluate},
        postfix::Postfix,
        registry::{Registry, build_registry},
        tree::ExprTree,
        truth_table::{TruthTable, enumerate},
    },
};

/// The sidecar error log written next to each input file.
///
/// Created lazily on the first recoverable error of a file, one record per
/// failed line.
pub mod sidecar;

use sidecar::ErrorLog;

/// Settings shared by every line the driver processes.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    /// Values every arithmetic line starts with. Each line gets its own copy.
    pub defaults:  Bindings,
    /// Print the expression tree rebuilt from the postfix form.
    pub show_tree: bool,
}

/// The value computed for a successfully processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Result of an arithmetic formula.
    Value(i64),
    /// Truth table of a propositional formula.
    Table(TruthTable),
}

/// Everything produced for a successfully processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub postfix:    Postfix,
    pub evaluation: Evaluation,
    /// Present only when [`DriverOptions::show_tree`] is set.
    pub tree:       Option<ExprTree>,
}

/// How processing a single line ended.
#[derive(Debug)]
pub enum LineOutcome {
    /// The line was converted and evaluated.
    Ok(Report),
    /// The line is malformed; the file continues with the next line.
    Recoverable {
        /// What is wrong with the line.
        error:  LineError,
        /// The line as read, without its line terminator.
        text:   String,
        /// 1-based physical line number.
        number: usize,
    },
    /// The file cannot be processed any further.
    Fatal(FatalError),
}

/// Line counts for one processed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSummary {
    /// Non-blank lines that were processed.
    pub processed: usize,
    /// Lines that ended with a recoverable error.
    pub failed:    usize,
}

/// Processes files of formulas line by line.
///
/// The driver owns the registry of its grammar for as long as it lives and
/// writes a report for every line to `out`. Recoverable errors go to the
/// file's sidecar log; fatal errors end the file.
///
/// # Example
/// ```
/// use infixer::{
///     driver::{BatchDriver, DriverOptions, Evaluation, LineOutcome},
///     grammar::Grammar,
/// };
///
/// let mut driver = BatchDriver::new(Grammar::Arithmetic, DriverOptions::default(), Vec::new());
/// let LineOutcome::Ok(report) = driver.process_line(1, "(3 + 4) * 2") else { panic!() };
///
/// assert_eq!(report.postfix.to_string(), "3 4 + 2 *");
/// assert_eq!(report.evaluation, Evaluation::Value(14));
/// ```
pub struct BatchDriver<'p, W> {
    registry: Registry,
    options:  DriverOptions,
    out:      W,
    prompt:   Option<&'p mut dyn ValuePrompt>,
}

impl<'p, W: Write> BatchDriver<'p, W> {
    /// Builds the registry for `grammar`. Without a prompt, unbound
    /// variables fail their line.
    pub fn new(grammar: Grammar, options: DriverOptions, out: W) -> Self {
        Self { registry: build_registry(grammar),
               options,
               out,
               prompt: None }
    }

    /// Resolves unbound arithmetic variables through `prompt`.
    #[must_use]
    pub fn with_prompt(mut self, prompt: &'p mut dyn ValuePrompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Gives back the report output.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Opens `path` and processes every line of it.
    ///
    /// # Errors
    /// Returns the first [`FatalError`]: the input cannot be opened or read,
    /// the sidecar log cannot be written, the report cannot be written, or
    /// the prompt fails.
    pub fn process_file(&mut self, path: &Path) -> Result<FileSummary, FatalError> {
        let file = File::open(path).map_err(|source| FatalError::OpenInput { path: path.to_path_buf(),
                                                                             source })?;
        self.process_reader(path, BufReader::new(file))
    }

    /// Processes the lines of `reader`, naming them after `path` in reports
    /// and in the sidecar log `<path>.errors`.
    ///
    /// Blank lines are skipped but still counted for line numbers, which
    /// start at 1. The sidecar log is closed before returning on every path.
    ///
    /// # Errors
    /// See [`BatchDriver::process_file`].
    pub fn process_reader(&mut self, path: &Path, reader: impl BufRead) -> Result<FileSummary, FatalError> {
        let mut log = ErrorLog::for_input(path);
        let mut summary = FileSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| FatalError::ReadInput { path: path.to_path_buf(),
                                                                     source })?;
            let text = line.trim_end_matches('\r');
            if text.trim().is_empty() {
                continue;
            }

            let number = index + 1;
            summary.processed += 1;
            self.emit(format_args!("Processing line {number} of {}:\n", path.display()))?;

            match self.process_line(number, text) {
                LineOutcome::Ok(_) => self.emit(format_args!("Ok.\n\n"))?,
                LineOutcome::Recoverable { error, text, number } => {
                    debug!(line = number, %error, "skipping line");
                    summary.failed += 1;
                    log.record(number, &text, &error)?;
                    self.emit(format_args!("Error occurred. Skipping...\n\n"))?;
                },
                LineOutcome::Fatal(error) => return Err(error),
            }
        }

        log.finish()?;
        info!(file = %path.display(),
              processed = summary.processed,
              failed = summary.failed,
              "file processed");
        Ok(summary)
    }

    /// Converts and evaluates line `number` of a file, writing its report.
    ///
    /// The infix and postfix forms are written before evaluation starts, so
    /// they are visible while the prompt asks for variable values.
    pub fn process_line(&mut self, number: usize, infix: &str) -> LineOutcome {
        match self.run_line(infix) {
            Ok(report) => LineOutcome::Ok(report),
            Err(EngineError::Line(error)) => LineOutcome::Recoverable { error,
                                                                        text: infix.to_string(),
                                                                        number },
            Err(EngineError::Fatal(error)) => LineOutcome::Fatal(error),
        }
    }

    fn run_line(&mut self, infix: &str) -> Result<Report, EngineError> {
        let postfix = to_postfix(infix, &self.registry)?;
        self.emit(format_args!("Source: (inf) {infix}\nConverted: (post) {postfix}\n"))?;

        let tree = if self.options.show_tree {
            ExprTree::from_postfix(&postfix, &self.registry)?
        } else {
            None
        };
        if let Some(tree) = &tree {
            self.emit(format_args!("Tree: {tree} (depth {})\n", tree.depth()))?;
        }

        let evaluation = match self.registry.grammar() {
            Grammar::Arithmetic => {
                let mut bindings = self.options.defaults.clone();
                let value = evaluate(&postfix, &self.registry, &mut bindings, self.prompt.as_deref_mut())?;
                self.emit(format_args!("Result: {value}\n"))?;
                Evaluation::Value(value)
            },
            Grammar::Propositional => {
                let table = enumerate(&postfix, &self.registry)?;
                self.emit(format_args!("Truth table:\n{table}"))?;
                Evaluation::Table(table)
            },
        };

        Ok(Report { postfix,
                    evaluation,
                    tree })
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) -> Result<(), FatalError> {
        self.out
            .write_fmt(args)
            .and_then(|()| self.out.flush())
            .map_err(FatalError::WriteReport)
    }
}
