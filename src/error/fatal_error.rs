use std::{io, path::PathBuf};

#[derive(Debug)]
/// Represents all errors that stop the processing of an input file.
pub enum FatalError {
    /// The input file could not be opened.
    OpenInput {
        /// Path of the input file.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// Reading a line from the input file failed.
    ReadInput {
        /// Path of the input file.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The sidecar error log could not be created.
    OpenSidecar {
        /// Path of the sidecar file.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// Appending a record to the sidecar error log failed.
    WriteSidecar {
        /// Path of the sidecar file.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The report could not be written to its output.
    WriteReport(io::Error),
    /// Interactive input ended before a value for the variable was entered.
    PromptClosed {
        /// The variable that was being asked for.
        name: String,
    },
    /// Reading or writing the interactive prompt failed.
    Prompt(io::Error),
}

impl std::fmt::Display for FatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenInput { path, source } => {
                write!(f, "Failed to open '{}': {source}.", path.display())
            },
            Self::ReadInput { path, source } => {
                write!(f, "Failed to read from '{}': {source}.", path.display())
            },
            Self::OpenSidecar { path, source } => write!(f,
                                                         "Failed to create error log '{}': {source}.",
                                                         path.display()),
            Self::WriteSidecar { path, source } => write!(f,
                                                          "Failed to write to error log '{}': {source}.",
                                                          path.display()),
            Self::WriteReport(source) => write!(f, "Failed to write the report: {source}."),
            Self::PromptClosed { name } => {
                write!(f, "Input ended while waiting for a value of '{name}'.")
            },
            Self::Prompt(source) => write!(f, "Interactive input failed: {source}."),
        }
    }
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenInput { source, .. }
            | Self::ReadInput { source, .. }
            | Self::OpenSidecar { source, .. }
            | Self::WriteSidecar { source, .. }
            | Self::WriteReport(source)
            | Self::Prompt(source) => Some(source),
            Self::PromptClosed { .. } => None,
        }
    }
}
