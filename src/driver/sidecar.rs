use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::error::{FatalError, LineError};

/// Returns the sidecar path of `input`: the same path with `.errors` appended.
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use infixer::driver::sidecar::sidecar_path;
///
/// assert_eq!(sidecar_path(Path::new("data/input.txt")), Path::new("data/input.txt.errors"));
/// ```
#[must_use]
pub fn sidecar_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".errors");
    PathBuf::from(name)
}

/// Per-file log of recoverable errors.
///
/// The file is created (truncating an older one) only when the first record
/// is written. Records are buffered; the file is flushed and closed by
/// [`ErrorLog::finish`], or when the log is dropped on an early return.
pub struct ErrorLog {
    input: PathBuf,
    path:  PathBuf,
    file:  Option<BufWriter<File>>,
}

impl ErrorLog {
    /// A log for errors found in `input`. Nothing is created yet.
    #[must_use]
    pub fn for_input(input: &Path) -> Self {
        Self { input: input.to_path_buf(),
               path:  sidecar_path(input),
               file:  None, }
    }

    /// Where the log is (or would be) written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether any record has been written.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Appends `<input> : <number> : [<text>] - <message>.` to the log.
    ///
    /// # Errors
    /// Returns [`FatalError::OpenSidecar`] if the file cannot be created and
    /// [`FatalError::WriteSidecar`] if the record cannot be written.
    pub fn record(&mut self, number: usize, text: &str, error: &LineError) -> Result<(), FatalError> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                let file = File::create(&self.path).map_err(|source| FatalError::OpenSidecar { path: self.path.clone(),
                                                                                              source })?;
                info!(path = %self.path.display(), "created error log");
                BufWriter::new(file)
            },
        };
        let file = self.file.insert(file);

        writeln!(file, "{} : {number} : [{text}] - {}.", self.input.display(), error.message())
            .map_err(|source| FatalError::WriteSidecar { path: self.path.clone(),
                                                          source })
    }

    /// Flushes and closes the log, reporting write failures.
    ///
    /// # Errors
    /// Returns [`FatalError::WriteSidecar`] when buffered records cannot be
    /// written out.
    pub fn finish(mut self) -> Result<(), FatalError> {
        match self.file.take() {
            Some(mut file) => file.flush().map_err(|source| FatalError::WriteSidecar { path: self.path,
                                                                                       source }),
            None => Ok(()),
        }
    }
}
