/// Integer helpers.
///
/// Wrapping arithmetic that reports overflow through the log instead of
/// panicking, so every operator stays total over `i64`.
pub mod num;
/// Diagnostic output setup.
///
/// Installs the process-wide `tracing` subscriber once at start-up. Library
/// code only emits events; it never configures where they go.
pub mod logging;
