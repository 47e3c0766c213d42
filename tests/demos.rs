use std::fs;

use infixer::{
    driver::{BatchDriver, DriverOptions},
    grammar::Grammar,
};
use walkdir::WalkDir;

/// Every demo file runs to completion. Lines that are meant to fail only
/// produce sidecar records, so the files are copied to a scratch directory
/// first.
#[test]
fn demo_files_process_without_fatal_errors() {
    let scratch = tempfile::tempdir().unwrap();
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let grammar = if path.file_stem().is_some_and(|stem| stem == "logic") {
            Grammar::Propositional
        } else {
            Grammar::Arithmetic
        };

        let copy = scratch.path().join(entry.file_name());
        fs::copy(path, &copy).unwrap_or_else(|e| panic!("Failed to copy {path:?}: {e}"));

        let mut driver = BatchDriver::new(grammar, DriverOptions::default(), Vec::new());
        match driver.process_file(&copy) {
            Ok(summary) => assert!(summary.processed > 0, "{path:?} has no formulas"),
            Err(e) => panic!("Demo {path:?} failed:\n{e}"),
        }
        count += 1;
    }

    assert!(count > 0, "No demo files found in demos/");
}
