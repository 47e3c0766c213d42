use std::{fs, io::Cursor, path::Path};

use infixer::{
    driver::{BatchDriver, DriverOptions, Evaluation, LineOutcome, sidecar::sidecar_path},
    error::{FatalError, LineError},
    grammar::Grammar,
    interpreter::evaluator::{Bindings, ConsolePrompt},
};
use pretty_assertions::assert_eq;

fn run(grammar: Grammar, options: DriverOptions, path: &Path) -> (String, Result<(usize, usize), FatalError>) {
    let mut driver = BatchDriver::new(grammar, options, Vec::new());
    let summary = driver.process_file(path)
                        .map(|summary| (summary.processed, summary.failed));
    let report = String::from_utf8(driver.into_output()).unwrap();
    (report, summary)
}

#[test]
fn recoverable_errors_are_contained_to_their_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("calc.txt");
    fs::write(&input, "3 + 4 * 2\n(3 + 4\n\n1 $ 2\r\n(3 + 4) * 2\n").unwrap();

    let (report, summary) = run(Grammar::Arithmetic, DriverOptions::default(), &input);
    assert_eq!(summary.unwrap(), (4, 2));

    let name = input.display();
    assert_eq!(report,
               format!("Processing line 1 of {name}:\n\
                        Source: (inf) 3 + 4 * 2\n\
                        Converted: (post) 3 4 2 * +\n\
                        Result: 11\n\
                        Ok.\n\n\
                        Processing line 2 of {name}:\n\
                        Error occurred. Skipping...\n\n\
                        Processing line 4 of {name}:\n\
                        Error occurred. Skipping...\n\n\
                        Processing line 5 of {name}:\n\
                        Source: (inf) (3 + 4) * 2\n\
                        Converted: (post) 3 4 + 2 *\n\
                        Result: 14\n\
                        Ok.\n\n"));

    let errors = fs::read_to_string(sidecar_path(&input)).unwrap();
    assert_eq!(errors,
               format!("{name} : 2 : [(3 + 4] - Invalid braces placement error.\n\
                        {name} : 4 : [1 $ 2] - Invalid symbol occurrence error.\n"));
}

#[test]
fn clean_files_leave_no_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clean.txt");
    fs::write(&input, "1 + 1\n2 ^ 10\n").unwrap();

    let (_, summary) = run(Grammar::Arithmetic, DriverOptions::default(), &input);
    assert_eq!(summary.unwrap(), (2, 0));
    assert!(!sidecar_path(&input).exists());
}

#[test]
fn stale_sidecar_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("calc.txt");
    fs::write(&input, "1 +\n").unwrap();
    fs::write(sidecar_path(&input), "old record\n").unwrap();

    let (_, summary) = run(Grammar::Arithmetic, DriverOptions::default(), &input);
    assert_eq!(summary.unwrap(), (1, 1));

    let errors = fs::read_to_string(sidecar_path(&input)).unwrap();
    assert_eq!(errors,
               format!("{} : 1 : [1 +] - Invalid operations and operands combination.\n",
                       input.display()));
}

#[test]
fn truth_tables_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logic.txt");
    fs::write(&input, "a & b\na & 2\n").unwrap();

    let (report, summary) = run(Grammar::Propositional, DriverOptions::default(), &input);
    assert_eq!(summary.unwrap(), (2, 1));

    let name = input.display();
    assert_eq!(report,
               format!("Processing line 1 of {name}:\n\
                        Source: (inf) a & b\n\
                        Converted: (post) a b &\n\
                        Truth table:\n\
                        a b | F\n\
                        0 0 | 0\n\
                        1 0 | 0\n\
                        0 1 | 0\n\
                        1 1 | 1\n\
                        Ok.\n\n\
                        Processing line 2 of {name}:\n\
                        Source: (inf) a & 2\n\
                        Converted: (post) a 2 &\n\
                        Error occurred. Skipping...\n\n"));

    let errors = fs::read_to_string(sidecar_path(&input)).unwrap();
    assert_eq!(errors, format!("{name} : 2 : [a & 2] - Invalid operand error.\n"));
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");

    let (report, summary) = run(Grammar::Arithmetic, DriverOptions::default(), &input);
    assert!(matches!(summary, Err(FatalError::OpenInput { .. })));
    assert!(report.is_empty());
}

#[test]
fn defined_variables_seed_every_line() {
    let options = DriverOptions { defaults:  [("x", 3)].into_iter().collect::<Bindings>(),
                                  show_tree: false, };
    let mut driver = BatchDriver::new(Grammar::Arithmetic, options, Vec::new());

    let LineOutcome::Ok(report) = driver.process_line(1, "x * x + 1") else {
        panic!("bound variable should evaluate");
    };
    assert_eq!(report.evaluation, Evaluation::Value(10));

    let LineOutcome::Recoverable { error, text, number } = driver.process_line(2, "x + y") else {
        panic!("unbound variable should fail the line");
    };
    assert!(matches!(error, LineError::InvalidOperations { .. }));
    assert_eq!((text.as_str(), number), ("x + y", 2));
}

#[test]
fn prompted_values_last_for_one_line() {
    let mut prompt = ConsolePrompt::new(Cursor::new("seven\n7\n2\n"), std::io::sink());
    let mut driver = BatchDriver::new(Grammar::Arithmetic, DriverOptions::default(), Vec::new()).with_prompt(&mut prompt);

    let LineOutcome::Ok(first) = driver.process_line(1, "n * n") else {
        panic!("prompted variable should evaluate");
    };
    assert_eq!(first.evaluation, Evaluation::Value(49));

    let LineOutcome::Ok(second) = driver.process_line(2, "n + 1") else {
        panic!("prompted variable should evaluate");
    };
    assert_eq!(second.evaluation, Evaluation::Value(3));

    let outcome = driver.process_line(3, "n");
    assert!(matches!(outcome, LineOutcome::Fatal(FatalError::PromptClosed { .. })));
}

#[test]
fn expression_trees_follow_evaluation_order() {
    let options = DriverOptions { defaults:  Bindings::new(),
                                  show_tree: true, };
    let mut driver = BatchDriver::new(Grammar::Arithmetic, options, Vec::new());

    let LineOutcome::Ok(report) = driver.process_line(1, "10 - 4 - 3") else {
        panic!("formula should evaluate");
    };
    assert_eq!(report.evaluation, Evaluation::Value(3));
    assert_eq!(report.tree.map(|tree| tree.to_string()), Some("((10 - 4) - 3)".to_string()));

    let output = String::from_utf8(driver.into_output()).unwrap();
    assert!(output.contains("Tree: ((10 - 4) - 3) (depth 3)\n"));
}

#[test]
fn sidecar_failure_aborts_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing").join("in.txt");
    let mut driver = BatchDriver::new(Grammar::Arithmetic, DriverOptions::default(), Vec::new());

    let result = driver.process_reader(&input, Cursor::new("1 +\n2 + 2\n"));
    assert!(matches!(result, Err(FatalError::OpenSidecar { path, .. }) if path == sidecar_path(&input)));

    let report = String::from_utf8(driver.into_output()).unwrap();
    assert!(report.contains("Converted: (post) 1 +\n"));
    assert!(!report.contains("line 2"));
    assert!(!report.contains("2 + 2"));
}
