use std::{io, path::PathBuf, process};

use clap::{ArgGroup, Parser, ValueEnum};
use infixer::{
    driver::{BatchDriver, DriverOptions},
    error::FatalError,
    grammar::{Grammar, is_variable_name},
    interpreter::evaluator::{Bindings, ConsolePrompt},
    util::logging,
};
use tracing_subscriber::filter::LevelFilter;

/// infixer converts infix formulas to postfix notation and evaluates them,
/// line by line. Malformed lines are logged to `<file>.errors` and skipped.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("inputs").required(true).multiple(true).args(["calculate", "table"])))]
struct Args {
    /// Evaluates every line of FILE as an integer arithmetic formula.
    #[arg(short, long, value_name = "FILE")]
    calculate: Vec<PathBuf>,

    /// Prints the truth table of every line of FILE as a propositional
    /// formula.
    #[arg(short, long, value_name = "FILE")]
    table: Vec<PathBuf>,

    /// Binds an arithmetic variable before each line is evaluated.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    define: Vec<(String, i64)>,

    /// Fails lines with unbound variables instead of asking for their values.
    #[arg(long)]
    no_prompt: bool,

    /// Prints the expression tree rebuilt from each postfix formula.
    #[arg(long)]
    show_tree: bool,

    /// Diagnostics shown on standard error, unless `RUST_LOG` is set.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

fn parse_definition(text: &str) -> Result<(String, i64), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let name = name.trim();
    if !is_variable_name(name) {
        return Err(format!("'{name}' is not a valid variable name"));
    }
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{}' is not a valid integer", value.trim()))?;
    Ok((name.to_string(), value))
}

fn run(args: Args) -> Result<(), FatalError> {
    let options = DriverOptions { defaults:  args.define.into_iter().collect::<Bindings>(),
                                  show_tree: args.show_tree, };
    let mut prompt = ConsolePrompt::stdio();

    let files = args.calculate
                    .into_iter()
                    .map(|path| (Grammar::Arithmetic, path))
                    .chain(args.table.into_iter().map(|path| (Grammar::Propositional, path)));

    for (grammar, path) in files {
        let mut driver = BatchDriver::new(grammar, options.clone(), io::stdout());
        if grammar == Grammar::Arithmetic && !args.no_prompt {
            driver = driver.with_prompt(&mut prompt);
        }
        driver.process_file(&path)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.log_level.into());

    if let Err(e) = run(args) {
        eprintln!("{e}");
        process::exit(1);
    }
}
