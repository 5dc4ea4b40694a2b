//! Interactive explorer
//!
//! Every parameter change re-runs the whole experiment from scratch with the
//! updated input record; nothing carries over between runs.

use crate::bounds::{parse_initial_position, parse_iterations, parse_learning_rate};
use crate::{error_line, execute, OutputMode};
use gradlab_session::ExperimentInput;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub const HELP: &str = "\
Commands:
  f <expr>     set the function of x (alias: expr)
  lr <value>   set the learning rate, in (0, 1.5]
  iters <n>    set the number of iterations, in [1, 100] (alias: n)
  x0 <value>   set the starting position, in [-5, 5]
  show         run again and print the summary (alias: run)
  trace        run again and print every step
  json         run again and print the full report as JSON
  help         show this message
  quit         leave (alias: exit, q)";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetExpression(String),
    SetLearningRate(f64),
    SetIterations(usize),
    SetInitialPosition(f64),
    Show,
    Trace,
    Json,
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "f" | "expr" => {
            if rest.is_empty() {
                Err("usage: f <expression>".to_string())
            } else {
                Ok(Command::SetExpression(rest.to_string()))
            }
        }
        "lr" => parse_learning_rate(rest).map(Command::SetLearningRate),
        "iters" | "n" => parse_iterations(rest).map(Command::SetIterations),
        "x0" => parse_initial_position(rest).map(Command::SetInitialPosition),
        "show" | "run" => Ok(Command::Show),
        "trace" => Ok(Command::Trace),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}', type 'help'", other)),
    }
}

/// Apply a parameter change; returns false for commands that change nothing
pub fn apply(input: &mut ExperimentInput, command: &Command) -> bool {
    match command {
        Command::SetExpression(expr) => input.expression = expr.clone(),
        Command::SetLearningRate(lr) => input.learning_rate = *lr,
        Command::SetIterations(n) => input.iterations = *n,
        Command::SetInitialPosition(x0) => input.initial_position = *x0,
        _ => return false,
    }
    true
}

pub fn run(mut input: ExperimentInput, color: bool) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("gradlab {} - type 'help' for commands", env!("CARGO_PKG_VERSION"));
    report_outcome(execute(&input, OutputMode::Text { trace: false }, color));

    loop {
        let line = match editor.readline("gradlab> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("{}", msg);
                continue;
            }
        };

        let mode = match command {
            Command::Quit => break,
            Command::Empty => continue,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Trace => OutputMode::Text { trace: true },
            Command::Json => OutputMode::Json,
            _ => OutputMode::Text { trace: false },
        };

        apply(&mut input, &command);
        report_outcome(execute(&input, mode, color));
    }

    Ok(())
}

/// Errors end the current run only, not the session
fn report_outcome(outcome: anyhow::Result<()>) {
    if let Err(err) = outcome {
        eprintln!("{}", error_line(&err));
    }
}
