use clap::{Args, Parser, Subcommand};
use gradlab_numerical::DEFAULT_TERRAIN_SAMPLES;
use gradlab_parser::{Constant, MathFn};
use gradlab_session::{
    run_experiment, ExperimentInput, DEFAULT_EXPRESSION, DEFAULT_INITIAL_POSITION,
    DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE,
};
use nu_ansi_term::Color;
use std::io::IsTerminal;

mod bounds;
#[cfg(feature = "interactive")]
mod interactive;
mod report;

/// gradlab - Gradient Descent Explorer
#[derive(Parser)]
#[command(name = "gradlab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Watch gradient descent walk down a function of one variable", long_about = "Gradient Descent Explorer\n\nType a function of x, pick a learning rate, an iteration count and a\nstarting point, and follow the fixed-step descent:\n  - Final position, cost and slope with a convergence verdict\n  - Full step trace or a JSON report for plotting\n  - An interactive mode that re-runs on every change")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one descent experiment
    Run {
        #[command(flatten)]
        params: ParamArgs,
        /// Print the full report (trajectory, diagnostics, terrain) as JSON
        #[arg(long)]
        json: bool,
        /// Print every step of the trajectory
        #[arg(long, conflicts_with = "json")]
        trace: bool,
        /// Number of terrain samples in the JSON report
        #[arg(long, value_name = "N", default_value_t = DEFAULT_TERRAIN_SAMPLES, value_parser = bounds::parse_terrain_samples)]
        terrain: usize,
    },
    /// Compile an expression and smoke-test it without descending
    Check {
        /// Function of x
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Point for the smoke evaluation
        #[arg(long, default_value_t = gradlab_eval::SMOKE_TEST_POINT, allow_negative_numbers = true)]
        at: f64,
    },
    /// Explore interactively; every change re-runs the experiment
    Interactive {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// List the functions and constants an expression may use
    Functions,
}

#[derive(Args)]
struct ParamArgs {
    /// Function of x to minimise, e.g. "x**4 - 2*x**2 + 1" or "np.sin(x)"
    #[arg(short = 'f', long = "expr", default_value = DEFAULT_EXPRESSION, allow_hyphen_values = true)]
    expression: String,

    /// Learning rate (step size), in (0, 1.5]
    #[arg(long = "lr", default_value_t = DEFAULT_LEARNING_RATE, value_parser = bounds::parse_learning_rate)]
    learning_rate: f64,

    /// Number of descent steps, in [1, 100]
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS, value_parser = bounds::parse_iterations)]
    iterations: usize,

    /// Starting position, in [-5, 5]
    #[arg(long = "x0", default_value_t = DEFAULT_INITIAL_POSITION, value_parser = bounds::parse_initial_position, allow_negative_numbers = true)]
    initial_position: f64,
}

impl ParamArgs {
    fn into_input(self, terrain_samples: usize) -> ExperimentInput {
        ExperimentInput {
            expression: self.expression,
            learning_rate: self.learning_rate,
            iterations: self.iterations,
            initial_position: self.initial_position,
            terrain_samples,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum OutputMode {
    Text { trace: bool },
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = dispatch(cli.command) {
        eprintln!("{} {}", paint_error("error:"), error_line(&err));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

fn paint_error(text: &str) -> String {
    if std::io::stderr().is_terminal() {
        Color::Red.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// The error's own message; each layer already quotes its cause
pub(crate) fn error_line(err: &anyhow::Error) -> String {
    err.to_string()
}

fn dispatch(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Run {
            params,
            json,
            trace,
            terrain,
        } => {
            let mode = if json {
                OutputMode::Json
            } else {
                OutputMode::Text { trace }
            };
            execute(&params.into_input(terrain), mode, color_enabled())
        }
        Commands::Check { expression, at } => check_command(&expression, at),
        Commands::Interactive { params } => {
            interactive_command(params.into_input(DEFAULT_TERRAIN_SAMPLES))
        }
        Commands::Functions => {
            functions_command();
            Ok(())
        }
    }
}

/// Run one experiment and print it; a failed run prints nothing but the error
pub(crate) fn execute(input: &ExperimentInput, mode: OutputMode, color: bool) -> anyhow::Result<()> {
    let report = match run_experiment(input) {
        Ok(report) => report,
        Err(err) => {
            if let Some(partial) = err.partial_trajectory() {
                eprintln!("{}", report::render_partial(partial));
            }
            return Err(err.into());
        }
    };

    match mode {
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("failed to serialize report: {}", e))?;
            println!("{}", json);
        }
        OutputMode::Text { trace } => print!("{}", report::render_report(&report, color, trace)),
    }
    Ok(())
}

fn check_command(expression: &str, at: f64) -> anyhow::Result<()> {
    let function = gradlab_eval::compile_at(expression, at)?;
    let value = function.evaluate(at)?;

    println!("✓ Syntax OK");
    println!("  parsed as  f(x) = {}", function.expr());
    println!("  f({}) = {}", at, value);
    if function.is_constant() {
        println!("  note: the expression does not depend on x");
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn interactive_command(input: ExperimentInput) -> anyhow::Result<()> {
    interactive::run(input, color_enabled())
}

#[cfg(not(feature = "interactive"))]
fn interactive_command(_input: ExperimentInput) -> anyhow::Result<()> {
    anyhow::bail!("interactive mode is not enabled; rebuild with --features interactive")
}

fn functions_command() {
    let functions: Vec<&str> = MathFn::ALL.iter().map(|f| f.name()).collect();
    let constants: Vec<&str> = Constant::ALL.iter().map(|c| c.name()).collect();

    println!("Variable:   x");
    println!("Operators:  + - * / ^ (or **), parentheses, unary minus");
    println!("Functions:  {}", functions.join(", "));
    println!("Constants:  {}", constants.join(", "));
    println!("Names may be written with an np. or math. prefix, e.g. np.sin(x)");
}
