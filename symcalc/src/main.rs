mod args;
mod error;

use args::{Cli, Command};
use clap::{error::ErrorKind, CommandFactory, Parser};
use error::CliError;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{io::{self, IsTerminal, Read}, process::ExitCode};
use symcalc_compute::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{derivative, simplify, simplify_with_steps},
};
use symcalc_error::Error;
use symcalc_parser::parser::{ast::Expr, parse};

/// Sets up logging to stderr, so that log messages never mix with results on stdout.
fn init_logger(level: LevelFilter) {
    // only fails if a logger is already installed
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

/// Returns the expression given on the command line, or reads it from stdin if there is none.
///
/// An interactive stdin is never read, so running `symcalc eval` alone does not hang.
fn read_input(expr: Option<&str>) -> io::Result<String> {
    if let Some(expr) = expr {
        return Ok(expr.to_string());
    }

    let mut input = String::new();
    if !io::stdin().is_terminal() {
        io::stdin().read_to_string(&mut input)?;
    }
    Ok(input)
}

/// Renders an expression, with quoted variables unless `plain` is set.
fn render(expr: &Expr, plain: bool) -> String {
    if plain {
        format!("{:#}", expr)
    } else {
        expr.to_string()
    }
}

/// Parses the input and runs the given subcommand on it, returning the text to print.
fn run(command: &Command, input: &str) -> Result<String, Error> {
    let expr = parse(input)?;

    match command {
        Command::Eval(args) => {
            let ctxt = args.bindings.iter().cloned().collect::<Ctxt>();
            debug!("evaluating variables {:?} with bindings {:?}", expr.variables(), ctxt.get_vars());
            Ok(expr.eval(&ctxt)?.to_string())
        },
        Command::Diff(args) => {
            let mut result = derivative(&expr, &args.var)?;
            if args.simplify {
                result = simplify(&result)?;
            }
            Ok(render(&result, args.plain))
        },
        Command::Simplify(args) => {
            let (result, steps) = simplify_with_steps(&expr)?;
            if args.steps {
                for step in &steps {
                    eprintln!("{}", step);
                }
            }
            Ok(render(&result, args.plain))
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let input = match read_input(cli.command.expr()) {
        Ok(input) => input,
        Err(err) => {
            CliError::from(err).report_to_stderr("");
            return ExitCode::FAILURE;
        },
    };

    let input = input.trim();
    if input.is_empty() {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "no expression provided")
            .exit();
    }
    debug!("running {:?} on `{}`", cli.command, input);

    match run(&cli.command, input) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(err) => {
            CliError::from(err).report_to_stderr(input);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symcalc_parser::parser::{ast::DivisionByZero, error::{ExpectedExpr, NestingTooDeep, UnexpectedToken}};

    fn run_args(args: &[&str], input: &str) -> Result<String, Error> {
        let cli = Cli::try_parse_from(std::iter::once("symcalc").chain(args.iter().copied())).unwrap();
        run(&cli.command, input)
    }

    #[test]
    fn eval() {
        assert_eq!(run_args(&["eval", "--set", "x=4"], "2 * \"x\" + 3").unwrap(), "11");
        assert_eq!(run_args(&["eval"], "1 / 4").unwrap(), "0.25");
        assert_eq!(run_args(&["eval"], "1 / (2 - 2)").unwrap(), "inf");
    }

    #[test]
    fn diff() {
        assert_eq!(
            run_args(&["diff", "--var", "x"], "sin(\"x\")").unwrap(),
            "(1 * cos(\"x\"))",
        );
        assert_eq!(run_args(&["diff", "--var", "x", "--simplify"], "sin(\"x\")").unwrap(), "cos(\"x\")");
        assert_eq!(run_args(&["diff", "--var", "x", "--simplify", "--plain"], "sin(\"x\")").unwrap(), "cos(x)");
    }

    #[test]
    fn diff_output_can_be_piped() {
        let derivative = run_args(&["diff", "--var", "x"], "sin(\"x\") ^ 2").unwrap();
        let simplified = run_args(&["simplify"], &derivative).unwrap();
        let value = run_args(&["eval", "--set", "x=1"], &simplified).unwrap();

        // sin(x)^2 * (2 * cos(x) / sin(x)) = sin(2x)
        let value = value.parse::<f64>().unwrap();
        assert!((value - 2f64.sin()).abs() < 1e-12, "{value} != sin(2)");
    }

    #[test]
    fn simplify() {
        assert_eq!(run_args(&["simplify"], "2 + 3 * 4").unwrap(), "14");
        assert_eq!(run_args(&["simplify", "--plain"], "(\"x\" + 0) * \"y\"").unwrap(), "(x * y)");
    }

    #[test]
    fn errors() {
        let err = run_args(&["simplify"], "\"x\" / (2 - 2)").unwrap_err();
        assert!(err.is::<DivisionByZero>());

        let err = run_args(&["eval"], "2 +").unwrap_err();
        assert!(err.is::<ExpectedExpr>());

        let err = run_args(&["eval"], "(1 + 2").unwrap_err();
        assert!(err.is::<UnexpectedToken>());
        assert_eq!(err.to_string(), "unexpected token `EOF` at position 6, expected `RPAREN`");

        let err = run_args(&["eval"], "\"x\" + 1").unwrap_err();
        assert_eq!(err.to_string(), "undefined variable `x`");

        let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = run_args(&["eval"], &deep).unwrap_err();
        assert!(err.is::<NestingTooDeep>());
    }
}
