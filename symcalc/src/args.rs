use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

/// Evaluate, differentiate and simplify expressions.
///
/// Variables are written in double quotes (`"x"`), so remember to quote the whole expression for
/// your shell: `symcalc diff 'sin("x") ^ 2' --var x`.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maximum level of the log messages written to stderr (off, error, warn, info, debug, trace).
    #[arg(long, global = true, env = "SYMCALC_LOG", default_value = "warn")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate an expression to a number.
    Eval(EvalArgs),

    /// Differentiate an expression with respect to a variable.
    Diff(DiffArgs),

    /// Simplify an expression.
    Simplify(SimplifyArgs),
}

impl Command {
    /// Returns the expression given on the command line, if any.
    pub fn expr(&self) -> Option<&str> {
        match self {
            Self::Eval(args) => args.expr.as_deref(),
            Self::Diff(args) => args.expr.as_deref(),
            Self::Simplify(args) => args.expr.as_deref(),
        }
    }
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// The expression to evaluate. Read from stdin if omitted.
    pub expr: Option<String>,

    /// Binds a variable to a value. May be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub bindings: Vec<(String, f64)>,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// The expression to differentiate. Read from stdin if omitted.
    pub expr: Option<String>,

    /// The variable to differentiate with respect to.
    #[arg(long)]
    pub var: String,

    /// Simplify the derivative before printing it.
    #[arg(long)]
    pub simplify: bool,

    /// Print variables without quotes. The output can no longer be parsed.
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Args)]
pub struct SimplifyArgs {
    /// The expression to simplify. Read from stdin if omitted.
    pub expr: Option<String>,

    /// Print every rule applied to stderr.
    #[arg(long)]
    pub steps: bool,

    /// Print variables without quotes. The output can no longer be parsed.
    #[arg(long)]
    pub plain: bool,
}

/// Parses a `NAME=VALUE` variable binding.
fn parse_binding(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s.split_once('=')
        .ok_or_else(|| format!("expected `NAME=VALUE`, found `{}`", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in `{}`", s));
    }
    let value = value.trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for `{}`: {}", name, err))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn eval_with_bindings() {
        let cli = Cli::try_parse_from(["symcalc", "eval", "\"x\" + \"y\"", "--set", "x=2", "--set", "y = -0.5"])
            .unwrap();
        let Command::Eval(args) = cli.command else {
            panic!("expected the eval subcommand");
        };
        assert_eq!(args.expr.as_deref(), Some("\"x\" + \"y\""));
        assert_eq!(args.bindings, vec![("x".to_string(), 2.0), ("y".to_string(), -0.5)]);
    }

    #[test]
    fn diff_flags() {
        let cli = Cli::try_parse_from(["symcalc", "--log-level", "debug", "diff", "--var", "x", "--simplify"])
            .unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(cli.command.expr(), None);

        let Command::Diff(args) = cli.command else {
            panic!("expected the diff subcommand");
        };
        assert_eq!(args.var, "x");
        assert!(args.simplify);
        assert!(!args.plain);
    }

    #[test]
    fn simplify_flags() {
        let cli = Cli::try_parse_from(["symcalc", "simplify", "\"x\" * 1", "--steps", "--plain", "--log-level", "off"])
            .unwrap();
        assert_eq!(cli.log_level, LevelFilter::Off);
        assert_eq!(cli.command.expr(), Some("\"x\" * 1"));

        let Command::Simplify(args) = cli.command else {
            panic!("expected the simplify subcommand");
        };
        assert!(args.steps);
        assert!(args.plain);
    }

    #[test]
    fn missing_var() {
        let err = Cli::try_parse_from(["symcalc", "diff", "\"x\""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn malformed_binding() {
        for binding in ["x", "=2", "x=two"] {
            let err = Cli::try_parse_from(["symcalc", "eval", "\"x\"", "--set", binding]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "for {binding}");
        }
    }

    #[test]
    fn bad_log_level() {
        let err = Cli::try_parse_from(["symcalc", "--log-level", "loud", "eval", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn binding_parser() {
        assert_eq!(parse_binding("rate=1e-3"), Ok(("rate".to_string(), 1e-3)));
        assert!(parse_binding("rate").is_err());
    }
}
