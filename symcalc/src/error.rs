use std::io::{self, IsTerminal};
use symcalc_error::Error;

/// Utility enum to package the errors that can stop a command.
#[derive(Debug)]
pub enum CliError {
    /// The expression could not be parsed, evaluated, differentiated or simplified.
    Expr(Error),

    /// The expression could not be read from stdin.
    Io(io::Error),
}

impl CliError {
    /// Report this error to stderr.
    ///
    /// When stderr is a terminal, an error that points at the input is rendered as an `ariadne`
    /// report highlighting the offending part of `input`. Otherwise, only a single `Error: ` line
    /// is printed.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Expr(err) if !err.spans.is_empty() && io::stderr().is_terminal() => {
                if err.report_to_stderr("input", input).is_err() {
                    eprintln!("Error: {}", err);
                }
            },
            Self::Expr(err) => eprintln!("Error: {}", err),
            Self::Io(err) => eprintln!("Error: could not read the expression from stdin: {}", err),
        }
    }
}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        Self::Expr(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
