use ariadne::Fmt;
use symcalc_attrs::ErrorKind;
use symcalc_error::{ErrorKind, EXPR};

/// The variable is not bound in the context the expression was evaluated in.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("undefined variable `{}`", self.name),
    labels = ["this variable"],
    help = if self.suggestions.is_empty() {
        format!("to define it, pass: {}", format!("--set {}=<value>", self.name).fg(EXPR))
    } else {
        format!(
            "did you mean {}?",
            self.suggestions
                .iter()
                .map(|name| format!("`{}`", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        )
    },
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Bound variables with a similar name.
    pub suggestions: Vec<String>,
}
