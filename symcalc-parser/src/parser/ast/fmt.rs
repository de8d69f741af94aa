use std::fmt::{self, Debug, Display, Formatter};
use super::expr::{Expr, Quotient};

/// Writes a binary node as `(lhs op rhs)`, passing the alternate flag down to the operands.
fn fmt_binary(f: &mut Formatter, lhs: &Expr, op: &str, rhs: &Expr) -> fmt::Result {
    if f.alternate() {
        write!(f, "({:#} {} {:#})", lhs, op, rhs)
    } else {
        write!(f, "({} {} {})", lhs, op, rhs)
    }
}

fn fmt_call(f: &mut Formatter, name: &str, arg: &Expr) -> fmt::Result {
    if f.alternate() {
        write!(f, "{}({:#})", name, arg)
    } else {
        write!(f, "{}({})", name, arg)
    }
}

/// The canonical, fully parenthesized rendering of an expression.
///
/// Variables are printed double-quoted rather than as bare names, because the parser only accepts
/// quoted variables. This way the output can be parsed back into an equal tree as long as every
/// constant is finite and non-negative. The alternate form (`{:#}`) prints bare variable names
/// for display only.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => {
                if f.alternate() {
                    write!(f, "{}", name)
                } else {
                    write!(f, "\"{}\"", name)
                }
            },
            Self::Add(lhs, rhs) => fmt_binary(f, lhs, "+", rhs),
            Self::Sub(lhs, rhs) => fmt_binary(f, lhs, "-", rhs),
            Self::Mul(lhs, rhs) => fmt_binary(f, lhs, "*", rhs),
            Self::Div(quotient) => fmt_binary(f, quotient.numerator(), "/", quotient.denominator()),
            Self::Pow(lhs, rhs) => fmt_binary(f, lhs, "^", rhs),
            Self::Log(arg) => fmt_call(f, "log", arg),
            Self::Sin(arg) => fmt_call(f, "sin", arg),
            Self::Cos(arg) => fmt_call(f, "cos", arg),
        }
    }
}

/// The constructor form of an expression, such as `Add(Constant(5), Variable("x"))`.
impl Debug for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "Constant({})", value),
            Self::Variable(name) => write!(f, "Variable({:?})", name),
            Self::Add(lhs, rhs) => write!(f, "Add({:?}, {:?})", lhs, rhs),
            Self::Sub(lhs, rhs) => write!(f, "Sub({:?}, {:?})", lhs, rhs),
            Self::Mul(lhs, rhs) => write!(f, "Mul({:?}, {:?})", lhs, rhs),
            Self::Div(quotient) => write!(
                f,
                "Div({:?}, {:?})",
                quotient.numerator(),
                quotient.denominator(),
            ),
            Self::Pow(lhs, rhs) => write!(f, "Pow({:?}, {:?})", lhs, rhs),
            Self::Log(arg) => write!(f, "Log({:?})", arg),
            Self::Sin(arg) => write!(f, "Sin({:?})", arg),
            Self::Cos(arg) => write!(f, "Cos({:?})", arg),
        }
    }
}

impl Debug for Quotient {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Quotient({:?}, {:?})", self.numerator(), self.denominator())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn display_leaves() {
        assert_eq!(Expr::Constant(5.0).to_string(), "5");
        assert_eq!(Expr::Constant(2.5).to_string(), "2.5");
        assert_eq!(Expr::Constant(std::f64::consts::PI).to_string(), "3.141592653589793");
        assert_eq!(x().to_string(), "\"x\"");
        assert_eq!(format!("{:#}", x()), "x");
    }

    #[test]
    fn display_parenthesizes_every_binary_node() {
        let expr = Expr::add(
            Expr::mul(Expr::Constant(2.0), x()),
            Expr::pow(x(), Expr::Constant(2.0)),
        );
        assert_eq!(expr.to_string(), "((2 * \"x\") + (\"x\" ^ 2))");
        assert_eq!(format!("{:#}", expr), "((2 * x) + (x ^ 2))");
    }

    #[test]
    fn display_functions() {
        let expr = Expr::div(Expr::sin(x()), Expr::log(Expr::cos(x()))).unwrap();
        assert_eq!(expr.to_string(), "(sin(\"x\") / log(cos(\"x\")))");
        assert_eq!(format!("{:#}", expr), "(sin(x) / log(cos(x)))");
        assert_eq!(Expr::sin(Expr::sub(x(), Expr::Constant(1.0))).to_string(), "sin((\"x\" - 1))");
    }

    #[test]
    fn debug_constructor_form() {
        assert_eq!(
            format!("{:?}", Expr::add(Expr::Constant(5.0), x())),
            "Add(Constant(5), Variable(\"x\"))",
        );
        assert_eq!(
            format!("{:?}", Expr::div(x(), Expr::Constant(2.0)).unwrap()),
            "Div(Variable(\"x\"), Constant(2))",
        );
        assert_eq!(
            format!("{:?}", Expr::cos(Expr::mul(Expr::Constant(-1.0), x()))),
            "Cos(Mul(Constant(-1), Variable(\"x\")))",
        );
    }
}
