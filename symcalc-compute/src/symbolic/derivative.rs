use log::trace;
use symcalc_error::Error;
use symcalc_parser::parser::ast::Expr;

fn zero() -> Expr {
    Expr::Constant(0.0)
}

fn one() -> Expr {
    Expr::Constant(1.0)
}

/// `(f / g)' = (f' * g - f * g') / (g * g)`
fn quotient_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    let numerator = Expr::sub(
        Expr::mul(differentiate(f, var)?, g.clone()),
        Expr::mul(f.clone(), differentiate(g, var)?),
    );
    Expr::div(numerator, Expr::mul(g.clone(), g.clone()))
}

/// `(f ^ g)' = f ^ g * (g * f' / f + g' * log(f))`
///
/// This is the general rule obtained by logarithmic differentiation, so it holds for a variable
/// base, a variable exponent, or both.
fn power_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    let base_term = Expr::div(Expr::mul(g.clone(), differentiate(f, var)?), f.clone())?;
    let exp_term = Expr::mul(differentiate(g, var)?, Expr::log(f.clone()));
    Ok(Expr::mul(
        Expr::pow(f.clone(), g.clone()),
        Expr::add(base_term, exp_term),
    ))
}

/// Computes the derivative of the given expression with respect to the variable `var`.
///
/// Every other variable is treated as a constant. The returned tree is not simplified, and the
/// operands of each rule are produced in a fixed order:
///
/// | Expression | Derivative |
/// | --- | --- |
/// | `c` | `0` |
/// | `var` | `1` |
/// | `f + g`, `f - g` | `f' + g'`, `f' - g'` |
/// | `f * g` | `f * g' + f' * g` |
/// | `f / g` | `(f' * g - f * g') / (g * g)` |
/// | `f ^ g` | `f ^ g * (g * f' / f + g' * log(f))` |
/// | `log(f)` | `f' / f` |
/// | `sin(f)` | `f' * cos(f)` |
/// | `cos(f)` | `-1 * (f' * sin(f))` |
///
/// Returns a [`DivisionByZero`] error if one of the divisions above would have a denominator of
/// literally `0`, which happens only when differentiating `log(0)` or a power with a base of `0`.
///
/// [`DivisionByZero`]: symcalc_parser::parser::ast::DivisionByZero
pub fn derivative(expr: &Expr, var: &str) -> Result<Expr, Error> {
    let result = differentiate(expr, var)?;
    trace!("derivative of a {}-node tree has {} nodes", expr.node_count(), result.node_count());
    Ok(result)
}

fn differentiate(expr: &Expr, var: &str) -> Result<Expr, Error> {
    Ok(match expr {
        Expr::Constant(_) => zero(),
        Expr::Variable(name) => if name == var { one() } else { zero() },
        Expr::Add(f, g) => Expr::add(differentiate(f, var)?, differentiate(g, var)?),
        Expr::Sub(f, g) => Expr::sub(differentiate(f, var)?, differentiate(g, var)?),
        Expr::Mul(f, g) => Expr::add(
            Expr::mul((**f).clone(), differentiate(g, var)?),
            Expr::mul(differentiate(f, var)?, (**g).clone()),
        ),
        Expr::Div(quotient) => quotient_rule(quotient.numerator(), quotient.denominator(), var)?,
        Expr::Pow(f, g) => power_rule(f, g, var)?,
        Expr::Log(f) => Expr::div(differentiate(f, var)?, (**f).clone())?,
        Expr::Sin(f) => Expr::mul(differentiate(f, var)?, Expr::cos((**f).clone())),
        Expr::Cos(f) => Expr::mul(
            Expr::Constant(-1.0),
            Expr::mul(differentiate(f, var)?, Expr::sin((**f).clone())),
        ),
    })
}
