use super::{ctxt::Ctxt, error::UndefinedVariable};
use symcalc_error::Error;
use symcalc_parser::parser::ast::Expr;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        Ok(match self {
            Expr::Constant(value) => *value,
            Expr::Variable(name) => ctxt.get_var(name)
                .ok_or_else(|| Error::spanless(UndefinedVariable {
                    name: name.clone(),
                    suggestions: ctxt.get_similar_vars(name)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                }))?,
            Expr::Add(lhs, rhs) => lhs.eval(ctxt)? + rhs.eval(ctxt)?,
            Expr::Sub(lhs, rhs) => lhs.eval(ctxt)? - rhs.eval(ctxt)?,
            Expr::Mul(lhs, rhs) => lhs.eval(ctxt)? * rhs.eval(ctxt)?,
            // no zero check: a zero denominator produces an infinity or NaN
            Expr::Div(quotient) => quotient.numerator().eval(ctxt)? / quotient.denominator().eval(ctxt)?,
            Expr::Pow(base, exp) => base.eval(ctxt)?.powf(exp.eval(ctxt)?),
            Expr::Log(arg) => arg.eval(ctxt)?.ln(),
            Expr::Sin(arg) => arg.eval(ctxt)?.sin(),
            Expr::Cos(arg) => arg.eval(ctxt)?.cos(),
        })
    }
}

/// Evaluates the expression with the given variable bindings.
///
/// ```
/// use std::collections::HashMap;
/// use symcalc_compute::numerical::eval::eval;
/// use symcalc_parser::parser::parse;
///
/// let expr = parse("\"x\" ^ \"y\"").unwrap();
/// let bindings = HashMap::from([("x".to_string(), 2.0), ("y".to_string(), 10.0)]);
/// assert_eq!(eval(&expr, bindings).unwrap(), 1024.0);
/// ```
pub fn eval<K, I>(expr: &Expr, bindings: I) -> Result<f64, Error>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, f64)>,
{
    expr.eval(&bindings.into_iter().collect())
}
