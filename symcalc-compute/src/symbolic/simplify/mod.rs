//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which reduces an expression with a single
//! bottom-up pass. The operands of every node are simplified first, and the node is rebuilt from
//! the simplified operands. Then the first matching rule in [`rules::all`] is applied to the
//! rebuilt node, if any. Nothing is revisited afterwards: a rule always produces either a constant
//! or one of the already simplified operands, so one pass is enough for the rules in this module.

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use log::debug;
use step::Step;
use symcalc_error::Error;
use symcalc_parser::parser::ast::Expr;

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let rebuilt = match expr {
        Expr::Constant(_) | Expr::Variable(_) => return Ok(expr.clone()),
        Expr::Add(lhs, rhs) => Expr::add(
            inner_simplify_with(lhs, step_collector)?,
            inner_simplify_with(rhs, step_collector)?,
        ),
        Expr::Sub(lhs, rhs) => Expr::sub(
            inner_simplify_with(lhs, step_collector)?,
            inner_simplify_with(rhs, step_collector)?,
        ),
        Expr::Mul(lhs, rhs) => Expr::mul(
            inner_simplify_with(lhs, step_collector)?,
            inner_simplify_with(rhs, step_collector)?,
        ),
        // a denominator that simplified to zero is rejected here, before it can be folded
        Expr::Div(quotient) => Expr::div(
            inner_simplify_with(quotient.numerator(), step_collector)?,
            inner_simplify_with(quotient.denominator(), step_collector)?,
        )?,
        Expr::Pow(base, exp) => Expr::pow(
            inner_simplify_with(base, step_collector)?,
            inner_simplify_with(exp, step_collector)?,
        ),
        Expr::Log(arg) => Expr::log(inner_simplify_with(arg, step_collector)?),
        Expr::Sin(arg) => Expr::sin(inner_simplify_with(arg, step_collector)?),
        Expr::Cos(arg) => Expr::cos(inner_simplify_with(arg, step_collector)?),
    };

    Ok(rules::apply(rebuilt, step_collector))
}

/// Simplify the given expression.
///
/// Returns a [`DivisionByZero`] error if the denominator of a division simplifies to `0`.
///
/// [`DivisionByZero`]: symcalc_parser::parser::ast::DivisionByZero
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Simplify the given expression, reporting every rule applied to the given step collector in the
/// order it was applied.
pub fn simplify_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    inner_simplify_with(expr, step_collector)
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = inner_simplify_with(expr, &mut steps)?;
    debug!("simplified a {}-node tree to {} nodes in {} steps", expr.node_count(), simplified.node_count(), steps.len());
    Ok((simplified, steps))
}
