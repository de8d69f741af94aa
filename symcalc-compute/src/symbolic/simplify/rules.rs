//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. A rule only looks at the node it is given; the operands of that node are
//! expected to be simplified already.
//!
//! Comparisons against `0` and `1` use exact floating-point equality.

use crate::numerical::eval::Eval;
use crate::symbolic::step_collector::StepCollector;
use log::trace;
use super::step::Step;
use symcalc_parser::parser::ast::Expr;

/// The signature shared by every rule.
pub type Rule = fn(&Expr, &mut dyn StepCollector<Step>) -> Option<Expr>;

/// Replaces an operation whose operands are all constants with its value.
///
/// `2+3 = 5`, `sin(0) = 0`, etc.
pub fn fold_constant(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let children = expr.children();
    if children.is_empty() || !children.iter().all(|child| child.as_constant().is_some()) {
        return None;
    }

    // cannot fail: there are no variables to look up
    let value = expr.eval_default().ok()?;
    step_collector.push(Step::FoldConstant);
    Some(Expr::Constant(value))
}

/// `a+0 = a`
/// `0+a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Add(lhs, rhs) = expr else {
        return None;
    };

    let kept = if rhs.is_constant(0.0) {
        lhs
    } else if lhs.is_constant(0.0) {
        rhs
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some((**kept).clone())
}

/// `a-0 = a`
pub fn sub_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Sub(lhs, rhs) if rhs.is_constant(0.0) => {
            step_collector.push(Step::SubZero);
            Some((**lhs).clone())
        },
        _ => None,
    }
}

/// `a*0 = 0`
/// `0*a = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Mul(lhs, rhs) if lhs.is_constant(0.0) || rhs.is_constant(0.0) => {
            step_collector.push(Step::MultiplyZero);
            Some(Expr::Constant(0.0))
        },
        _ => None,
    }
}

/// `a*1 = a`
/// `1*a = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Mul(lhs, rhs) = expr else {
        return None;
    };

    let kept = if rhs.is_constant(1.0) {
        lhs
    } else if lhs.is_constant(1.0) {
        rhs
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some((**kept).clone())
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Div(quotient) if quotient.denominator().is_constant(1.0) => {
            step_collector.push(Step::DivideOne);
            Some(quotient.numerator().clone())
        },
        _ => None,
    }
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Pow(base, exp) if exp.is_constant(1.0) => {
            step_collector.push(Step::PowerOne);
            Some((**base).clone())
        },
        _ => None,
    }
}

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Pow(_, exp) if exp.is_constant(0.0) => {
            step_collector.push(Step::PowerZero);
            Some(Expr::Constant(1.0))
        },
        _ => None,
    }
}

/// Returns every rule, in the order they are tried. Folding comes first, and a multiplication by
/// zero is checked before a multiplication by one.
pub fn all() -> [Rule; 8] {
    [
        fold_constant,
        add_zero,
        sub_zero,
        multiply_zero,
        multiply_one,
        divide_one,
        power_one,
        power_zero,
    ]
}

/// Applies the first rule that matches the expression, or returns the expression unchanged if no
/// rule matches.
pub fn apply(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    all()
        .into_iter()
        .find_map(|rule| rule(&expr, step_collector))
        .map(|simplified| {
            trace!("rewrote `{}` to `{}`", expr, simplified);
            simplified
        })
        .unwrap_or(expr)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn c(value: f64) -> Expr {
        Expr::Constant(value)
    }

    /// Applies a single rule, returning the result and the recorded steps.
    fn run(rule: Rule, expr: &Expr) -> (Option<Expr>, Vec<Step>) {
        let mut steps = Vec::new();
        let result = rule(expr, &mut steps);
        (result, steps)
    }

    #[test]
    fn fold() {
        assert_eq!(
            run(fold_constant, &Expr::mul(c(3.0), c(4.0))),
            (Some(c(12.0)), vec![Step::FoldConstant]),
        );
        assert_eq!(run(fold_constant, &Expr::cos(c(0.0))).0, Some(c(1.0)));
        assert_eq!(run(fold_constant, &Expr::add(c(3.0), x())), (None, vec![]));
        assert_eq!(run(fold_constant, &c(3.0)), (None, vec![]));
    }

    #[test]
    fn identities() {
        assert_eq!(run(add_zero, &Expr::add(x(), c(0.0))).0, Some(x()));
        assert_eq!(run(add_zero, &Expr::add(c(0.0), x())).0, Some(x()));
        assert_eq!(run(sub_zero, &Expr::sub(x(), c(0.0))).0, Some(x()));
        assert_eq!(run(sub_zero, &Expr::sub(c(0.0), x())).0, None);
        assert_eq!(run(multiply_zero, &Expr::mul(Expr::sin(x()), c(0.0))).0, Some(c(0.0)));
        assert_eq!(run(multiply_one, &Expr::mul(c(1.0), x())).0, Some(x()));
        assert_eq!(run(divide_one, &Expr::div(x(), c(1.0)).unwrap()).0, Some(x()));
        assert_eq!(run(divide_one, &Expr::div(c(1.0), x()).unwrap()).0, None);
        assert_eq!(run(power_one, &Expr::pow(x(), c(1.0))).0, Some(x()));
        assert_eq!(run(power_zero, &Expr::pow(x(), c(0.0))).0, Some(c(1.0)));
        assert_eq!(run(power_zero, &Expr::pow(c(0.0), x())).0, None);
    }

    #[test]
    fn exact_comparison() {
        assert_eq!(run(multiply_one, &Expr::mul(x(), c(1.0 + 1e-12))).0, None);
    }

    #[test]
    fn apply_first_matching_rule() {
        let mut steps = Vec::new();
        assert_eq!(apply(Expr::mul(x(), c(1.0)), &mut steps), x());
        assert_eq!(apply(Expr::add(c(2.0), c(3.0)), &mut steps), c(5.0));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::FoldConstant]);

        let unchanged = Expr::add(x(), Expr::variable("y"));
        assert_eq!(apply(unchanged.clone(), &mut steps), unchanged);
        assert_eq!(steps.len(), 2);
    }
}
