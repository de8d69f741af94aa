use super::expr::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }

    /// Visits a binary node once its right operand has been visited, otherwise schedules both
    /// operands so that the left one is visited first.
    fn binary(&mut self, lhs: &'a Expr, rhs: &'a Expr) -> Option<Option<&'a Expr>> {
        if self.is_last_visited(rhs) {
            return Some(self.visit());
        }
        self.stack.push(rhs);
        self.stack.push(lhs);
        None
    }

    fn unary(&mut self, arg: &'a Expr) -> Option<Option<&'a Expr>> {
        if self.is_last_visited(arg) {
            return Some(self.visit());
        }
        self.stack.push(arg);
        None
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let visited = match expr {
                Expr::Constant(_) | Expr::Variable(_) => return self.visit(),
                Expr::Add(lhs, rhs)
                    | Expr::Sub(lhs, rhs)
                    | Expr::Mul(lhs, rhs)
                    | Expr::Pow(lhs, rhs) => self.binary(lhs, rhs),
                Expr::Div(quotient) => self.binary(quotient.numerator(), quotient.denominator()),
                Expr::Log(arg) | Expr::Sin(arg) | Expr::Cos(arg) => self.unary(arg),
            };

            if let Some(visited) = visited {
                return visited;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        // sin(x + 2) ^ (y / 3)
        let expr = Expr::pow(
            Expr::sin(Expr::add(Expr::variable("x"), Expr::Constant(2.0))),
            Expr::div(Expr::variable("y"), Expr::Constant(3.0)).unwrap(),
        );

        let visited = expr.post_order_iter()
            .map(|expr| format!("{:#}", expr))
            .collect::<Vec<_>>();
        assert_eq!(visited, vec![
            "x",
            "2",
            "(x + 2)",
            "sin((x + 2))",
            "y",
            "3",
            "(y / 3)",
            "(sin((x + 2)) ^ (y / 3))",
        ]);
    }

    #[test]
    fn single_leaf() {
        let expr = Expr::Constant(1.0);
        let mut iter = expr.post_order_iter();
        assert!(std::ptr::eq(iter.next().unwrap(), &expr));
        assert!(iter.next().is_none());
    }
}
