use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
///
/// The constants `pi` and `e` are part of the expression syntax, not of the context, so the
/// default context is empty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value with the same name.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, in sorted
    /// order.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Ctxt {
    fn from(vars: [(K, f64); N]) -> Self {
        vars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn add_and_get() {
        let mut ctxt = Ctxt::new();
        assert_eq!(ctxt.get_var("x"), None);

        ctxt.add_var("x", 2.0);
        ctxt.add_var("x", 3.0);
        assert_eq!(ctxt.get_var("x"), Some(3.0));
        assert_eq!(ctxt.get_vars().len(), 1);
    }

    #[test]
    fn similar_vars() {
        let ctxt = Ctxt::from([("x1", 1.0), ("x2", 2.0), ("y", 3.0), ("total", 4.0)]);
        assert_eq!(ctxt.get_similar_vars("x"), vec!["x1", "x2", "y"]);
        assert_eq!(ctxt.get_similar_vars("totl"), vec!["total"]);
        assert!(ctxt.get_similar_vars("z_axis").is_empty());
    }
}
