use std::collections::BTreeMap;

use crate::error::{CalcError, CalcResult};

/// Stores the variables of a calculator session.
///
/// A `VariableScope` maps variable names to integer values. It is created
/// empty, filled by the assignment handler and only read while an expression
/// is being evaluated. Names are not validated here; callers are expected to
/// check them with
/// [`is_valid_identifier`](crate::interpreter::assignment::is_valid_identifier)
/// first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableScope {
    bindings: BTreeMap<String, i64>,
}

impl VariableScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    ///
    /// # Returns
    /// The bound value, or `CalcError::UnknownVariable` if `name` was never
    /// assigned.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::ErrorKind, interpreter::scope::VariableScope};
    ///
    /// let mut scope = VariableScope::new();
    /// scope.set("a", 5);
    ///
    /// assert_eq!(scope.get("a"), Ok(5));
    /// assert_eq!(scope.get("b").unwrap_err().kind(), ErrorKind::UnknownVariable);
    /// ```
    pub fn get(&self, name: &str) -> CalcResult<i64> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| CalcError::UnknownVariable { name: name.to_owned() })
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: i64) {
        tracing::trace!(name, value, "binding variable");
        self.bindings.insert(name.to_owned(), value);
    }

    /// Returns `true` if `name` has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over all bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_binding() {
        let mut scope = VariableScope::new();
        scope.set("n", 1);
        scope.set("n", -7);

        assert_eq!(scope.get("n"), Ok(-7));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut scope = VariableScope::new();
        scope.set("Total", 3);

        assert!(scope.contains("Total"));
        assert!(!scope.contains("total"));
        assert_eq!(scope.get("total"),
                   Err(CalcError::UnknownVariable { name: "total".to_owned() }));
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let mut scope = VariableScope::new();
        scope.set("b", 2);
        scope.set("a", 1);

        let names: Vec<_> = scope.iter().collect();
        assert_eq!(names, vec![("a", 1), ("b", 2)]);
    }
}
