use crate::{
    error::{CalcError, CalcResult},
    interpreter::scope::VariableScope,
};

/// Returns `true` if `name` can be used as a variable name.
///
/// Valid names are nonempty and consist of ASCII letters only.
///
/// # Example
/// ```
/// use reckon::interpreter::assignment::is_valid_identifier;
///
/// assert!(is_valid_identifier("total"));
/// assert!(!is_valid_identifier("a1"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Returns `true` if the line is an assignment rather than an expression.
#[must_use]
pub fn is_assignment(line: &str) -> bool {
    line.contains('=')
}

/// Executes an assignment line such as `a = 5` or `b = a`.
///
/// The line is split at its first `=`. The left side has to be a valid
/// identifier. The right side is either an integer literal, optionally
/// signed, or the name of a variable that is already bound.
///
/// # Parameters
/// - `line`: The assignment text; it must contain `=`.
/// - `scope`: The scope that receives the binding.
///
/// # Returns
/// The assigned value, or `InvalidIdentifier`, `InvalidAssignment` or
/// `UnknownVariable`. On failure the scope is left untouched.
///
/// # Example
/// ```
/// use reckon::{
///     error::ErrorKind,
///     interpreter::{assignment::assign, scope::VariableScope},
/// };
///
/// let mut scope = VariableScope::new();
/// assert_eq!(assign("a = -3", &mut scope), Ok(-3));
/// assert_eq!(assign("b = a", &mut scope), Ok(-3));
/// assert_eq!(assign("c = 4d", &mut scope).unwrap_err().kind(), ErrorKind::InvalidAssignment);
/// ```
#[tracing::instrument(level = "trace", skip(scope))]
pub fn assign(line: &str, scope: &mut VariableScope) -> CalcResult<i64> {
    let (target, value) = line.split_once('=')
                              .ok_or(CalcError::InvalidAssignment { value: line.to_owned() })?;
    let target = target.trim();
    let value = value.trim();

    if !is_valid_identifier(target) {
        return Err(CalcError::InvalidIdentifier { name: target.to_owned() });
    }

    let resolved = match value.parse::<i64>() {
        Ok(literal) => literal,
        Err(_) if is_valid_identifier(value) => scope.get(value)?,
        Err(_) => return Err(CalcError::InvalidAssignment { value: value.to_owned() }),
    };

    scope.set(target, resolved);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind(line: &str, scope: &mut VariableScope) -> ErrorKind {
        assign(line, scope).unwrap_err().kind()
    }

    #[test]
    fn assigns_literals() {
        let mut scope = VariableScope::new();
        assert_eq!(assign("a=5", &mut scope), Ok(5));
        assert_eq!(assign("  b   =  +7 ", &mut scope), Ok(7));
        assert_eq!(assign("c = -12", &mut scope), Ok(-12));
        assert_eq!(scope.get("b"), Ok(7));
    }

    #[test]
    fn assigns_from_other_variable() {
        let mut scope = VariableScope::new();
        scope.set("a", 9);

        assert_eq!(assign("b = a", &mut scope), Ok(9));
        assert_eq!(scope.get("b"), Ok(9));
    }

    #[test]
    fn reassignment_overwrites() {
        let mut scope = VariableScope::new();
        assign("a = 1", &mut scope).unwrap();
        assign("a = 2", &mut scope).unwrap();

        assert_eq!(scope.get("a"), Ok(2));
    }

    #[test]
    fn invalid_identifier() {
        let mut scope = VariableScope::new();
        for line in ["a1 = 5", "= 5", "1 = 1", "x y = 3"] {
            assert_eq!(kind(line, &mut scope), ErrorKind::InvalidIdentifier, "line: {line:?}");
        }
        assert!(scope.is_empty());
    }

    #[test]
    fn invalid_assignment() {
        let mut scope = VariableScope::new();
        for line in ["a = 7 = 8", "a = 1 + 2", "a = b2", "a =", "a = 99999999999999999999"] {
            assert_eq!(kind(line, &mut scope), ErrorKind::InvalidAssignment, "line: {line:?}");
        }
        assert!(!scope.contains("a"));
    }

    #[test]
    fn unknown_variable_on_the_right() {
        let mut scope = VariableScope::new();
        assert_eq!(assign("a = b", &mut scope),
                   Err(CalcError::UnknownVariable { name: "b".to_owned() }));
        assert!(!scope.contains("a"));
    }

    #[test]
    fn detects_assignment_lines() {
        assert!(is_assignment("a = 1"));
        assert!(is_assignment("="));
        assert!(!is_assignment("a + 1"));
    }
}
