use thiserror::Error;

use crate::error::ErrorKind;

/// Result type used throughout the calculator.
pub type CalcResult<T> = Result<T, CalcError>;

/// Represents every failure the calculator can report.
///
/// The `Display` text of each variant is the message printed to the user.
/// Additional fields describe the failure in more detail and only show up in
/// logs and `Debug` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression is structurally malformed.
    #[error("Invalid expression")]
    InvalidExpression {
        /// Short description of what was wrong.
        reason: &'static str,
    },
    /// A variable was referenced before being assigned.
    #[error("Unknown variable")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// Integer overflow while computing a result.
    #[error("Integer overflow")]
    Overflow {
        /// The operator symbol that overflowed.
        op: char,
    },
    /// The assignment target is not a valid identifier.
    #[error("Invalid identifier")]
    InvalidIdentifier {
        /// The rejected target.
        name: String,
    },
    /// The assigned value is neither an integer literal nor an identifier.
    #[error("Invalid assignment")]
    InvalidAssignment {
        /// The rejected right-hand side.
        value: String,
    },
}

impl CalcError {
    /// Shorthand for an [`CalcError::InvalidExpression`] with the given
    /// reason.
    #[must_use]
    pub const fn invalid(reason: &'static str) -> Self {
        Self::InvalidExpression { reason }
    }

    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::error::{CalcError, ErrorKind};
    ///
    /// let err = CalcError::invalid("dangling operator");
    /// assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    /// assert_eq!(err.to_string(), "Invalid expression");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            Self::UnknownVariable { .. } => ErrorKind::UnknownVariable,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            Self::InvalidAssignment { .. } => ErrorKind::InvalidAssignment,
        }
    }
}
