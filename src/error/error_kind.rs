/// The class of a [`CalcError`](crate::error::CalcError).
///
/// The set is closed: every failure the calculator can report belongs to
/// exactly one of these kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token structure at any stage of the pipeline.
    InvalidExpression,
    /// A referenced variable has no binding.
    UnknownVariable,
    /// Integer division (or a negative power) with a zero divisor.
    DivisionByZero,
    /// An arithmetic result does not fit in an `i64`.
    Overflow,
    /// The left side of an assignment is not a valid variable name.
    InvalidIdentifier,
    /// The right side of an assignment is neither a literal nor a name.
    InvalidAssignment,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InvalidExpression => "invalid expression",
            Self::UnknownVariable => "unknown variable",
            Self::DivisionByZero => "division by zero",
            Self::Overflow => "overflow",
            Self::InvalidIdentifier => "invalid identifier",
            Self::InvalidAssignment => "invalid assignment",
        };
        write!(f, "{name}")
    }
}
