/// Calculator errors.
///
/// Defines the single error type shared by every stage of the pipeline and by
/// the assignment handler. Its `Display` output is the fixed message shown to
/// the user; the variants carry extra detail for logging.
pub mod calc_error;
/// Error kinds.
///
/// A plain, copyable discriminant for [`CalcError`], used by callers that only
/// need to know which class of failure happened.
pub mod error_kind;

pub use calc_error::{CalcError, CalcResult};
pub use error_kind::ErrorKind;
