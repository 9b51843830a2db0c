use thiserror::Error;

/// Caller-side month problems. Both are reported as bad requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthError {
    /// No month argument was supplied at all.
    #[error("Month is required.")]
    Missing,

    /// The argument does not name any month in the table.
    #[error("Invalid month. Please provide a valid month name (e.g., January, February, etc.).")]
    Invalid(String),
}
