use thiserror::Error;

use crate::months::MonthOrdinal;

/// Errors raised by report aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The category breakdown found no records for the month.
    #[error("No sales data found for the given month.")]
    NoMatchingData { month: MonthOrdinal },
}
