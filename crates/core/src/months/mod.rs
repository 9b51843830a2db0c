//! Months module - month-name resolution for month-of-year filtering.

mod months_errors;
mod months_model;

#[cfg(test)]
mod months_model_tests;

pub use months_errors::MonthError;
pub use months_model::{MonthOrdinal, MonthTable, ENGLISH_MONTH_NAMES};
