//! Tallyboard Core - domain entities, query engine, and report aggregators.
//!
//! This crate turns a month name plus optional search text into a
//! [`transactions::TransactionFilter`] and reduces the matching sale records
//! into the dashboard's four shapes: a page of rows, sales statistics, a
//! price-range histogram, and a per-category breakdown.
//!
//! It is database-agnostic and defines the repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod import;
pub mod months;
pub mod reports;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
