//! SQLite storage implementation for the transaction record store.

mod model;
mod repository;

pub use model::TransactionDB;
pub use repository::TransactionRepository;
