//! Transactions module - domain models, query predicate, pagination, and listing.

mod pagination;
mod transactions_filter;
mod transactions_model;
mod transactions_service;
mod transactions_traits;



pub use pagination::PageRequest;
pub use transactions_filter::TransactionFilter;
pub use transactions_model::{price_to_text, NewTransaction, Transaction, TransactionPage};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
