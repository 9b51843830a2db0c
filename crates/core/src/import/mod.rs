//! Import module - seeds the record store from the remote catalog feed.

mod feed_client;
mod import_model;
mod import_service;
mod import_traits;


pub use feed_client::HttpFeedClient;
pub use import_model::{FeedRecord, ImportSummary};
pub use import_service::ImportService;
pub use import_traits::{ImportServiceTrait, TransactionFeedClient};
