use async_trait::async_trait;

use super::import_model::{FeedRecord, ImportSummary};
use crate::Result;

/// Source of catalog records.
#[async_trait]
pub trait TransactionFeedClient: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedRecord>>;
}

/// Trait defining the contract for seeding the record store.
#[async_trait]
pub trait ImportServiceTrait: Send + Sync {
    /// Validates and stores the given records. Invalid records are skipped,
    /// ids already present are left untouched.
    async fn import_records(&self, records: Vec<FeedRecord>) -> Result<ImportSummary>;

    /// Fetches the feed at `url` and imports it.
    async fn import_from_feed(&self, url: &str) -> Result<ImportSummary>;

    /// Imports from `url` only when the store holds no records. Returns
    /// `None` when the store was already populated.
    async fn seed_if_empty(&self, url: &str) -> Result<Option<ImportSummary>>;
}
