use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use super::import_model::{FeedRecord, ImportSummary};
use super::import_traits::{ImportServiceTrait, TransactionFeedClient};
use crate::transactions::TransactionRepositoryTrait;
use crate::Result;

/// Catalog loader: the only writer of the record store.
pub struct ImportService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    feed_client: Arc<dyn TransactionFeedClient>,
}

impl ImportService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        feed_client: Arc<dyn TransactionFeedClient>,
    ) -> Self {
        Self {
            repository,
            feed_client,
        }
    }
}

#[async_trait]
impl ImportServiceTrait for ImportService {
    async fn import_records(&self, records: Vec<FeedRecord>) -> Result<ImportSummary> {
        let received = records.len();
        let mut valid = Vec::with_capacity(received);
        for record in records {
            let id = record.id;
            match record.into_new_transaction() {
                Ok(transaction) => valid.push(transaction),
                Err(e) => warn!("Skipping feed record {}: {}", id, e),
            }
        }
        let skipped = received - valid.len();
        let inserted = self.repository.insert_transactions(valid).await?;

        let summary = ImportSummary {
            received,
            inserted,
            skipped,
        };
        info!(
            "Imported catalog: {} received, {} inserted, {} skipped",
            summary.received, summary.inserted, summary.skipped
        );
        Ok(summary)
    }

    async fn import_from_feed(&self, url: &str) -> Result<ImportSummary> {
        let records = self.feed_client.fetch(url).await?;
        self.import_records(records).await
    }

    async fn seed_if_empty(&self, url: &str) -> Result<Option<ImportSummary>> {
        let existing = self.repository.count_all()?;
        if existing > 0 {
            info!("Record store already holds {} records, skipping seed", existing);
            return Ok(None);
        }
        self.import_from_feed(url).await.map(Some)
    }
}
