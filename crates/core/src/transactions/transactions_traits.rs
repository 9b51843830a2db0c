use super::transactions_model::{NewTransaction, Transaction, TransactionPage};
use super::{PageRequest, TransactionFilter};
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for the record store.
///
/// Reads take a [`TransactionFilter`] and must select exactly the records
/// `TransactionFilter::matches` accepts. Within a single call the store is
/// treated as a stable snapshot.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Number of records matching the filter.
    fn count_transactions(&self, filter: &TransactionFilter) -> Result<i64>;

    /// At most `limit` matching records starting at `offset`, in the store's
    /// natural (insertion) order.
    fn search_transactions(
        &self,
        filter: &TransactionFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>>;

    /// Every matching record, in natural order.
    fn load_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;

    /// Number of records in the store regardless of month.
    fn count_all(&self) -> Result<i64>;

    /// Loads records, ignoring ids that already exist. Returns the number
    /// actually inserted. Only the catalog loader writes.
    async fn insert_transactions(&self, transactions: Vec<NewTransaction>) -> Result<usize>;
}

/// Trait defining the contract for the listing operation.
pub trait TransactionServiceTrait: Send + Sync {
    /// Resolves `month`, applies the optional search text, and returns the
    /// requested page together with the total match count.
    fn list_transactions(
        &self,
        month: Option<&str>,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<TransactionPage>;
}
