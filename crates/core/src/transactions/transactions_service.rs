use std::sync::Arc;

use log::debug;

use super::transactions_model::TransactionPage;
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use super::{PageRequest, TransactionFilter};
use crate::months::MonthTable;
use crate::Result;

/// Listing and search over the record store.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    months: Arc<MonthTable>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>, months: Arc<MonthTable>) -> Self {
        Self { repository, months }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn list_transactions(
        &self,
        month: Option<&str>,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<TransactionPage> {
        let month = self.months.resolve_param(month)?;
        let filter = TransactionFilter::for_month(month).with_search(search);
        debug!(
            "Listing transactions for {} (search: {:?}, page {} x {})",
            month,
            filter.search(),
            page.page(),
            page.per_page()
        );

        let total_transactions = self.repository.count_transactions(&filter)?;
        let data = if page.offset() >= total_transactions {
            Vec::new()
        } else {
            self.repository
                .search_transactions(&filter, page.offset(), page.per_page())?
        };

        Ok(TransactionPage {
            data,
            current_page: page.page(),
            total_pages: page.total_pages(total_transactions),
            total_transactions,
        })
    }
}
