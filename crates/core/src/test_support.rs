//! Shared fixtures for unit tests: an in-memory record store and a
//! transaction builder.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::errors::{DatabaseError, Error, Result};
use crate::transactions::{NewTransaction, Transaction, TransactionFilter, TransactionRepositoryTrait};

/// Record store that evaluates filters with `TransactionFilter::matches`.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    rows: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    fn matching(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.rows
            .read()
            .unwrap()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    fn count_transactions(&self, filter: &TransactionFilter) -> Result<i64> {
        Ok(self.matching(filter).len() as i64)
    }

    fn search_transactions(
        &self,
        filter: &TransactionFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    fn load_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        Ok(self.matching(filter))
    }

    fn count_all(&self) -> Result<i64> {
        Ok(self.rows.read().unwrap().len() as i64)
    }

    async fn insert_transactions(&self, transactions: Vec<NewTransaction>) -> Result<usize> {
        let mut rows = self.rows.write().unwrap();
        let mut ids: HashSet<i64> = rows.iter().map(|t| t.id).collect();
        let mut inserted = 0;
        for new in transactions {
            if ids.insert(new.id) {
                rows.push(new.into());
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

/// Record store whose every read fails, for error propagation tests.
pub struct FailingTransactionRepository;

#[async_trait]
impl TransactionRepositoryTrait for FailingTransactionRepository {
    fn count_transactions(&self, _filter: &TransactionFilter) -> Result<i64> {
        Err(store_down())
    }

    fn search_transactions(
        &self,
        _filter: &TransactionFilter,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<Transaction>> {
        Err(store_down())
    }

    fn load_transactions(&self, _filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        Err(store_down())
    }

    fn count_all(&self) -> Result<i64> {
        Err(store_down())
    }

    async fn insert_transactions(&self, _transactions: Vec<NewTransaction>) -> Result<usize> {
        Err(store_down())
    }
}

fn store_down() -> Error {
    Error::Database(DatabaseError::ConnectionFailed("store offline".to_string()))
}

/// Sale date at noon UTC on the given day.
pub fn sale_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn transaction(
    id: i64,
    title: &str,
    price: Decimal,
    category: &str,
    sold: bool,
    date_of_sale: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id,
        title: title.to_string(),
        description: format!("Description of {}", title),
        price,
        category: category.to_string(),
        sold,
        date_of_sale,
        image: format!("https://img.example.com/{}.jpg", id),
    }
}
