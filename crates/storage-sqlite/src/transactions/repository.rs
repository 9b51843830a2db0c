use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use log::debug;

use super::model::{TransactionDB, TRANSACTION_COLUMNS};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::transactions;
use crate::utils::{chunk_rows_for_sqlite, contains_pattern, LIKE_ESCAPE};
use tallyboard_core::transactions::{
    NewTransaction, Transaction, TransactionFilter, TransactionRepositoryTrait,
};
use tallyboard_core::Result;

pub struct TransactionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TransactionRepository { pool, writer }
    }

    /// Rows selected by `filter`: the month clause on the indexed
    /// `sale_month` column, then the three-way `LIKE` clause when search text
    /// is present.
    fn filtered_query(filter: &TransactionFilter) -> transactions::BoxedQuery<'static, Sqlite> {
        let mut query = transactions::table
            .filter(transactions::sale_month.eq(filter.month().calendar_month() as i32))
            .into_boxed();

        if let Some(search) = filter.search() {
            let pattern = contains_pattern(search);
            query = query.filter(
                transactions::title
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE)
                    .or(transactions::description
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE))
                    .or(transactions::price.like(pattern).escape(LIKE_ESCAPE)),
            );
        }

        query
    }

    fn into_domain(rows: Vec<TransactionDB>) -> Result<Vec<Transaction>> {
        rows.into_iter()
            .map(|row| Transaction::try_from(row).map_err(Into::into))
            .collect()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn count_transactions(&self, filter: &TransactionFilter) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Self::filtered_query(filter)
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    fn search_transactions(
        &self,
        filter: &TransactionFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        debug!(
            "Searching transactions: {:?} offset {} limit {}",
            filter, offset, limit
        );
        let rows = Self::filtered_query(filter)
            .select(TransactionDB::as_select())
            .order(transactions::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::into_domain(rows)
    }

    fn load_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = Self::filtered_query(filter)
            .select(TransactionDB::as_select())
            .order(transactions::id.asc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::into_domain(rows)
    }

    fn count_all(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        transactions::table
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }

    async fn insert_transactions(&self, new_transactions: Vec<NewTransaction>) -> Result<usize> {
        let rows: Vec<TransactionDB> = new_transactions
            .into_iter()
            .map(TransactionDB::from)
            .collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for chunk in chunk_rows_for_sqlite(&rows, TRANSACTION_COLUMNS) {
                    inserted += diesel::insert_or_ignore_into(transactions::table)
                        .values(chunk)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(inserted)
            })
            .await
    }
}
