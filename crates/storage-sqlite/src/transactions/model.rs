//! Database models for transactions.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::errors::StorageError;
use tallyboard_core::transactions::{price_to_text, NewTransaction, Transaction};

/// Number of bound columns per inserted row.
pub(crate) const TRANSACTION_COLUMNS: usize = 9;

/// Database model for transactions
#[derive(Queryable, Selectable, Insertable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Normalized decimal text, the same form free-text search matches.
    pub price: String,
    pub category: String,
    pub sold: bool,
    /// UTC, without offset.
    pub date_of_sale: NaiveDateTime,
    /// Calendar month 1-12 of `date_of_sale`.
    pub sale_month: i32,
    pub image: String,
}

impl From<NewTransaction> for TransactionDB {
    fn from(domain: NewTransaction) -> Self {
        let sale_month = domain.sale_month().calendar_month() as i32;
        Self {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            price: price_to_text(&domain.price),
            category: domain.category,
            sold: domain.sold,
            date_of_sale: domain.date_of_sale.naive_utc(),
            sale_month,
            image: domain.image,
        }
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&db.price).map_err(|e| {
            StorageError::MalformedRow(format!(
                "transaction {} has price '{}': {}",
                db.id, db.price, e
            ))
        })?;
        Ok(Transaction {
            id: db.id,
            title: db.title,
            description: db.description,
            price,
            category: db.category,
            sold: db.sold,
            date_of_sale: db.date_of_sale.and_utc(),
            image: db.image,
        })
    }
}
