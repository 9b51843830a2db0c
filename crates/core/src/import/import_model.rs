//! Catalog feed models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::transactions::NewTransaction;

/// One entry of the remote catalog feed, as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub sold: bool,
    /// RFC 3339 timestamp, usually with an offset.
    pub date_of_sale: String,
}

impl FeedRecord {
    /// Validates the record and converts it into a storable transaction.
    ///
    /// The price must be finite and non-negative; the sale date is converted
    /// to UTC before the month is derived from it.
    pub fn into_new_transaction(self) -> Result<NewTransaction> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidInput(format!(
                "record {} has invalid price {}",
                self.id, self.price
            ))
            .into());
        }
        let price = Decimal::try_from(self.price)
            .map_err(|e| {
                ValidationError::InvalidInput(format!("record {} price: {}", self.id, e))
            })?
            .normalize();
        let date_of_sale = DateTime::parse_from_rfc3339(self.date_of_sale.trim())?
            .with_timezone(&Utc);

        Ok(NewTransaction {
            id: self.id,
            title: self.title,
            description: self.description,
            price,
            category: self.category,
            sold: self.sold,
            date_of_sale,
            image: self.image,
        })
    }
}

/// Outcome of one import run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Records present in the feed.
    pub received: usize,
    /// Records written to the store.
    pub inserted: usize,
    /// Records rejected by validation.
    pub skipped: usize,
}
