//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::months::MonthOrdinal;

/// A single catalog sale record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
    pub image: String,
}

impl Transaction {
    /// Month of the sale date, year and time of day discarded.
    pub fn sale_month(&self) -> MonthOrdinal {
        MonthOrdinal::of_date(&self.date_of_sale)
    }

    /// The price as it is matched by free-text search.
    pub fn price_text(&self) -> String {
        price_to_text(&self.price)
    }
}

/// Input model for loading a record into the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
    pub image: String,
}

impl NewTransaction {
    pub fn sale_month(&self) -> MonthOrdinal {
        MonthOrdinal::of_date(&self.date_of_sale)
    }
}

impl From<NewTransaction> for Transaction {
    fn from(new: NewTransaction) -> Self {
        Self {
            id: new.id,
            title: new.title,
            description: new.description,
            price: new.price,
            category: new.category,
            sold: new.sold,
            date_of_sale: new.date_of_sale,
            image: new.image,
        }
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub data: Vec<Transaction>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_transactions: i64,
}

/// Canonical text form of a price: normalized, no trailing zeros.
///
/// Stores that match search text against prices must persist exactly this
/// representation.
pub fn price_to_text(price: &Decimal) -> String {
    price.normalize().to_string()
}
