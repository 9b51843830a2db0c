use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tallyboard_core::reports as core_reports;
use tallyboard_core::transactions as core_transactions;
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
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

impl From<core_transactions::Transaction> for Transaction {
    fn from(t: core_transactions::Transaction) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            price: t.price,
            category: t.category,
            sold: t.sold,
            date_of_sale: t.date_of_sale,
            image: t.image,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub data: Vec<Transaction>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_transactions: i64,
}

impl From<core_transactions::TransactionPage> for TransactionPage {
    fn from(p: core_transactions::TransactionPage) -> Self {
        Self {
            data: p.data.into_iter().map(Transaction::from).collect(),
            current_page: p.current_page,
            total_pages: p.total_pages,
            total_transactions: p.total_transactions,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatistics {
    pub total_sales_amount: Decimal,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

impl From<core_reports::SalesStatistics> for SalesStatistics {
    fn from(s: core_reports::SalesStatistics) -> Self {
        Self {
            total_sales_amount: s.total_sales_amount,
            total_sold_items: s.total_sold_items,
            total_not_sold_items: s.total_not_sold_items,
        }
    }
}

/// Histogram bar: number of records priced within `range`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: u64,
}

impl From<core_reports::PriceRangeCount> for PriceRangeCount {
    fn from(p: core_reports::PriceRangeCount) -> Self {
        Self {
            range: p.range,
            count: p.count,
        }
    }
}

/// Pie slice: `range` is the category name and `count` its summed sale amount.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CategorySales {
    pub range: String,
    pub count: Decimal,
}

impl From<core_reports::CategorySales> for CategorySales {
    fn from(c: core_reports::CategorySales) -> Self {
        Self {
            range: c.category,
            count: c.total_sales,
        }
    }
}

/// Query string of the listing endpoint. Numbers are taken as text so that
/// malformed values produce the usual error body.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct TransactionListQuery {
    /// English month name, any casing.
    pub month: Option<String>,
    /// Matched against title, description and price text.
    pub search: Option<String>,
    /// 1-based page number, default 1.
    pub page: Option<String>,
    /// Rows per page, default 7.
    pub per_page: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct MonthQuery {
    /// English month name, any casing.
    pub month: Option<String>,
}
