//! Report domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals over the records matching a month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatistics {
    /// Sum of prices of every matching record, sold or not.
    pub total_sales_amount: Decimal,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

/// Histogram entry: how many matching records fall in one price band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeCount {
    /// Band label, `"{min}-{max}"`.
    pub range: String,
    pub count: u64,
}

/// Summed sale amount for one category.
///
/// The dashboard's chart component expects the same `{range, count}` shape as
/// the histogram, so the wire names are kept even though `count` carries a
/// summed amount here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySales {
    #[serde(rename = "range")]
    pub category: String,
    #[serde(rename = "count")]
    pub total_sales: Decimal,
}
