use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::price_bands::PriceBandTable;
use super::reports_errors::ReportError;
use super::reports_model::{CategorySales, PriceRangeCount, SalesStatistics};
use super::reports_traits::ReportServiceTrait;
use crate::months::MonthTable;
use crate::transactions::{Transaction, TransactionFilter, TransactionRepositoryTrait};
use crate::Result;

/// Month-scoped aggregation over the record store.
///
/// The store selects records; the reductions below run in memory on the
/// selected set with exact decimal arithmetic.
pub struct ReportService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    months: Arc<MonthTable>,
    bands: Arc<PriceBandTable>,
}

impl ReportService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        months: Arc<MonthTable>,
        bands: Arc<PriceBandTable>,
    ) -> Self {
        Self {
            repository,
            months,
            bands,
        }
    }

    fn month_filter(&self, month: Option<&str>) -> Result<TransactionFilter> {
        let month = self.months.resolve_param(month)?;
        Ok(TransactionFilter::for_month(month))
    }
}

impl ReportServiceTrait for ReportService {
    fn sales_statistics(&self, month: Option<&str>) -> Result<SalesStatistics> {
        let filter = self.month_filter(month)?;
        let rows = self.repository.load_transactions(&filter)?;
        debug!("Statistics for {} over {} records", filter.month(), rows.len());
        Ok(summarize_sales(&rows))
    }

    fn price_histogram(&self, month: Option<&str>) -> Result<Vec<PriceRangeCount>> {
        let filter = self.month_filter(month)?;
        let rows = self.repository.load_transactions(&filter)?;
        debug!(
            "Price histogram for {} over {} records, {} bands",
            filter.month(),
            rows.len(),
            self.bands.len()
        );
        Ok(bucket_by_price(&rows, &self.bands))
    }

    fn category_breakdown(&self, month: Option<&str>) -> Result<Vec<CategorySales>> {
        let filter = self.month_filter(month)?;
        let rows = self.repository.load_transactions(&filter)?;
        debug!("Category breakdown for {} over {} records", filter.month(), rows.len());
        let breakdown = sum_by_category(&rows);
        if breakdown.is_empty() {
            return Err(ReportError::NoMatchingData {
                month: filter.month(),
            }
            .into());
        }
        Ok(breakdown)
    }
}

/// Totals over an already filtered record set.
pub fn summarize_sales(rows: &[Transaction]) -> SalesStatistics {
    let total: Decimal = rows.iter().map(|t| t.price).sum();
    let sold = rows.iter().filter(|t| t.sold).count() as u64;
    SalesStatistics {
        total_sales_amount: total,
        total_sold_items: sold,
        total_not_sold_items: rows.len() as u64 - sold,
    }
}

/// Counts records per band. Prices below the first band or above the last
/// one are not counted.
pub fn bucket_by_price(rows: &[Transaction], bands: &PriceBandTable) -> Vec<PriceRangeCount> {
    let mut counts = vec![0u64; bands.len()];
    for row in rows {
        if let Some(index) = bands.position(row.price) {
            counts[index] += 1;
        }
    }
    bands
        .bands()
        .iter()
        .zip(counts)
        .map(|(band, count)| PriceRangeCount {
            range: band.label(),
            count,
        })
        .collect()
}

/// Sums prices per category, largest total first, ties by name.
pub fn sum_by_category(rows: &[Transaction]) -> Vec<CategorySales> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.category.as_str()).or_default() += row.price;
    }

    let mut breakdown: Vec<CategorySales> = totals
        .into_iter()
        .map(|(category, total)| CategorySales {
            category: category.to_string(),
            total_sales: total,
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.total_sales
            .cmp(&a.total_sales)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}
