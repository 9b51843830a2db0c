use super::reports_model::{CategorySales, PriceRangeCount, SalesStatistics};
use crate::Result;

/// Trait defining the contract for the month-scoped report aggregators.
///
/// Every method resolves `month` with the configured month table first, so a
/// missing or unknown month fails before the store is touched.
pub trait ReportServiceTrait: Send + Sync {
    /// Sum of prices and sold / unsold counts. Zero matches yield zeros.
    fn sales_statistics(&self, month: Option<&str>) -> Result<SalesStatistics>;

    /// One entry per configured price band, in band order, zero counts included.
    fn price_histogram(&self, month: Option<&str>) -> Result<Vec<PriceRangeCount>>;

    /// Per-category price sums, largest first. Fails with
    /// [`super::ReportError::NoMatchingData`] when the month has no records.
    fn category_breakdown(&self, month: Option<&str>) -> Result<Vec<CategorySales>>;
}
