//! Reports module - statistics, price histogram, and category breakdown.

mod price_bands;
mod reports_errors;
mod reports_model;
mod reports_service;
mod reports_traits;


pub use price_bands::{PriceBand, PriceBandTable};
pub use reports_errors::ReportError;
pub use reports_model::{CategorySales, PriceRangeCount, SalesStatistics};
pub use reports_service::{bucket_by_price, sum_by_category, summarize_sales, ReportService};
pub use reports_traits::ReportServiceTrait;
