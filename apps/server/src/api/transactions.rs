use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    main_lib::AppState,
    models::{TransactionListQuery, TransactionPage},
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tallyboard_core::{
    constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    transactions::PageRequest,
};

#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    params(TransactionListQuery),
    responses(
        (status = 200, body = TransactionPage),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TransactionListQuery>, QueryRejection>,
) -> ApiResult<Json<TransactionPage>> {
    let Query(query) = query?;
    let page = parse_page_param("page", query.page.as_deref(), DEFAULT_PAGE)?;
    let per_page = parse_page_param("perPage", query.per_page.as_deref(), DEFAULT_PAGE_SIZE)?;
    let result = state.transaction_service.list_transactions(
        query.month.as_deref(),
        query.search.as_deref(),
        PageRequest::new(page, per_page)?,
    )?;
    Ok(Json(TransactionPage::from(result)))
}

/// Absent or blank values take the default; anything else must be an integer.
/// Range checks are left to `PageRequest`.
fn parse_page_param(name: &str, raw: Option<&str>, default: i64) -> ApiResult<i64> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(value) => value.parse::<i64>().map_err(|_| {
            ApiError::BadRequest(format!("{} must be a positive integer, got '{}'", name, value))
        }),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/transactions", get(list_transactions))
}
