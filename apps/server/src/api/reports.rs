use std::sync::Arc;

use crate::{
    error::{ApiResult, ErrorBody},
    main_lib::AppState,
    models::{CategorySales, MonthQuery, PriceRangeCount, SalesStatistics},
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/api/v1/statistics",
    params(MonthQuery),
    responses(
        (status = 200, body = SalesStatistics),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Json<SalesStatistics>> {
    let Query(query) = query?;
    let stats = state
        .report_service
        .sales_statistics(query.month.as_deref())?;
    Ok(Json(SalesStatistics::from(stats)))
}

#[utoipa::path(
    get,
    path = "/api/v1/barchart",
    params(MonthQuery),
    responses(
        (status = 200, body = [PriceRangeCount]),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_price_histogram(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<PriceRangeCount>>> {
    let Query(query) = query?;
    let histogram = state.report_service.price_histogram(query.month.as_deref())?;
    Ok(Json(histogram.into_iter().map(PriceRangeCount::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/piechart",
    params(MonthQuery),
    responses(
        (status = 200, body = [CategorySales]),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_category_breakdown(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<CategorySales>>> {
    let Query(query) = query?;
    let breakdown = state
        .report_service
        .category_breakdown(query.month.as_deref())?;
    Ok(Json(breakdown.into_iter().map(CategorySales::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/statistics", get(get_statistics))
        .route("/barchart", get(get_price_histogram))
        .route("/piechart", get(get_category_breakdown))
}
