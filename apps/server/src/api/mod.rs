use std::sync::Arc;

use crate::{
    config::Config,
    error::ErrorBody,
    main_lib::AppState,
    models::{CategorySales, PriceRangeCount, SalesStatistics, Transaction, TransactionPage},
};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod health;
pub mod reports;
pub mod transactions;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        transactions::list_transactions,
        reports::get_statistics,
        reports::get_price_histogram,
        reports::get_category_breakdown
    ),
    components(schemas(
        Transaction,
        TransactionPage,
        SalesStatistics,
        PriceRangeCount,
        CategorySales,
        ErrorBody
    )),
    tags((name = "tallyboard"))
)]
pub struct ApiDoc;

async fn welcome() -> &'static str {
    "Welcome"
}

/// Dashboard endpoints, mounted both at the root paths the dashboard calls and
/// under `/api/v1`.
fn dashboard_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(transactions::router())
        .merge(reports::router())
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(dashboard_routes());

    Router::new()
        .route("/", get(welcome))
        .merge(dashboard_routes())
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
