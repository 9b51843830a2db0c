use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tallyboard_core::{
    import::{HttpFeedClient, ImportService, ImportServiceTrait},
    months::MonthTable,
    reports::{ReportService, ReportServiceTrait},
    transactions::{TransactionRepositoryTrait, TransactionService, TransactionServiceTrait},
};
use tallyboard_storage_sqlite::{db, transactions::TransactionRepository};

pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub import_service: Arc<dyn ImportServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let transaction_repository: Arc<dyn TransactionRepositoryTrait> =
        Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let months = Arc::new(MonthTable::english());
    let price_bands = Arc::new(config.price_bands.clone());

    let transaction_service = Arc::new(TransactionService::new(
        transaction_repository.clone(),
        months.clone(),
    ));
    let report_service = Arc::new(ReportService::new(
        transaction_repository.clone(),
        months,
        price_bands,
    ));
    let import_service = Arc::new(ImportService::new(
        transaction_repository,
        Arc::new(HttpFeedClient::new()),
    ));

    Ok(Arc::new(AppState {
        transaction_service,
        report_service,
        import_service,
    }))
}

/// Seeds an empty store from the configured catalog feed. Failures are
/// logged and the server starts with whatever the store already holds.
pub async fn seed_catalog(state: &AppState, config: &Config) {
    let Some(url) = config.seed_url.as_deref() else {
        return;
    };
    match state.import_service.seed_if_empty(url).await {
        Ok(Some(summary)) => tracing::info!(
            received = summary.received,
            inserted = summary.inserted,
            skipped = summary.skipped,
            "Seeded catalog from {}",
            url
        ),
        Ok(None) => tracing::info!("Catalog already present, seed skipped"),
        Err(e) => tracing::error!("Catalog seed from {} failed: {}", url, e),
    }
}
