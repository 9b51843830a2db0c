use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use tallyboard_core::reports::PriceBandTable;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Catalog feed used to seed an empty store at startup.
    pub seed_url: Option<String>,
    pub price_bands: PriceBandTable,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("Invalid TB_LISTEN_ADDR")?;
        let db_path =
            std::env::var("TB_DB_PATH").unwrap_or_else(|_| "./db/tallyboard.db".into());
        let cors_allow = std::env::var("TB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("TB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .context("Invalid TB_REQUEST_TIMEOUT_MS")?;
        let seed_url = std::env::var("TB_SEED_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let price_bands = match std::env::var("TB_PRICE_BANDS") {
            Ok(spec) if !spec.trim().is_empty() => PriceBandTable::parse(&spec)
                .map_err(|e| anyhow::anyhow!("Invalid TB_PRICE_BANDS: {}", e))?,
            _ => PriceBandTable::default(),
        };
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            seed_url,
            price_bands,
        })
    }
}
