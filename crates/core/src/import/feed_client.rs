use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::import_model::FeedRecord;
use super::import_traits::TransactionFeedClient;
use crate::errors::Error;
use crate::Result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the catalog feed over HTTP as a JSON array.
pub struct HttpFeedClient {
    client: Client,
}

impl HttpFeedClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for HttpFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionFeedClient for HttpFeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedRecord>> {
        debug!("Fetching catalog feed from {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Import(format!(
                "feed at {} answered with status {}",
                url, status
            )));
        }
        Ok(response.json::<Vec<FeedRecord>>().await?)
    }
}
