use reqwest::{Client, StatusCode};
use std::time::Duration;

use phonebook_types::contacts::LocationStatistics;
use phonebook_types::errors::LookupError;

/// Synchronous (one request, one response) lookup of the aggregate counts
/// for a location. No retry inside the client; a failed attempt is reported
/// to the caller, and redelivery of the triggering event is the only retry
/// mechanism.
#[async_trait::async_trait]
pub trait LocationStatisticsClient: Send + Sync {
    async fn lookup(&self, location: &str) -> Result<LocationStatistics, LookupError>;
}

/// Calls the contact API's statistics endpoint over HTTP.
#[derive(Clone)]
pub struct HttpLocationStatisticsClient {
    client: Client,
    base_url: String,
}

impl HttpLocationStatisticsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl LocationStatisticsClient for HttpLocationStatisticsClient {
    async fn lookup(&self, location: &str) -> Result<LocationStatistics, LookupError> {
        let url = format!("{}/api/contacts/statistics", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("location", location)])
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<LocationStatistics>()
                .await
                .map_err(|e| LookupError::MalformedPayload(e.to_string())),
            status => Err(LookupError::RemoteStatus(status.as_u16())),
        }
    }
}
