//! Health check.

use expensa_shared::AppResult;
use serde::Deserialize;

use crate::client::ApiClient;

const ENDPOINT: &str = "/health";

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    /// `ok` when the API is up.
    pub status: String,
    /// Server time, ISO 8601.
    pub timestamp: String,
}

impl Health {
    /// Returns true when the API reports `ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl ApiClient {
    /// Checks that the API is reachable.
    pub async fn health(&self) -> AppResult<Health> {
        let request = self.request(reqwest::Method::GET, ENDPOINT);
        self.send_json(request, "GET", ENDPOINT).await
    }
}
