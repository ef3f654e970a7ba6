//! HTTP plumbing shared by every endpoint.

use std::time::Duration;

use bytes::Bytes;
use expensa_shared::config::ApiConfig;
use expensa_shared::{AppError, AppResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::envelope::Envelope;

/// Client for the expense REST API.
///
/// One request per call: no retry, no cancellation. A transport failure or an
/// envelope with `success: false` is returned to the caller as is.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `config.base_url` (which includes `/api`).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true when the API runs on this machine.
    #[must_use]
    pub fn is_localhost(&self) -> bool {
        self.base_url.contains("localhost") || self.base_url.contains("127.0.0.1")
    }

    pub(crate) fn request(&self, method: reqwest::Method, endpoint: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{endpoint}", self.base_url))
    }

    /// `GET` returning the envelope's data.
    pub(crate) async fn get<T>(&self, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::GET, endpoint);
        self.fetch(request, "GET", endpoint).await
    }

    /// `GET` with query parameters returning the envelope's data.
    pub(crate) async fn get_with_query<Q, T>(&self, endpoint: &str, query: &Q) -> AppResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::GET, endpoint).query(query);
        self.fetch(request, "GET", endpoint).await
    }

    /// `POST` with a JSON body returning the envelope's data.
    pub(crate) async fn post<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::POST, endpoint).json(body);
        self.fetch(request, "POST", endpoint).await
    }

    /// `PUT` with a JSON body returning the envelope's data.
    pub(crate) async fn put<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::PUT, endpoint).json(body);
        self.fetch(request, "PUT", endpoint).await
    }

    /// `DELETE`; the API answers with a bare `{ "success": true }`.
    pub(crate) async fn delete(&self, endpoint: &str) -> AppResult<()> {
        let request = self.request(reqwest::Method::DELETE, endpoint);
        self.send_json::<Envelope<IgnoredAny>>(request, "DELETE", endpoint)
            .await?
            .check()
            .map(|_| ())
    }

    async fn fetch<T>(&self, request: RequestBuilder, method: &str, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let envelope: Envelope<T> = self.send_json(request, method, endpoint).await?;
        if !envelope.success {
            warn!(method, endpoint, error = ?envelope.error, "API reported failure");
        }
        envelope.into_data(endpoint)
    }

    /// Sends the request and decodes the JSON body as `T`, without envelope
    /// handling.
    pub(crate) async fn send_json<T>(
        &self,
        request: RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.send(request, method, endpoint).await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(method, endpoint, error = %e, "undecodable response");
            AppError::Decode(format!("{endpoint}: {e}"))
        })
    }

    /// Sends the request and returns the raw body of a binary response.
    ///
    /// A JSON body on a binary endpoint is an error envelope.
    pub(crate) async fn download(
        &self,
        request: RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> AppResult<Bytes> {
        info!(method, endpoint, "API request");

        let response = request.send().await.map_err(|e| transport(endpoint, &e))?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        let body = response.bytes().await.map_err(|e| transport(endpoint, &e))?;

        if !status.is_success() || is_json {
            return Err(status_error(status, &body, method, endpoint));
        }

        debug!(method, endpoint, size = body.len(), "download complete");
        Ok(body)
    }

    async fn send(&self, request: RequestBuilder, method: &str, endpoint: &str) -> AppResult<Bytes> {
        info!(method, endpoint, "API request");

        let response = request.send().await.map_err(|e| transport(endpoint, &e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| transport(endpoint, &e))?;

        if !status.is_success() {
            return Err(status_error(status, &body, method, endpoint));
        }

        debug!(method, endpoint, status = status.as_u16(), "API response");
        Ok(body)
    }
}

fn transport(endpoint: &str, err: &reqwest::Error) -> AppError {
    warn!(endpoint, error = %err, "API unreachable");
    if err.is_decode() {
        AppError::Decode(format!("{endpoint}: {err}"))
    } else {
        AppError::Transport(format!("{endpoint}: {err}"))
    }
}

/// Maps a non-success status to an error, using the envelope's message when
/// the body has one.
fn status_error(status: StatusCode, body: &[u8], method: &str, endpoint: &str) -> AppError {
    let message = serde_json::from_slice::<Envelope<IgnoredAny>>(body)
        .ok()
        .and_then(|env| env.error)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

    warn!(
        method,
        endpoint,
        status = status.as_u16(),
        error = %message,
        "API error response"
    );

    if status == StatusCode::NOT_FOUND {
        AppError::NotFound(format!("{endpoint}: {message}"))
    } else if status.is_success() {
        AppError::Api(message)
    } else {
        AppError::Api(format!("{} {message}", status.as_u16()))
    }
}
