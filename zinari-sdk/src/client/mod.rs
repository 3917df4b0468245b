//! HTTP client for the ZinariPay API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.
//!
//! Every endpoint goes through [`ZinariClient::execute`], which performs one
//! authenticated round-trip and hands back the raw status and body. The
//! endpoint methods then decode that body, turning non-2xx statuses into
//! [`ClientError::Api`].

mod exchange_rate;
mod payment_link;
mod transactions;
mod wallets;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;

const APPLICATION_JSON: &str = "application/json";

/// Errors produced by the SDK HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be built from the transport settings.
    #[error("could not build http client: {0}")]
    Transport(#[source] reqwest::Error),

    /// The HTTP request could not be assembled.
    #[error("could not create request: {0}")]
    Build(#[source] reqwest::Error),

    /// Transport-level failure (DNS, TLS, connection refused, timeout, …).
    #[error("could not execute request: {0}")]
    Http(#[source] reqwest::Error),

    /// The response body could not be read to the end.
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[source] serde_json::Error),
}

/// Status and full body of one API exchange, whatever the status code.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Typed HTTP client for the ZinariPay API.
///
/// Every request carries `Authorization: Bearer <api key>`. Clones share the
/// underlying connection pool, so one client can serve concurrent callers.
#[derive(Clone)]
pub struct ZinariClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ZinariClient {
    /// Create a new `ZinariClient` with the default transport settings
    /// (60 s request timeout, 5 s connect timeout, pooled keep-alive).
    ///
    /// * `base_url` – root URL of the ZinariPay API.
    /// * `api_key` – the secret key issued in the ZinariPay console.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new(base_url, api_key))
    }

    /// Create a client from a full [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let http = config
            .transport
            .build_http_client()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Replace the HTTP client with a custom one (e.g. to configure a
    /// proxy or different timeouts).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Root URL that endpoint paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one authenticated round-trip.
    ///
    /// `path` is resolved against the base URL and may already carry an
    /// encoded query string. The body, when present, is sent as JSON. The
    /// response body is read in full and returned regardless of status.
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ClientError::Encode)?;

        let url = self.base_url.join(path)?;

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .bearer_auth(&self.api_key);
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }
        let request = builder.build().map_err(ClientError::Build)?;

        let resp = self.http.execute(request).await.map_err(|e| {
            tracing::debug!(%method, path, error = %e, "ZinariPay request failed");
            ClientError::Http(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(ClientError::Body)?;

        tracing::debug!(
            %method,
            path,
            status = status.as_u16(),
            bytes = body.len(),
            "ZinariPay request completed"
        );

        Ok(RawResponse { status, body })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let raw = self.execute::<()>(Method::GET, path, None).await?;
        parse_response(raw)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let raw = self.execute(Method::POST, path, Some(body)).await?;
        parse_response(raw)
    }
}

impl std::fmt::Debug for ZinariClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZinariClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn parse_response<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ClientError> {
    if !raw.status.is_success() {
        let body = String::from_utf8_lossy(&raw.body).into_owned();
        return Err(ClientError::Api {
            status: raw.status,
            body,
        });
    }
    serde_json::from_slice(&raw.body).map_err(ClientError::Json)
}
