//! The REST gateway client.

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Client for the commerce backend's REST API.
///
/// Cheap to clone; all clones share one connection pool and one token slot.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    /// Bearer token attached to every request once set.
    token: RwLock<Option<SecretString>>,
}

/// Response envelope every endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    message: String,
    status: EnvelopeStatus,
    data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EnvelopeStatus {
    Success,
    Error,
}

/// Minimal body shape for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl ApiClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                token: RwLock::new(config.token.clone()),
            }),
        }
    }

    /// Backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Store a bearer token for subsequent requests.
    pub async fn set_token(&self, token: SecretString) {
        *self.inner.token.write().await = Some(token);
    }

    /// Whether a token is currently stored.
    pub async fn has_token(&self) -> bool {
        self.inner.token.read().await.is_some()
    }

    /// Drop the stored token.
    pub async fn clear_token(&self) {
        *self.inner.token.write().await = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    async fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.inner.token.read().await;
        match token.as_ref() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Send a request and return the raw response, with the token attached
    /// and a debug trace of the wire call.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request = self.authorize(builder).await.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "api request");
        Ok(self.inner.http.execute(request).await?)
    }

    /// Map a non-2xx response to the error taxonomy. A 401 from anything but
    /// the login call also clears the stored token; the session it belonged
    /// to is gone either way.
    async fn fail(&self, response: reqwest::Response, is_login: bool) -> ApiError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        tracing::debug!(status = status.as_u16(), %message, "api error response");

        match status {
            StatusCode::UNAUTHORIZED => {
                if !is_login {
                    self.clear_token().await;
                }
                ApiError::Unauthorized
            }
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::CONFLICT => ApiError::Conflict(message),
            _ => ApiError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Execute a request and unwrap the envelope's `data`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        is_login: bool,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        if !response.status().is_success() {
            return Err(self.fail(response, is_login).await);
        }

        let status = response.status().as_u16();
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        match envelope {
            Envelope {
                status: EnvelopeStatus::Success,
                data: Some(data),
                ..
            } => Ok(data),
            Envelope { message, .. } => Err(ApiError::Api { status, message }),
        }
    }

    /// Execute a request whose envelope carries no payload (deletes).
    pub(crate) async fn execute_unit(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<(), ApiError> {
        let response = self.send(builder).await?;
        if !response.status().is_success() {
            return Err(self.fail(response, false).await);
        }

        let status = response.status().as_u16();
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        match envelope.status {
            EnvelopeStatus::Success => Ok(()),
            EnvelopeStatus::Error => Err(ApiError::Api {
                status,
                message: envelope.message,
            }),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.inner.http.get(self.url(path)), false)
            .await
    }

    /// Fetch a binary payload (e.g. a PDF receipt); no envelope.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.inner.http.get(self.url(path))).await?;
        if !response.status().is_success() {
            return Err(self.fail(response, false).await);
        }
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn post<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.post(self.url(path)).json(body), false)
            .await
    }

    /// POST used by the login endpoint; a 401 here must not clear the token
    /// slot of an unrelated session.
    pub(crate) async fn post_login<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.post(self.url(path)).json(body), true)
            .await
    }

    pub(crate) async fn patch<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.patch(self.url(path)).json(body), false)
            .await
    }

    /// PATCH with no body, used by the toggle endpoints. The server computes
    /// the new state; the client never sends the bit it expects.
    pub(crate) async fn patch_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        self.execute(self.inner.http.patch(self.url(path)), false)
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute_unit(self.inner.http.delete(self.url(path)))
            .await
    }

    pub(crate) async fn post_unit<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute_unit(self.inner.http.post(self.url(path)).json(body))
            .await
    }
}
