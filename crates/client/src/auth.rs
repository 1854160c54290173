//! Login and logout against the admin auth endpoints.
//!
//! Only token storage lives here: a successful login stores the bearer token
//! on the client, logout clears it. Session persistence across process
//! restarts is up to the caller (seed the token via [`crate::ClientConfig`]).

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use clementine_core::User;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Result of a successful admin login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated admin account.
    pub user: User,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Authenticate and store the returned bearer token.
    ///
    /// A 401 from this call is returned as [`ApiError::Unauthorized`]
    /// without touching any token already stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the backend rejects the credentials or the
    /// request fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let session: AuthSession = self
            .post_login("/auth/admin/login", &LoginRequest { email, password })
            .await?;
        self.set_token(SecretString::from(session.token.clone()))
            .await;
        Ok(session)
    }

    /// Tell the backend the session is over and drop the stored token.
    ///
    /// The token is cleared even if the remote call fails; a dead session is
    /// not worth keeping either way.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the logout request itself fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post_unit("/auth/admin/logout", &serde_json::json!({})).await;
        self.clear_token().await;
        result
    }
}
