//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

use super::Keyed;

/// A customer account, as returned by the users endpoint.
///
/// Most profile fields are optional; older accounts predate several of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned ID.
    pub id: UserId,
    /// Account email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Role label (e.g. "customer", "admin").
    #[serde(default)]
    pub role: Option<String>,
    /// Whether the account is enabled.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Keyed for User {
    type Id = UserId;

    fn key(&self) -> UserId {
        self.id
    }
}

impl User {
    /// Best display label for the account.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.first_name.as_deref())
            .unwrap_or(&self.email)
    }
}
