//! DTOs for admin authentication endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{BoolFromInt, PickFirst, formats::Flexible, serde_as};

/// Credentials posted as JSON to `/admin/login`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Identity reported by `/admin/session` and `/admin/login`.
///
/// Every field is optional: only the HTTP status decides whether the session is
/// authenticated, the body is informational.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SessionInfo {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, BoolFromInt<Flexible>)>>")]
    pub is_admin: Option<bool>,
}
