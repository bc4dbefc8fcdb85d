//! DTOs for user management endpoints.

use serde::Deserialize;
use serde_with::{BoolFromInt, PickFirst, formats::Flexible, serde_as};

/// One row of `/admin/users`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: String,
    #[serde_as(as = "PickFirst<(_, BoolFromInt<Flexible>)>")]
    pub is_admin: bool,
}
