//! DTOs for URL management endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{BoolFromInt, PickFirst, formats::Flexible, serde_as};

/// One row of `/admin/urls`.
///
/// `is_active` arrives either as a JSON boolean or as a SQLite integer.
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub clicks: i64,
    pub created_at: String,
    #[serde_as(as = "PickFirst<(_, BoolFromInt<Flexible>)>")]
    pub is_active: bool,
}

/// Body of `/admin/urls/:id/toggle`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ToggleRequest {
    pub is_active: bool,
}
