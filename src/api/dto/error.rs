//! Error payload returned alongside non-success statuses.

use serde::Deserialize;

/// `{"error": "..."}` body. The field is optional because some endpoints
/// answer failures with an empty or non-JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
