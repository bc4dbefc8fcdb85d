//! Row actions carried by table buttons.
//!
//! Each button stores its action as a data attribute. A single delegated
//! handler decodes the attribute and dispatches, so redrawing a table never
//! re-binds anything.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty action attribute")]
    Empty,

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("malformed action attribute '{0}'")]
    Malformed(String),
}

/// Action triggered from a row of the URLs table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Flip `is_active`; carries the status shown when the row was rendered.
    Toggle { id: i64, is_active: bool },
    /// Delete after confirmation.
    Delete { id: i64 },
}

impl RowAction {
    pub fn id(&self) -> i64 {
        match self {
            RowAction::Toggle { id, .. } | RowAction::Delete { id } => *id,
        }
    }
}

/// Encodes as `toggle:<id>:<0|1>` or `delete:<id>`.
impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowAction::Toggle { id, is_active } => {
                write!(f, "toggle:{id}:{}", u8::from(*is_active))
            }
            RowAction::Delete { id } => write!(f, "delete:{id}"),
        }
    }
}

impl FromStr for RowAction {
    type Err = ParseActionError;

    fn from_str(attr: &str) -> Result<Self, Self::Err> {
        let attr = attr.trim();
        if attr.is_empty() {
            return Err(ParseActionError::Empty);
        }

        let malformed = || ParseActionError::Malformed(attr.to_string());
        let mut parts = attr.split(':');
        let name = parts.next().unwrap_or_default();
        let id = parts
            .next()
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(malformed)?;

        let action = match name {
            "toggle" => {
                let is_active = match parts.next() {
                    Some("1") | Some("true") => true,
                    Some("0") | Some("false") => false,
                    _ => return Err(malformed()),
                };
                RowAction::Toggle { id, is_active }
            }
            "delete" => RowAction::Delete { id },
            other => return Err(ParseActionError::UnknownAction(other.to_string())),
        };

        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(action)
    }
}
