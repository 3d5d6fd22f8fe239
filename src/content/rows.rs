//! Tabular row types and flag-token parsing.
//!
//! The file I/O collaborator hands the engine already-parsed rows (one
//! struct per table row); these types are its wire format. Flag columns
//! hold `TRUE`/`FALSE` tokens. The link table allows blanks, which take
//! per-column defaults; any other token loads as `false` with a logged
//! warning. Prototype flag columns are strict - a bad token is a
//! malformed row.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ContentLoadError;

/// One row of the object prototype table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrototypeRow {
    /// Single-character placement code used in layout grids.
    pub code: char,
    /// Display name.
    pub name: String,
    /// Logical kind name (the six direction names mark exit markers).
    pub kind: String,
    /// Footprint width in pixels.
    pub width: i32,
    /// Footprint depth in pixels.
    pub depth: i32,
    /// Render height; defaults to the footprint depth.
    #[serde(default)]
    pub height: Option<i32>,
    pub solid: String,
    pub visible: String,
    pub interactable: String,
}

/// One row of a floor layout table: a run of placement codes for one
/// y-step of one layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub floor_id: u32,
    /// Floor display name (first row of a floor wins).
    pub name: String,
    /// Render skin (first row of a floor wins).
    #[serde(default)]
    pub skin: String,
    pub layer: i32,
    /// One placement code per tile column; blank cells stay empty.
    pub cells: String,
}

/// One row of the navigation link table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRow {
    pub from: u32,
    pub to: u32,
    pub direction: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lockable: String,
    #[serde(default)]
    pub locked: String,
    #[serde(default)]
    pub locked_description: String,
    #[serde(default)]
    pub reversible: String,
    #[serde(default)]
    pub hidden: String,
}

/// Parse a link-table flag token. Blank takes the column default;
/// unrecognized tokens load as `false` with a logged warning.
#[must_use]
pub fn parse_flag(token: &str, default: bool, column: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return default;
    }
    match token.to_ascii_uppercase().as_str() {
        "TRUE" => true,
        "FALSE" => false,
        other => {
            warn!(column, token = other, "unrecognized flag token, loading as false");
            false
        }
    }
}

/// Parse a strict flag column: only `TRUE`/`FALSE` are accepted.
pub fn parse_strict_flag(token: &str, column: &str) -> Result<bool, ContentLoadError> {
    match token.trim().to_ascii_uppercase().as_str() {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        other => Err(ContentLoadError::MalformedRow(format!(
            "flag column '{column}' holds '{other}'"
        ))),
    }
}
