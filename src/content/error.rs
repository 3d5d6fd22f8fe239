//! Content loading failures.

use crate::objects::UnknownPrototype;

/// A content table could not be loaded.
///
/// These are fatal at startup: loading aborts before play begins, so a
/// session never runs over partially loaded content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentLoadError {
    /// A row could not be interpreted (bad kind name, bad flag token in a
    /// strict column).
    MalformedRow(String),
    /// A layout cell referenced a placement code with no prototype.
    UnknownCode(char),
    /// A link row's direction column is outside the canonical set.
    InvalidDirection(String),
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentLoadError::MalformedRow(context) => write!(f, "malformed row: {context}"),
            ContentLoadError::UnknownCode(code) => {
                write!(f, "layout references unregistered code '{code}'")
            }
            ContentLoadError::InvalidDirection(direction) => {
                write!(f, "'{direction}' is not a canonical direction")
            }
        }
    }
}

impl std::error::Error for ContentLoadError {}

impl From<UnknownPrototype> for ContentLoadError {
    fn from(e: UnknownPrototype) -> Self {
        match e {
            UnknownPrototype::Code(code) => ContentLoadError::UnknownCode(code),
            UnknownPrototype::Kind(kind) => {
                ContentLoadError::MalformedRow(format!("unregistered kind '{kind}'"))
            }
        }
    }
}
