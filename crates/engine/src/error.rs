//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`UnknownField`] thrown when a field selection names a field the
//!   resource does not expose.
//! - [`UnknownSortField`] thrown when a sort specification names a field that
//!   is not sortable.
//! - [`InvalidPage`] thrown when a page request is out of range.
//! - [`KeyNotFound`] thrown when an item is not found.
//!
//!  [`UnknownField`]: EngineError::UnknownField
//!  [`UnknownSortField`]: EngineError::UnknownSortField
//!  [`InvalidPage`]: EngineError::InvalidPage
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown field \"{field}\" for {resource}")]
    UnknownField {
        resource: &'static str,
        field: String,
    },
    #[error("Unknown sort field \"{field}\" for {resource}")]
    UnknownSortField {
        resource: &'static str,
        field: String,
    },
    #[error("Invalid page: {0}")]
    InvalidPage(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid seed data: {0}")]
    Seed(String),
}

impl EngineError {
    /// True for errors caused by the caller's request parameters.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownField { .. } | Self::UnknownSortField { .. } | Self::InvalidPage(_)
        )
    }
}
