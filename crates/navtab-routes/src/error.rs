//! Route error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Tab label cannot be empty")]
    EmptyLabel,

    #[error("Duplicate tab label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid prefix for tab {label}: {prefix:?}")]
    InvalidPrefix { label: String, prefix: String },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}
