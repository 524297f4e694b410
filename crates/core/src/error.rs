//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// A lookup miss is never an error: loaders return `Ok(None)` for it. These
/// variants cover malformed input and storage failures only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A SKU was requested for a SPU the catalog does not hold.
    #[error("unknown spu: {0}")]
    UnknownSpu(String),

    /// The backing store could not serve the request.
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_spu(id: impl Into<String>) -> Self {
        Self::UnknownSpu(id.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
