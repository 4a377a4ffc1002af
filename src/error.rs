//! Error types for catalog operations.

use thiserror::Error;

/// Unified error type for catalog and persistence operations. All variants
/// are recoverable: they are reported to the caller and never abort the
/// process or corrupt the rest of the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Delete referencing a name with no matching entry
    #[error("item not found: {0}")]
    NotFound(String),
    /// A persisted line that does not parse into an item record
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
    /// Catalog file cannot be opened or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV reader/writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
