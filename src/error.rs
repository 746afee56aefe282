//! Error types for Stockroom
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StockError
pub type Result<T> = std::result::Result<T, StockError>;

/// Unified error type for Stockroom operations
#[derive(Debug, Error)]
pub enum StockError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Inventory Errors
    // -------------------------------------------------------------------------
    #[error("A record with id {0} already exists")]
    DuplicateId(u32),

    #[error("No record with id {0}")]
    NotFound(u32),

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error("Input stream closed")]
    InputClosed,
}
