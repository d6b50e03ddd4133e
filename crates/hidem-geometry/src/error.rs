//! Error types for geometry generation.

use thiserror::Error;

/// Error type for geometry grid construction and output.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Domain bounds or spacing that cannot form a grid.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// File I/O error during output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
