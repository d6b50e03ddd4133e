//! Error types for VTU decoding.

use std::io;

use thiserror::Error;

/// Result alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Error type for VTU appended-data decoding.
///
/// Every variant is terminal for the run: the input is a static file, so
/// retrying would reproduce the identical failure.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Required header attribute missing or unparsable.
    #[error("header error: {0}")]
    Header(String),

    /// Unrecognized byte-order or element-width token.
    #[error("format error: {0}")]
    Format(String),

    /// Stream ended before the declared byte count was available.
    #[error("truncated stream: {available} of {declared} declared bytes available")]
    Truncated { declared: u64, available: u64 },

    /// Payload length is not a whole number of coordinate records.
    #[error("malformed payload: {length} bytes is not a multiple of the {record_size}-byte record size")]
    MalformedPayload { length: usize, record_size: usize },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
