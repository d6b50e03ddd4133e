//! Decode appended binary point data from HiDEM VTU output.
//!
//! HiDEM writes particle positions as a VTK XML unstructured-grid file whose
//! `Position` array lives in a raw appended block after the text header. This
//! crate recovers the decode parameters from the header, locates the appended
//! block, and reinterprets it as 3-component floating-point coordinates.
//!
//! # Design principles
//!
//! - **Synchronous**: single pass, blocking I/O, no threading primitives
//! - **Header-driven**: element width and byte order always come from the
//!   scanned header, never assumed
//! - **Fail fast**: malformed or truncated input aborts the run; no partial
//!   point sets are produced
//!
//! # Key functions
//!
//! - [`scan_header`]: Extract decode parameters from the text preamble
//! - [`resolve_format`]: Turn header strings into width and endianness
//! - [`read_appended_block`]: Read the length-prefixed binary payload
//! - [`decode_points`]: Reinterpret payload bytes as coordinate triples
//! - [`write_csv`]: Emit decoded points as comma-separated rows
//! - [`decode_positions`]: Run the whole pipeline against one reader

mod error;

pub mod appended;
pub mod csv;
pub mod format;
pub mod header;
pub mod points;

use std::io::BufRead;

use glam::DVec3;

pub use appended::read_appended_block;
pub use csv::write_csv;
pub use error::{DecodeError, DecodeResult};
pub use format::resolve_format;
pub use header::scan_header;
pub use points::{PointIter, decode_points, iter_points};

/// Decode parameters recovered from the text header.
///
/// Values are kept as scanned; [`resolve_format`] turns them into concrete
/// decode parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Element type of the position array (e.g. `Float32`, `Float64`).
    pub element_type: String,
    /// Declared byte order of the container (e.g. `LittleEndian`).
    pub byte_order: String,
    /// Declared offset of the position array, if present.
    ///
    /// Diagnostic only: the payload follows the boundary tag directly, so
    /// the offset is never used for seeking.
    pub data_offset: Option<u64>,
}

/// Byte ordering of multi-byte elements in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// Width of one floating-point element in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementWidth {
    /// 32-bit IEEE-754 elements.
    Four,
    /// 64-bit IEEE-754 elements.
    Eight,
}

impl ElementWidth {
    /// Size of one element in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Size of one 3-component coordinate record in bytes.
    #[must_use]
    pub const fn record_size(self) -> usize {
        self.bytes() * 3
    }
}

/// The raw appended binary payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedBlock {
    /// Byte count from the length prefix.
    pub byte_length: u32,
    /// The payload itself, exactly `byte_length` bytes.
    pub bytes: Vec<u8>,
}

/// Run the full decode pipeline against a reader positioned at the start of
/// the container.
///
/// Scans the header, resolves the declared format, reads the appended block,
/// and decodes it into coordinate triples in stream order.
pub fn decode_positions<R: BufRead>(reader: &mut R) -> DecodeResult<Vec<DVec3>> {
    let header = scan_header(reader)?;
    let (order, width) = resolve_format(&header.byte_order, &header.element_type)?;
    tracing::info!(
        element_type = %header.element_type,
        byte_order = %header.byte_order,
        "reading appended point data"
    );
    let block = read_appended_block(reader)?;
    decode_points(&block.bytes, width, order)
}
