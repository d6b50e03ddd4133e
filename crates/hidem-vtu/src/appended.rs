//! Reader for the raw appended-data block.

use std::io::Read;

use crate::AppendedBlock;
use crate::error::{DecodeError, DecodeResult};

/// Bytes preceding the payload: one sentinel byte plus a `u32` length.
const PREFIX_LEN: usize = 5;

/// Read the appended binary block from a stream positioned immediately
/// after the boundary tag.
///
/// One sentinel byte (conventionally `_`) is consumed without validating
/// its value; the format relies on header-only validation. The next four
/// bytes are the payload byte count, always little-endian regardless of the
/// payload's declared byte order. Exactly that many payload bytes follow.
///
/// Fails with [`DecodeError::Truncated`] if the stream ends before the
/// sentinel, the length prefix, or the declared payload is available,
/// reporting how many bytes actually were.
pub fn read_appended_block<R: Read>(reader: &mut R) -> DecodeResult<AppendedBlock> {
    let mut prefix = [0u8; PREFIX_LEN];
    let available = fill(reader, &mut prefix)?;
    if available < PREFIX_LEN {
        return Err(DecodeError::Truncated {
            declared: PREFIX_LEN as u64,
            available: available as u64,
        });
    }
    let byte_length = u32::from_le_bytes([prefix[1], prefix[2], prefix[3], prefix[4]]);

    let mut bytes = vec![0u8; byte_length as usize];
    let available = fill(reader, &mut bytes)?;
    if available < bytes.len() {
        return Err(DecodeError::Truncated {
            declared: u64::from(byte_length),
            available: available as u64,
        });
    }

    tracing::debug!(byte_length, "read appended block");

    Ok(AppendedBlock { byte_length, bytes })
}

/// Read until the buffer is full or the stream ends, returning the number
/// of bytes actually read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
