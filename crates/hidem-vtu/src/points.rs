//! Decoding of raw payload bytes into coordinate triples.

use glam::DVec3;

use crate::error::{DecodeError, DecodeResult};
use crate::{ByteOrder, ElementWidth};

/// Lazy decoder over the coordinate records of a raw payload.
///
/// Borrows the payload and allocates nothing; values decode identically
/// whether consumed incrementally or collected in one pass. Created by
/// [`iter_points`], which validates the payload length up front.
pub struct PointIter<'a> {
    records: std::slice::ChunksExact<'a, u8>,
    width: ElementWidth,
    order: ByteOrder,
}

impl Iterator for PointIter<'_> {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        let record = self.records.next()?;
        let w = self.width.bytes();
        Some(DVec3::new(
            decode_element(&record[..w], self.width, self.order),
            decode_element(&record[w..2 * w], self.width, self.order),
            decode_element(&record[2 * w..], self.width, self.order),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for PointIter<'_> {}

/// Validate the payload length and return a lazy decoder over it.
///
/// Fails with [`DecodeError::MalformedPayload`] if the length is not an
/// exact multiple of the record size for the declared width; a remainder
/// means a malformed or truncated container, never a shorter point set.
pub fn iter_points(
    raw: &[u8],
    width: ElementWidth,
    order: ByteOrder,
) -> DecodeResult<PointIter<'_>> {
    let record_size = width.record_size();
    if raw.len() % record_size != 0 {
        return Err(DecodeError::MalformedPayload {
            length: raw.len(),
            record_size,
        });
    }
    Ok(PointIter {
        records: raw.chunks_exact(record_size),
        width,
        order,
    })
}

/// Decode the whole payload into a coordinate vector in stream order.
pub fn decode_points(
    raw: &[u8],
    width: ElementWidth,
    order: ByteOrder,
) -> DecodeResult<Vec<DVec3>> {
    Ok(iter_points(raw, width, order)?.collect())
}

/// Reinterpret one element of the declared width and byte order.
///
/// 32-bit elements widen losslessly to `f64`. The caller slices exactly
/// `width.bytes()` bytes.
fn decode_element(bytes: &[u8], width: ElementWidth, order: ByteOrder) -> f64 {
    match width {
        ElementWidth::Four => {
            let raw = [bytes[0], bytes[1], bytes[2], bytes[3]];
            f64::from(match order {
                ByteOrder::Little => f32::from_le_bytes(raw),
                ByteOrder::Big => f32::from_be_bytes(raw),
            })
        }
        ElementWidth::Eight => {
            let raw = [
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ];
            match order {
                ByteOrder::Little => f64::from_le_bytes(raw),
                ByteOrder::Big => f64::from_be_bytes(raw),
            }
        }
    }
}
