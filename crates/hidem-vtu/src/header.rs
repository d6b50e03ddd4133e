//! Header scanning for VTU containers.
//!
//! The VTU preamble is line-oriented XML, but only three attributes across
//! two line shapes matter here, so it is scanned as free text rather than
//! parsed as XML: the container's opening tag declares the byte order, and
//! the line describing the `Position` array declares the element type and an
//! informational offset.

use std::io::BufRead;

use crate::HeaderInfo;
use crate::error::{DecodeError, DecodeResult};

/// Tag on the line that opens the container and declares the byte order.
const VTK_FILE_TAG: &str = "<VTKFile";
/// Name of the point-coordinate data array.
const POSITION_TAG: &str = "Position";
/// Tag on the line that separates the text header from the binary payload.
const APPENDED_TAG: &str = "<Appended";

/// Scan the text header up to the appended-data boundary.
///
/// Reads the stream line by line until the line containing the boundary tag,
/// leaving the reader positioned on the first byte after it. Lines are
/// decoded with lossy UTF-8 substitution so stray non-text bytes in the
/// preamble do not abort the scan. Only the header text is buffered; one
/// line at a time, in a buffer reused across lines.
///
/// Fails with [`DecodeError::Header`] if the byte-order or element-type
/// attribute is missing, or if the stream ends before the boundary tag.
/// No payload byte is consumed on any failure path.
pub fn scan_header<R: BufRead>(reader: &mut R) -> DecodeResult<HeaderInfo> {
    let mut element_type: Option<String> = None;
    let mut byte_order: Option<String> = None;
    let mut data_offset: Option<u64> = None;

    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            return Err(DecodeError::Header("no appended-data section found".into()));
        }
        let text = String::from_utf8_lossy(&line);

        if text.contains(VTK_FILE_TAG) {
            byte_order = Some(
                attribute(&text, "byte_order")
                    .ok_or_else(|| DecodeError::Header("no byte order declared".into()))?
                    .to_owned(),
            );
        }
        if text.contains(POSITION_TAG) {
            element_type = Some(
                attribute(&text, "type")
                    .ok_or_else(|| DecodeError::Header("no element type declared".into()))?
                    .to_owned(),
            );
            data_offset = attribute(&text, "offset").and_then(|value| value.parse().ok());
        }
        if text.contains(APPENDED_TAG) {
            break;
        }
    }

    // Either line may be absent entirely; the attributes are still required.
    let byte_order =
        byte_order.ok_or_else(|| DecodeError::Header("no byte order declared".into()))?;
    let element_type =
        element_type.ok_or_else(|| DecodeError::Header("no element type declared".into()))?;

    tracing::debug!(%element_type, %byte_order, ?data_offset, "scanned VTU header");

    Ok(HeaderInfo {
        element_type,
        byte_order,
        data_offset,
    })
}

/// Extract the quoted value of a `name="value"` attribute from header text.
fn attribute<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let key = format!("{name}=\"");
    let start = line.find(&key)? + key.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}
