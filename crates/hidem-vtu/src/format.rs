//! Resolution of header strings into concrete decode parameters.

use crate::error::{DecodeError, DecodeResult};
use crate::{ByteOrder, ElementWidth};

/// Resolve scanned byte-order and element-type strings into an endianness
/// and an element width.
///
/// Matching is deliberately loose: producers write `LittleEndian`,
/// `BigEndian`, `Float32`, `Float64` and minor variants, so the byte order
/// is matched case-insensitively on the substrings `little`/`big` and the
/// width on the digits `32`/`64`.
pub fn resolve_format(
    byte_order: &str,
    element_type: &str,
) -> DecodeResult<(ByteOrder, ElementWidth)> {
    let lowered = byte_order.to_lowercase();
    let order = if lowered.contains("little") {
        ByteOrder::Little
    } else if lowered.contains("big") {
        ByteOrder::Big
    } else {
        return Err(DecodeError::Format(format!(
            "unrecognized byte order {byte_order:?}"
        )));
    };

    let width = if element_type.contains("32") {
        ElementWidth::Four
    } else if element_type.contains("64") {
        ElementWidth::Eight
    } else {
        return Err(DecodeError::Format(format!(
            "unrecognized element width {element_type:?}"
        )));
    };

    Ok((order, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_spellings() {
        assert_eq!(
            resolve_format("LittleEndian", "Float32").unwrap(),
            (ByteOrder::Little, ElementWidth::Four)
        );
        assert_eq!(
            resolve_format("BigEndian", "Float64").unwrap(),
            (ByteOrder::Big, ElementWidth::Eight)
        );
    }

    #[test]
    fn byte_order_is_case_insensitive() {
        assert_eq!(
            resolve_format("LITTLEENDIAN", "Float64").unwrap().0,
            ByteOrder::Little
        );
        assert_eq!(
            resolve_format("bigendian", "Float64").unwrap().0,
            ByteOrder::Big
        );
    }

    #[test]
    fn width_matches_on_digits_only() {
        // Prefixed type names still resolve.
        assert_eq!(
            resolve_format("LittleEndian", "VtkFloat64").unwrap().1,
            ElementWidth::Eight
        );
    }

    #[test]
    fn unrecognized_byte_order_fails() {
        let result = resolve_format("MiddleEndian", "Float32");
        assert!(matches!(
            result,
            Err(DecodeError::Format(msg)) if msg.contains("MiddleEndian")
        ));
    }

    #[test]
    fn unrecognized_width_fails() {
        let result = resolve_format("LittleEndian", "Float16");
        assert!(matches!(
            result,
            Err(DecodeError::Format(msg)) if msg.contains("Float16")
        ));
    }
}
