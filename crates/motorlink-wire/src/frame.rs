use bytes::{BufMut, BytesMut};

use crate::error::{Result, WireError};
use crate::value::{Value, ValueKind, WireValue, MAX_VALUE_WIDTH};

/// Width of the property identifier field.
pub const PROPERTY_ID_LEN: usize = 2;

/// Width of the trailing protocol tag field.
pub const TAG_LEN: usize = 2;

/// Every read request is identifier + tag, independent of value type.
pub const READ_REQUEST_LEN: usize = PROPERTY_ID_LEN + TAG_LEN;

/// Size of a write request for value type `T`.
pub const fn write_request_len<T: WireValue>() -> usize {
    PROPERTY_ID_LEN + T::WIDTH + TAG_LEN
}

/// Size of a write request for a runtime-selected kind.
pub const fn write_request_len_for(kind: ValueKind) -> usize {
    PROPERTY_ID_LEN + kind.width() + TAG_LEN
}

/// Encode a read request into `dst`.
///
/// Wire format:
/// ```text
/// ┌────────────────┬──────────────┐
/// │ Identifier     │ Protocol tag │
/// │ (2B LE)        │ (2B LE)      │
/// └────────────────┴──────────────┘
/// ```
pub fn encode_read_request(dst: &mut BytesMut, property_id: u16, tag: u16) {
    dst.reserve(READ_REQUEST_LEN);
    dst.put_u16_le(property_id);
    dst.put_u16_le(tag);
}

/// Encode a write request into `dst`.
///
/// Wire format:
/// ```text
/// ┌────────────────┬──────────────┬──────────────┐
/// │ Identifier     │ Value        │ Protocol tag │
/// │ (2B LE)        │ (WIDTH B LE) │ (2B LE)      │
/// └────────────────┴──────────────┴──────────────┘
/// ```
/// The tag occupies the final 2 bytes whatever the value width.
pub fn encode_write_request<T: WireValue>(dst: &mut BytesMut, property_id: u16, value: T, tag: u16) {
    dst.reserve(write_request_len::<T>());
    dst.put_u16_le(property_id);
    let mut raw = [0u8; MAX_VALUE_WIDTH];
    value.encode_le(&mut raw);
    dst.put_slice(&raw[..T::WIDTH]);
    dst.put_u16_le(tag);
}

/// Encode a write request for a runtime-selected value.
pub fn encode_write_request_dyn(dst: &mut BytesMut, property_id: u16, value: &Value, tag: u16) {
    dst.reserve(write_request_len_for(value.kind()));
    dst.put_u16_le(property_id);
    value.encode_le(dst);
    dst.put_u16_le(tag);
}

/// Decode a response buffer as the value type `T`.
///
/// The buffer must be exactly `T::WIDTH` bytes; the transaction layer
/// requests that length, so a mismatch means a misbehaving bus
/// implementation.
pub fn decode_response<T: WireValue>(buf: &[u8]) -> Result<T> {
    if buf.len() != T::WIDTH {
        return Err(WireError::ResponseLength {
            got: buf.len(),
            expected: T::WIDTH,
        });
    }
    Ok(T::decode_le(buf))
}

/// A request frame seen from the device side.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestFrame<'a> {
    /// The property identifier.
    pub property_id: u16,
    /// The value bytes between identifier and tag. Empty for reads.
    pub value: &'a [u8],
    /// The trailing protocol tag.
    pub tag: u16,
}

impl RequestFrame<'_> {
    /// Whether this request carries a value to write.
    pub fn is_write(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Decode a request frame from raw outbound bytes.
///
/// Used by device-side code (the simulator); clients only encode.
pub fn decode_request(buf: &[u8]) -> Result<RequestFrame<'_>> {
    if buf.len() < READ_REQUEST_LEN {
        return Err(WireError::RequestTooShort { got: buf.len() });
    }
    let property_id = u16::from_le_bytes([buf[0], buf[1]]);
    let tag = u16::from_le_bytes([buf[buf.len() - 2], buf[buf.len() - 1]]);
    Ok(RequestFrame {
        property_id,
        value: &buf[PROPERTY_ID_LEN..buf.len() - TAG_LEN],
        tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_request_reference_bytes() {
        let mut buf = BytesMut::new();
        encode_read_request(&mut buf, 0x0042, 0xBEEF);
        assert_eq!(buf.as_ref(), &[0x42, 0x00, 0xEF, 0xBE]);
    }

    #[test]
    fn write_request_reference_bytes() {
        let mut buf = BytesMut::new();
        encode_write_request(&mut buf, 0x0042, 10_000u32, 0xBEEF);
        assert_eq!(
            buf.as_ref(),
            &[0x42, 0x00, 0x10, 0x27, 0x00, 0x00, 0xEF, 0xBE]
        );
    }

    #[test]
    fn request_sizes_are_type_driven() {
        assert_eq!(READ_REQUEST_LEN, 4);
        assert_eq!(write_request_len::<u8>(), 5);
        assert_eq!(write_request_len::<u16>(), 6);
        assert_eq!(write_request_len::<u32>(), 8);
        assert_eq!(write_request_len::<u64>(), 12);
        assert_eq!(write_request_len::<f32>(), 8);
        assert_eq!(write_request_len_for(ValueKind::Int64), 12);

        // Size never depends on the value itself.
        for value in [0u16, 1, u16::MAX] {
            let mut buf = BytesMut::new();
            encode_write_request(&mut buf, 7, value, 0x1111);
            assert_eq!(buf.len(), write_request_len::<u16>());
        }
    }

    #[test]
    fn tag_is_always_the_final_two_bytes() {
        let tag = 0xBEEFu16;
        let tag_le = [0xEF, 0xBE];

        let mut read = BytesMut::new();
        encode_read_request(&mut read, 1, tag);
        assert_eq!(&read[read.len() - 2..], &tag_le);

        let mut write_narrow = BytesMut::new();
        encode_write_request(&mut write_narrow, 1, 0xAAu8, tag);
        assert_eq!(&write_narrow[write_narrow.len() - 2..], &tag_le);

        let mut write_wide = BytesMut::new();
        encode_write_request(&mut write_wide, 1, u64::MAX, tag);
        assert_eq!(&write_wide[write_wide.len() - 2..], &tag_le);
    }

    #[test]
    fn dyn_write_matches_typed_write() {
        let mut typed = BytesMut::new();
        encode_write_request(&mut typed, 0x0042, 10_000u32, 0xBEEF);

        let mut dynamic = BytesMut::new();
        encode_write_request_dyn(&mut dynamic, 0x0042, &Value::Uint32(10_000), 0xBEEF);

        assert_eq!(typed, dynamic);
    }

    #[test]
    fn response_decode_reference_bytes() {
        let value: u32 = decode_response(&[0x10, 0x27, 0x00, 0x00]).unwrap();
        assert_eq!(value, 10_000);
    }

    #[test]
    fn response_decode_rejects_wrong_length() {
        let result = decode_response::<u32>(&[0x10, 0x27]);
        assert!(matches!(
            result,
            Err(WireError::ResponseLength {
                got: 2,
                expected: 4
            })
        ));
    }

    #[test]
    fn request_decode_roundtrip() {
        let mut buf = BytesMut::new();
        encode_write_request(&mut buf, 0x0042, 10_000u32, 0xBEEF);
        let frame = decode_request(buf.as_ref()).unwrap();
        assert_eq!(frame.property_id, 0x0042);
        assert_eq!(frame.tag, 0xBEEF);
        assert_eq!(frame.value, &[0x10, 0x27, 0x00, 0x00]);
        assert!(frame.is_write());

        let mut read = BytesMut::new();
        encode_read_request(&mut read, 0x0042, 0xBEEF);
        let frame = decode_request(read.as_ref()).unwrap();
        assert!(frame.value.is_empty());
        assert!(!frame.is_write());
    }

    #[test]
    fn request_decode_rejects_short_frames() {
        assert!(matches!(
            decode_request(&[0x42, 0x00, 0xEF]),
            Err(WireError::RequestTooShort { got: 3 })
        ));
    }
}
