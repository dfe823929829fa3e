//! Little-endian marshaling and request framing for the motorlink
//! property protocol.
//!
//! This is the core value-add layer of motorlink. Every request carries:
//! - A 2-byte little-endian property identifier
//! - The value bytes, little-endian, write requests only
//! - A 2-byte little-endian protocol tag, always the final 2 bytes
//!
//! Responses are the bare value: exactly as many bytes as the property's
//! type is wide. Buffer sizes fall out of the value type at compile time.

pub mod error;
pub mod frame;
pub mod property;
pub mod value;

pub use error::{Result, WireError};
pub use frame::{
    decode_request, decode_response, encode_read_request, encode_write_request,
    encode_write_request_dyn, write_request_len, write_request_len_for, RequestFrame,
    PROPERTY_ID_LEN, READ_REQUEST_LEN, TAG_LEN,
};
pub use property::Property;
pub use value::{Value, ValueKind, WireValue, MAX_VALUE_WIDTH};
