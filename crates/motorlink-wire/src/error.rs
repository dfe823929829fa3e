use crate::value::ValueKind;

/// Errors that can occur while marshaling protocol frames and values.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A response buffer does not match the property's declared width.
    #[error("response length mismatch ({got} bytes, expected {expected})")]
    ResponseLength { got: usize, expected: usize },

    /// A request frame is shorter than identifier + tag.
    #[error("request too short ({got} bytes, minimum 4)")]
    RequestTooShort { got: usize },

    /// A value literal could not be parsed as the requested kind.
    #[error("invalid {kind} literal: {literal:?}")]
    InvalidLiteral { kind: ValueKind, literal: String },
}

pub type Result<T> = std::result::Result<T, WireError>;
