use std::fmt;

/// Errors raised while encoding or decoding values against a type descriptor.
///
/// Encode-side failures mean the request was never sent; decode-side failures
/// mean the peer sent a payload this client cannot interpret, usually a
/// protocol or version mismatch. Neither is ever retried here.
#[derive(Debug)]
pub enum CodecError {
    /// The value's shape does not match the descriptor it was encoded
    /// against.
    TypeMismatch { expected: String, actual: String },

    /// A numeric value does not fit the declared wire width.
    ValueOutOfRange { expected: String, value: String },

    /// Tuple arity differs from the declared element types.
    Arity { expected: usize, actual: usize },

    /// The symbolic name is not a member of the enumeration.
    UnknownEnumMember { enumeration: String, member: String },

    /// The wire code maps to no member of the enumeration.
    UnknownEnumCode { enumeration: String, code: i32 },

    /// An embedded message payload belongs to a different schema.
    SchemaMismatch { expected: u32, actual: u32 },

    /// The payload ended before a complete value could be decoded.
    Truncated,

    /// A value decoded cleanly but left unconsumed bytes behind.
    TrailingBytes { remaining: usize },

    /// Decoded bytes were not valid UTF-8 for a string value.
    InvalidUtf8,

    /// The underlying structured-message codec rejected the payload.
    Malformed(prost::DecodeError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {expected}, got {actual}")
            }
            CodecError::ValueOutOfRange { expected, value } => {
                write!(f, "value {value} out of range for {expected}")
            }
            CodecError::Arity { expected, actual } => {
                write!(f, "tuple arity mismatch: expected {expected} elements, got {actual}")
            }
            CodecError::UnknownEnumMember {
                enumeration,
                member,
            } => {
                write!(f, "'{member}' is not a member of enum {enumeration}")
            }
            CodecError::UnknownEnumCode { enumeration, code } => {
                write!(f, "wire code {code} maps to no member of enum {enumeration}")
            }
            CodecError::SchemaMismatch { expected, actual } => {
                write!(
                    f,
                    "message payload belongs to schema {actual}, expected schema {expected}"
                )
            }
            CodecError::Truncated => write!(f, "payload ended mid-value"),
            CodecError::TrailingBytes { remaining } => {
                write!(f, "{remaining} unconsumed byte(s) after decoded value")
            }
            CodecError::InvalidUtf8 => write!(f, "string payload is not valid UTF-8"),
            CodecError::Malformed(error) => write!(f, "malformed payload: {error}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Malformed(error) => Some(error),
            _ => None,
        }
    }
}

impl From<prost::DecodeError> for CodecError {
    fn from(error: prost::DecodeError) -> Self {
        CodecError::Malformed(error)
    }
}
