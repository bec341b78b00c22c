use crate::codec::CodecError;
use crate::schema::ObjectHandle;
use prost::Message;
use std::fmt;

/// Dynamically-typed value passed into and out of the codec.
///
/// `Value` is deliberately wider than any single `TypeDescriptor`: the codec
/// narrows it at encode time (with lossless numeric coercion between the
/// integer families and into floats) and reconstructs it at decode time.
///
/// `Set` and `Dictionary` are kept as plain vectors with set/map semantics
/// enforced by the codec, so that element types without a total order or a
/// hash (floats, nested containers) remain usable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence; also the decoded form of a null remote object.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    /// Symbolic enum member name. The wire code is looked up at encode time.
    Enum(String),
    /// Weak handle to a remote-owned object.
    Object(ObjectHandle),
    /// An already-encoded structured message and the schema it belongs to.
    Message { schema_id: u32, bytes: Vec<u8> },
    List(Vec<Value>),
    /// Unordered collection; duplicates collapse on decode.
    Set(Vec<Value>),
    /// Association list with unique keys; last-write-wins on decode.
    Dictionary(Vec<(Value, Value)>),
    Tuple(Vec<Value>),
}

impl Value {
    /// Short description of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Enum(_) => "enum member",
            Value::Object(_) => "object handle",
            Value::Message { .. } => "message",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Dictionary(_) => "dictionary",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Wrap a typed structured message, delegating its encoding to prost.
    pub fn from_message<M: Message>(schema_id: u32, message: &M) -> Value {
        Value::Message {
            schema_id,
            bytes: message.encode_to_vec(),
        }
    }

    /// Unwrap a structured message back into its typed form.
    pub fn to_message<M: Message + Default>(&self) -> Result<M, CodecError> {
        match self {
            Value::Message { bytes, .. } => M::decode(bytes.as_slice()).map_err(CodecError::from),
            other => Err(CodecError::TypeMismatch {
                expected: "message".to_string(),
                actual: other.kind().to_string(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<ObjectHandle> for Value {
    fn from(handle: ObjectHandle) -> Self {
        Value::Object(handle)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v:?}"),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Enum(member) => f.write_str(member),
            Value::Object(handle) => write!(f, "{handle}"),
            Value::Message { schema_id, bytes } => {
                write!(f, "<message schema {} ({} bytes)>", schema_id, bytes.len())
            }
            Value::List(items) | Value::Tuple(items) => {
                let open = if matches!(self, Value::List(_)) { "[" } else { "(" };
                let close = if matches!(self, Value::List(_)) { "]" } else { ")" };
                f.write_str(open)?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(close)
            }
            Value::Set(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Value::Dictionary(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
