use std::fmt;
use std::sync::Arc;

/// Primitive wire representations handled by the scalar codec.
///
/// Signed integers travel as zigzag varints, unsigned integers and booleans as
/// plain varints, floats as fixed-width little-endian bytes, and strings and
/// byte arrays as varint-length-prefixed payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    Bool,
    String,
    Bytes,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Int16 => "int16",
            ValueType::Int32 => "int32",
            ValueType::Int64 => "int64",
            ValueType::UInt16 => "uint16",
            ValueType::UInt32 => "uint32",
            ValueType::UInt64 => "uint64",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::Bool => "bool",
            ValueType::String => "string",
            ValueType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named enumeration and its wire mapping.
///
/// The wire representation of every member is its signed 32-bit code; the
/// symbolic member names exist only on the client side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    variants: Vec<(i32, String)>,
}

impl EnumDescriptor {
    pub fn new(name: &str, variants: &[(i32, &str)]) -> Self {
        Self {
            name: name.to_string(),
            variants: variants
                .iter()
                .map(|(code, member)| (*code, member.to_string()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wire code for a symbolic member name, if the name is a member.
    pub fn code_for(&self, member: &str) -> Option<i32> {
        self.variants
            .iter()
            .find(|(_, name)| name == member)
            .map(|(code, _)| *code)
    }

    /// Reverse lookup: symbolic member name for a wire code.
    pub fn member_for(&self, code: i32) -> Option<&str> {
        self.variants
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| name.as_str())
    }
}

/// A remote-owned class. Instances are only ever referenced through
/// `ObjectHandle`s; the class itself carries no behavior on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: String,
    pub class_id: u32,
}

impl ClassDescriptor {
    pub fn new(name: &str, class_id: u32) -> Self {
        Self {
            name: name.to_string(),
            class_id,
        }
    }
}

/// An embedded structured-message schema. The value codec treats payloads of
/// this type as opaque, already-encoded bytes belonging to this schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchema {
    pub name: String,
    pub schema_id: u32,
}

impl MessageSchema {
    pub fn new(name: &str, schema_id: u32) -> Self {
        Self {
            name: name.to_string(),
            schema_id,
        }
    }
}

/// Closed description of how one value is represented on the wire.
///
/// Every composite variant's element descriptors are themselves valid
/// descriptors; service-manifest resolution guarantees this before a
/// `TypeDescriptor` is ever constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// A primitive value.
    Value(ValueType),
    /// A named enumeration, wire form signed 32-bit.
    Enum(Arc<EnumDescriptor>),
    /// A handle to a remote-owned object, wire form unsigned 64-bit id.
    RemoteClass(Arc<ClassDescriptor>),
    /// An embedded structured message, delegated to the external codec.
    Message(Arc<MessageSchema>),
    /// Homogeneous ordered collection.
    List(Box<TypeDescriptor>),
    /// Homogeneous unordered collection; a plain ordered sequence on the wire.
    Set(Box<TypeDescriptor>),
    /// Mapping with unique keys.
    Dictionary(Box<TypeDescriptor>, Box<TypeDescriptor>),
    /// Fixed-arity, heterogeneous, positional.
    Tuple(Vec<TypeDescriptor>),
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Value(value_type) => write!(f, "{value_type}"),
            TypeDescriptor::Enum(descriptor) => write!(f, "enum {}", descriptor.name()),
            TypeDescriptor::RemoteClass(descriptor) => write!(f, "class {}", descriptor.name),
            TypeDescriptor::Message(schema) => write!(f, "message {}", schema.name),
            TypeDescriptor::List(element) => write!(f, "list({element})"),
            TypeDescriptor::Set(element) => write!(f, "set({element})"),
            TypeDescriptor::Dictionary(key, value) => write!(f, "dictionary({key}, {value})"),
            TypeDescriptor::Tuple(elements) => {
                f.write_str("tuple(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
        }
    }
}
