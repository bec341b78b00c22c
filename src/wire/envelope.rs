//! Hand-written structured-message envelope schemas.
//!
//! These are ordinary prost messages, written out instead of generated so the
//! crate carries no protoc build step. The outer `Request`/`Response` pair
//! frames every call; `List`, `Set`, `Dictionary`, and `Tuple` are the
//! wrapper schemas the value codec nests container payloads in.

/// Outer request envelope: one procedure call and its sparse argument list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(string, tag = "1")]
    pub service: String,
    #[prost(string, tag = "2")]
    pub procedure: String,
    #[prost(message, repeated, tag = "3")]
    pub arguments: Vec<Argument>,
}

/// One encoded argument. `position` is the parameter's zero-based position in
/// the declared signature, unaffected by the omission of other arguments.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Argument {
    #[prost(uint32, tag = "1")]
    pub position: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// Outer response envelope. A populated `error` means the server executed the
/// call and reported failure; `return_value` is present only for procedures
/// declaring a return type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(string, optional, tag = "1")]
    pub error: Option<String>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub return_value: Option<Vec<u8>>,
}

/// Wrapper schema for list payloads; one encoded value per item, in order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct List {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub items: Vec<Vec<u8>>,
}

/// Wrapper schema for set payloads. A plain ordered sequence on the wire;
/// set semantics are reconstructed on decode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Set {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub items: Vec<Vec<u8>>,
}

/// One dictionary entry; key and value are each encoded per their element
/// types.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DictionaryEntry {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// Wrapper schema for dictionary payloads.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Dictionary {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<DictionaryEntry>,
}

/// Wrapper schema for tuple payloads; item count must match the declared
/// arity.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tuple {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub items: Vec<Vec<u8>>,
}
