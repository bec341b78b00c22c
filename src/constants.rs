/// Wire value of a remote object id meaning "no object".
///
/// A remote-class field holding this id decodes to `Value::Null`, never to a
/// handle with id 0.
pub const NULL_OBJECT_ID: u64 = 0;

/// Maximum number of bytes a varint length prefix may occupy.
///
/// A u64 varint is at most 10 bytes; a prefix that keeps its continuation bit
/// set beyond this is corrupt.
pub const MAX_LENGTH_PREFIX_BYTES: usize = 10;
