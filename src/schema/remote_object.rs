use crate::utils::generate_connection_id;
use std::fmt;

/// Identity of one client connection instance.
///
/// Remote object handles are only interchangeable between calls made over the
/// same connection, so every handle carries the identity of the connection it
/// was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Allocate a fresh, process-unique connection identity.
    pub fn generate() -> Self {
        ConnectionId(generate_connection_id())
    }

    pub const fn from_raw(id: u64) -> Self {
        ConnectionId(id)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn:{}", self.0)
    }
}

/// Weak reference to state owned by the server.
///
/// A handle never manages remote lifetime; it is purely a
/// `(connection, object id)` pair usable in subsequent calls. Equality is
/// structural: two handles with equal connection and id are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    pub connection: ConnectionId,
    pub object_id: u64,
}

impl ObjectHandle {
    pub fn new(connection: ConnectionId, object_id: u64) -> Self {
        Self {
            connection,
            object_id,
        }
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj:{}@{}", self.object_id, self.connection)
    }
}
