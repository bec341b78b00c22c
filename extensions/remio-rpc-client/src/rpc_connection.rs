use remio::constants::MAX_LENGTH_PREFIX_BYTES;
use remio::schema::ConnectionId;
use std::io;

/// Byte-stream collaborator consumed by the call executor.
///
/// The codec and binder never touch this trait; only `RpcClient` does. An
/// implementation owns socket lifecycle entirely — the executor never opens,
/// retries, or times out a connection, and closing the connection is the only
/// way to unblock a pending receive.
pub trait RpcConnection {
    /// Identity bound into every remote object handle decoded over this
    /// connection.
    fn connection_id(&self) -> ConnectionId;

    fn is_connected(&self) -> bool;

    /// Write the entire buffer, blocking until done.
    fn send(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Read exactly `len` bytes, blocking until done.
    fn receive_exact(&mut self, len: usize) -> io::Result<Vec<u8>>;

    /// Read a varint length prefix, one byte at a time.
    fn receive_varint_length(&mut self) -> io::Result<u64> {
        let mut value = 0u64;
        let mut shift = 0;
        for _ in 0..MAX_LENGTH_PREFIX_BYTES {
            let byte = self.receive_exact(1)?[0];
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "varint length prefix exceeds 10 bytes",
        ))
    }
}
