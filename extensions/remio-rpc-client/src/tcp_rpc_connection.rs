use crate::RpcConnection;
use remio::schema::ConnectionId;
use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

/// Blocking TCP implementation of `RpcConnection`.
///
/// One request/response in flight at a time; a caller wanting concurrent
/// calls opens more connections. There is no built-in timeout: callers
/// needing cancellation close the connection, which surfaces the pending
/// receive as an I/O failure.
pub struct TcpRpcConnection {
    stream: Option<TcpStream>,
    connection_id: ConnectionId,
}

impl TcpRpcConnection {
    pub fn connect(address: impl ToSocketAddrs) -> io::Result<Self> {
        let stream = TcpStream::connect(address)?;
        stream.set_nodelay(true)?;
        Ok(Self {
            stream: Some(stream),
            connection_id: ConnectionId::generate(),
        })
    }

    /// Tear the connection down. Subsequent sends and receives fail as
    /// not-connected.
    pub fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }

    fn stream(&mut self) -> io::Result<&mut TcpStream> {
        self.stream
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "connection is closed"))
    }
}

impl RpcConnection for TcpRpcConnection {
    fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.stream()?.write_all(bytes)
    }

    fn receive_exact(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.stream()?.read_exact(&mut buf)?;
        Ok(buf)
    }
}
